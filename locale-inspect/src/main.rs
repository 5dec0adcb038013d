//! CLI entrypoint for `locale-inspect`.

mod cli;
mod error;
mod output;

use camino::Utf8Path;
use clap::Parser;
use locale_schema::{
    LocaleAnalysis, LocaleRegistry, SchemaError, analyze, parse_locale_tag, read_locale_file,
};

use crate::cli::Args;
use crate::error::InspectError;
use crate::output::Report;

fn main() -> Result<(), InspectError> {
    run()
}

fn run() -> Result<(), InspectError> {
    let args = Args::parse();
    let (locale, analysis) = load_analysis(&args)?;
    let report = Report::new(locale, analysis, args.scope.as_deref(), args.verbose)?;

    args.out.as_deref().map_or_else(
        || {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            output::write_report(&mut handle, &report, args.format)
        },
        |path| output::write_report_file(path, &report, args.format),
    )
}

/// Loads `args.path` as a locales directory, or as a single locale file when
/// the path is not a directory.
fn load_analysis(args: &Args) -> Result<(String, LocaleAnalysis), InspectError> {
    match LocaleRegistry::load_dir(&args.path) {
        Ok(registry) => directory_analysis(&registry, args.locale.as_deref()),
        Err(SchemaError::Io { source, .. })
            if source.kind() == std::io::ErrorKind::NotADirectory =>
        {
            file_analysis(&args.path, args.locale.as_deref())
        }
        Err(err) => Err(err.into()),
    }
}

fn directory_analysis(
    registry: &LocaleRegistry,
    requested: Option<&str>,
) -> Result<(String, LocaleAnalysis), InspectError> {
    if let Some(tag) = requested {
        let locale = parse_locale_tag(tag)?;
        let tree = registry
            .get(&locale)
            .ok_or_else(|| InspectError::LocaleNotFound(tag.to_owned()))?;
        return Ok((locale.to_string(), analyze(tree)?));
    }
    let (locale, tree) = registry
        .representative()
        .ok_or(SchemaError::EmptyRegistry)?;
    Ok((locale.to_string(), analyze(tree)?))
}

fn file_analysis(
    path: &Utf8Path,
    requested: Option<&str>,
) -> Result<(String, LocaleAnalysis), InspectError> {
    let tree = read_locale_file(path)?;
    let stem = requested.or_else(|| path.file_stem());
    let locale = parse_locale_tag(stem.unwrap_or_default())?;
    Ok((locale.to_string(), analyze(&tree)?))
}

#[cfg(test)]
mod tests {
    //! Tests for argument parsing and analysis loading.

    use super::*;
    use crate::cli::OutputFormat;
    use camino::Utf8PathBuf;
    use cap_std::ambient_authority;
    use cap_std::fs_utf8::{Dir, OpenOptions};
    use rstest::rstest;
    use std::io::Write as _;

    fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let tempdir = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(tempdir.path().to_path_buf())
            .expect("tempdir path is UTF-8");
        (tempdir, root)
    }

    fn write_file(root: &Utf8Path, name: &str, contents: &str) {
        let dir = Dir::open_ambient_dir(root, ambient_authority()).expect("open temp dir");
        let mut file = dir
            .open_with(
                name,
                OpenOptions::new().write(true).create(true).truncate(true),
            )
            .expect("open file");
        file.write_all(contents.as_bytes()).expect("write file");
    }

    fn sample_args(path: Utf8PathBuf) -> Args {
        Args {
            path,
            locale: None,
            scope: None,
            format: OutputFormat::Summary,
            out: None,
            verbose: false,
        }
    }

    #[rstest]
    fn directory_defaults_to_representative_locale() {
        let (_tempdir, root) = temp_dir();
        write_file(&root, "en.json", r#"{"title": "Dashboard"}"#);
        write_file(&root, "fr.json", r#"{"titre": "Tableau de bord"}"#);

        let (locale, analysis) =
            load_analysis(&sample_args(root.clone())).expect("load directory");

        assert_eq!(locale, "en");
        assert_eq!(analysis.keys().collect::<Vec<_>>(), ["title"]);
    }

    #[rstest]
    fn directory_honours_requested_locale() {
        let (_tempdir, root) = temp_dir();
        write_file(&root, "en.json", r#"{"title": "Dashboard"}"#);
        write_file(&root, "fr.json", r#"{"titre": "Tableau de bord"}"#);

        let mut args = sample_args(root.clone());
        args.locale = Some("fr".to_owned());
        let (locale, analysis) = load_analysis(&args).expect("load directory");

        assert_eq!(locale, "fr");
        assert_eq!(analysis.keys().collect::<Vec<_>>(), ["titre"]);
    }

    #[rstest]
    fn directory_rejects_unknown_locale() {
        let (_tempdir, root) = temp_dir();
        write_file(&root, "en.json", r#"{"title": "Dashboard"}"#);

        let mut args = sample_args(root.clone());
        args.locale = Some("de".to_owned());
        let result = load_analysis(&args);

        assert!(matches!(result, Err(InspectError::LocaleNotFound(tag)) if tag == "de"));
    }

    #[rstest]
    fn single_file_takes_locale_from_stem() {
        let (_tempdir, root) = temp_dir();
        write_file(&root, "en-GB.json", r#"{"title": "Dashboard"}"#);

        let (locale, analysis) =
            load_analysis(&sample_args(root.join("en-GB.json"))).expect("load file");

        assert_eq!(locale, "en-GB");
        assert_eq!(analysis.len(), 1);
    }

    #[rstest]
    fn single_file_stem_can_be_overridden() {
        let (_tempdir, root) = temp_dir();
        write_file(&root, "translation-strings.json", r#"{"title": "Dashboard"}"#);

        let mut args = sample_args(root.join("translation-strings.json"));
        args.locale = Some("en".to_owned());
        let (locale, _analysis) = load_analysis(&args).expect("load file");

        assert_eq!(locale, "en");
    }

    #[rstest]
    fn single_file_with_unparseable_stem_is_rejected() {
        let (_tempdir, root) = temp_dir();
        write_file(&root, "translation-strings.json", r#"{"title": "Dashboard"}"#);

        let result = load_analysis(&sample_args(root.join("translation-strings.json")));

        assert!(matches!(
            result,
            Err(InspectError::Schema(SchemaError::InvalidLocaleTag { .. }))
        ));
    }

    #[rstest]
    fn structural_errors_propagate() {
        let (_tempdir, root) = temp_dir();
        write_file(&root, "en.json", r#"{"cart.item": "Item"}"#);

        let result = load_analysis(&sample_args(root.clone()));

        assert!(matches!(
            result,
            Err(InspectError::Schema(SchemaError::DottedKey { .. }))
        ));
    }

    #[rstest]
    fn args_parse_with_defaults() {
        let args = Args::try_parse_from(["locale-inspect", "locales"]).expect("parse args");
        assert_eq!(args.path, Utf8PathBuf::from("locales"));
        assert!(matches!(args.format, OutputFormat::Summary));
        assert!(!args.verbose);
        assert!(args.locale.is_none());
    }

    #[rstest]
    fn args_parse_full_invocation() {
        let args = Args::try_parse_from([
            "locale-inspect",
            "locales",
            "--locale",
            "fr",
            "--scope",
            "cart",
            "--format",
            "json",
            "--out",
            "report.json",
            "--verbose",
        ])
        .expect("parse args");
        assert_eq!(args.locale.as_deref(), Some("fr"));
        assert_eq!(args.scope.as_deref(), Some("cart"));
        assert!(matches!(args.format, OutputFormat::Json));
        assert_eq!(args.out, Some(Utf8PathBuf::from("report.json")));
        assert!(args.verbose);
    }
}
