//! Report writers for `locale-inspect`.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use locale_schema::{Diagnostics, LocaleAnalysis, ParameterSchema, relative_key};
use serde::Serialize;
use std::io::Write;

use crate::cli::OutputFormat;
use crate::error::InspectError;

/// A schema report for one locale dictionary.
#[derive(Debug, Serialize)]
pub struct Report {
    locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
    analysis: LocaleAnalysis,
    #[serde(skip)]
    verbose: bool,
}

impl Report {
    /// Builds a report for `analysis`, validating the scope filter.
    pub fn new(
        locale: String,
        analysis: LocaleAnalysis,
        scope: Option<&str>,
        verbose: bool,
    ) -> Result<Self, InspectError> {
        match scope {
            Some(name) if !analysis.scopes().contains(name) => {
                Err(InspectError::ScopeNotFound(name.to_owned()))
            }
            _ => Ok(Self {
                locale,
                scope: scope.map(str::to_owned),
                analysis,
                verbose,
            }),
        }
    }
}

/// Writes the report to `writer` in the requested format.
pub fn write_report(
    writer: &mut impl Write,
    report: &Report,
    format: OutputFormat,
) -> Result<(), InspectError> {
    match format {
        OutputFormat::Summary => write_summary(writer, report),
        OutputFormat::Json => write_json(writer, report),
    }
}

/// Writes the report to `path`, creating parent directories as needed.
pub fn write_report_file(
    path: &Utf8Path,
    report: &Report,
    format: OutputFormat,
) -> Result<(), InspectError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let dir = ensure_dir(parent)?;
    let file_name = path.file_name().ok_or_else(|| InspectError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "missing file name"),
    })?;
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| InspectError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })?;
    write_report(&mut file, report, format)
}

fn write_json(writer: &mut impl Write, report: &Report) -> Result<(), InspectError> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}

fn write_summary(writer: &mut impl Write, report: &Report) -> Result<(), InspectError> {
    writeln!(writer, "locale: {}", report.locale)?;
    if let Some(ref scope) = report.scope {
        writeln!(writer, "scope: {scope}")?;
    }
    writeln!(
        writer,
        "keys: {} ({} plural)",
        report.analysis.len(),
        report.analysis.groups().count()
    )?;
    writeln!(writer, "scopes: {}", format_scope_list(&report.analysis))?;
    writeln!(writer)?;
    for (key, schema) in report.analysis.schemas() {
        if listed(report.scope.as_deref(), key) {
            writeln!(writer, "{key}: {}", describe_schema(schema))?;
        }
    }
    if report.verbose {
        writeln!(writer)?;
        write_diagnostics(writer, report.analysis.diagnostics())?;
    }
    Ok(())
}

fn write_diagnostics(
    writer: &mut impl Write,
    diagnostics: &Diagnostics,
) -> Result<(), InspectError> {
    if diagnostics.is_empty() {
        writeln!(writer, "diagnostics: none")?;
        return Ok(());
    }
    writeln!(writer, "diagnostics:")?;
    for diagnostic in diagnostics {
        writeln!(writer, "  {diagnostic}")?;
    }
    Ok(())
}

fn listed(scope: Option<&str>, key: &str) -> bool {
    scope.is_none_or(|name| relative_key(name, key).is_some())
}

fn format_scope_list(analysis: &LocaleAnalysis) -> String {
    let scopes: Vec<&str> = analysis.scopes().iter().collect();
    if scopes.is_empty() {
        "none".to_owned()
    } else {
        scopes.join(", ")
    }
}

fn describe_schema(schema: &ParameterSchema) -> String {
    match schema {
        ParameterSchema::Message(message) => describe_parameters(&message.parameters),
        ParameterSchema::Plural(plural) => {
            let suffixes: Vec<&str> = plural
                .count_hints
                .keys()
                .map(|suffix| suffix.as_str())
                .collect();
            format!(
                "plural ({}); {}",
                suffixes.join(", "),
                describe_parameters(&plural.parameters)
            )
        }
    }
}

fn describe_parameters(parameters: &[String]) -> String {
    if parameters.is_empty() {
        "no parameters".to_owned()
    } else {
        format!("parameters: {}", parameters.join(", "))
    }
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, InspectError> {
    let io_error = |io_err: std::io::Error| InspectError::Io {
        path: path.to_path_buf(),
        source: io_err,
    };
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(io_error)?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(io_error)
        }
        Err(open_err) => Err(io_error(open_err)),
    }
}

#[cfg(test)]
mod tests {
    //! Tests for report rendering in both formats.

    use super::*;
    use camino::Utf8PathBuf;
    use locale_schema::{LocaleTree, analyze};
    use rstest::rstest;

    fn sample_analysis(json: &str) -> LocaleAnalysis {
        let value: serde_json::Value = serde_json::from_str(json).expect("parse fixture");
        let tree = LocaleTree::try_from(value).expect("build tree");
        analyze(&tree).expect("analyze fixture")
    }

    fn storefront() -> LocaleAnalysis {
        sample_analysis(
            r#"{
                "title": "Dashboard",
                "cart": {
                    "summary": "{count} items for {total}",
                    "item#one": "{name}",
                    "item#other": "{name}s"
                }
            }"#,
        )
    }

    fn render(report: &Report, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        write_report(&mut buffer, report, format).expect("write report");
        String::from_utf8(buffer).expect("report is UTF-8")
    }

    #[rstest]
    fn summary_lists_every_key_in_order() {
        let report =
            Report::new("en".to_owned(), storefront(), None, false).expect("build report");
        let rendered = render(&report, OutputFormat::Summary);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            [
                "locale: en",
                "keys: 3 (1 plural)",
                "scopes: cart",
                "",
                "title: no parameters",
                "cart.summary: parameters: count, total",
                "cart.item: plural (one, other); parameters: name",
            ]
        );
    }

    #[rstest]
    fn summary_scope_filter_drops_unscoped_keys() {
        let report =
            Report::new("en".to_owned(), storefront(), Some("cart"), false).expect("build report");
        let rendered = render(&report, OutputFormat::Summary);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            [
                "locale: en",
                "scope: cart",
                "keys: 3 (1 plural)",
                "scopes: cart",
                "",
                "cart.summary: parameters: count, total",
                "cart.item: plural (one, other); parameters: name",
            ]
        );
    }

    #[rstest]
    fn verbose_summary_appends_diagnostics() {
        let analysis = sample_analysis(r#"{"title": "Dashboard", "stock#lots": "Plenty"}"#);
        let report = Report::new("en".to_owned(), analysis, None, true).expect("build report");
        let rendered = render(&report, OutputFormat::Summary);
        assert!(rendered.contains("diagnostics:"));
        assert!(rendered.contains(
            "  key 'stock#lots' ends in '#lots', which is not a plural suffix; \
             treated as an ordinary key"
        ));
    }

    #[rstest]
    fn verbose_summary_reports_clean_parse() {
        let report = Report::new("en".to_owned(), storefront(), None, true).expect("build report");
        let rendered = render(&report, OutputFormat::Summary);
        assert!(rendered.ends_with("diagnostics: none\n"));
    }

    #[rstest]
    fn json_report_carries_locale_and_analysis() {
        let report =
            Report::new("en".to_owned(), storefront(), None, false).expect("build report");
        let rendered = render(&report, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("parse report");
        assert_eq!(
            value.pointer("/locale").and_then(serde_json::Value::as_str),
            Some("en")
        );
        assert_eq!(
            value
                .pointer("/analysis/schemas/title/kind")
                .and_then(serde_json::Value::as_str),
            Some("message")
        );
        assert_eq!(
            value
                .pointer("/analysis/schemas/cart.item/kind")
                .and_then(serde_json::Value::as_str),
            Some("plural")
        );
        assert!(value.get("scope").is_none());
    }

    #[rstest]
    fn json_report_carries_scope_filter() {
        let report =
            Report::new("en".to_owned(), storefront(), Some("cart"), false).expect("build report");
        let rendered = render(&report, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("parse report");
        assert_eq!(
            value.pointer("/scope").and_then(serde_json::Value::as_str),
            Some("cart")
        );
    }

    #[rstest]
    fn unknown_scope_is_rejected() {
        let result = Report::new("en".to_owned(), storefront(), Some("nav"), false);
        assert!(matches!(result, Err(InspectError::ScopeNotFound(name)) if name == "nav"));
    }

    #[rstest]
    fn report_file_lands_under_created_parent() {
        let tempdir = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(tempdir.path().to_path_buf())
            .expect("tempdir path is UTF-8");
        let report =
            Report::new("en".to_owned(), storefront(), None, false).expect("build report");

        let target = root.join("reports").join("en.json");
        write_report_file(&target, &report, OutputFormat::Json).expect("write report file");

        let dir = Dir::open_ambient_dir(&root, ambient_authority()).expect("open temp dir");
        let written = dir
            .read_to_string("reports/en.json")
            .expect("read written report");
        assert!(written.starts_with('{'));
        assert!(written.contains("\"locale\": \"en\""));
    }
}
