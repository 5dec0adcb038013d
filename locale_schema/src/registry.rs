//! Multi-locale input adapter: holds one dictionary per locale tag and
//! loads dictionaries from JSON files on disk.
//!
//! All locales of an application are expected to share one key shape, so
//! analysis runs against a single representative dictionary, the first
//! one registered. Cross-locale shape verification is a concern for
//! surrounding tooling, not this crate.

use std::io::Read;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use indexmap::IndexMap;
use unic_langid::LanguageIdentifier;

use crate::analysis::{LocaleAnalysis, analyze};
use crate::error::{SchemaError, SchemaResult};
use crate::value::LocaleTree;

/// Ordered collection of locale dictionaries keyed by language tag.
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    locales: IndexMap<LanguageIdentifier, LocaleTree>,
}

impl LocaleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `tree` under `locale`, returning any dictionary it
    /// replaced. Re-registering keeps the original position, so the
    /// representative locale does not change.
    pub fn insert(&mut self, locale: LanguageIdentifier, tree: LocaleTree) -> Option<LocaleTree> {
        self.locales.insert(locale, tree)
    }

    /// The dictionary registered for `locale`.
    #[must_use]
    pub fn get(&self, locale: &LanguageIdentifier) -> Option<&LocaleTree> {
        self.locales.get(locale)
    }

    /// Iterates locale tags in registration order.
    pub fn locales(&self) -> impl Iterator<Item = &LanguageIdentifier> {
        self.locales.keys()
    }

    /// Number of registered locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether no locale has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// The representative locale and dictionary: the first registered.
    #[must_use]
    pub fn representative(&self) -> Option<(&LanguageIdentifier, &LocaleTree)> {
        self.locales.first()
    }

    /// Analyzes the representative dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyRegistry`] when nothing is registered,
    /// or any error the analysis itself produces.
    pub fn analyze_representative(&self) -> SchemaResult<LocaleAnalysis> {
        let (locale, tree) = self.representative().ok_or(SchemaError::EmptyRegistry)?;
        tracing::debug!(locale = %locale, "analyzing representative locale");
        analyze(tree)
    }

    /// Loads every `*.json` file in `path` as one locale dictionary.
    ///
    /// File stems are parsed as language tags (`en.json`, `fr-CA.json`),
    /// and files load in lexicographic stem order so the representative
    /// locale is stable across platforms.
    ///
    /// # Errors
    ///
    /// Fails when the directory cannot be read, a stem is not a valid
    /// language tag, or a file does not parse as a JSON dictionary.
    pub fn load_dir(path: &Utf8Path) -> SchemaResult<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|err| io_error(path, err))?;

        let mut files = Vec::new();
        for entry_result in dir.read_dir(".").map_err(|err| io_error(path, err))? {
            let entry = entry_result.map_err(|err| io_error(path, err))?;
            let file_name = entry.file_name().map_err(|err| io_error(path, err))?;
            if !Utf8Path::new(&file_name)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            {
                continue;
            }
            files.push(Utf8PathBuf::from(file_name));
        }
        files.sort();

        let mut registry = Self::new();
        for file in files {
            let file_path = path.join(&file);
            let Some(stem) = file.file_stem() else { continue };
            let locale = parse_locale_tag(stem)?;
            let tree = read_tree(&dir, &file, &file_path)?;
            registry.insert(locale, tree);
        }
        Ok(registry)
    }
}

/// Parses a language tag such as `en` or `fr-CA`.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidLocaleTag`] when the tag is malformed.
pub fn parse_locale_tag(tag: &str) -> SchemaResult<LanguageIdentifier> {
    LanguageIdentifier::from_str(tag).map_err(|err| SchemaError::InvalidLocaleTag {
        value: tag.to_owned(),
        message: err.to_string(),
    })
}

/// Reads and parses a single locale dictionary file.
///
/// # Errors
///
/// Fails when the file cannot be read or does not parse as a JSON
/// dictionary.
pub fn read_locale_file(path: &Utf8Path) -> SchemaResult<LocaleTree> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let Some(file_name) = path.file_name() else {
        return Err(io_error(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        ));
    };
    let dir =
        Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| io_error(path, err))?;
    read_tree(&dir, Utf8Path::new(file_name), path)
}

fn read_tree(dir: &Dir, file: &Utf8Path, display_path: &Utf8Path) -> SchemaResult<LocaleTree> {
    let mut handle = dir.open(file).map_err(|err| io_error(display_path, err))?;
    let mut buffer = String::new();
    handle
        .read_to_string(&mut buffer)
        .map_err(|err| io_error(display_path, err))?;
    serde_json::from_str(&buffer).map_err(|err| SchemaError::Parse {
        path: display_path.to_path_buf(),
        source: err,
    })
}

fn io_error(path: &Utf8Path, source: std::io::Error) -> SchemaError {
    SchemaError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for registry loading and representative selection.

    use super::*;
    use cap_std::fs_utf8::OpenOptions;
    use rstest::rstest;
    use std::io::Write;

    fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf, Dir) {
        let tempdir = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(tempdir.path().to_path_buf())
            .expect("tempdir path is UTF-8");
        let dir = Dir::open_ambient_dir(&root, ambient_authority()).expect("open temp dir");
        (tempdir, root, dir)
    }

    fn write_file(dir: &Dir, name: &str, contents: &str) {
        let mut file = dir
            .open_with(
                name,
                OpenOptions::new().create(true).write(true).truncate(true),
            )
            .expect("open file");
        file.write_all(contents.as_bytes()).expect("write file");
    }

    #[rstest]
    fn load_dir_registers_stems_in_sorted_order() {
        let (_tempdir, root, dir) = temp_dir();
        write_file(&dir, "fr.json", r#"{"hello": "Bonjour"}"#);
        write_file(&dir, "en.json", r#"{"hello": "Hello"}"#);
        write_file(&dir, "notes.txt", "not a locale");

        let registry = LocaleRegistry::load_dir(&root).expect("load registry");
        let tags: Vec<String> = registry.locales().map(ToString::to_string).collect();
        assert_eq!(tags, ["en", "fr"]);

        let (representative, _) = registry.representative().expect("representative");
        assert_eq!(representative.to_string(), "en");
    }

    #[rstest]
    fn load_dir_rejects_malformed_locale_stems() {
        let (_tempdir, root, dir) = temp_dir();
        write_file(&dir, "not a tag.json", "{}");

        let err = LocaleRegistry::load_dir(&root).expect_err("stem must be a language tag");
        assert!(matches!(
            err,
            SchemaError::InvalidLocaleTag { value, .. } if value == "not a tag"
        ));
    }

    #[rstest]
    fn load_dir_rejects_malformed_json() {
        let (_tempdir, root, dir) = temp_dir();
        write_file(&dir, "en.json", "{not json");

        let err = LocaleRegistry::load_dir(&root).expect_err("malformed JSON must fail");
        assert!(matches!(err, SchemaError::Parse { .. }));
    }

    #[rstest]
    fn read_locale_file_parses_a_single_dictionary() {
        let (_tempdir, root, dir) = temp_dir();
        write_file(&dir, "en-GB.json", r#"{"greeting": "Good day, {name}"}"#);

        let tree = read_locale_file(&root.join("en-GB.json")).expect("read dictionary");
        assert_eq!(tree.len(), 1);
    }

    #[rstest]
    fn missing_directory_is_an_io_error() {
        let (_tempdir, root, _dir) = temp_dir();
        let missing = root.join("absent");
        let err = LocaleRegistry::load_dir(&missing).expect_err("missing dir must fail");
        assert!(matches!(err, SchemaError::Io { .. }));
    }

    #[rstest]
    fn empty_registry_has_no_representative() {
        let registry = LocaleRegistry::new();
        assert!(registry.representative().is_none());
        let err = registry
            .analyze_representative()
            .expect_err("empty registry cannot be analyzed");
        assert!(matches!(err, SchemaError::EmptyRegistry));
    }

    #[rstest]
    fn reinsertion_keeps_the_representative() {
        let mut registry = LocaleRegistry::new();
        let en = parse_locale_tag("en").expect("tag");
        let fr = parse_locale_tag("fr").expect("tag");
        registry.insert(en.clone(), LocaleTree::new());
        registry.insert(fr, LocaleTree::new());

        let mut replacement = LocaleTree::new();
        replacement.insert("hello", "Hi");
        registry.insert(en.clone(), replacement);

        let (representative, tree) = registry.representative().expect("representative");
        assert_eq!(representative, &en);
        assert_eq!(tree.len(), 1);
    }
}
