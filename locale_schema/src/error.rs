//! Error types produced by the schema analysis and its input adapters.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias for results carrying a [`SchemaError`].
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while deriving a locale schema.
///
/// Structural errors abort the analysis before any schema is produced;
/// lenient parsing cases are never errors and surface as
/// [`Diagnostic`](crate::Diagnostic) values instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// A base key is defined both as a plain message and as plural variants.
    #[error("key '{key}' is defined both as a plain message and as a plural group")]
    DuplicateKeyDefinition {
        /// The base key with conflicting definitions.
        key: String,
    },

    /// A dictionary key contains a literal `.`, which collides with the
    /// dot-joined path notation used for nesting.
    #[error("dictionary key '{key}' (flattening to '{path}') contains '.', which collides with nested-path notation")]
    DottedKey {
        /// The offending key segment as authored.
        key: String,
        /// The dot-joined path the key would have flattened to.
        path: String,
    },

    /// The dictionary nests deeper than the supported bound.
    #[error("locale dictionary exceeds the maximum nesting depth of {limit} at '{path}'")]
    DepthExceeded {
        /// Path of the subtree at which the bound was hit.
        path: String,
        /// The enforced depth limit.
        limit: usize,
    },

    /// A JSON value has no locale-value representation (for example an
    /// array in leaf position).
    #[error("unsupported {kind} value at '{path}'; locale leaves must be strings, numbers, booleans, or null")]
    UnsupportedValue {
        /// Dot-joined path of the offending value (empty for the root).
        path: String,
        /// Human-readable kind of the rejected value.
        kind: &'static str,
    },

    /// Two flattened paths collide, one as a leaf and one as a namespace.
    #[error("path '{path}' is used both as a leaf and as a namespace")]
    PathConflict {
        /// The contested dot-joined path.
        path: String,
    },

    /// A locale file stem could not be parsed as a language identifier.
    #[error("failed to parse locale tag '{value}': {message}")]
    InvalidLocaleTag {
        /// The raw tag text.
        value: String,
        /// Parser explanation of the failure.
        message: String,
    },

    /// The registry has no locales, so no representative can be chosen.
    #[error("locale registry is empty; register at least one locale dictionary")]
    EmptyRegistry,

    /// An I/O failure while reading locale files.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A locale file did not parse as a JSON dictionary.
    #[error("failed to parse locale file '{path}': {source}")]
    Parse {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
