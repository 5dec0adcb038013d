//! Error types for `locale-inspect`.

use camino::Utf8PathBuf;
use locale_schema::SchemaError;
use thiserror::Error;

/// Errors surfaced by the `locale-inspect` pipeline.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("schema analysis failed: {0}")]
    Schema(#[from] SchemaError),

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),

    #[error("locale '{0}' was not loaded from the directory")]
    LocaleNotFound(String),

    #[error("scope '{0}' does not exist in the dictionary")]
    ScopeNotFound(String),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
