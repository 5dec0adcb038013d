//! Reporting for authoring mistakes the analysis absorbs leniently.
//!
//! Keys and values that merely *resemble* the plural conventions without
//! matching them exactly fall back to ordinary handling. That fallback is
//! silent at the API level, so each occurrence is recorded here and
//! surfaced to callers alongside the derived schema.

use std::fmt;

use serde::Serialize;

/// A single lenient-parse observation tied to a dictionary path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A key ends in `#token` where `token` is not one of the six plural
    /// suffixes; the key was kept as an ordinary message key.
    AmbiguousSuffixToken {
        /// The full key path as authored.
        path: String,
        /// The unrecognized token after the final `#`.
        token: String,
    },
    /// A key consists solely of `#suffix` with an empty base; the key was
    /// kept as an ordinary message key.
    EmptyBaseKey {
        /// The full key path as authored.
        path: String,
    },
    /// A value opens like a plural directive but fails the two- or
    /// three-clause grammar; its placeholders were scanned flat.
    MalformedPluralDirective {
        /// Path of the key holding the value.
        path: String,
    },
}

impl Diagnostic {
    /// Path of the dictionary entry the observation refers to.
    #[must_use]
    pub const fn path(&self) -> &str {
        match self {
            Self::AmbiguousSuffixToken { path, .. }
            | Self::EmptyBaseKey { path }
            | Self::MalformedPluralDirective { path } => path.as_str(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousSuffixToken { path, token } => write!(
                f,
                "key '{path}' ends in '#{token}', which is not a plural suffix; treated as an ordinary key"
            ),
            Self::EmptyBaseKey { path } => write!(
                f,
                "key '{path}' has a plural suffix but an empty base key; treated as an ordinary key"
            ),
            Self::MalformedPluralDirective { path } => write!(
                f,
                "value at '{path}' resembles a plural directive but does not match the grammar; placeholders were scanned flat"
            ),
        }
    }
}

/// Ordered collection of [`Diagnostic`] values gathered during analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Records an observation and emits it on the `tracing` warn level.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(path = %diagnostic.path(), detail = %diagnostic, "lenient locale parse");
        self.items.push(diagnostic);
    }

    /// Iterates observations in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Number of recorded observations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the analysis recorded no observations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'diag> IntoIterator for &'diag Diagnostics {
    type Item = &'diag Diagnostic;
    type IntoIter = std::slice::Iter<'diag, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_path() {
        let diagnostic = Diagnostic::AmbiguousSuffixToken {
            path: "menu#items".to_owned(),
            token: "items".to_owned(),
        };
        let text = diagnostic.to_string();
        assert!(text.contains("'menu#items'"));
        assert!(text.contains("'#items'"));
    }

    #[test]
    fn serializes_with_a_kind_tag() {
        let diagnostic = Diagnostic::EmptyBaseKey {
            path: "#one".to_owned(),
        };
        let json = serde_json::to_value(&diagnostic).expect("serialize diagnostic");
        let kind = json.get("kind").and_then(serde_json::Value::as_str);
        assert_eq!(kind, Some("empty_base_key"));
    }

    #[test]
    fn push_preserves_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::EmptyBaseKey {
            path: "#one".to_owned(),
        });
        diagnostics.push(Diagnostic::MalformedPluralDirective {
            path: "cart.summary".to_owned(),
        });
        let paths: Vec<&str> = diagnostics.iter().map(Diagnostic::path).collect();
        assert_eq!(paths, ["#one", "cart.summary"]);
    }
}
