//! Scope derivation from flattened paths.
//!
//! A scope is any proper dot-prefix of a leaf path: for `a.b.c` the scopes
//! are `a` and `a.b`, never `a.b.c` itself. Consumers use scopes to
//! resolve short keys relative to a namespace.

use std::collections::BTreeSet;

use serde::Serialize;

/// The set of scopes derived from a dictionary, ordered lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScopeSet {
    scopes: BTreeSet<String>,
}

impl ScopeSet {
    /// Derives the scope set from an iterator of dot-joined leaf paths.
    ///
    /// Every proper prefix of every path is collected; full paths are
    /// excluded, so a path with no dot contributes nothing.
    #[must_use]
    pub fn from_paths<'path>(paths: impl IntoIterator<Item = &'path str>) -> Self {
        let mut scopes = BTreeSet::new();
        for path in paths {
            let mut prefix = String::new();
            let mut segments = path.split('.').peekable();
            while let Some(segment) = segments.next() {
                if segments.peek().is_none() {
                    break;
                }
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(segment);
                scopes.insert(prefix.clone());
            }
        }
        Self { scopes }
    }

    /// Whether `scope` was derived from some leaf path.
    #[must_use]
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    /// Iterates scopes in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    /// Number of distinct scopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Whether no scopes were derived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl<'set> IntoIterator for &'set ScopeSet {
    type Item = &'set String;
    type IntoIter = std::collections::btree_set::Iter<'set, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.scopes.iter()
    }
}

/// Joins an optional scope and a key into a full dot-joined path.
#[must_use]
pub fn qualify(scope: Option<&str>, key: &str) -> String {
    scope.map_or_else(|| key.to_owned(), |prefix| format!("{prefix}.{key}"))
}

/// Strips `scope` (plus its trailing dot) from `path`.
///
/// Returns `None` when `path` does not sit strictly under `scope`. The
/// match is segment-aware, so `app` is not a scope of `apple.pie`.
#[must_use]
pub fn relative_key<'path>(scope: &str, path: &'path str) -> Option<&'path str> {
    path.strip_prefix(scope)?.strip_prefix('.')
}
