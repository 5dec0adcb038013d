//! Locale-switch path rewriting for URL-routed applications.
//!
//! Switching the active locale keeps the user on the same page: the
//! current path loses its leading locale segment and gains the target
//! locale's, with the query string carried over. This module has no
//! dependency on the schema analysis; it only needs the list of known
//! locales.

use unic_langid::LanguageIdentifier;

/// Rewrites `path` to address `target` instead of its current locale.
///
/// `base_path` is stripped from the front before inspection and is not
/// re-added; deployments with a base prefix typically restore it at the
/// routing layer. The leading path segment is removed only when it
/// matches a known locale in whole, so `/enterprise` survives a known
/// locale `en`. `query`, when non-empty, is appended after `?`.
#[must_use]
pub fn rewrite_locale_path(
    path: &str,
    base_path: Option<&str>,
    known: &[LanguageIdentifier],
    target: &LanguageIdentifier,
    query: Option<&str>,
) -> String {
    let without_base = base_path
        .and_then(|base| path.strip_prefix(base))
        .unwrap_or(path);
    let remainder = strip_leading_locale(without_base, known);
    let mut rewritten = format!("/{target}");
    rewritten.push_str(remainder);
    if let Some(text) = query.filter(|text| !text.is_empty()) {
        rewritten.push('?');
        rewritten.push_str(text);
    }
    rewritten
}

/// Removes the first path segment when it exactly matches a known
/// locale tag, keeping the rest of the path (including its leading
/// slash).
fn strip_leading_locale<'path>(path: &'path str, known: &[LanguageIdentifier]) -> &'path str {
    for locale in known {
        let prefix = format!("/{locale}");
        if let Some(rest) = path.strip_prefix(prefix.as_str()) {
            if rest.is_empty() || rest.starts_with('/') {
                return rest;
            }
        }
    }
    path
}
