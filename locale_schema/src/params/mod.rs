//! Placeholder extraction from template text.
//!
//! Template values name their parameters in single braces: `"Hello
//! {name}"` exposes `name`. A value that is, in its entirety, a plural
//! directive instead exposes its count parameter followed by the
//! placeholders of each clause. Extraction is lenient: nothing here
//! fails, malformed input merely degrades to the flat scan.

mod directive;

pub use directive::{Clause, PluralDirective, Selector};

/// Extracts parameter names from `template` in order of appearance.
///
/// When the whole string parses as a plural directive, the result is the
/// directive's parameter list; otherwise every `{...}` capture in the
/// text, kept verbatim and with duplicates preserved.
#[must_use]
pub fn extract_parameters(template: &str) -> Vec<String> {
    PluralDirective::parse(template).map_or_else(
        || scan_placeholders(template),
        |directive| directive.parameter_names(),
    )
}

/// Scans `template` for `{...}` captures, left to right.
///
/// A capture opens at `{` and closes at the next `}`; the text between
/// is taken verbatim, so `"{a{b}"` captures `a{b`. An unclosed `{` ends
/// the scan. Duplicates are preserved.
#[must_use]
pub fn scan_placeholders(template: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch != '{' {
            continue;
        }
        let mut name = String::new();
        let mut closed = false;
        for inner in chars.by_ref() {
            if inner == '}' {
                closed = true;
                break;
            }
            name.push(inner);
        }
        if !closed {
            break;
        }
        names.push(name);
    }
    names
}
