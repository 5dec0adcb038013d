//! Whole-string plural directive grammar.
//!
//! The recognized shape is a fixed ICU-like form:
//!
//! ```text
//! {param, plural, sel1 {content1} sel2 {content2}}
//! {param, plural, sel1 {content1} sel2 {content2} sel3 {content3}}
//! ```
//!
//! Selectors are either the literal `other` or `=` followed by an
//! integer. Clause contents may hold plain placeholders one level deep.
//! Anything that deviates from this shape, including extra whitespace,
//! a different clause count, or a malformed selector, is not a
//! directive; callers then fall back to flat placeholder scanning.

use super::scan_placeholders;

const DIRECTIVE_MARKER: &str = ", plural, ";

/// Selector of a single directive clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Matches one exact count, written `=N`.
    Exact(i64),
    /// The literal `other` fallback.
    Other,
}

/// One `selector {content}` clause of a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    selector: Selector,
    content: String,
}

impl Clause {
    /// The clause selector.
    #[must_use]
    pub const fn selector(&self) -> Selector {
        self.selector
    }

    /// The text between the clause braces.
    #[must_use]
    pub const fn content(&self) -> &str {
        self.content.as_str()
    }
}

/// A successfully parsed two- or three-clause plural directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralDirective {
    parameter: String,
    clauses: Vec<Clause>,
}

impl PluralDirective {
    /// Parses `value` as a whole-string directive.
    ///
    /// The entire string must match the grammar; a directive embedded in
    /// surrounding text is not recognized. Returns `None` on any
    /// deviation so the caller can fall back to flat scanning.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let inner = value.strip_prefix('{')?.strip_suffix('}')?;
        let (parameter, mut rest) = inner.split_once(DIRECTIVE_MARKER)?;
        let mut clauses = Vec::new();
        loop {
            if clauses.len() == 3 {
                return None;
            }
            let (clause, after) = parse_clause(rest)?;
            clauses.push(clause);
            if after.is_empty() {
                break;
            }
            rest = after.strip_prefix(' ')?;
        }
        if clauses.len() < 2 {
            return None;
        }
        Some(Self {
            parameter: parameter.to_owned(),
            clauses,
        })
    }

    /// Whether `value` superficially resembles a directive.
    ///
    /// Used to distinguish a deliberate near-miss worth a diagnostic from
    /// plain template text: a resembling value opens with `{` and carries
    /// the `, plural, ` marker somewhere.
    #[must_use]
    pub fn resembles(value: &str) -> bool {
        value.starts_with('{') && value.contains(DIRECTIVE_MARKER)
    }

    /// The count parameter named before the marker.
    #[must_use]
    pub const fn parameter(&self) -> &str {
        self.parameter.as_str()
    }

    /// The clauses in source order.
    #[must_use]
    pub const fn clauses(&self) -> &[Clause] {
        self.clauses.as_slice()
    }

    /// All parameter names the directive exposes: the count parameter
    /// first, then each clause's placeholders in clause order.
    #[must_use]
    pub fn parameter_names(&self) -> Vec<String> {
        let mut names = vec![self.parameter.clone()];
        for clause in &self.clauses {
            names.extend(scan_placeholders(clause.content()));
        }
        names
    }

    /// Picks the clause content for `count`: an exact `=count` selector
    /// wins, otherwise the `other` clause. Returns `None` when neither
    /// applies.
    #[must_use]
    pub fn content_for(&self, count: i64) -> Option<&str> {
        self.clauses
            .iter()
            .find(|clause| matches!(clause.selector, Selector::Exact(exact) if exact == count))
            .or_else(|| {
                self.clauses
                    .iter()
                    .find(|clause| matches!(clause.selector, Selector::Other))
            })
            .map(Clause::content)
    }
}

fn parse_clause(input: &str) -> Option<(Clause, &str)> {
    let (token, rest) = input.split_once(' ')?;
    let selector = parse_selector(token)?;
    let (content, after) = take_braced(rest)?;
    Some((Clause { selector, content }, after))
}

fn parse_selector(token: &str) -> Option<Selector> {
    if token == "other" {
        return Some(Selector::Other);
    }
    let body = token.strip_prefix('=')?;
    let digits = body.strip_prefix('-').unwrap_or(body);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    body.parse::<i64>().ok().map(Selector::Exact)
}

/// Consumes a brace-delimited block from the start of `input`, returning
/// its content and the remainder. Braces nest; the block ends at the
/// close brace balancing the opening one.
fn take_braced(input: &str) -> Option<(String, &str)> {
    let mut chars = input.chars();
    if chars.next() != Some('{') {
        return None;
    }
    let mut content = String::new();
    let mut depth = 1_u32;
    loop {
        let ch = chars.next()?;
        match ch {
            '{' => {
                depth = depth.checked_add(1)?;
                content.push(ch);
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((content, chars.as_str()));
                }
                content.push(ch);
            }
            _ => content.push(ch),
        }
    }
}
