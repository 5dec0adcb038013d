//! Message rendering against derived schemas.
//!
//! The analysis produces call contracts; this module honors them. Given
//! a resolved template (optionally plural-grouped), a count, and named
//! arguments, it selects the variant via a host plural rule and
//! substitutes `{name}` placeholders. Rendering never fails: unmatched
//! placeholders stay in the output verbatim so missing arguments are
//! visible rather than silently dropped.

use crate::params::{Clause, PluralDirective, Selector};
use crate::plural::{PluralGroup, PluralSuffix};
use crate::value::LocaleValue;

/// Host-supplied mapping from a count to a plural category.
///
/// Locales disagree on categorization, so the renderer takes the rule as
/// a seam instead of hard-coding one. Implementations should follow CLDR
/// cardinal rules for their locale.
pub trait PluralRule {
    /// The category selecting a variant for `count`.
    fn category(&self, count: i64) -> PluralSuffix;
}

/// CLDR cardinal rule for English: one when the absolute value is
/// exactly 1, other in every other case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishCardinal;

impl PluralRule for EnglishCardinal {
    fn category(&self, count: i64) -> PluralSuffix {
        if count.unsigned_abs() == 1 {
            PluralSuffix::One
        } else {
            PluralSuffix::Other
        }
    }
}

/// Substitutes `{name}` placeholders in `template` from `args`.
///
/// Unknown names are left in place with their braces, and an unclosed
/// `{` is emitted verbatim. Earlier entries in `args` win when a name
/// repeats.
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
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
        match lookup(args, &name) {
            Some(value) if closed => output.push_str(value),
            _ => {
                output.push('{');
                output.push_str(&name);
                if closed {
                    output.push('}');
                }
            }
        }
    }
    output
}

fn lookup<'args>(args: &[(&str, &'args str)], name: &str) -> Option<&'args str> {
    args.iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

/// Renders a single message template.
///
/// When the whole template is a plural directive, the clause is chosen
/// by the numeric value supplied for the directive's own parameter (an
/// exact `=N` selector first, then `other`) and its content rendered.
/// A missing or non-numeric count falls back to the `other` clause.
/// Otherwise, and whenever no clause applies, the template interpolates
/// as plain text.
#[must_use]
pub fn render_message(template: &str, args: &[(&str, &str)]) -> String {
    let Some(directive) = PluralDirective::parse(template) else {
        return interpolate(template, args);
    };
    let supplied = lookup(args, directive.parameter()).and_then(|raw| raw.parse::<i64>().ok());
    let content = supplied.map_or_else(
        || other_content(&directive),
        |count| directive.content_for(count),
    );
    content.map_or_else(|| interpolate(template, args), |text| interpolate(text, args))
}

fn other_content(directive: &PluralDirective) -> Option<&str> {
    directive
        .clauses()
        .iter()
        .find(|clause| matches!(clause.selector(), Selector::Other))
        .map(Clause::content)
}

/// Selects the variant of `group` for `count` under `rule`.
///
/// Falls back to the `other` variant when the categorized one is absent,
/// and returns `None` when the group cannot serve the count at all.
#[must_use]
pub fn select_variant<'group>(
    group: &'group PluralGroup,
    count: i64,
    rule: &dyn PluralRule,
) -> Option<&'group LocaleValue> {
    group
        .variant(rule.category(count))
        .or_else(|| group.variant(PluralSuffix::Other))
}

/// Renders the plural group `group` for `count`.
///
/// The selected variant renders like any message with an implicit
/// `count` argument prepended to `extra_args`. Non-text variants
/// stringify via their display form.
#[must_use]
pub fn render_plural(
    group: &PluralGroup,
    count: i64,
    extra_args: &[(&str, &str)],
    rule: &dyn PluralRule,
) -> Option<String> {
    let variant = select_variant(group, count, rule)?;
    let count_text = count.to_string();
    let mut args: Vec<(&str, &str)> = vec![(crate::schema::COUNT_PARAMETER, &count_text)];
    args.extend_from_slice(extra_args);
    let rendered = match variant.as_text() {
        Some(text) => render_message(text, &args),
        None => variant.to_string(),
    };
    Some(rendered)
}
