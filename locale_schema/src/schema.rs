//! Serializable parameter schemas: the call contract per logical key.
//!
//! A schema tells a consumer what it must supply to render a key. For
//! ordinary keys that is the placeholder list of the value; for plural
//! keys it is a numeric `count` plus the placeholders union-merged
//! across variants. Schemas serialize to JSON with a `kind` tag so
//! downstream tooling can dispatch without probing fields.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::plural::{PluralGroup, PluralSuffix};

/// Name of the implicit numeric parameter every plural key requires.
pub const COUNT_PARAMETER: &str = "count";

/// Advisory literal hints for the `count` argument of a plural variant.
///
/// Hints are ergonomic guidance only; any number is always accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CountHint {
    /// The `zero` variant: suggests the literal `0`.
    Zero,
    /// The `one` variant: suggests `1, 21, 31, ..., 91, 101`.
    OneSeries,
    /// The `two` variant: suggests `2, 22, 32, ..., 92, 102`.
    TwoSeries,
    /// No particular literals; any number.
    AnyNumber,
}

impl CountHint {
    /// The hint attached to counts selecting `suffix`.
    #[must_use]
    pub const fn for_suffix(suffix: PluralSuffix) -> Self {
        match suffix {
            PluralSuffix::Zero => Self::Zero,
            PluralSuffix::One => Self::OneSeries,
            PluralSuffix::Two => Self::TwoSeries,
            PluralSuffix::Few | PluralSuffix::Many | PluralSuffix::Other => Self::AnyNumber,
        }
    }

    /// The suggested literals, empty when any number is as good.
    #[must_use]
    pub const fn literals(self) -> &'static [i64] {
        match self {
            Self::Zero => &[0],
            Self::OneSeries => &[1, 21, 31, 41, 51, 61, 71, 81, 91, 101],
            Self::TwoSeries => &[2, 22, 32, 42, 52, 62, 72, 82, 92, 102],
            Self::AnyNumber => &[],
        }
    }
}

/// Contract for an ordinary message key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MessageSchema {
    /// Placeholder names in order of appearance, duplicates preserved.
    pub parameters: Vec<String>,
}

impl MessageSchema {
    /// Creates a schema from an ordered parameter list.
    #[must_use]
    pub const fn new(parameters: Vec<String>) -> Self {
        Self { parameters }
    }

    /// Whether callers may omit the parameter object entirely.
    #[must_use]
    pub const fn is_parameterless(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// Contract for a plural key: `count` plus union-merged named parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PluralSchema {
    /// Advisory count hints per suffix present in the group, in
    /// canonical suffix order.
    pub count_hints: BTreeMap<PluralSuffix, CountHint>,
    /// Named parameters beyond `count`: the union of all variants'
    /// placeholders in canonical suffix order then order of appearance,
    /// with repeats and the literal `count` dropped.
    pub parameters: Vec<String>,
}

impl PluralSchema {
    /// Derives the contract for one plural group.
    ///
    /// Every variant contributes a count hint for its suffix. Named
    /// parameters are union-merged: variants are visited in canonical
    /// suffix order, each placeholder is kept on first sighting, and
    /// `count` itself is dropped since the schema already requires it.
    #[must_use]
    pub fn from_group(group: &PluralGroup) -> Self {
        let mut schema = Self::default();
        for (suffix, _) in group.variants() {
            schema.count_hints.insert(suffix, CountHint::for_suffix(suffix));
        }
        for (_, value) in group.variants() {
            let Some(text) = value.as_text() else { continue };
            for name in crate::params::extract_parameters(text) {
                if name != COUNT_PARAMETER && !schema.parameters.contains(&name) {
                    schema.parameters.push(name);
                }
            }
        }
        schema
    }
}

/// The call contract of one logical key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParameterSchema {
    /// An ordinary message key.
    Message(MessageSchema),
    /// A pluralized key backed by suffix variants.
    Plural(PluralSchema),
}

impl ParameterSchema {
    /// Whether this key requires a `count` argument.
    #[must_use]
    pub const fn is_plural(&self) -> bool {
        matches!(self, Self::Plural(_))
    }

    /// The named parameters the caller must supply, `count` excluded.
    #[must_use]
    pub const fn parameters(&self) -> &[String] {
        match self {
            Self::Message(message) => message.parameters.as_slice(),
            Self::Plural(plural) => plural.parameters.as_slice(),
        }
    }
}
