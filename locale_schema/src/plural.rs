//! Plural key convention: `base#suffix` variants grouped per base key.
//!
//! A flattened path whose final `#token` names one of the six CLDR plural
//! categories is a plural variant of its base key. Recognition is exact
//! and case-sensitive; anything else stays an ordinary key, with a
//! diagnostic when the tail merely resembles the convention.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{SchemaError, SchemaResult};
use crate::flatten::FlattenedEntry;
use crate::value::LocaleValue;

/// The six CLDR plural categories, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralSuffix {
    /// Category `zero`.
    Zero,
    /// Category `one` (singular).
    One,
    /// Category `two` (dual).
    Two,
    /// Category `few` (paucal).
    Few,
    /// Category `many`.
    Many,
    /// Category `other`, the universal fallback.
    Other,
}

impl PluralSuffix {
    /// All categories in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Few,
        Self::Many,
        Self::Other,
    ];

    /// The lowercase suffix text as written in keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }

    /// Parses an exact, case-sensitive suffix token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "zero" => Some(Self::Zero),
            "one" => Some(Self::One),
            "two" => Some(Self::Two),
            "few" => Some(Self::Few),
            "many" => Some(Self::Many),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for PluralSuffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a path into its base key and recognized plural suffix.
///
/// Only the substring after the *last* `#` is considered, so
/// `cart#item#one` splits into base `cart#item` and suffix `one`.
/// Returns `None` when there is no `#` or the token is not an exact
/// category name. The base may be empty; callers decide how to treat
/// that case.
#[must_use]
pub fn split_suffix(path: &str) -> Option<(&str, PluralSuffix)> {
    let (base, token) = path.rsplit_once('#')?;
    PluralSuffix::from_token(token).map(|suffix| (base, suffix))
}

/// The plural variants collected for one base key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluralGroup {
    base_key: String,
    variants: BTreeMap<PluralSuffix, LocaleValue>,
}

impl PluralGroup {
    /// Creates an empty group for `base_key`.
    #[must_use]
    pub fn new(base_key: impl Into<String>) -> Self {
        Self {
            base_key: base_key.into(),
            variants: BTreeMap::new(),
        }
    }

    /// The base key shared by all variants.
    #[must_use]
    pub const fn base_key(&self) -> &str {
        self.base_key.as_str()
    }

    /// Adds or replaces the variant for `suffix`.
    pub fn insert(&mut self, suffix: PluralSuffix, value: impl Into<LocaleValue>) {
        self.variants.insert(suffix, value.into());
    }

    /// The value for `suffix`, if that variant exists.
    #[must_use]
    pub fn variant(&self, suffix: PluralSuffix) -> Option<&LocaleValue> {
        self.variants.get(&suffix)
    }

    /// Iterates variants in canonical suffix order.
    pub fn variants(&self) -> impl Iterator<Item = (PluralSuffix, &LocaleValue)> {
        self.variants.iter().map(|(suffix, value)| (*suffix, value))
    }

    /// The suffixes present, in canonical order.
    pub fn suffixes(&self) -> impl Iterator<Item = PluralSuffix> + '_ {
        self.variants.keys().copied()
    }

    /// Number of variants in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the group holds no variants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Flattened entries partitioned into ordinary keys and plural groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeyPartition {
    pub(crate) ordinary: IndexMap<String, LocaleValue>,
    pub(crate) groups: IndexMap<String, PluralGroup>,
}

impl KeyPartition {
    /// Iterates ordinary keys in first-appearance order.
    pub fn ordinary(&self) -> impl Iterator<Item = (&str, &LocaleValue)> {
        self.ordinary
            .iter()
            .map(|(path, value)| (path.as_str(), value))
    }

    /// The value of an ordinary key.
    #[must_use]
    pub fn ordinary_value(&self, path: &str) -> Option<&LocaleValue> {
        self.ordinary.get(path)
    }

    /// Iterates plural groups in order of their first variant.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &PluralGroup)> {
        self.groups.iter().map(|(base, group)| (base.as_str(), group))
    }

    /// The plural group for `base_key`, if any variant used it.
    #[must_use]
    pub fn group(&self, base_key: &str) -> Option<&PluralGroup> {
        self.groups.get(base_key)
    }
}

/// Partitions flattened entries into ordinary keys and plural groups.
///
/// Near-misses of the suffix convention (an unrecognized `#token` tail,
/// or a recognized suffix with an empty base) are kept as ordinary keys
/// and recorded in `diagnostics`.
///
/// # Errors
///
/// Returns [`SchemaError::DuplicateKeyDefinition`] when a base key is
/// defined both as an ordinary key and through plural variants, since the
/// logical key would then have two contradictory call shapes.
pub fn partition(
    entries: &[FlattenedEntry],
    diagnostics: &mut Diagnostics,
) -> SchemaResult<KeyPartition> {
    let mut partition = KeyPartition::default();
    for entry in entries {
        match entry.path.rsplit_once('#') {
            Some((base, token)) => match PluralSuffix::from_token(token) {
                Some(suffix) if !base.is_empty() => {
                    partition
                        .groups
                        .entry(base.to_owned())
                        .or_insert_with(|| PluralGroup::new(base))
                        .insert(suffix, entry.value.clone());
                }
                Some(_) => {
                    diagnostics.push(Diagnostic::EmptyBaseKey {
                        path: entry.path.clone(),
                    });
                    partition
                        .ordinary
                        .insert(entry.path.clone(), entry.value.clone());
                }
                None => {
                    diagnostics.push(Diagnostic::AmbiguousSuffixToken {
                        path: entry.path.clone(),
                        token: token.to_owned(),
                    });
                    partition
                        .ordinary
                        .insert(entry.path.clone(), entry.value.clone());
                }
            },
            None => {
                partition
                    .ordinary
                    .insert(entry.path.clone(), entry.value.clone());
            }
        }
    }
    for base in partition.groups.keys() {
        if partition.ordinary.contains_key(base) {
            return Err(SchemaError::DuplicateKeyDefinition { key: base.clone() });
        }
    }
    Ok(partition)
}
