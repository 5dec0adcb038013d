//! End-to-end schema analysis over one locale dictionary.
//!
//! [`analyze`] runs the full pipeline: flatten, derive scopes, partition
//! plural variants, then aggregate one [`ParameterSchema`] per logical
//! key. The pass is pure and deterministic: identical input trees yield
//! identical analyses, byte for byte once serialized.

use indexmap::IndexMap;
use serde::Serialize;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::SchemaResult;
use crate::flatten::{FlattenedEntry, flatten};
use crate::params::PluralDirective;
use crate::plural::{self, PluralGroup};
use crate::schema::{MessageSchema, ParameterSchema, PluralSchema};
use crate::scope::{ScopeSet, qualify, relative_key};
use crate::value::LocaleTree;

/// The derived schema of one locale dictionary.
///
/// Logical keys appear in first-appearance order of their defining
/// entries, so serialized output tracks the source document.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleAnalysis {
    schemas: IndexMap<String, ParameterSchema>,
    scopes: ScopeSet,
    groups: IndexMap<String, PluralGroup>,
    diagnostics: Diagnostics,
}

impl LocaleAnalysis {
    /// Iterates logical keys and their schemas in first-appearance order.
    pub fn schemas(&self) -> impl Iterator<Item = (&str, &ParameterSchema)> {
        self.schemas.iter().map(|(key, schema)| (key.as_str(), schema))
    }

    /// Iterates logical keys in first-appearance order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// The schema of a fully qualified logical key.
    #[must_use]
    pub fn schema(&self, key: &str) -> Option<&ParameterSchema> {
        self.schemas.get(key)
    }

    /// The schema of `key` resolved under `scope`.
    #[must_use]
    pub fn schema_in(&self, scope: &str, key: &str) -> Option<&ParameterSchema> {
        self.schemas.get(&qualify(Some(scope), key))
    }

    /// Whether the fully qualified `key` is plural.
    #[must_use]
    pub fn is_plural(&self, key: &str) -> bool {
        self.groups.contains_key(key)
    }

    /// Whether `key` resolved under `scope` is plural.
    #[must_use]
    pub fn is_plural_in(&self, scope: &str, key: &str) -> bool {
        self.groups.contains_key(&qualify(Some(scope), key))
    }

    /// The scopes derived from the dictionary.
    #[must_use]
    pub const fn scopes(&self) -> &ScopeSet {
        &self.scopes
    }

    /// Logical keys under `scope`, relative to it, in first-appearance
    /// order.
    pub fn keys_in<'analysis>(
        &'analysis self,
        scope: &'analysis str,
    ) -> impl Iterator<Item = &'analysis str> {
        self.schemas
            .keys()
            .filter_map(move |key| relative_key(scope, key))
    }

    /// The plural group backing a plural logical key.
    #[must_use]
    pub fn group(&self, key: &str) -> Option<&PluralGroup> {
        self.groups.get(key)
    }

    /// Iterates plural groups in order of their first variant.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &PluralGroup)> {
        self.groups.iter().map(|(key, group)| (key.as_str(), group))
    }

    /// Lenient-parse observations recorded during the analysis.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Number of logical keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the dictionary exposed no logical keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Analyzes one locale dictionary into its key schemas.
///
/// # Errors
///
/// Fails on structural defects only: dotted keys, excessive nesting, or
/// a base key defined both plainly and through plural variants. Values
/// that merely resemble the plural conventions are absorbed leniently
/// and reported through [`LocaleAnalysis::diagnostics`].
pub fn analyze(tree: &LocaleTree) -> SchemaResult<LocaleAnalysis> {
    let entries = flatten(tree)?;
    let mut diagnostics = Diagnostics::new();
    let partition = plural::partition(&entries, &mut diagnostics)?;
    let scopes = ScopeSet::from_paths(entries.iter().map(|entry| entry.path.as_str()));

    let mut schemas = IndexMap::new();
    for entry in &entries {
        let (key, schema) = match plural_group(&partition, entry) {
            Some(group) => {
                if schemas.contains_key(group.base_key()) {
                    continue;
                }
                (
                    group.base_key().to_owned(),
                    ParameterSchema::Plural(PluralSchema::from_group(group)),
                )
            }
            None => (
                entry.path.clone(),
                ParameterSchema::Message(message_schema(entry, &mut diagnostics)),
            ),
        };
        schemas.insert(key, schema);
    }

    tracing::debug!(
        keys = schemas.len(),
        scopes = scopes.len(),
        groups = partition.groups.len(),
        diagnostics = diagnostics.len(),
        "derived locale schema"
    );

    Ok(LocaleAnalysis {
        schemas,
        scopes,
        groups: partition.groups,
        diagnostics,
    })
}

/// The group `entry` was folded into, `None` when it stayed ordinary.
fn plural_group<'partition>(
    partition: &'partition plural::KeyPartition,
    entry: &FlattenedEntry,
) -> Option<&'partition PluralGroup> {
    let (base, _) = plural::split_suffix(&entry.path)?;
    partition.group(base)
}

fn message_schema(entry: &FlattenedEntry, diagnostics: &mut Diagnostics) -> MessageSchema {
    let Some(text) = entry.value.as_text() else {
        return MessageSchema::default();
    };
    match PluralDirective::parse(text) {
        Some(directive) => MessageSchema::new(directive.parameter_names()),
        None => {
            if PluralDirective::resembles(text) {
                diagnostics.push(Diagnostic::MalformedPluralDirective {
                    path: entry.path.clone(),
                });
            }
            MessageSchema::new(crate::params::scan_placeholders(text))
        }
    }
}
