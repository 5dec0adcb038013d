//! Locale dictionary data model.
//!
//! A dictionary is an ordered tree: string keys map either to leaf values
//! or to nested sub-dictionaries. Key order is significant and preserved
//! end to end, so the same dictionary always yields the same flattened
//! view and the same serialized schema.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};

/// Maximum nesting depth accepted when converting or flattening a tree.
pub const MAX_DEPTH: usize = 128;

/// Leaf value kinds a locale dictionary may contain.
///
/// Deserialization is untagged: JSON strings become [`LocaleValue::Text`],
/// numbers [`LocaleValue::Number`], and so on. [`LocaleValue::Date`] is
/// never produced from JSON (which has no date type); it exists for
/// dictionaries assembled programmatically and serializes as an RFC 3339
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocaleValue {
    /// Translatable template text. Tried first during deserialization so
    /// date-like strings stay textual.
    Text(String),
    /// Numeric leaf.
    Number(f64),
    /// Boolean leaf.
    Boolean(bool),
    /// Explicit `null` leaf.
    Null,
    /// Timestamp leaf for programmatic dictionaries.
    Date(DateTime<Utc>),
}

impl LocaleValue {
    /// Returns the template text when this leaf is textual.
    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Human-readable kind name, used in diagnostics and reports.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Null => "null",
            Self::Date(_) => "date",
        }
    }
}

impl std::fmt::Display for LocaleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Boolean(flag) => write!(f, "{flag}"),
            Self::Null => f.write_str("null"),
            Self::Date(stamp) => write!(f, "{}", stamp.to_rfc3339()),
        }
    }
}

impl From<&str> for LocaleValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for LocaleValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for LocaleValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<bool> for LocaleValue {
    fn from(flag: bool) -> Self {
        Self::Boolean(flag)
    }
}

impl From<DateTime<Utc>> for LocaleValue {
    fn from(stamp: DateTime<Utc>) -> Self {
        Self::Date(stamp)
    }
}

/// A node in the dictionary tree: either a terminal value or a nested
/// sub-dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocaleNode {
    /// Nested sub-dictionary.
    Tree(LocaleTree),
    /// Terminal value.
    Leaf(LocaleValue),
}

impl LocaleNode {
    /// Returns the leaf value when this node is terminal.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&LocaleValue> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Tree(_) => None,
        }
    }

    /// Returns the sub-dictionary when this node nests further.
    #[must_use]
    pub const fn as_tree(&self) -> Option<&LocaleTree> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Leaf(_) => None,
        }
    }
}

impl From<LocaleValue> for LocaleNode {
    fn from(value: LocaleValue) -> Self {
        Self::Leaf(value)
    }
}

impl From<&str> for LocaleNode {
    fn from(text: &str) -> Self {
        Self::Leaf(LocaleValue::from(text))
    }
}

impl From<String> for LocaleNode {
    fn from(text: String) -> Self {
        Self::Leaf(LocaleValue::from(text))
    }
}

impl From<f64> for LocaleNode {
    fn from(number: f64) -> Self {
        Self::Leaf(LocaleValue::from(number))
    }
}

impl From<bool> for LocaleNode {
    fn from(flag: bool) -> Self {
        Self::Leaf(LocaleValue::from(flag))
    }
}

impl From<LocaleTree> for LocaleNode {
    fn from(tree: LocaleTree) -> Self {
        Self::Tree(tree)
    }
}

/// An ordered locale dictionary.
///
/// Entries iterate in insertion order, which for deserialized dictionaries
/// is the order keys appear in the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTree {
    entries: IndexMap<String, LocaleNode>,
}

impl LocaleTree {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of direct entries (leaves and subtrees alike).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no direct entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a direct child by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&LocaleNode> {
        self.entries.get(key)
    }

    /// Mutable lookup of a direct child by key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut LocaleNode> {
        self.entries.get_mut(key)
    }

    /// Inserts a node under `key`, returning any node it replaced.
    ///
    /// Replacing an existing key keeps its original position, so later
    /// overrides do not reorder the dictionary.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<LocaleNode>) -> Option<LocaleNode> {
        self.entries.insert(key.into(), node.into())
    }

    /// Iterates direct entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }
}

impl<'tree> IntoIterator for &'tree LocaleTree {
    type Item = (&'tree String, &'tree LocaleNode);
    type IntoIter = indexmap::map::Iter<'tree, String, LocaleNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, LocaleNode)> for LocaleTree {
    fn from_iter<I: IntoIterator<Item = (String, LocaleNode)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<serde_json::Value> for LocaleTree {
    type Error = SchemaError;

    /// Converts a parsed JSON document into a dictionary tree.
    ///
    /// The root must be an object; arrays anywhere in the document are
    /// rejected because they have no path representation.
    fn try_from(value: serde_json::Value) -> SchemaResult<Self> {
        match value {
            serde_json::Value::Object(map) => tree_from_object(map, "", 0),
            other => Err(SchemaError::UnsupportedValue {
                path: String::new(),
                kind: json_kind(&other),
            }),
        }
    }
}

fn tree_from_object(
    map: serde_json::Map<String, serde_json::Value>,
    parent: &str,
    depth: usize,
) -> SchemaResult<LocaleTree> {
    if depth >= MAX_DEPTH {
        return Err(SchemaError::DepthExceeded {
            path: parent.to_owned(),
            limit: MAX_DEPTH,
        });
    }
    let mut tree = LocaleTree::new();
    for (key, value) in map {
        let path = join_path(parent, &key);
        let node = node_from_value(value, &path, depth)?;
        tree.insert(key, node);
    }
    Ok(tree)
}

fn node_from_value(value: serde_json::Value, path: &str, depth: usize) -> SchemaResult<LocaleNode> {
    let node = match value {
        serde_json::Value::Object(map) => {
            LocaleNode::Tree(tree_from_object(map, path, depth.saturating_add(1))?)
        }
        serde_json::Value::String(text) => LocaleNode::Leaf(LocaleValue::Text(text)),
        serde_json::Value::Number(number) => {
            let Some(float) = number.as_f64() else {
                return Err(SchemaError::UnsupportedValue {
                    path: path.to_owned(),
                    kind: "number",
                });
            };
            LocaleNode::Leaf(LocaleValue::Number(float))
        }
        serde_json::Value::Bool(flag) => LocaleNode::Leaf(LocaleValue::Boolean(flag)),
        serde_json::Value::Null => LocaleNode::Leaf(LocaleValue::Null),
        serde_json::Value::Array(_) => {
            return Err(SchemaError::UnsupportedValue {
                path: path.to_owned(),
                kind: "array",
            });
        }
    };
    Ok(node)
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Joins a parent path and a key with the `.` separator.
pub(crate) fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}
