//! Depth-first flattening of dictionary trees into dot-joined paths.
//!
//! Flattening is the first pipeline stage: every leaf in the tree becomes
//! one entry whose path joins the keys from the root with `.`. Sibling
//! order follows the dictionary, and children are emitted where their
//! parent key sits, so the output order is exactly the document order of
//! the leaves.

use serde::Serialize;

use crate::error::{SchemaError, SchemaResult};
use crate::value::{LocaleNode, LocaleTree, LocaleValue, MAX_DEPTH, join_path};

/// One leaf of a flattened dictionary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlattenedEntry {
    /// Dot-joined path from the root to the leaf.
    pub path: String,
    /// The leaf value.
    pub value: LocaleValue,
}

impl FlattenedEntry {
    /// Creates an entry from a path and value.
    #[must_use]
    pub fn new(path: impl Into<String>, value: impl Into<LocaleValue>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

/// Flattens `tree` into dot-joined leaf entries in document order.
///
/// # Errors
///
/// Returns [`SchemaError::DottedKey`] when a single key contains a literal
/// `.`, as the flattened path could then no longer be split back into the
/// original keys, and [`SchemaError::DepthExceeded`] when the tree nests
/// deeper than [`MAX_DEPTH`].
pub fn flatten(tree: &LocaleTree) -> SchemaResult<Vec<FlattenedEntry>> {
    let mut entries = Vec::new();
    flatten_into(tree, "", 0, &mut entries)?;
    Ok(entries)
}

fn flatten_into(
    tree: &LocaleTree,
    parent: &str,
    depth: usize,
    entries: &mut Vec<FlattenedEntry>,
) -> SchemaResult<()> {
    if depth >= MAX_DEPTH {
        return Err(SchemaError::DepthExceeded {
            path: parent.to_owned(),
            limit: MAX_DEPTH,
        });
    }
    for (key, node) in tree.iter() {
        let path = join_path(parent, key);
        if key.contains('.') {
            return Err(SchemaError::DottedKey {
                key: key.to_owned(),
                path,
            });
        }
        match node {
            LocaleNode::Leaf(value) => entries.push(FlattenedEntry {
                path,
                value: value.clone(),
            }),
            LocaleNode::Tree(subtree) => {
                flatten_into(subtree, &path, depth.saturating_add(1), entries)?;
            }
        }
    }
    Ok(())
}

/// Rebuilds a dictionary tree from flattened entries, splitting each path
/// on `.`.
///
/// This is the inverse of [`flatten`] for any tree `flatten` accepts:
/// nesting its output reconstructs a structurally equal tree.
///
/// # Errors
///
/// Returns [`SchemaError::PathConflict`] when one path is used both as a
/// leaf and as a namespace (for example `"a"` alongside `"a.b"`), as no
/// tree can represent both.
pub fn nest(entries: &[FlattenedEntry]) -> SchemaResult<LocaleTree> {
    let mut root = LocaleTree::new();
    for entry in entries {
        insert_path(&mut root, &entry.path, entry.value.clone())?;
    }
    Ok(root)
}

fn insert_path(root: &mut LocaleTree, path: &str, value: LocaleValue) -> SchemaResult<()> {
    let mut segments = path.split('.').peekable();
    let mut current = root;
    let mut walked = String::new();
    while let Some(segment) = segments.next() {
        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(segment);
        if segments.peek().is_none() {
            if matches!(current.get(segment), Some(LocaleNode::Tree(_))) {
                return Err(SchemaError::PathConflict { path: walked });
            }
            current.insert(segment, value);
            return Ok(());
        }
        if !matches!(current.get(segment), Some(LocaleNode::Tree(_))) {
            if current.get(segment).is_some() {
                return Err(SchemaError::PathConflict { path: walked });
            }
            current.insert(segment, LocaleTree::new());
        }
        let Some(LocaleNode::Tree(subtree)) = current.get_mut(segment) else {
            return Err(SchemaError::PathConflict { path: walked });
        };
        current = subtree;
    }
    Ok(())
}
