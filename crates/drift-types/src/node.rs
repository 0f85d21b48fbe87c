//! The tracked-node hierarchy.
//!
//! A [`TrackedNode`] is one element of the monitored hierarchy: either a
//! container grouping other nodes, or a content leaf referencing externally
//! captured text. The hierarchy is read-only input, rebuilt fresh per run
//! from the external source of truth; constructors validate keys eagerly so
//! a malformed hierarchy can never produce a corrupt location string.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};
use crate::location::SEPARATOR;
use crate::state::NodeState;

/// Variant payload of a tracked node.
///
/// A node is exactly one of these; only `Content` nodes are ever diffed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Groups other nodes; holds no content of its own.
    Container { children: Vec<TrackedNode> },
    /// Leaf referencing externally captured content (e.g. a monitored URL).
    Content { source: String },
}

/// One element of the monitored hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedNode {
    key: String,
    summary: String,
    state: NodeState,
    kind: NodeKind,
}

impl TrackedNode {
    /// Create a container node grouping the given children.
    ///
    /// Fails if the key is invalid or two children share a key.
    pub fn container(
        key: impl Into<String>,
        summary: impl Into<String>,
        state: NodeState,
        children: Vec<TrackedNode>,
    ) -> TreeResult<Self> {
        let key = key.into();
        validate_key(&key)?;
        validate_sibling_keys(&children)?;
        Ok(Self {
            key,
            summary: summary.into(),
            state,
            kind: NodeKind::Container { children },
        })
    }

    /// Create a content leaf referencing the given capture source.
    pub fn content(
        key: impl Into<String>,
        summary: impl Into<String>,
        state: NodeState,
        source: impl Into<String>,
    ) -> TreeResult<Self> {
        let key = key.into();
        validate_key(&key)?;
        Ok(Self {
            key,
            summary: summary.into(),
            state,
            kind: NodeKind::Content {
                source: source.into(),
            },
        })
    }

    /// The node's key, unique among its siblings.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Free-form label for humans and logs.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// The node's lifecycle state.
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// The variant payload.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The node's children, in order. Empty for content leaves.
    pub fn children(&self) -> &[TrackedNode] {
        match &self.kind {
            NodeKind::Container { children } => children,
            NodeKind::Content { .. } => &[],
        }
    }

    /// The capture source, if this is a content leaf.
    pub fn source(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Container { .. } => None,
            NodeKind::Content { source } => Some(source),
        }
    }

    /// Returns `true` if this node's subtree is excluded from comparison.
    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }
}

/// Validate a node key.
///
/// Keys must be non-empty and must not contain the location separator.
pub fn validate_key(key: &str) -> TreeResult<()> {
    if key.is_empty() {
        return Err(TreeError::EmptyKey);
    }
    if key.contains(SEPARATOR) {
        return Err(TreeError::SeparatorInKey {
            key: key.to_string(),
            separator: SEPARATOR,
        });
    }
    Ok(())
}

fn validate_sibling_keys(children: &[TrackedNode]) -> TreeResult<()> {
    let mut seen = HashSet::new();
    for child in children {
        if !seen.insert(child.key.as_str()) {
            return Err(TreeError::DuplicateKey {
                key: child.key.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(key: &str) -> TrackedNode {
        TrackedNode::content(key, key, NodeState::Open, "https://example.com").unwrap()
    }

    #[test]
    fn container_and_content_accessors() {
        let child = leaf("home");
        let root =
            TrackedNode::container("PAGES", "Monitored pages", NodeState::Open, vec![child])
                .unwrap();

        assert_eq!(root.key(), "PAGES");
        assert_eq!(root.summary(), "Monitored pages");
        assert_eq!(root.children().len(), 1);
        assert!(root.source().is_none());

        let leaf = &root.children()[0];
        assert!(leaf.children().is_empty());
        assert_eq!(leaf.source(), Some("https://example.com"));
    }

    #[test]
    fn empty_key_rejected() {
        let err = TrackedNode::content("", "x", NodeState::Open, "url").unwrap_err();
        assert!(matches!(err, TreeError::EmptyKey));
    }

    #[test]
    fn separator_in_key_rejected() {
        let err = TrackedNode::container("a/b", "x", NodeState::Open, vec![]).unwrap_err();
        assert!(matches!(err, TreeError::SeparatorInKey { key, .. } if key == "a/b"));
    }

    #[test]
    fn duplicate_sibling_keys_rejected() {
        let err = TrackedNode::container(
            "root",
            "root",
            NodeState::Open,
            vec![leaf("same"), leaf("same")],
        )
        .unwrap_err();
        assert!(matches!(err, TreeError::DuplicateKey { key } if key == "same"));
    }

    #[test]
    fn duplicate_keys_in_different_parents_allowed() {
        let a = TrackedNode::container("a", "a", NodeState::Open, vec![leaf("page")]).unwrap();
        let b = TrackedNode::container("b", "b", NodeState::Open, vec![leaf("page")]).unwrap();
        assert!(TrackedNode::container("root", "root", NodeState::Open, vec![a, b]).is_ok());
    }

    #[test]
    fn done_state_flags_subtree() {
        let node = TrackedNode::content("k", "s", NodeState::Done, "url").unwrap();
        assert!(node.is_done());
    }
}
