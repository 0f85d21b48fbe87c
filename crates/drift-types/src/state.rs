//! Node lifecycle states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a tracked node.
///
/// The state is owned by the external tracking system and read-only here.
/// Only `Done` affects the comparison run: a `Done` subtree is skipped
/// entirely, its contents never compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeState {
    /// The node is being monitored.
    Open,
    /// The node is being actively worked on; still monitored.
    InProgress,
    /// The node is closed. Its subtree is excluded from comparison.
    Done,
}

impl NodeState {
    /// Returns `true` if this state excludes the node from comparison.
    pub fn is_done(&self) -> bool {
        matches!(self, NodeState::Done)
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeState::Open => write!(f, "Open"),
            NodeState::InProgress => write!(f, "In Progress"),
            NodeState::Done => write!(f, "Done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_done_is_done() {
        assert!(NodeState::Done.is_done());
        assert!(!NodeState::Open.is_done());
        assert!(!NodeState::InProgress.is_done());
    }

    #[test]
    fn serde_round_trip() {
        for state in [NodeState::Open, NodeState::InProgress, NodeState::Done] {
            let json = serde_json::to_string(&state).unwrap();
            let back: NodeState = serde_json::from_str(&json).unwrap();
            assert_eq!(back, state);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(NodeState::InProgress.to_string(), "In Progress");
        assert_eq!(NodeState::Done.to_string(), "Done");
    }
}
