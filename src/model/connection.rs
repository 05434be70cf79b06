use serde::{Deserialize, Serialize};

use crate::model::NodeId;

/// Directed connection between two nodes, referenced by id.
///
/// Connections hold weak references: the editor prunes every connection
/// touching a removed node, but readers still tolerate dangling pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowConnection {
    /// ID of the source node.
    pub source: NodeId,
    /// ID of the target node.
    pub target: NodeId,
}

impl WorkflowConnection {
    /// Creates a new connection between two node ids.
    pub fn new(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}
