use serde::{Deserialize, Serialize};

use crate::common::Properties;

/// Unique identifier for a node within a workflow.
pub type NodeId = String;

/// The kind of step a node represents in the flow.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NodeType {
    /// Graph entry point; a valid workflow has exactly one.
    #[default]
    Trigger,
    /// A unit of work (notify, assign, move card).
    Action,
    /// Branch point evaluated at run time.
    Condition,
    /// Pause before the next step.
    Delay,
    /// Terminal node.
    End,
}

impl NodeType {
    /// Human-readable name, used as the default label for new nodes.
    pub fn title(&self) -> &'static str {
        match self {
            NodeType::Trigger => "Trigger",
            NodeType::Action => "Action",
            NodeType::Condition => "Condition",
            NodeType::Delay => "Delay",
            NodeType::End => "End",
        }
    }
}

/// Canvas position of a node. Coordinates are unconstrained.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A single typed node in a workflow graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkflowNode {
    /// Unique id within the owning workflow.
    pub id: NodeId,
    /// Node type.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Canvas position.
    #[serde(default)]
    pub position: Position,
    /// Arbitrary per-node configuration.
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
}

impl WorkflowNode {
    /// Label for display and error messages, falling back to the id.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() { &self.id } else { &self.label }
    }
}
