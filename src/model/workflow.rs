use serde::{Deserialize, Serialize};

use crate::{
    BoardflowError, Result,
    model::{WorkflowConnection, WorkflowNode},
};

/// Lifecycle status of a workflow document.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkflowStatus {
    #[default]
    Draft,
    Active,
    Inactive,
}

/// A whole workflow document: the node and connection collections plus
/// descriptive metadata. Exactly one document is edited at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: WorkflowStatus,
    pub nodes: Vec<WorkflowNode>,
    pub connections: Vec<WorkflowConnection>,
}

impl Workflow {
    /// Parses a workflow document from its JSON form.
    pub fn from_json(s: &str) -> Result<Self> {
        let workflow = serde_json::from_str::<Workflow>(s);
        match workflow {
            Ok(v) => Ok(v),
            Err(e) => Err(BoardflowError::Workflow(format!("{}", e))),
        }
    }

    /// Serializes the document to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| BoardflowError::Workflow(format!("{}", e)))
    }

    /// Looks up a node by id.
    pub fn node(
        &self,
        id: &str,
    ) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeType;

    #[test]
    fn test_workflow_from_json() {
        let text = r#"{
            "id": "wf-1",
            "name": "Card automation",
            "status": "draft",
            "nodes": [
                {"id": "n1", "type": "trigger", "label": "Card created", "position": {"x": 10.0, "y": 20.0}},
                {"id": "n2", "type": "action", "properties": {"channel": "email"}}
            ],
            "connections": [
                {"source": "n1", "target": "n2"}
            ]
        }"#;

        let workflow = Workflow::from_json(text).unwrap();
        assert_eq!(workflow.id, "wf-1");
        assert_eq!(workflow.status, WorkflowStatus::Draft);
        assert_eq!(workflow.nodes.len(), 2);
        assert_eq!(workflow.nodes[0].node_type, NodeType::Trigger);
        assert_eq!(workflow.nodes[1].display_label(), "n2");
        assert_eq!(workflow.nodes[1].properties.get::<String>("channel").as_deref(), Some("email"));
        assert_eq!(workflow.connections, vec![WorkflowConnection::new("n1", "n2")]);
    }

    #[test]
    fn test_workflow_from_json_rejects_malformed() {
        let result = Workflow::from_json("{\"id\": 42}");
        assert!(matches!(result, Err(BoardflowError::Workflow(_))));
    }
}
