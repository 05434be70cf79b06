//! Structural validation of workflow snapshots.
//!
//! Validation is a pure read-only projection over a snapshot, so it can run
//! after every edit without touching editor state. Its errors are advisory:
//! an invalid intermediate graph never blocks a mutation.

use std::{
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
};

use crate::{
    common::MemCache,
    graph::WorkflowGraph,
    model::{NodeType, Workflow},
};

/// Capacity of the cached validator's report cache.
const REPORT_CACHE_SIZE: usize = 256;

/// A structural rule violation in a workflow graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The workflow does not have exactly one trigger node.
    TriggerCardinality,
    /// Nodes a forward traversal from the trigger never visits, listed by
    /// label (or id) in collection order.
    Unreachable(Vec<String>),
    /// A connection path returns to a node already being visited.
    Cycle,
}

impl fmt::Display for ValidationError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::TriggerCardinality => write!(f, "Workflow must have exactly one Trigger node"),
            Self::Unreachable(labels) => write!(f, "Unreachable nodes: {}", labels.join(", ")),
            Self::Cycle => write!(f, "Workflow contains a cycle"),
        }
    }
}

/// Verdict plus ordered error list for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// True when no structural rule is violated.
    pub valid: bool,
    /// Violations in stable order: trigger cardinality, unreachable nodes,
    /// cycle. Each is present at most once.
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Renders the errors as human-readable messages for display.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

/// Validates a workflow snapshot.
///
/// Never fails: an empty graph is simply reported invalid with the trigger
/// cardinality error and no traversal is attempted. With two or more
/// triggers the graph is already invalid, but the first trigger in
/// collection order still roots the traversal.
pub fn validate(workflow: &Workflow) -> ValidationReport {
    let mut errors = Vec::new();

    let triggers = workflow.nodes.iter().filter(|n| n.node_type == NodeType::Trigger).count();
    if triggers != 1 {
        errors.push(ValidationError::TriggerCardinality);
    }

    if triggers >= 1 {
        let graph = WorkflowGraph::from(workflow);
        if let Some(root) = graph.trigger_root() {
            let unreachable: Vec<String> = graph.unreachable_from(root).into_iter().map(|n| n.display_label().to_string()).collect();
            if !unreachable.is_empty() {
                errors.push(ValidationError::Unreachable(unreachable));
            }
            if graph.has_cycle_from(root) {
                errors.push(ValidationError::Cycle);
            }
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// Caching front for [`validate`].
///
/// Reports are memoized by a structural hash of the node and connection
/// collections, so revalidating an unchanged snapshot on every render is
/// free. Cloneable and reentrant.
#[derive(Clone)]
pub struct Validator {
    reports: MemCache<u64, ValidationReport>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self {
            reports: MemCache::new(REPORT_CACHE_SIZE),
        }
    }

    /// Validates `workflow`, reusing a memoized report when the structure
    /// is unchanged.
    pub fn check(
        &self,
        workflow: &Workflow,
    ) -> ValidationReport {
        let key = structural_hash(workflow);
        if let Some(report) = self.reports.get(&key) {
            return report;
        }

        let report = validate(workflow);
        self.reports.set(key, report.clone());
        report
    }
}

/// Hash of the validation-relevant structure: node ids, types and labels
/// plus connection pairs. Positions and properties do not affect validity.
fn structural_hash(workflow: &Workflow) -> u64 {
    let mut hasher = DefaultHasher::new();
    workflow.nodes.len().hash(&mut hasher);
    for node in workflow.nodes.iter() {
        node.id.hash(&mut hasher);
        node.node_type.hash(&mut hasher);
        node.label.hash(&mut hasher);
    }
    workflow.connections.len().hash(&mut hasher);
    for connection in workflow.connections.iter() {
        connection.source.hash(&mut hasher);
        connection.target.hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::WorkflowEditor;

    #[test]
    fn test_empty_workflow_has_trigger_error_only() {
        let editor = WorkflowEditor::new();
        let report = validate(&editor.snapshot());

        assert!(!report.valid);
        assert_eq!(report.messages(), vec!["Workflow must have exactly one Trigger node"]);
    }

    #[test]
    fn test_single_trigger_chain_is_valid() {
        let mut editor = WorkflowEditor::new();
        let trigger = editor.add_node(NodeType::Trigger, Some("T"));
        let action = editor.add_node(NodeType::Action, Some("A"));
        editor.connect(&trigger, &action);

        let report = validate(&editor.snapshot());
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_unconnected_node_is_unreachable() {
        let mut editor = WorkflowEditor::new();
        let trigger = editor.add_node(NodeType::Trigger, Some("T"));
        let a = editor.add_node(NodeType::Action, Some("A"));
        editor.add_node(NodeType::Action, Some("B"));
        editor.connect(&trigger, &a);

        let report = validate(&editor.snapshot());
        assert!(!report.valid);
        assert_eq!(report.messages(), vec!["Unreachable nodes: B"]);
    }

    #[test]
    fn test_unreachable_nodes_listed_in_collection_order() {
        let mut editor = WorkflowEditor::new();
        editor.add_node(NodeType::Trigger, Some("T"));
        editor.add_node(NodeType::Action, Some("A"));
        editor.add_node(NodeType::Delay, None);
        editor.add_node(NodeType::End, Some("Done"));

        let report = validate(&editor.snapshot());
        // the third node keeps its default label, the type name
        assert_eq!(report.messages(), vec!["Unreachable nodes: A, Delay, Done"]);
    }

    #[test]
    fn test_unreachable_label_falls_back_to_id() {
        let mut workflow = (*WorkflowEditor::new().snapshot()).clone();
        workflow.nodes = vec![
            crate::model::WorkflowNode {
                id: "t".to_string(),
                node_type: NodeType::Trigger,
                label: "T".to_string(),
                ..Default::default()
            },
            crate::model::WorkflowNode {
                id: "orphan".to_string(),
                node_type: NodeType::Action,
                ..Default::default()
            },
        ];

        let report = validate(&workflow);
        assert_eq!(report.messages(), vec!["Unreachable nodes: orphan"]);
    }

    #[test]
    fn test_back_edge_is_a_cycle() {
        let mut editor = WorkflowEditor::new();
        let trigger = editor.add_node(NodeType::Trigger, Some("T"));
        let action = editor.add_node(NodeType::Action, Some("A"));
        editor.connect(&trigger, &action);
        editor.connect(&action, &trigger);

        let report = validate(&editor.snapshot());
        assert!(!report.valid);
        // both nodes are visited, so reachability passes
        assert_eq!(report.messages(), vec!["Workflow contains a cycle"]);
    }

    #[test]
    fn test_zero_triggers_is_invalid_regardless_of_connections() {
        let mut editor = WorkflowEditor::new();
        let a = editor.add_node(NodeType::Action, Some("A"));
        let b = editor.add_node(NodeType::Action, Some("B"));
        editor.connect(&a, &b);

        let report = validate(&editor.snapshot());
        assert!(!report.valid);
        assert_eq!(report.errors, vec![ValidationError::TriggerCardinality]);
    }

    #[test]
    fn test_two_triggers_roots_traversal_at_first() {
        let mut editor = WorkflowEditor::new();
        let t1 = editor.add_node(NodeType::Trigger, Some("T1"));
        let a = editor.add_node(NodeType::Action, Some("A"));
        editor.add_node(NodeType::Trigger, Some("T2"));
        editor.connect(&t1, &a);

        let report = validate(&editor.snapshot());
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec![ValidationError::TriggerCardinality, ValidationError::Unreachable(vec!["T2".to_string()])]
        );
    }

    #[test]
    fn test_cycle_on_unreachable_island_reports_unreachable_only() {
        let mut editor = WorkflowEditor::new();
        editor.add_node(NodeType::Trigger, Some("T"));
        let a = editor.add_node(NodeType::Action, Some("A"));
        let b = editor.add_node(NodeType::Action, Some("B"));
        editor.connect(&a, &b);
        editor.connect(&b, &a);

        let report = validate(&editor.snapshot());
        // the island's loop is never entered from the root
        assert_eq!(report.errors, vec![ValidationError::Unreachable(vec!["A".to_string(), "B".to_string()])]);
    }

    #[test]
    fn test_error_order_is_stable() {
        let mut editor = WorkflowEditor::new();
        let t1 = editor.add_node(NodeType::Trigger, Some("T1"));
        editor.add_node(NodeType::Trigger, Some("T2"));
        let a = editor.add_node(NodeType::Action, Some("A"));
        editor.connect(&t1, &a);
        editor.connect(&a, &t1);

        let report = validate(&editor.snapshot());
        assert_eq!(
            report.errors,
            vec![
                ValidationError::TriggerCardinality,
                ValidationError::Unreachable(vec!["T2".to_string()]),
                ValidationError::Cycle,
            ]
        );
    }

    #[test]
    fn test_validate_is_pure_and_idempotent() {
        let mut editor = WorkflowEditor::new();
        let trigger = editor.add_node(NodeType::Trigger, Some("T"));
        let action = editor.add_node(NodeType::Action, Some("A"));
        editor.connect(&trigger, &action);
        editor.connect(&action, &action);

        let snapshot = editor.snapshot();
        let before = (*snapshot).clone();

        let first = validate(&snapshot);
        let second = validate(&snapshot);

        assert_eq!(first, second);
        assert_eq!(*snapshot, before);
    }

    #[test]
    fn test_validator_cache_returns_equivalent_reports() {
        let mut editor = WorkflowEditor::new();
        let trigger = editor.add_node(NodeType::Trigger, Some("T"));
        let action = editor.add_node(NodeType::Action, Some("A"));
        editor.connect(&trigger, &action);

        let validator = Validator::new();
        let first = validator.check(&editor.snapshot());
        let second = validator.check(&editor.snapshot());
        assert_eq!(first, second);
        assert!(first.valid);

        // a structural edit invalidates the memoized verdict
        editor.disconnect(&trigger, &action);
        let third = validator.check(&editor.snapshot());
        assert!(!third.valid);
    }
}
