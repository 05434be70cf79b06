//! Single source of truth for the in-progress workflow document.
//!
//! The editor owns the canonical node and connection collections plus the
//! transient selection, and exposes atomic mutation operations. Every
//! mutation publishes a fresh immutable snapshot; snapshots handed out
//! earlier stay frozen.

use std::sync::Arc;

use nanoid::nanoid;
use tracing::trace;
use uuid::Uuid;

use crate::{
    common::Properties,
    model::{NodeId, NodeType, Position, Workflow, WorkflowConnection, WorkflowNode, WorkflowStatus},
};

/// Default canvas position for newly created nodes.
const DEFAULT_POSITION: Position = Position { x: 250.0, y: 150.0 };
/// Name given to blank documents until the user renames them.
const UNTITLED_NAME: &str = "Untitled Workflow";

/// Editing session over a single workflow document.
///
/// Mutations are synchronous and total: operations referencing a missing
/// node or connection do nothing and report it through their `bool` result
/// instead of raising. One editor instance is owned by the application's
/// composition root; tests construct as many as they need.
pub struct WorkflowEditor {
    /// Current document snapshot. Cloned on write, never mutated in place
    /// once shared.
    snapshot: Arc<Workflow>,
    /// Transient selection; not part of the document.
    selected: Option<NodeId>,
}

impl Default for WorkflowEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowEditor {
    /// Opens the editor on a fresh blank document.
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Self::blank()),
            selected: None,
        }
    }

    /// Opens the editor on an existing document.
    pub fn from_workflow(workflow: Workflow) -> Self {
        Self {
            snapshot: Arc::new(workflow),
            selected: None,
        }
    }

    fn blank() -> Workflow {
        Workflow {
            id: Uuid::new_v4().to_string(),
            name: UNTITLED_NAME.to_string(),
            description: String::new(),
            status: WorkflowStatus::Draft,
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Current immutable snapshot of the document.
    pub fn snapshot(&self) -> Arc<Workflow> {
        self.snapshot.clone()
    }

    /// Currently selected node id, if any.
    pub fn selected_node_id(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    /// Creates a node of `node_type`, appends it to the document and
    /// selects it. The label falls back to the type name when not given.
    /// Returns the generated node id. Never fails.
    pub fn add_node(
        &mut self,
        node_type: NodeType,
        label: Option<&str>,
    ) -> NodeId {
        let id = nanoid!();
        debug_assert!(self.snapshot.node(&id).is_none(), "generated node id collides: {}", id);
        trace!("editor::add_node({}, {})", node_type.as_ref(), id);

        let node = WorkflowNode {
            id: id.clone(),
            node_type,
            label: label.unwrap_or(node_type.title()).to_string(),
            position: DEFAULT_POSITION,
            properties: Properties::new(),
        };

        let workflow = Arc::make_mut(&mut self.snapshot);
        workflow.nodes.push(node);
        self.selected = Some(id.clone());
        id
    }

    /// Removes a node and every connection whose source or target is that
    /// node, atomically. Clears the selection when it pointed at the
    /// removed node. Returns whether the node existed.
    pub fn remove_node(
        &mut self,
        id: &str,
    ) -> bool {
        if self.snapshot.node(id).is_none() {
            return false;
        }
        trace!("editor::remove_node({})", id);

        let workflow = Arc::make_mut(&mut self.snapshot);
        workflow.nodes.retain(|n| n.id != id);
        workflow.connections.retain(|c| c.source != id && c.target != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        true
    }

    /// Replaces the position of a node. Coordinates are unconstrained
    /// canvas units. Returns whether the node existed.
    pub fn move_node(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
    ) -> bool {
        if self.snapshot.node(id).is_none() {
            return false;
        }

        let workflow = Arc::make_mut(&mut self.snapshot);
        if let Some(node) = workflow.nodes.iter_mut().find(|n| n.id == id) {
            node.position = Position { x, y };
        }
        true
    }

    /// Sets or clears the transient selection.
    ///
    /// Existence is not validated: a caller may select a just-created node
    /// whose id it already knows.
    pub fn select_node(
        &mut self,
        id: Option<NodeId>,
    ) {
        self.selected = id;
    }

    /// Appends a connection between two node ids.
    ///
    /// The pair is appended unconditionally: duplicates and self-loops are
    /// permitted here and rejected only by the validator's cycle check.
    pub fn connect(
        &mut self,
        source: &str,
        target: &str,
    ) {
        trace!("editor::connect({} -> {})", source, target);
        let workflow = Arc::make_mut(&mut self.snapshot);
        workflow.connections.push(WorkflowConnection::new(source, target));
    }

    /// Removes every connection exactly matching the pair. Returns whether
    /// any matched.
    pub fn disconnect(
        &mut self,
        source: &str,
        target: &str,
    ) -> bool {
        if !self.snapshot.connections.iter().any(|c| c.source == source && c.target == target) {
            return false;
        }
        trace!("editor::disconnect({} -> {})", source, target);

        let workflow = Arc::make_mut(&mut self.snapshot);
        workflow.connections.retain(|c| !(c.source == source && c.target == target));
        true
    }

    /// Shallow-merges `props` into a node's property bag. Returns whether
    /// the node existed.
    pub fn update_node_properties(
        &mut self,
        id: &str,
        props: &Properties,
    ) -> bool {
        if self.snapshot.node(id).is_none() {
            return false;
        }

        let workflow = Arc::make_mut(&mut self.snapshot);
        if let Some(node) = workflow.nodes.iter_mut().find(|n| n.id == id) {
            node.properties.merge(props);
        }
        true
    }

    /// Replaces the document with a fresh blank one and clears the
    /// selection. The new document gets its own id.
    pub fn reset(&mut self) {
        trace!("editor::reset()");
        self.snapshot = Arc::new(Self::blank());
        self.selected = None;
    }
}
