//! Directed-graph projection of a workflow snapshot.
//!
//! Wraps the document's node and connection collections in a petgraph
//! [`DiGraph`] for traversal. The projection is defensive: connections whose
//! endpoints are missing from the node collection are skipped, while
//! duplicate connections and self-loops are preserved.

use std::collections::HashMap;

use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::Dfs,
};

use crate::model::{NodeType, Workflow, WorkflowNode};

/// Traversal state for cycle detection.
#[derive(Clone, Copy, PartialEq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// Read-only graph view over a workflow snapshot.
pub struct WorkflowGraph<'a> {
    graph: DiGraph<&'a WorkflowNode, ()>,
    /// Node indices in document collection order.
    order: Vec<NodeIndex>,
}

impl<'a> From<&'a Workflow> for WorkflowGraph<'a> {
    fn from(workflow: &'a Workflow) -> Self {
        let mut graph = DiGraph::new();
        let mut index: HashMap<&str, NodeIndex> = HashMap::new();
        let mut order = Vec::with_capacity(workflow.nodes.len());

        for node in workflow.nodes.iter() {
            let idx = graph.add_node(node);
            index.insert(node.id.as_str(), idx);
            order.push(idx);
        }
        for connection in workflow.connections.iter() {
            let source = index.get(connection.source.as_str());
            let target = index.get(connection.target.as_str());
            if let (Some(source), Some(target)) = (source, target) {
                graph.add_edge(*source, *target, ());
            }
        }

        Self { graph, order }
    }
}

impl<'a> WorkflowGraph<'a> {
    /// First trigger node in collection order, the traversal root.
    pub fn trigger_root(&self) -> Option<NodeIndex> {
        self.order.iter().copied().find(|idx| self.graph[*idx].node_type == NodeType::Trigger)
    }

    /// Nodes a forward traversal from `root` never visits, in collection order.
    pub fn unreachable_from(
        &self,
        root: NodeIndex,
    ) -> Vec<&'a WorkflowNode> {
        let mut visited = vec![false; self.graph.node_count()];
        let mut dfs = Dfs::new(&self.graph, root);
        while let Some(idx) = dfs.next(&self.graph) {
            visited[idx.index()] = true;
        }

        self.order.iter().filter(|idx| !visited[idx.index()]).map(|idx| self.graph[*idx]).collect()
    }

    /// Whether any path starting at `root` returns to a node still being
    /// visited in the current traversal.
    pub fn has_cycle_from(
        &self,
        root: NodeIndex,
    ) -> bool {
        let mut colors = vec![Color::Unvisited; self.graph.node_count()];
        self.visit(root, &mut colors)
    }

    fn visit(
        &self,
        idx: NodeIndex,
        colors: &mut [Color],
    ) -> bool {
        colors[idx.index()] = Color::InProgress;
        for next in self.graph.neighbors(idx) {
            match colors[next.index()] {
                Color::InProgress => return true,
                Color::Unvisited => {
                    if self.visit(next, colors) {
                        return true;
                    }
                }
                Color::Done => {}
            }
        }
        colors[idx.index()] = Color::Done;
        false
    }
}
