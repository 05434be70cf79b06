mod connection;
mod node;
mod workflow;

pub use connection::WorkflowConnection;
pub use node::{NodeId, NodeType, Position, WorkflowNode};
pub use workflow::{Workflow, WorkflowStatus};
