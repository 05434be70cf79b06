mod workflow;

pub use workflow::WorkflowDoc;
