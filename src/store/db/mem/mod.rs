mod collect;

use std::sync::Arc;

use crate::store::{DbCollection, DbStore, Store, data::*};

pub use collect::Collect;

/// In-memory storage backend for tests and ephemeral sessions.
#[derive(Debug, Clone)]
pub struct MemStore {
    workflows: Arc<Collect<WorkflowDoc>>,
}

impl DbStore for MemStore {
    fn init(
        &self,
        s: &Store,
    ) {
        s.register(self.workflows());
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    pub fn new() -> Self {
        let workflows = Collect::new("workflows");

        Self {
            workflows: Arc::new(workflows),
        }
    }

    pub fn workflows(&self) -> Arc<dyn DbCollection<Item = WorkflowDoc> + Send + Sync> {
        self.workflows.clone()
    }
}
