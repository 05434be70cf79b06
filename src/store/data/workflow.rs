use serde::{Deserialize, Serialize};

use crate::store::{DbCollectionIden, StoreIden};

/// Persistence record for a whole workflow document.
///
/// The document itself is stored opaquely as JSON in `data`; `name` and
/// `description` are duplicated for listing without deserializing the
/// graph. Timestamps are epoch milliseconds.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct WorkflowDoc {
    pub id: String,
    pub name: String,
    pub description: String,
    pub data: String,
    pub create_time: i64,
    pub update_time: i64,
}

impl DbCollectionIden for WorkflowDoc {
    fn iden() -> StoreIden {
        StoreIden::Workflows
    }
}
