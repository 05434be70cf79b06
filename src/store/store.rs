use std::{
    any::Any,
    collections::HashMap,
    convert::AsRef,
    sync::{Arc, RwLock},
};

use tracing::trace;

use crate::{BoardflowError, Result, ShareLock, model::Workflow, utils};

use super::{DbCollection, DbCollectionIden, StoreIden, data::*};

#[derive(Clone)]
pub struct DynDbSetRef<T>(Arc<dyn DbCollection<Item = T>>);

/// Facade over the registered storage collections.
///
/// Backends register their collections through [`super::DbStore::init`];
/// callers load and save whole workflow documents and never touch the
/// backend directly.
pub struct Store {
    collections: ShareLock<HashMap<StoreIden, Arc<dyn Any + Send + Sync + 'static>>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn collection<DATA>(&self) -> Arc<dyn DbCollection<Item = DATA>>
    where
        DATA: DbCollectionIden + Send + Sync + 'static,
    {
        let collections = self.collections.read().unwrap();

        #[allow(clippy::expect_fun_call)]
        let collection = collections.get(&DATA::iden()).expect(&format!("fail to get collection: {}", DATA::iden().as_ref()));

        #[allow(clippy::expect_fun_call)]
        collection.downcast_ref::<DynDbSetRef<DATA>>().map(|v| v.0.clone()).expect(&format!("fail to get collection: {}", DATA::iden().as_ref()))
    }

    pub fn register<DATA>(
        &self,
        collection: Arc<dyn DbCollection<Item = DATA> + Send + Sync + 'static>,
    ) where
        DATA: DbCollectionIden + 'static,
    {
        let mut collections = self.collections.write().unwrap();
        collections.insert(DATA::iden(), Arc::new(DynDbSetRef::<DATA>(collection)));
    }

    pub fn workflows(&self) -> Arc<dyn DbCollection<Item = WorkflowDoc>> {
        self.collection()
    }

    /// Upserts a workflow document.
    ///
    /// A first save stamps `create_time`; later saves preserve it and stamp
    /// `update_time`.
    pub fn save(
        &self,
        workflow: &Workflow,
    ) -> Result<bool> {
        trace!("store::save({})", workflow.id);
        if workflow.id.is_empty() {
            return Err(BoardflowError::Workflow("missing id in workflow".into()));
        }
        let text = workflow.to_json()?;
        let workflows = self.workflows();
        match workflows.find(&workflow.id) {
            Ok(m) => {
                let data = WorkflowDoc {
                    id: workflow.id.clone(),
                    name: workflow.name.clone(),
                    description: workflow.description.clone(),
                    data: text,
                    create_time: m.create_time,
                    update_time: utils::time::time_millis(),
                };
                workflows.update(&data)
            }
            Err(_) => {
                let data = WorkflowDoc {
                    id: workflow.id.clone(),
                    name: workflow.name.clone(),
                    description: workflow.description.clone(),
                    data: text,
                    create_time: utils::time::time_millis(),
                    update_time: 0,
                };
                workflows.create(&data)
            }
        }
    }

    /// Loads a workflow document by id.
    pub fn load(
        &self,
        id: &str,
    ) -> Result<Workflow> {
        trace!("store::load({})", id);
        let doc = self.workflows().find(id)?;
        Workflow::from_json(&doc.data)
    }

    /// Lists all stored workflow documents, oldest first.
    pub fn list(&self) -> Result<Vec<Workflow>> {
        let mut docs = self.workflows().list()?;
        docs.sort_by(|a, b| a.create_time.cmp(&b.create_time).then_with(|| a.id.cmp(&b.id)));
        docs.iter().map(|doc| Workflow::from_json(&doc.data)).collect()
    }

    /// Deletes a stored workflow document. Returns whether it existed.
    pub fn remove(
        &self,
        id: &str,
    ) -> Result<bool> {
        trace!("store::remove({})", id);
        self.workflows().delete(id)
    }
}
