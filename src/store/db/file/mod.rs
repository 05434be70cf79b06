mod collect;

use std::{
    path::PathBuf,
    sync::Arc,
};

use crate::{
    Result,
    store::{DbCollection, DbStore, Store, data::*},
};

pub use collect::FileCollect;

/// Fixed namespace prefixing every collection file.
const STORE_NAMESPACE: &str = "boardflow";

/// File-backed storage keeping each collection as one JSON document.
///
/// The layout mirrors a browser's local storage: every collection lives in
/// a single document under a fixed namespace key, here
/// `<dir>/boardflow.<collection>.json`, and each mutation rewrites the
/// whole document.
#[derive(Debug, Clone)]
pub struct FileStore {
    workflows: Arc<FileCollect<WorkflowDoc>>,
}

impl DbStore for FileStore {
    fn init(
        &self,
        s: &Store,
    ) {
        s.register(self.workflows());
    }
}

impl FileStore {
    /// Opens the store under `dir`, reading any collection documents
    /// already present.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let workflows = FileCollect::new(&dir, "workflows")?;

        Ok(Self {
            workflows: Arc::new(workflows),
        })
    }

    pub fn workflows(&self) -> Arc<dyn DbCollection<Item = WorkflowDoc> + Send + Sync> {
        self.workflows.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::WorkflowEditor;
    use crate::model::NodeType;

    fn store_in(dir: &std::path::Path) -> Store {
        let store = Store::new();
        FileStore::new(dir).unwrap().init(&store);
        store
    }

    #[test]
    fn test_documents_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let mut editor = WorkflowEditor::new();
        let trigger = editor.add_node(NodeType::Trigger, Some("Start"));
        let action = editor.add_node(NodeType::Action, Some("Notify"));
        editor.connect(&trigger, &action);
        let snapshot = editor.snapshot();

        let store = store_in(dir.path());
        store.save(&snapshot).unwrap();
        drop(store);

        let reopened = store_in(dir.path());
        let loaded = reopened.load(&snapshot.id).unwrap();
        assert_eq!(loaded, *snapshot);
    }

    #[test]
    fn test_collection_file_is_namespaced() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.save(&WorkflowEditor::new().snapshot()).unwrap();

        assert!(dir.path().join("boardflow.workflows.json").exists());
    }

    #[test]
    fn test_delete_rewrites_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let editor = WorkflowEditor::new();
        store.save(&editor.snapshot()).unwrap();
        assert!(store.remove(&editor.snapshot().id).unwrap());

        let reopened = store_in(dir.path());
        assert!(reopened.list().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_document_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("boardflow.workflows.json"), "not json").unwrap();

        assert!(FileStore::new(dir.path()).is_err());
    }
}
