//! Workflow engine - the main entry point for Boardflow.
//!
//! The engine wires the configured storage backend into the document
//! store, opens editors over documents and runs cached structural
//! validation. All of it is synchronous: the builder runs in a single
//! event loop and every operation completes before the next one starts.

use std::sync::Arc;

use tracing::info;

use crate::{
    BoardflowError, Config, Result, StoreType,
    editor::WorkflowEditor,
    model::Workflow,
    store::{DbStore, FileStore, MemStore, Store},
    validate::{ValidationReport, Validator},
};

/// The main workflow engine.
///
/// Engine is the central coordinator for Boardflow, responsible for:
/// - Wiring the configured storage backend (memory or file)
/// - Loading and saving whole workflow documents
/// - Running cached structural validation
///
/// # Example
///
/// ```rust,ignore
/// let engine = Engine::new_with_config(Config::default())?;
///
/// let mut editor = engine.create();
/// let trigger = editor.add_node(NodeType::Trigger, None);
/// engine.save(&editor)?;
///
/// let report = engine.validate(&editor.snapshot());
/// ```
pub struct Engine {
    /// Persistent storage for workflow documents.
    store: Arc<Store>,
    /// Memoizing structural validator.
    validator: Validator,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates a new engine backed by the in-memory store.
    pub fn new() -> Self {
        let store = Store::new();
        MemStore::new().init(&store);

        Self {
            store: Arc::new(store),
            validator: Validator::new(),
        }
    }

    /// Creates a new engine with the given configuration.
    ///
    /// Selects and initializes the storage backend; the file backend reads
    /// its collection documents eagerly, so a corrupt store surfaces here.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let store = Store::new();
        let db: Box<dyn DbStore> = match config.store.store_type {
            StoreType::Mem => Box::new(MemStore::new()),
            StoreType::File => {
                let file = config.store.file.ok_or(BoardflowError::Config("file configuration is required when store type is file".into()))?;
                Box::new(FileStore::new(&file.data_dir)?)
            }
        };
        db.init(&store);
        info!("engine started, store_type: {:?}", config.store.store_type);

        Ok(Self {
            store: Arc::new(store),
            validator: Validator::new(),
        })
    }

    /// Shared document store.
    pub fn store(&self) -> Arc<Store> {
        self.store.clone()
    }

    /// Opens an editor on a fresh blank document.
    pub fn create(&self) -> WorkflowEditor {
        WorkflowEditor::new()
    }

    /// Opens an editor on a stored document.
    pub fn open(
        &self,
        id: &str,
    ) -> Result<WorkflowEditor> {
        let workflow = self.store.load(id)?;
        Ok(WorkflowEditor::from_workflow(workflow))
    }

    /// Persists the editor's current snapshot.
    pub fn save(
        &self,
        editor: &WorkflowEditor,
    ) -> Result<bool> {
        self.store.save(&editor.snapshot())
    }

    /// Validates a snapshot, reusing memoized reports for unchanged
    /// structures.
    pub fn validate(
        &self,
        workflow: &Workflow,
    ) -> ValidationReport {
        self.validator.check(workflow)
    }
}
