//! Storage layer for persisting workflow documents.
//!
//! Provides an abstraction over different storage backends:
//! - `MemStore`: In-memory storage for testing
//! - `FileStore`: JSON documents on disk under a fixed namespace
//!
//! Documents are stored whole and opaquely; the storage layer never
//! inspects the graph it persists.

pub mod data;
mod db;
mod store;

use std::error::Error;

use strum::{AsRefStr, EnumIter};

use crate::{BoardflowError, Result};

pub use data::WorkflowDoc;
pub use db::{FileStore, MemStore};
pub use store::Store;

/// Maps backend errors to BoardflowError.
fn map_db_err(err: impl Error) -> BoardflowError {
    BoardflowError::Store(err.to_string())
}

/// Identifiers for different storage collections.
#[derive(Debug, Clone, AsRefStr, PartialEq, Hash, Eq, EnumIter)]
pub enum StoreIden {
    /// Workflow documents.
    #[strum(serialize = "workflows")]
    Workflows,
}

/// Trait for types that can identify their storage collection.
pub trait DbCollectionIden {
    /// Returns the collection identifier for this type.
    fn iden() -> StoreIden;
}

/// Trait for database collection operations.
pub trait DbCollection: Send + Sync {
    /// The type of items stored in this collection.
    type Item;

    /// Checks if a record with the given ID exists.
    fn exists(
        &self,
        id: &str,
    ) -> Result<bool>;

    /// Finds a record by ID.
    fn find(
        &self,
        id: &str,
    ) -> Result<Self::Item>;

    /// Lists all records in the collection.
    fn list(&self) -> Result<Vec<Self::Item>>;

    /// Creates a new record.
    fn create(
        &self,
        data: &Self::Item,
    ) -> Result<bool>;

    /// Updates an existing record.
    fn update(
        &self,
        data: &Self::Item,
    ) -> Result<bool>;

    /// Deletes a record by ID.
    fn delete(
        &self,
        id: &str,
    ) -> Result<bool>;
}

/// Trait for database store initialization.
pub trait DbStore {
    /// Initializes the backend and registers collections with the store.
    fn init(
        &self,
        s: &Store,
    );
}
