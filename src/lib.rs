//! # Boardflow
//!
//! Boardflow is a lightweight workflow builder and graph validation engine written in Rust.
//! It maintains a directed graph of typed nodes and connections as an immutable document
//! and validates its structural integrity on demand.
//!
//! ## Core Features
//!
//! - **Immutable Snapshots**: every mutation publishes a fresh frozen view of the document
//! - **Structural Validation**: trigger cardinality, reachability and cycle detection
//! - **Pluggable Storage**: in-memory storage (testing) and JSON documents on disk
//! - **Flexible Workflow Definition**: JSON documents with various node types
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use boardflow::{Engine, NodeType};
//!
//! let engine = Engine::new();
//! let mut editor = engine.create();
//!
//! let trigger = editor.add_node(NodeType::Trigger, Some("Card created"));
//! let notify = editor.add_node(NodeType::Action, Some("Notify assignee"));
//! editor.connect(&trigger, &notify);
//!
//! let report = engine.validate(&editor.snapshot());
//! assert!(report.valid);
//! engine.save(&editor)?;
//! ```

mod common;
mod config;
mod editor;
mod engine;
mod error;
mod graph;
mod model;
mod store;
mod utils;
mod validate;

use std::sync::{Arc, RwLock};

pub use common::Properties;
pub use config::{Config, FileConfig, StoreConfig, StoreType};
pub use editor::WorkflowEditor;
pub use engine::Engine;
pub use error::BoardflowError;
pub use model::*;
pub use store::{DbCollection, DbCollectionIden, DbStore, FileStore, MemStore, Store, StoreIden, WorkflowDoc};
pub use validate::{ValidationError, ValidationReport, Validator, validate};

/// Result type alias for Boardflow operations.
pub type Result<T> = std::result::Result<T, BoardflowError>;

/// Thread-safe shared lock wrapper using Arc<RwLock<T>>.
pub(crate) type ShareLock<T> = Arc<RwLock<T>>;
