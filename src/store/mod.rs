//! Persistence layer
//!
//! [`KnowledgeStore`] owns the JSON records on disk and is the only way
//! to mutate them. [`ExportBundle`] is the redacted snapshot handed to
//! backups.

pub mod export;
pub mod knowledge_store;

pub use export::ExportBundle;
pub use knowledge_store::{KnowledgeStore, StoreError};
