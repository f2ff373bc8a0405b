//! Knowledge node domain: nodes, categories, connections
//!
//! This module provides:
//! - The KnowledgeNode record and its media attachments
//! - The fixed category set with display names and colors
//! - Typed creation (NodeDraft) and update (NodePatch) requests

pub mod category;
pub mod models;

pub use category::{Category, UnknownCategory};
pub use models::*;
