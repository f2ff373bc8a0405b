//! MindWeb: a personal knowledge base
//!
//! Knowledge lives in nodes placed on a 2D canvas and linked into a
//! web. The library tracks progress (experience, levels, achievements),
//! generates quizzes from the collection, and optionally drafts content
//! through OpenAI. All state persists as JSON under a single data
//! directory; [`store::KnowledgeStore`] is the entry point.

pub mod ai;
pub mod knowledge;
pub mod quiz;
pub mod settings;
pub mod stats;
pub mod store;

pub use knowledge::{Category, KnowledgeNode, NodeDraft, NodePatch, Position};
pub use quiz::{Difficulty, Quiz, QuizOutcome, QuizSession};
pub use settings::AppSettings;
pub use stats::UserStats;
pub use store::{ExportBundle, KnowledgeStore, StoreError};
