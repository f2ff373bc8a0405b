//! Quiz generation and play
//!
//! This module provides:
//! - Quiz and question records kept in the persistent quiz history
//! - Heuristic question generation from node text (no AI involved)
//! - A transient answer-tracking session for one play-through

pub mod generator;
pub mod models;
pub mod session;

pub use models::*;
pub use session::QuizSession;
