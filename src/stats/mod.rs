//! Gamified progress tracking: experience, levels, achievements, quiz stats

pub mod achievements;
pub mod models;

pub use models::*;
