//! Full-store export
//!
//! A convenience snapshot of all four records, not a versioned
//! interchange format. The API key never leaves the machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeNode;
use crate::quiz::Quiz;
use crate::settings::AppSettings;
use crate::stats::UserStats;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub nodes: Vec<KnowledgeNode>,
    pub stats: UserStats,
    pub settings: AppSettings,
    pub quizzes: Vec<Quiz>,
    pub export_date: DateTime<Utc>,
}

impl ExportBundle {
    /// Assemble a bundle, stripping the API key from the settings copy
    pub fn new(
        nodes: Vec<KnowledgeNode>,
        stats: UserStats,
        mut settings: AppSettings,
        quizzes: Vec<Quiz>,
    ) -> Self {
        settings.openai_api_key = None;
        Self {
            nodes,
            stats,
            settings,
            quizzes,
            export_date: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
