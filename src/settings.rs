//! Application settings
//!
//! Loaded once at startup, persisted on every change. Missing fields
//! fall back to defaults so records from older builds still parse.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// OpenAI API key for content generation. Redacted from exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    pub ai_enabled: bool,
    pub notifications: bool,
    pub dark_mode: bool,
    pub auto_save: bool,
    pub quiz_settings: QuizSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            ai_enabled: false,
            notifications: true,
            dark_mode: true,
            auto_save: true,
            quiz_settings: QuizSettings::default(),
        }
    }
}

impl AppSettings {
    /// The configured API key, treating blank strings as absent
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizSettings {
    /// Default quiz time limit, in seconds
    pub default_time_limit: u32,
    pub show_explanations: bool,
    pub shuffle_questions: bool,
    pub difficulty_progression: bool,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            default_time_limit: 300,
            show_explanations: true,
            shuffle_questions: true,
            difficulty_progression: false,
        }
    }
}
