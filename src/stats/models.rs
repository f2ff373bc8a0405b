//! User progress and quiz statistics models

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::knowledge::Category;
use crate::quiz::Difficulty;

/// Experience awarded for creating a node
pub const NODE_XP: u32 = 10;
/// Experience awarded for forming a new connection
pub const CONNECTION_XP: u32 = 5;
/// Experience required per level
pub const XP_PER_LEVEL: u32 = 100;

/// Aggregate user statistics
///
/// `total_nodes`, `total_connections`, and `categories` are derived by
/// scanning the node collection after every mutation; they are never
/// incremented independently. Experience, level, achievements, and quiz
/// stats are folded in as operations happen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub total_nodes: usize,
    pub total_connections: usize,
    pub experience_points: u32,
    pub level: u32,
    pub streak_days: u32,
    pub categories: HashMap<Category, usize>,
    pub achievements: Vec<Achievement>,
    pub quiz_stats: QuizStats,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_nodes: 0,
            total_connections: 0,
            experience_points: 0,
            level: 1,
            streak_days: 0,
            categories: HashMap::new(),
            achievements: Vec::new(),
            quiz_stats: QuizStats::default(),
        }
    }
}

impl UserStats {
    /// Level implied by an experience total
    pub fn level_for_xp(xp: u32) -> u32 {
        xp / XP_PER_LEVEL + 1
    }

    /// Experience still needed to reach the next level
    pub fn experience_to_next_level(&self) -> u32 {
        (self.level * XP_PER_LEVEL).saturating_sub(self.experience_points)
    }

    /// Progress within the current level, 0..XP_PER_LEVEL
    pub fn current_level_progress(&self) -> u32 {
        self.experience_points % XP_PER_LEVEL
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.categories.get(&category).copied().unwrap_or(0)
    }
}

/// Cumulative quiz statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizStats {
    pub total_quizzes: u32,
    pub correct_answers: u32,
    pub total_questions: u32,
    /// Cumulative correct / cumulative total, as a percentage
    pub average_score: f64,
    pub best_streak: u32,
    /// Total quiz time, in whole minutes
    pub time_spent: u32,
    pub difficulty_progress: HashMap<Difficulty, u32>,
}

/// A single achievement and its unlock state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
    pub progress: u32,
    pub max_progress: u32,
}

impl Achievement {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = UserStats::default();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.experience_points, 0);
        assert!(stats.achievements.is_empty());
        assert_eq!(stats.quiz_stats.total_quizzes, 0);
    }

    #[test]
    fn test_level_for_xp() {
        assert_eq!(UserStats::level_for_xp(0), 1);
        assert_eq!(UserStats::level_for_xp(99), 1);
        assert_eq!(UserStats::level_for_xp(100), 2);
        assert_eq!(UserStats::level_for_xp(250), 3);
    }

    #[test]
    fn test_level_progress() {
        let stats = UserStats {
            experience_points: 130,
            level: 2,
            ..UserStats::default()
        };
        assert_eq!(stats.current_level_progress(), 30);
        assert_eq!(stats.experience_to_next_level(), 70);
    }

    #[test]
    fn test_stats_parse_from_partial_record() {
        // A stats record from the first release, before quiz tracking
        let json = r#"{
            "totalNodes": 3,
            "totalConnections": 1,
            "experiencePoints": 35,
            "level": 1,
            "streakDays": 0,
            "categories": {"science": 2, "arts": 1},
            "achievements": []
        }"#;

        let stats: UserStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.category_count(crate::knowledge::Category::Science), 2);
        assert_eq!(stats.category_count(crate::knowledge::Category::History), 0);
        assert_eq!(stats.quiz_stats.total_questions, 0);
    }

    #[test]
    fn test_difficulty_progress_keys_serialize_lowercase() {
        let mut stats = QuizStats::default();
        stats.difficulty_progress.insert(Difficulty::Easy, 2);

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"easy\":2"));
    }
}
