//! Achievement catalog and unlock tracking

use chrono::Utc;

use super::models::{Achievement, UserStats};

/// Which statistic a milestone measures
#[derive(Debug, Clone, Copy)]
enum Metric {
    Nodes,
    Connections,
    Quizzes,
    AiNodes,
    Level,
}

struct Milestone {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    metric: Metric,
    target: u32,
}

const MILESTONES: [Milestone; 6] = [
    Milestone {
        id: "first-node",
        title: "First Knowledge Node",
        description: "Created your first knowledge node",
        icon: "\u{1F3AF}",
        metric: Metric::Nodes,
        target: 1,
    },
    Milestone {
        id: "knowledge-builder",
        title: "Knowledge Builder",
        description: "Created 10 knowledge nodes",
        icon: "\u{1F9E0}",
        metric: Metric::Nodes,
        target: 10,
    },
    Milestone {
        id: "connector",
        title: "Connector",
        description: "Created 5 connections between nodes",
        icon: "\u{1F517}",
        metric: Metric::Connections,
        target: 5,
    },
    Milestone {
        id: "quiz-master",
        title: "Quiz Master",
        description: "Completed 5 quizzes",
        icon: "\u{1F3C6}",
        metric: Metric::Quizzes,
        target: 5,
    },
    Milestone {
        id: "ai-explorer",
        title: "AI Explorer",
        description: "Used AI to generate content",
        icon: "\u{2728}",
        metric: Metric::AiNodes,
        target: 1,
    },
    Milestone {
        id: "learning-enthusiast",
        title: "Learning Enthusiast",
        description: "Reached Level 5",
        icon: "\u{2B50}",
        metric: Metric::Level,
        target: 5,
    },
];

/// Bring the achievement list up to date with the current totals.
///
/// Progress always tracks the current metric (capped at the target);
/// unlock timestamps are set the first time a target is crossed and
/// kept even if the metric later drops below it.
pub fn refresh(stats: &mut UserStats, ai_node_count: usize) {
    for milestone in &MILESTONES {
        let value = match milestone.metric {
            Metric::Nodes => stats.total_nodes as u32,
            Metric::Connections => stats.total_connections as u32,
            Metric::Quizzes => stats.quiz_stats.total_quizzes,
            Metric::AiNodes => ai_node_count as u32,
            Metric::Level => stats.level,
        };
        let progress = value.min(milestone.target);
        let reached = value >= milestone.target;

        match stats.achievements.iter_mut().find(|a| a.id == milestone.id) {
            Some(existing) => {
                existing.progress = progress;
                if reached && existing.unlocked_at.is_none() {
                    existing.unlocked_at = Some(Utc::now());
                }
            }
            None => {
                stats.achievements.push(Achievement {
                    id: milestone.id.to_string(),
                    title: milestone.title.to_string(),
                    description: milestone.description.to_string(),
                    icon: milestone.icon.to_string(),
                    unlocked_at: if reached { Some(Utc::now()) } else { None },
                    progress,
                    max_progress: milestone.target,
                });
            }
        }
    }
}
