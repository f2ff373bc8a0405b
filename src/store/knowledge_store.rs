//! JSON-file persistence and every mutation of the knowledge base
//!
//! Storage layout under the data directory:
//! ```text
//! mindweb/
//! ├── nodes.json      # Array of all knowledge nodes
//! ├── stats.json      # Aggregate user statistics
//! ├── settings.json   # Application settings
//! └── quizzes.json    # Quiz history
//! ```
//!
//! The store loads all four records once, serves reads from the cache,
//! and on every mutation writes the affected records before committing
//! the change to the cache. A failed write therefore leaves the cached
//! state untouched.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::ai::{AiError, ContentGenerator};
use crate::knowledge::{Category, KnowledgeNode, NodeDraft, NodePatch, Position};
use crate::quiz::generator;
use crate::quiz::{Difficulty, Quiz, QuizOutcome};
use crate::settings::AppSettings;
use crate::stats::{achievements, UserStats, CONNECTION_XP, NODE_XP};

use super::export::ExportBundle;

const NODES_FILE: &str = "nodes.json";
const STATS_FILE: &str = "stats.json";
const SETTINGS_FILE: &str = "settings.json";
const QUIZZES_FILE: &str = "quizzes.json";

/// Canvas region for freshly created nodes
const POSITION_MIN: f64 = 50.0;
const POSITION_MAX: f64 = 450.0;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Cannot connect a node to itself")]
    SelfConnection,

    #[error("Node {0} cannot be empty")]
    EmptyField(&'static str),

    #[error("No nodes available to build a quiz")]
    EmptyCollection,

    #[error("AI features are disabled in settings")]
    AiDisabled,

    #[error("No OpenAI API key configured")]
    ApiKeyMissing,

    #[error("AI error: {0}")]
    Ai(#[from] AiError),

    #[error("Could not determine data directory")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Single source of truth for nodes, stats, settings, and quiz history
pub struct KnowledgeStore {
    data_dir: PathBuf,
    rng: StdRng,
    loaded: bool,
    nodes: Vec<KnowledgeNode>,
    stats: UserStats,
    settings: AppSettings,
    quizzes: Vec<Quiz>,
}

impl KnowledgeStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self::with_rng(data_dir, StdRng::from_entropy())
    }

    /// Build a store with a caller-supplied random source. Positions and
    /// quiz generation become reproducible with a seeded generator.
    pub fn with_rng(data_dir: PathBuf, rng: StdRng) -> Self {
        Self {
            data_dir,
            rng,
            loaded: false,
            nodes: Vec::new(),
            stats: UserStats::default(),
            settings: AppSettings::default(),
            quizzes: Vec::new(),
        }
    }

    /// Platform data directory (e.g. ~/.local/share/mindweb)
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|dir| dir.join("mindweb"))
            .ok_or(StoreError::DataDirNotFound)
    }

    /// Read all four records into the cache. Idempotent; later calls
    /// return without touching storage. A record that is missing or
    /// unreadable falls back to its default without failing the rest.
    pub fn load(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }

        fs::create_dir_all(&self.data_dir)?;

        self.nodes = self.load_record(NODES_FILE);
        self.stats = self.load_record(STATS_FILE);
        self.settings = self.load_record(SETTINGS_FILE);
        self.quizzes = self.load_record(QUIZZES_FILE);
        self.loaded = true;

        log::debug!(
            "Loaded {} nodes, {} quizzes from {}",
            self.nodes.len(),
            self.quizzes.len(),
            self.data_dir.display()
        );

        Ok(())
    }

    fn load_record<T>(&self, name: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.data_dir.join(name);
        if !path.exists() {
            return T::default();
        }

        let parsed = fs::read_to_string(&path)
            .map_err(StoreError::Io)
            .and_then(|content| serde_json::from_str(&content).map_err(StoreError::Json));

        match parsed {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Could not read {}, falling back to defaults: {}", name, err);
                T::default()
            }
        }
    }

    fn save_record<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self.data_dir.join(name);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, serde_json::to_string_pretty(value)?)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    // ==================== Node Operations ====================

    /// Create a node from a draft. Awards experience and refreshes the
    /// derived statistics.
    pub fn add_node(&mut self, draft: NodeDraft) -> Result<KnowledgeNode> {
        self.load()?;

        let title = draft.title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyField("title"));
        }
        let content = draft.content.trim();
        if content.is_empty() {
            return Err(StoreError::EmptyField("content"));
        }

        let position = Position::new(
            self.rng.gen_range(POSITION_MIN..POSITION_MAX),
            self.rng.gen_range(POSITION_MIN..POSITION_MAX),
        );

        let mut node = KnowledgeNode::new(
            title.to_string(),
            content.to_string(),
            draft.category,
            position,
        );
        node.tags = draft.tags;
        node.source = draft.source;
        node.color = draft.color;
        node.media = draft.media;
        node.ai_generated = draft.ai_generated;

        let mut nodes = self.nodes.clone();
        nodes.push(node.clone());

        let mut stats = self.stats.clone();
        stats.experience_points += NODE_XP;
        Self::refresh_stats(&mut stats, &nodes);

        self.save_record(NODES_FILE, &nodes)?;
        self.save_record(STATS_FILE, &stats)?;
        self.nodes = nodes;
        self.stats = stats;

        Ok(node)
    }

    /// Merge a patch into the node with the given id. Returns the
    /// updated node, or None (a no-op) when the id is unknown.
    pub fn update_node(&mut self, id: &str, patch: NodePatch) -> Result<Option<KnowledgeNode>> {
        self.load()?;

        let index = match self.nodes.iter().position(|n| n.id == id) {
            Some(index) => index,
            None => return Ok(None),
        };

        let mut nodes = self.nodes.clone();
        {
            let node = &mut nodes[index];
            if let Some(title) = patch.title {
                node.title = title;
            }
            if let Some(content) = patch.content {
                node.content = content;
            }
            if let Some(category) = patch.category {
                node.category = category;
            }
            if let Some(tags) = patch.tags {
                node.tags = tags;
            }
            if let Some(source) = patch.source {
                node.source = Some(source);
            }
            if let Some(position) = patch.position {
                node.position = position;
            }
            if let Some(color) = patch.color {
                node.color = Some(color);
            }
            if let Some(level) = patch.level {
                node.level = level;
            }
            if let Some(media) = patch.media {
                node.media = media;
            }
            if let Some(ai_generated) = patch.ai_generated {
                node.ai_generated = ai_generated;
            }
        }

        let mut stats = self.stats.clone();
        Self::refresh_stats(&mut stats, &nodes);

        self.save_record(NODES_FILE, &nodes)?;
        self.save_record(STATS_FILE, &stats)?;
        self.nodes = nodes;
        self.stats = stats;

        Ok(Some(self.nodes[index].clone()))
    }

    /// Move a node on the canvas. Called on drag release, not on every
    /// intermediate frame.
    pub fn update_node_position(&mut self, id: &str, x: f64, y: f64) -> Result<bool> {
        Ok(self.update_node(id, NodePatch::position(x, y))?.is_some())
    }

    /// Delete a node. The deleted id is pruned from every other node's
    /// connection list so connection counts stay exact.
    pub fn delete_node(&mut self, id: &str) -> Result<bool> {
        self.load()?;

        if !self.nodes.iter().any(|n| n.id == id) {
            return Ok(false);
        }

        let mut nodes = self.nodes.clone();
        nodes.retain(|n| n.id != id);
        for node in &mut nodes {
            node.connections.retain(|c| c != id);
        }

        let mut stats = self.stats.clone();
        Self::refresh_stats(&mut stats, &nodes);

        self.save_record(NODES_FILE, &nodes)?;
        self.save_record(STATS_FILE, &stats)?;
        self.nodes = nodes;
        self.stats = stats;

        Ok(true)
    }

    /// Link two nodes. The link is undirected and duplicate-guarded.
    /// Returns whether a new link was formed; experience is only
    /// awarded for new links, so repeated connects are idempotent.
    pub fn connect_nodes(&mut self, id_a: &str, id_b: &str) -> Result<bool> {
        self.load()?;

        if id_a == id_b {
            return Err(StoreError::SelfConnection);
        }

        let index_a = self
            .nodes
            .iter()
            .position(|n| n.id == id_a)
            .ok_or_else(|| StoreError::NodeNotFound(id_a.to_string()))?;
        let index_b = self
            .nodes
            .iter()
            .position(|n| n.id == id_b)
            .ok_or_else(|| StoreError::NodeNotFound(id_b.to_string()))?;

        let mut nodes = self.nodes.clone();
        let mut formed = false;
        if !nodes[index_a].is_connected_to(id_b) {
            nodes[index_a].connections.push(id_b.to_string());
            formed = true;
        }
        if !nodes[index_b].is_connected_to(id_a) {
            nodes[index_b].connections.push(id_a.to_string());
            formed = true;
        }

        if !formed {
            return Ok(false);
        }

        let mut stats = self.stats.clone();
        stats.experience_points += CONNECTION_XP;
        Self::refresh_stats(&mut stats, &nodes);

        self.save_record(NODES_FILE, &nodes)?;
        self.save_record(STATS_FILE, &stats)?;
        self.nodes = nodes;
        self.stats = stats;

        Ok(true)
    }

    // ==================== Quiz Operations ====================

    /// Build a quiz with one generated question per given node and
    /// append it to the quiz history.
    pub fn generate_quiz_from_nodes(
        &mut self,
        node_ids: &[String],
        difficulty: Difficulty,
    ) -> Result<Quiz> {
        self.load()?;

        if node_ids.is_empty() {
            return Err(StoreError::EmptyCollection);
        }

        let mut selected = Vec::with_capacity(node_ids.len());
        for id in node_ids {
            let node = self
                .nodes
                .iter()
                .find(|n| &n.id == id)
                .ok_or_else(|| StoreError::NodeNotFound(id.clone()))?
                .clone();
            selected.push(node);
        }

        let mut questions = Vec::with_capacity(selected.len());
        for (index, node) in selected.iter().enumerate() {
            let other_titles: Vec<&str> = self
                .nodes
                .iter()
                .filter(|n| n.id != node.id)
                .map(|n| n.title.as_str())
                .collect();
            questions.push(generator::generate_question(
                node,
                &other_titles,
                index,
                difficulty,
                &mut self.rng,
            ));
        }

        if self.settings.quiz_settings.shuffle_questions {
            questions.shuffle(&mut self.rng);
        }

        let quiz = Quiz {
            id: Uuid::new_v4().to_string(),
            title: format!("Knowledge Quiz - {}", Utc::now().format("%Y-%m-%d")),
            questions,
            difficulty,
            time_limit: Some(self.settings.quiz_settings.default_time_limit),
            category: None,
            created_at: Utc::now(),
        };

        let mut quizzes = self.quizzes.clone();
        quizzes.push(quiz.clone());
        self.save_record(QUIZZES_FILE, &quizzes)?;
        self.quizzes = quizzes;

        Ok(quiz)
    }

    /// Build a quiz from a random sample of the collection. The sample
    /// size follows the difficulty (5/10/15), capped by how many nodes
    /// exist.
    pub fn generate_quiz(&mut self, difficulty: Difficulty) -> Result<Quiz> {
        self.load()?;

        if self.nodes.is_empty() {
            return Err(StoreError::EmptyCollection);
        }

        let mut ids: Vec<String> = self.nodes.iter().map(|n| n.id.clone()).collect();
        ids.shuffle(&mut self.rng);
        ids.truncate(difficulty.question_count());

        self.generate_quiz_from_nodes(&ids, difficulty)
    }

    /// Fold a completed quiz into the cumulative statistics and award
    /// the score-based experience bonus.
    pub fn update_quiz_stats(&mut self, outcome: QuizOutcome) -> Result<()> {
        self.load()?;

        let mut stats = self.stats.clone();
        let quiz_stats = &mut stats.quiz_stats;
        quiz_stats.total_quizzes += 1;
        quiz_stats.correct_answers += outcome.correct_answers;
        quiz_stats.total_questions += outcome.total_questions;
        quiz_stats.average_score = if quiz_stats.total_questions == 0 {
            0.0
        } else {
            quiz_stats.correct_answers as f64 / quiz_stats.total_questions as f64 * 100.0
        };
        quiz_stats.time_spent += (outcome.time_spent_secs as f64 / 60.0).round() as u32;
        *quiz_stats
            .difficulty_progress
            .entry(outcome.difficulty)
            .or_insert(0) += 1;

        let bonus = (outcome.score_percentage() / 10.0).round() as u32;
        stats.experience_points += bonus;
        Self::refresh_stats(&mut stats, &self.nodes);

        self.save_record(STATS_FILE, &stats)?;
        self.stats = stats;

        Ok(())
    }

    // ==================== Settings & AI ====================

    pub fn update_settings(&mut self, settings: AppSettings) -> Result<()> {
        self.load()?;
        self.save_record(SETTINGS_FILE, &settings)?;
        self.settings = settings;
        Ok(())
    }

    /// Generate content through the configured AI service. Fails before
    /// any network traffic when AI is disabled or no key is set.
    pub fn generate_ai_content(&mut self, prompt: &str) -> Result<String> {
        self.load()?;

        if !self.settings.ai_enabled {
            return Err(StoreError::AiDisabled);
        }
        let api_key = self.settings.api_key().ok_or(StoreError::ApiKeyMissing)?;

        let client = ContentGenerator::new(api_key)?;
        Ok(client.generate(prompt)?)
    }

    // ==================== Export ====================

    /// Snapshot of all four records with the API key stripped
    pub fn export(&mut self) -> Result<ExportBundle> {
        self.load()?;
        Ok(ExportBundle::new(
            self.nodes.clone(),
            self.stats.clone(),
            self.settings.clone(),
            self.quizzes.clone(),
        ))
    }

    // ==================== Accessors ====================

    pub fn nodes(&self) -> &[KnowledgeNode] {
        &self.nodes
    }

    pub fn get_node(&self, id: &str) -> Option<&KnowledgeNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.stats.category_count(category)
    }

    /// Recompute every statistic that derives from the node collection.
    /// Experience is left as passed in; level always follows it.
    fn refresh_stats(stats: &mut UserStats, nodes: &[KnowledgeNode]) {
        stats.total_nodes = nodes.len();
        stats.total_connections = nodes.iter().map(|n| n.connections.len()).sum::<usize>() / 2;

        let mut categories = HashMap::new();
        for node in nodes {
            *categories.entry(node.category).or_insert(0) += 1;
        }
        stats.categories = categories;

        stats.level = UserStats::level_for_xp(stats.experience_points);

        let ai_nodes = nodes.iter().filter(|n| n.ai_generated).count();
        achievements::refresh(stats, ai_nodes);
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::quiz::QuestionKind;

    use super::*;

    fn create_test_store() -> (KnowledgeStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = KnowledgeStore::with_rng(
            temp_dir.path().to_path_buf(),
            StdRng::seed_from_u64(42),
        );
        (store, temp_dir)
    }

    fn draft(title: &str, content: &str, category: Category) -> NodeDraft {
        NodeDraft::new(title, content, category)
    }

    #[test]
    fn test_add_node_updates_stats() {
        let (mut store, _dir) = create_test_store();

        let node = store
            .add_node(draft(
                "Neural Networks",
                "Neural networks are computational models. They learn patterns.",
                Category::Technology,
            ))
            .unwrap();

        assert!(!node.id.is_empty());
        assert!(node.position.x >= 50.0 && node.position.x < 450.0);
        assert!(node.position.y >= 50.0 && node.position.y < 450.0);

        let stats = store.stats();
        assert_eq!(stats.total_nodes, 1);
        assert_eq!(stats.experience_points, 10);
        assert_eq!(stats.level, 1);
        assert_eq!(store.category_count(Category::Technology), 1);
        assert_eq!(store.category_count(Category::History), 0);
    }

    #[test]
    fn test_add_node_rejects_blank_fields() {
        let (mut store, _dir) = create_test_store();

        let err = store
            .add_node(draft("   ", "Has content.", Category::Science))
            .unwrap_err();
        assert!(matches!(err, StoreError::EmptyField("title")));

        let err = store
            .add_node(draft("Has title", "  \n ", Category::Science))
            .unwrap_err();
        assert!(matches!(err, StoreError::EmptyField("content")));

        assert!(store.nodes().is_empty());
        assert_eq!(store.stats().experience_points, 0);
    }

    #[test]
    fn test_add_node_trims_fields() {
        let (mut store, _dir) = create_test_store();

        let node = store
            .add_node(draft("  Entropy  ", "  A measure of disorder.  ", Category::Science))
            .unwrap();

        assert_eq!(node.title, "Entropy");
        assert_eq!(node.content, "A measure of disorder.");
    }

    #[test]
    fn test_ten_nodes_reach_level_two() {
        let (mut store, _dir) = create_test_store();

        for i in 0..10 {
            store
                .add_node(draft(
                    &format!("Topic {}", i),
                    "Some content.",
                    Category::Science,
                ))
                .unwrap();
        }

        let stats = store.stats();
        assert_eq!(stats.total_nodes, 10);
        assert_eq!(stats.experience_points, 100);
        assert_eq!(stats.level, 2);
    }

    #[test]
    fn test_connect_nodes_is_idempotent() {
        let (mut store, _dir) = create_test_store();
        let a = store
            .add_node(draft("A", "First.", Category::Science))
            .unwrap();
        let b = store
            .add_node(draft("B", "Second.", Category::Arts))
            .unwrap();

        assert!(store.connect_nodes(&a.id, &b.id).unwrap());
        assert_eq!(store.stats().experience_points, 25);
        assert_eq!(store.stats().total_connections, 1);

        // Reversed repeat forms nothing and awards nothing
        assert!(!store.connect_nodes(&b.id, &a.id).unwrap());
        assert_eq!(store.stats().experience_points, 25);
        assert_eq!(store.stats().total_connections, 1);

        let a = store.get_node(&a.id).unwrap();
        let b = store.get_node(&b.id).unwrap();
        assert_eq!(a.connections.iter().filter(|c| **c == b.id).count(), 1);
        assert_eq!(b.connections.iter().filter(|c| **c == a.id).count(), 1);
    }

    #[test]
    fn test_connect_errors() {
        let (mut store, _dir) = create_test_store();
        let a = store
            .add_node(draft("A", "First.", Category::Science))
            .unwrap();

        let err = store.connect_nodes(&a.id, "missing").unwrap_err();
        assert!(matches!(err, StoreError::NodeNotFound(_)));

        let err = store.connect_nodes(&a.id, &a.id).unwrap_err();
        assert!(matches!(err, StoreError::SelfConnection));
    }

    #[test]
    fn test_delete_node_prunes_connections() {
        let (mut store, _dir) = create_test_store();
        let a = store
            .add_node(draft("A", "First.", Category::Science))
            .unwrap();
        let b = store
            .add_node(draft("B", "Second.", Category::Science))
            .unwrap();
        let c = store
            .add_node(draft("C", "Third.", Category::Arts))
            .unwrap();
        store.connect_nodes(&a.id, &b.id).unwrap();
        store.connect_nodes(&a.id, &c.id).unwrap();
        let xp_before = store.stats().experience_points;

        assert!(store.delete_node(&a.id).unwrap());

        assert_eq!(store.nodes().len(), 2);
        assert!(store.get_node(&a.id).is_none());
        assert!(store.get_node(&b.id).unwrap().connections.is_empty());
        assert!(store.get_node(&c.id).unwrap().connections.is_empty());

        let stats = store.stats();
        assert_eq!(stats.total_connections, 0);
        assert_eq!(store.category_count(Category::Science), 1);
        // Deleting does not claw back experience
        assert_eq!(stats.experience_points, xp_before);
    }

    #[test]
    fn test_delete_unknown_node() {
        let (mut store, _dir) = create_test_store();
        assert!(!store.delete_node("missing").unwrap());
    }

    #[test]
    fn test_update_node_applies_patch() {
        let (mut store, _dir) = create_test_store();
        let node = store
            .add_node(draft("Draft", "Text.", Category::Science))
            .unwrap();

        let patch = NodePatch {
            title: Some("Final".to_string()),
            category: Some(Category::History),
            level: Some(3),
            ..NodePatch::default()
        };
        let updated = store.update_node(&node.id, patch).unwrap().unwrap();

        assert_eq!(updated.title, "Final");
        assert_eq!(updated.category, Category::History);
        assert_eq!(updated.level, 3);
        assert_eq!(updated.content, "Text.");
        assert_eq!(updated.created_at, node.created_at);

        // Category counts follow the collection
        assert_eq!(store.category_count(Category::Science), 0);
        assert_eq!(store.category_count(Category::History), 1);
    }

    #[test]
    fn test_update_unknown_node_is_noop() {
        let (mut store, _dir) = create_test_store();
        let result = store
            .update_node("missing", NodePatch::position(1.0, 2.0))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_update_node_position() {
        let (mut store, _dir) = create_test_store();
        let node = store
            .add_node(draft("A", "First.", Category::Science))
            .unwrap();

        assert!(store.update_node_position(&node.id, 320.0, 17.5).unwrap());
        let moved = store.get_node(&node.id).unwrap();
        assert_eq!(moved.position, Position::new(320.0, 17.5));

        assert!(!store.update_node_position("missing", 0.0, 0.0).unwrap());
    }

    #[test]
    fn test_round_trip_reload() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_path_buf();

        let (a_id, b_id, nodes_before) = {
            let mut store = KnowledgeStore::with_rng(dir.clone(), StdRng::seed_from_u64(1));
            let a = store
                .add_node(
                    draft("Persistence", "Data outlives the process.", Category::Technology)
                        .with_tags(vec!["storage".to_string()])
                        .with_source("notes"),
                )
                .unwrap();
            let b = store
                .add_node(draft("Memory", "Volatile state.", Category::Science))
                .unwrap();
            store.connect_nodes(&a.id, &b.id).unwrap();
            (a.id.clone(), b.id.clone(), store.nodes().to_vec())
        };

        let mut reloaded = KnowledgeStore::new(dir);
        reloaded.load().unwrap();

        assert_eq!(reloaded.nodes(), nodes_before.as_slice());
        assert!(reloaded.get_node(&a_id).unwrap().is_connected_to(&b_id));
        assert_eq!(reloaded.stats().total_nodes, 2);
        assert_eq!(reloaded.stats().total_connections, 1);
        assert_eq!(reloaded.stats().experience_points, 25);
    }

    #[test]
    fn test_load_is_fail_soft_per_record() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_path_buf();

        {
            let mut store = KnowledgeStore::with_rng(dir.clone(), StdRng::seed_from_u64(2));
            store
                .add_node(draft("Kept", "Survives a bad stats file.", Category::Science))
                .unwrap();
        }
        fs::write(dir.join(STATS_FILE), "{not json").unwrap();

        let mut store = KnowledgeStore::new(dir);
        store.load().unwrap();

        assert_eq!(store.nodes().len(), 1);
        assert_eq!(store.stats().experience_points, 0);
        assert_eq!(store.stats().level, 1);
    }

    #[test]
    fn test_failed_write_leaves_cache_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        // Data dir nested under a regular file cannot be created
        let mut store = KnowledgeStore::with_rng(
            blocker.join("data"),
            StdRng::seed_from_u64(3),
        );

        assert!(store
            .add_node(draft("A", "First.", Category::Science))
            .is_err());
        assert!(store.nodes().is_empty());
        assert_eq!(store.stats().experience_points, 0);
    }

    #[test]
    fn test_generate_quiz_from_nodes() {
        let (mut store, _dir) = create_test_store();
        let mut ids = Vec::new();
        for i in 0..4 {
            let node = store
                .add_node(draft(
                    &format!("Topic {}", i),
                    "First sentence. Second sentence.",
                    Category::Science,
                ))
                .unwrap();
            ids.push(node.id);
        }

        let quiz = store
            .generate_quiz_from_nodes(&ids[0..2], Difficulty::Easy)
            .unwrap();

        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.difficulty, Difficulty::Easy);
        assert_eq!(quiz.time_limit, Some(300));
        assert!(quiz.title.starts_with("Knowledge Quiz - "));

        let mut question_nodes: Vec<&str> =
            quiz.questions.iter().map(|q| q.node_id.as_str()).collect();
        question_nodes.sort();
        let mut expected: Vec<&str> = ids[0..2].iter().map(String::as_str).collect();
        expected.sort();
        assert_eq!(question_nodes, expected);

        // Appended to the persisted history
        assert_eq!(store.quizzes().len(), 1);
        assert_eq!(store.quizzes()[0].id, quiz.id);
    }

    #[test]
    fn test_generate_quiz_unknown_node() {
        let (mut store, _dir) = create_test_store();
        let err = store
            .generate_quiz_from_nodes(&["missing".to_string()], Difficulty::Easy)
            .unwrap_err();
        assert!(matches!(err, StoreError::NodeNotFound(_)));
    }

    #[test]
    fn test_generate_quiz_sample_sizes() {
        let (mut store, _dir) = create_test_store();
        for i in 0..12 {
            store
                .add_node(draft(
                    &format!("Topic {}", i),
                    "Some content here.",
                    Category::Science,
                ))
                .unwrap();
        }

        let easy = store.generate_quiz(Difficulty::Easy).unwrap();
        assert_eq!(easy.questions.len(), 5);

        let medium = store.generate_quiz(Difficulty::Medium).unwrap();
        assert_eq!(medium.questions.len(), 10);

        // Hard wants 15 but only 12 nodes exist
        let hard = store.generate_quiz(Difficulty::Hard).unwrap();
        assert_eq!(hard.questions.len(), 12);
    }

    #[test]
    fn test_generate_quiz_empty_collection() {
        let (mut store, _dir) = create_test_store();
        let err = store.generate_quiz(Difficulty::Easy).unwrap_err();
        assert!(matches!(err, StoreError::EmptyCollection));
    }

    #[test]
    fn test_quiz_generation_is_reproducible_with_seed() {
        let build = |seed: u64| {
            let temp_dir = TempDir::new().unwrap();
            let mut store = KnowledgeStore::with_rng(
                temp_dir.path().to_path_buf(),
                StdRng::seed_from_u64(seed),
            );
            let mut ids = Vec::new();
            for (title, content) in [
                ("Cats", "Cats are mammals. They are popular pets."),
                ("Dogs", "Dogs are loyal. They bark."),
                ("Birds", "Birds can fly. They have feathers."),
            ] {
                ids.push(store.add_node(draft(title, content, Category::Science)).unwrap().id);
            }
            let quiz = store
                .generate_quiz_from_nodes(&ids, Difficulty::Medium)
                .unwrap();
            (quiz, temp_dir)
        };

        let (quiz_a, _dir_a) = build(7);
        let (quiz_b, _dir_b) = build(7);

        let fingerprint = |quiz: &Quiz| -> Vec<(QuestionKind, String, String, Option<Vec<String>>)> {
            quiz.questions
                .iter()
                .map(|q| {
                    (
                        q.kind,
                        q.question.clone(),
                        q.correct_answer.clone(),
                        q.options.clone(),
                    )
                })
                .collect()
        };

        assert_eq!(fingerprint(&quiz_a), fingerprint(&quiz_b));
    }

    #[test]
    fn test_update_quiz_stats_math() {
        let (mut store, _dir) = create_test_store();

        store
            .update_quiz_stats(QuizOutcome {
                quiz_id: "quiz-1".to_string(),
                correct_answers: 4,
                total_questions: 5,
                time_spent_secs: 120,
                difficulty: Difficulty::Easy,
            })
            .unwrap();

        let quiz_stats = &store.stats().quiz_stats;
        assert_eq!(quiz_stats.total_quizzes, 1);
        assert_eq!(quiz_stats.correct_answers, 4);
        assert_eq!(quiz_stats.total_questions, 5);
        assert_eq!(quiz_stats.average_score, 80.0);
        assert_eq!(quiz_stats.time_spent, 2);
        assert_eq!(quiz_stats.difficulty_progress.get(&Difficulty::Easy), Some(&1));
        // 80% scores an 8 XP bonus
        assert_eq!(store.stats().experience_points, 8);

        store
            .update_quiz_stats(QuizOutcome {
                quiz_id: "quiz-2".to_string(),
                correct_answers: 1,
                total_questions: 5,
                time_spent_secs: 30,
                difficulty: Difficulty::Hard,
            })
            .unwrap();

        let quiz_stats = &store.stats().quiz_stats;
        assert_eq!(quiz_stats.total_quizzes, 2);
        assert_eq!(quiz_stats.average_score, 50.0);
        assert_eq!(quiz_stats.time_spent, 3);
        assert_eq!(quiz_stats.difficulty_progress.get(&Difficulty::Hard), Some(&1));
        // 20% scores a 2 XP bonus
        assert_eq!(store.stats().experience_points, 10);
    }

    #[test]
    fn test_ai_guards_fire_before_any_network() {
        let (mut store, _dir) = create_test_store();

        let err = store.generate_ai_content("Explain entropy").unwrap_err();
        assert!(matches!(err, StoreError::AiDisabled));

        let mut settings = store.settings().clone();
        settings.ai_enabled = true;
        store.update_settings(settings).unwrap();

        let err = store.generate_ai_content("Explain entropy").unwrap_err();
        assert!(matches!(err, StoreError::ApiKeyMissing));
    }

    #[test]
    fn test_settings_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_path_buf();

        {
            let mut store = KnowledgeStore::new(dir.clone());
            let mut settings = AppSettings::default();
            settings.ai_enabled = true;
            settings.openai_api_key = Some("sk-test".to_string());
            settings.quiz_settings.default_time_limit = 600;
            store.update_settings(settings).unwrap();
        }

        let mut store = KnowledgeStore::new(dir);
        store.load().unwrap();

        assert!(store.settings().ai_enabled);
        assert_eq!(store.settings().api_key(), Some("sk-test"));
        assert_eq!(store.settings().quiz_settings.default_time_limit, 600);
    }

    #[test]
    fn test_export_redacts_api_key() {
        let (mut store, _dir) = create_test_store();
        store
            .add_node(draft("A", "First.", Category::Science))
            .unwrap();
        let mut settings = store.settings().clone();
        settings.openai_api_key = Some("sk-secret".to_string());
        store.update_settings(settings).unwrap();

        let bundle = store.export().unwrap();

        assert_eq!(bundle.nodes.len(), 1);
        assert_eq!(bundle.stats.total_nodes, 1);
        assert!(bundle.settings.openai_api_key.is_none());
        assert!(!bundle.to_json().unwrap().contains("sk-secret"));

        // The store itself keeps the key
        assert_eq!(store.settings().api_key(), Some("sk-secret"));
    }

    #[test]
    fn test_first_node_achievement_unlocks_through_store() {
        let (mut store, _dir) = create_test_store();
        store
            .add_node(draft("A", "First.", Category::Science))
            .unwrap();

        let first = store
            .stats()
            .achievements
            .iter()
            .find(|a| a.id == "first-node")
            .unwrap();
        assert!(first.is_unlocked());
    }
}
