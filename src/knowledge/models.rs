//! Data models for knowledge nodes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// 2D coordinate on the knowledge map canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Kind of media attached to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

/// A media file captured alongside a node. Stored as-is, never processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttachment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub uri: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// A single captured unit of knowledge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeNode {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Ids of linked nodes. Links are undirected: A listing B implies
    /// B listing A.
    #[serde(default)]
    pub connections: Vec<String>,
    pub position: Position,
    /// Hex color override; the category color applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Importance/depth marker, user-assigned
    #[serde(default = "default_node_level")]
    pub level: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaAttachment>,
    #[serde(default)]
    pub ai_generated: bool,
}

fn default_node_level() -> u32 {
    1
}

impl KnowledgeNode {
    pub fn new(title: String, content: String, category: Category, position: Position) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            category,
            tags: Vec::new(),
            source: None,
            created_at: Utc::now(),
            connections: Vec::new(),
            position,
            color: None,
            level: default_node_level(),
            media: Vec::new(),
            ai_generated: false,
        }
    }

    /// Effective display color: the override if set, otherwise the
    /// category color.
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or_else(|| self.category.color())
    }

    pub fn is_connected_to(&self, other_id: &str) -> bool {
        self.connections.iter().any(|c| c == other_id)
    }
}

/// Caller-supplied fields for creating a node
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDraft {
    pub title: String,
    pub content: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub media: Vec<MediaAttachment>,
    #[serde(default)]
    pub ai_generated: bool,
}

impl NodeDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category,
            tags: Vec::new(),
            source: None,
            color: None,
            media: Vec::new(),
            ai_generated: false,
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Mutable node fields, applied field-by-field on update
///
/// `id`, `createdAt`, and `connections` are deliberately absent:
/// identity and link lists change only through their own operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
    pub tags: Option<Vec<String>>,
    pub source: Option<String>,
    pub position: Option<Position>,
    pub color: Option<String>,
    pub level: Option<u32>,
    pub media: Option<Vec<MediaAttachment>>,
    pub ai_generated: Option<bool>,
}

impl NodePatch {
    /// A patch that only moves the node
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            position: Some(Position::new(x, y)),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.source.is_none()
            && self.position.is_none()
            && self.color.is_none()
            && self.level.is_none()
            && self.media.is_none()
            && self.ai_generated.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_defaults() {
        let node = KnowledgeNode::new(
            "Rust".to_string(),
            "A systems language.".to_string(),
            Category::Technology,
            Position::new(100.0, 200.0),
        );

        assert_eq!(node.level, 1);
        assert!(node.connections.is_empty());
        assert!(node.tags.is_empty());
        assert!(!node.ai_generated);
        assert_eq!(node.display_color(), "#8b5cf6");
    }

    #[test]
    fn test_display_color_override() {
        let mut node = KnowledgeNode::new(
            "A".to_string(),
            "B.".to_string(),
            Category::Science,
            Position::new(0.0, 0.0),
        );
        node.color = Some("#123456".to_string());
        assert_eq!(node.display_color(), "#123456");
    }

    #[test]
    fn test_node_roundtrip_camel_case() {
        let node = KnowledgeNode::new(
            "Neural Networks".to_string(),
            "Neural networks are computational models.".to_string(),
            Category::Technology,
            Position::new(50.0, 75.5),
        );

        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"aiGenerated\""));
        assert!(json.contains("\"category\":\"technology\""));

        let back: KnowledgeNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, node.id);
        assert_eq!(back.created_at, node.created_at);
        assert_eq!(back.position, node.position);
    }

    #[test]
    fn test_node_parses_without_optional_fields() {
        // Records written by older builds carry only the original fields
        let json = r#"{
            "id": "1734000000000",
            "title": "Stoicism",
            "content": "A school of philosophy.",
            "category": "philosophy",
            "createdAt": "2025-01-15T10:30:00Z",
            "position": {"x": 120.0, "y": 80.0}
        }"#;

        let node: KnowledgeNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.level, 1);
        assert!(node.connections.is_empty());
        assert!(node.media.is_empty());
        assert!(!node.ai_generated);
        assert!(node.source.is_none());
    }

    #[test]
    fn test_empty_patch() {
        assert!(NodePatch::default().is_empty());
        assert!(!NodePatch::position(1.0, 2.0).is_empty());
    }
}
