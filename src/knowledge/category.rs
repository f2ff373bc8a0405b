//! Fixed category set for knowledge nodes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Topical category of a knowledge node
///
/// The set is fixed; each category carries a display name and a color
/// used wherever the node itself has no color override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Science,
    Technology,
    History,
    Philosophy,
    Literature,
    Arts,
    Mathematics,
    Health,
    Business,
    Personal,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 10] = [
        Category::Science,
        Category::Technology,
        Category::History,
        Category::Philosophy,
        Category::Literature,
        Category::Arts,
        Category::Mathematics,
        Category::Health,
        Category::Business,
        Category::Personal,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Science => "Science",
            Category::Technology => "Technology",
            Category::History => "History",
            Category::Philosophy => "Philosophy",
            Category::Literature => "Literature",
            Category::Arts => "Arts",
            Category::Mathematics => "Mathematics",
            Category::Health => "Health",
            Category::Business => "Business",
            Category::Personal => "Personal",
        }
    }

    /// Default hex color for nodes in this category
    pub fn color(&self) -> &'static str {
        match self {
            Category::Science => "#3b82f6",
            Category::Technology => "#8b5cf6",
            Category::History => "#f59e0b",
            Category::Philosophy => "#10b981",
            Category::Literature => "#ef4444",
            Category::Arts => "#f97316",
            Category::Mathematics => "#06b6d4",
            Category::Health => "#84cc16",
            Category::Business => "#6366f1",
            Category::Personal => "#ec4899",
        }
    }

    /// Lowercase identifier, as stored on disk
    pub fn id(&self) -> &'static str {
        match self {
            Category::Science => "science",
            Category::Technology => "technology",
            Category::History => "history",
            Category::Philosophy => "philosophy",
            Category::Literature => "literature",
            Category::Arts => "arts",
            Category::Mathematics => "mathematics",
            Category::Health => "health",
            Category::Business => "business",
            Category::Personal => "personal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.id() == s.to_lowercase())
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("science".parse::<Category>().unwrap(), Category::Science);
        assert_eq!("Technology".parse::<Category>().unwrap(), Category::Technology);
        assert!("cooking".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Mathematics).unwrap();
        assert_eq!(json, "\"mathematics\"");
        let back: Category = serde_json::from_str("\"personal\"").unwrap();
        assert_eq!(back, Category::Personal);
    }

    #[test]
    fn test_every_category_has_distinct_color() {
        let mut colors: Vec<&str> = Category::ALL.iter().map(|c| c.color()).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), Category::ALL.len());
    }
}
