use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use mindweb_lib::knowledge::KnowledgeNode;
use mindweb_lib::store::KnowledgeStore;

/// Shared application state for CLI commands
pub struct App {
    pub store: KnowledgeStore,
}

impl App {
    /// Initialize from the given or default data directory
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => KnowledgeStore::default_data_dir()
                .context("Failed to get data directory")?,
        };

        let mut store = KnowledgeStore::new(data_dir);
        store.load().context("Failed to load knowledge base")?;

        Ok(Self { store })
    }

    /// Find a node by title (case-insensitive exact match, then prefix match)
    pub fn find_node(&self, title: &str) -> Result<KnowledgeNode> {
        let nodes = self.store.nodes();
        let title_lower = title.to_lowercase();

        // Exact match first
        if let Some(node) = nodes.iter().find(|n| n.title.to_lowercase() == title_lower) {
            return Ok(node.clone());
        }

        // Prefix match
        let matches: Vec<&KnowledgeNode> = nodes.iter()
            .filter(|n| n.title.to_lowercase().starts_with(&title_lower))
            .collect();

        match matches.len() {
            0 => bail!("No node matching '{}'. Available nodes:\n{}", title,
                nodes.iter().map(|n| format!("  - {}", n.title)).collect::<Vec<_>>().join("\n")),
            1 => Ok(matches[0].clone()),
            _ => bail!("Ambiguous node title '{}'. Matches:\n{}", title,
                matches.iter().map(|n| format!("  - {}", n.title)).collect::<Vec<_>>().join("\n")),
        }
    }

    /// Titles of the nodes connected to the given node
    pub fn connected_titles(&self, node: &KnowledgeNode) -> Vec<String> {
        node.connections.iter()
            .filter_map(|id| self.store.get_node(id))
            .map(|n| n.title.clone())
            .collect()
    }
}
