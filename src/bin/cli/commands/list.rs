use anyhow::Result;

use mindweb_lib::knowledge::{Category, KnowledgeNode};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &App,
    category: Option<&str>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let filter = match category {
        Some(raw) => Some(raw.parse::<Category>()?),
        None => None,
    };

    let nodes: Vec<&KnowledgeNode> = app.store.nodes().iter()
        .filter(|n| filter.map_or(true, |c| n.category == c))
        .collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&nodes)?);
        }
        OutputFormat::Plain => {
            if nodes.is_empty() {
                println!("No nodes found.");
                return Ok(());
            }

            let max_title_len = nodes.iter().map(|n| n.title.len()).max().unwrap_or(5).max(5);

            for node in &nodes {
                let swatch = terminal::swatch(node.display_color(), use_color);
                let links = match node.connections.len() {
                    0 => String::from("unlinked"),
                    1 => String::from("1 link"),
                    n => format!("{} links", n),
                };
                println!(
                    "{} {:<width$}  {:<12} {}",
                    swatch,
                    node.title,
                    node.category.name(),
                    terminal::paint(&links, terminal::Color::DIM, use_color),
                    width = max_title_len,
                );
            }

            println!("\n{} nodes total", nodes.len());
        }
    }

    Ok(())
}
