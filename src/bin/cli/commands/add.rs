use anyhow::Result;

use mindweb_lib::knowledge::{Category, NodeDraft};
use mindweb_lib::stats::NODE_XP;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    title: &str,
    content: &str,
    category: &str,
    tags: Option<&str>,
    source: Option<&str>,
    color: Option<&str>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let category: Category = category.parse()?;

    let mut draft = NodeDraft::new(title, content, category);
    if let Some(tag_str) = tags {
        draft = draft.with_tags(
            tag_str.split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        );
    }
    if let Some(source) = source {
        draft = draft.with_source(source);
    }
    if let Some(color) = color {
        draft = draft.with_color(color);
    }

    let node = app.store.add_node(draft)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&node)?);
        }
        OutputFormat::Plain => {
            let swatch = terminal::swatch(node.display_color(), use_color);
            println!("{} Created node \"{}\" in {}", swatch, node.title, node.category.name());
            if !node.tags.is_empty() {
                println!("  Tags: {}", node.tags.iter().map(|t| format!("#{}", t)).collect::<Vec<_>>().join(" "));
            }
            println!("  ID: {}", node.id);

            let stats = app.store.stats();
            println!(
                "  {} (level {}, {} XP)",
                terminal::paint(&format!("+{} XP", NODE_XP), terminal::Color::GREEN, use_color),
                stats.level,
                stats.experience_points,
            );
        }
    }

    Ok(())
}
