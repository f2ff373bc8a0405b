use anyhow::Result;

use mindweb_lib::stats::CONNECTION_XP;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &mut App, a: &str, b: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let node_a = app.find_node(a)?;
    let node_b = app.find_node(b)?;

    let formed = app.store.connect_nodes(&node_a.id, &node_b.id)?;
    let stats = app.store.stats();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "a": { "id": node_a.id, "title": node_a.title },
                "b": { "id": node_b.id, "title": node_b.title },
                "created": formed,
                "totalConnections": stats.total_connections,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if formed {
                println!("Linked \"{}\" \u{2194} \"{}\"", node_a.title, node_b.title);
                println!(
                    "  {} (level {}, {} XP)",
                    terminal::paint(&format!("+{} XP", CONNECTION_XP), terminal::Color::GREEN, use_color),
                    stats.level,
                    stats.experience_points,
                );
            } else {
                println!("\"{}\" and \"{}\" are already connected.", node_a.title, node_b.title);
            }
        }
    }

    Ok(())
}
