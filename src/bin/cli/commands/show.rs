use anyhow::Result;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, title: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let node = app.find_node(title)?;

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&node)?);
        return Ok(());
    }

    let swatch = terminal::swatch(node.display_color(), use_color);
    println!(
        "{} {}",
        swatch,
        terminal::paint(&node.title, terminal::Color::BOLD, use_color),
    );
    println!(
        "{} \u{00b7} level {} \u{00b7} added {}",
        node.category.name(),
        node.level,
        node.created_at.format("%Y-%m-%d"),
    );

    if !node.tags.is_empty() {
        let tags = node.tags.iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", terminal::paint(&tags, terminal::Color::DIM, use_color));
    }
    if let Some(ref source) = node.source {
        println!("Source: {}", source);
    }
    if node.ai_generated {
        println!("{}", terminal::paint("AI-generated", terminal::Color::MAGENTA, use_color));
    }

    println!();
    for line in terminal::wrap_lines(&node.content, "", 80) {
        println!("{}", line);
    }

    if !node.media.is_empty() {
        println!();
        for attachment in &node.media {
            println!("[{:?}: {}]", attachment.kind, attachment.name);
        }
    }

    println!();
    let connected = app.connected_titles(&node);
    if connected.is_empty() {
        println!("{}", terminal::paint("No connections yet.", terminal::Color::DIM, use_color));
    } else {
        println!("Connected to:");
        for title in connected {
            println!("  \u{2194} {}", title);
        }
    }

    println!(
        "\nPosition: ({:.0}, {:.0})  ID: {}",
        node.position.x, node.position.y, node.id,
    );

    Ok(())
}
