use std::path::Path;

use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    out: Option<&Path>,
    format: &OutputFormat,
    _use_color: bool,
) -> Result<()> {
    let bundle = app.store.export()?;
    let json = bundle.to_json()?;

    match out {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            match format {
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "path": path.display().to_string(),
                        "nodes": bundle.nodes.len(),
                        "quizzes": bundle.quizzes.len(),
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Plain => {
                    println!(
                        "Exported {} nodes and {} quizzes to {}",
                        bundle.nodes.len(),
                        bundle.quizzes.len(),
                        path.display(),
                    );
                }
            }
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
