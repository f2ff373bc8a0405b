use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, title: &str, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let node = app.find_node(title)?;
    let deleted = app.store.delete_node(&node.id)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": node.id,
                "title": node.title,
                "deleted": deleted,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Deleted \"{}\".", node.title);
            if !node.connections.is_empty() {
                println!("  Removed {} connection(s).", node.connections.len());
            }
        }
    }

    Ok(())
}
