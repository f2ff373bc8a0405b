use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    title: &str,
    x: f64,
    y: f64,
    format: &OutputFormat,
    _use_color: bool,
) -> Result<()> {
    let node = app.find_node(title)?;
    app.store.update_node_position(&node.id, x, y)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": node.id,
                "title": node.title,
                "position": { "x": x, "y": y },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Moved \"{}\" to ({:.0}, {:.0}).", node.title, x, y);
        }
    }

    Ok(())
}
