use anyhow::{Result, ensure};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, prompt: &str, format: &OutputFormat, _use_color: bool) -> Result<()> {
    ensure!(!prompt.trim().is_empty(), "Prompt is empty");

    let content = app.store.generate_ai_content(prompt)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "prompt": prompt,
                "content": content,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", content);
        }
    }

    Ok(())
}
