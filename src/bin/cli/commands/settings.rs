use anyhow::{Context, Result, bail};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

const KEYS: &str = "openai-api-key, ai-enabled, notifications, dark-mode, auto-save, \
    time-limit, show-explanations, shuffle-questions, difficulty-progression";

pub fn run_show(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let settings = app.store.settings();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(settings)?);
        }
        OutputFormat::Plain => {
            // The key itself stays out of terminal output
            let key_status = if settings.api_key().is_some() { "set" } else { "not set" };

            println!("AI enabled:      {}", settings.ai_enabled);
            println!("OpenAI API key:  {}", key_status);
            println!("Notifications:   {}", settings.notifications);
            println!("Dark mode:       {}", settings.dark_mode);
            println!("Auto-save:       {}", settings.auto_save);

            let quiz = &settings.quiz_settings;
            println!("\n{}", terminal::paint("Quiz defaults:", terminal::Color::BOLD, use_color));
            println!("  Time limit:             {}s", quiz.default_time_limit);
            println!("  Show explanations:      {}", quiz.show_explanations);
            println!("  Shuffle questions:      {}", quiz.shuffle_questions);
            println!("  Difficulty progression: {}", quiz.difficulty_progression);
        }
    }

    Ok(())
}

pub fn run_set(
    app: &mut App,
    key: &str,
    value: &str,
    format: &OutputFormat,
    _use_color: bool,
) -> Result<()> {
    let mut settings = app.store.settings().clone();

    match key {
        "openai-api-key" => settings.openai_api_key = Some(value.to_string()),
        "ai-enabled" => settings.ai_enabled = parse_bool(value)?,
        "notifications" => settings.notifications = parse_bool(value)?,
        "dark-mode" => settings.dark_mode = parse_bool(value)?,
        "auto-save" => settings.auto_save = parse_bool(value)?,
        "time-limit" => {
            settings.quiz_settings.default_time_limit =
                value.parse().context("time-limit expects a number of seconds")?;
        }
        "show-explanations" => settings.quiz_settings.show_explanations = parse_bool(value)?,
        "shuffle-questions" => settings.quiz_settings.shuffle_questions = parse_bool(value)?,
        "difficulty-progression" => {
            settings.quiz_settings.difficulty_progression = parse_bool(value)?;
        }
        _ => bail!("Unknown setting '{}'. Keys: {}", key, KEYS),
    }

    app.store.update_settings(settings)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "key": key, "updated": true });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Updated {}.", key);
        }
    }

    Ok(())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => bail!("Expected true or false, got '{}'", other),
    }
}
