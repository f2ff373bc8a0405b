use anyhow::Result;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let quizzes = app.store.quizzes();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&quizzes)?);
        }
        OutputFormat::Plain => {
            if quizzes.is_empty() {
                println!("No quizzes taken yet.");
                return Ok(());
            }

            for quiz in quizzes {
                println!(
                    "{}  {} ({} questions, {})",
                    terminal::paint(
                        &quiz.created_at.format("%Y-%m-%d %H:%M").to_string(),
                        terminal::Color::DIM,
                        use_color,
                    ),
                    quiz.title,
                    quiz.questions.len(),
                    quiz.difficulty,
                );
            }

            let quiz_stats = &app.store.stats().quiz_stats;
            if quiz_stats.total_quizzes > 0 {
                println!(
                    "\n{} completed, average score {:.1}%",
                    quiz_stats.total_quizzes,
                    quiz_stats.average_score,
                );
            }
        }
    }

    Ok(())
}
