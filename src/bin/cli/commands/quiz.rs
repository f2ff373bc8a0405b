use anyhow::Result;

use mindweb_lib::quiz::{Difficulty, Quiz, QuizSession};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    difficulty: &str,
    nodes: Option<&str>,
    print_only: bool,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let difficulty: Difficulty = difficulty.parse()?;

    let quiz = match nodes {
        Some(titles) => {
            let mut ids = Vec::new();
            for raw in titles.split(',') {
                let title = raw.trim();
                if title.is_empty() {
                    continue;
                }
                ids.push(app.find_node(title)?.id);
            }
            app.store.generate_quiz_from_nodes(&ids, difficulty)?
        }
        None => app.store.generate_quiz(difficulty)?,
    };

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&quiz)?);
        return Ok(());
    }

    if print_only {
        print_quiz(&quiz, use_color);
        return Ok(());
    }

    take_quiz(app, quiz, use_color)
}

/// Print questions without answers, for studying away from the terminal
fn print_quiz(quiz: &Quiz, use_color: bool) {
    println!("{}", terminal::paint(&quiz.title, terminal::Color::BOLD, use_color));
    println!();

    for (i, question) in quiz.questions.iter().enumerate() {
        println!("{}. {}", i + 1, question.question);
        if let Some(options) = &question.options {
            for (j, option) in options.iter().enumerate() {
                println!("   {}) {}", j + 1, option);
            }
        }
        println!();
    }
}

/// Run the quiz on stdin and fold the outcome into the statistics
fn take_quiz(app: &mut App, quiz: Quiz, use_color: bool) -> Result<()> {
    println!("{}", terminal::paint(&quiz.title, terminal::Color::BOLD, use_color));
    println!(
        "{} questions, {} difficulty{}",
        quiz.questions.len(),
        quiz.difficulty,
        quiz.time_limit
            .map(|secs| format!(", {} suggested", format_time_limit(secs)))
            .unwrap_or_default(),
    );
    println!("Answer with the option number or the text itself.\n");

    let show_explanations = app.store.settings().quiz_settings.show_explanations;
    let mut session = QuizSession::new(quiz);
    let stdin = std::io::stdin();

    while let Some(question) = session.current_question().cloned() {
        println!(
            "{} {}",
            terminal::paint(
                &format!("[{}/{}]", session.question_number(), session.total_questions()),
                terminal::Color::CYAN,
                use_color,
            ),
            question.question,
        );
        if let Some(options) = &question.options {
            for (i, option) in options.iter().enumerate() {
                println!("  {}) {}", i + 1, option);
            }
        }

        print!("> ");
        std::io::Write::flush(&mut std::io::stdout())?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // EOF abandons the session; nothing is recorded
            println!("\nQuiz abandoned.");
            return Ok(());
        }
        let input = line.trim();

        // A number picks from the options list
        let answer = match &question.options {
            Some(options) => match input.parse::<usize>() {
                Ok(n) if n >= 1 && n <= options.len() => options[n - 1].clone(),
                _ => input.to_string(),
            },
            None => input.to_string(),
        };

        let correct = session.answer(&answer).unwrap_or(false);
        if correct {
            println!("{}", terminal::paint("Correct!", terminal::Color::GREEN, use_color));
        } else {
            println!(
                "{} The answer was: {}",
                terminal::paint("Incorrect.", terminal::Color::RED, use_color),
                question.correct_answer,
            );
        }
        if show_explanations {
            if let Some(ref explanation) = question.explanation {
                println!("{}", terminal::paint(explanation, terminal::Color::DIM, use_color));
            }
        }
        println!();
    }

    let outcome = session.outcome();
    let score = outcome.score_percentage();
    let bonus = (score / 10.0).round() as u32;
    println!(
        "Score: {}/{} ({:.0}%)",
        outcome.correct_answers,
        outcome.total_questions,
        score,
    );

    app.store.update_quiz_stats(outcome)?;
    let stats = app.store.stats();
    println!(
        "{} (level {}, {} XP)",
        terminal::paint(&format!("+{} XP", bonus), terminal::Color::GREEN, use_color),
        stats.level,
        stats.experience_points,
    );

    Ok(())
}

fn format_time_limit(secs: u32) -> String {
    if secs % 60 == 0 {
        format!("{} min", secs / 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
