use anyhow::Result;

use mindweb_lib::stats::XP_PER_LEVEL;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let stats = app.store.stats();

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    let progress = stats.current_level_progress();
    println!(
        "{}  {}",
        terminal::paint(&format!("Level {}", stats.level), terminal::Color::BOLD, use_color),
        terminal::paint(&format!("{} XP", stats.experience_points), terminal::Color::DIM, use_color),
    );
    println!(
        "{} {}/{} to level {}",
        terminal::progress_bar(progress, XP_PER_LEVEL, 20),
        progress,
        XP_PER_LEVEL,
        stats.level + 1,
    );

    println!(
        "\nNodes: {}   Connections: {}   Quizzes: {}",
        stats.total_nodes,
        stats.total_connections,
        stats.quiz_stats.total_quizzes,
    );

    if !stats.categories.is_empty() {
        println!("\nCategories:");
        let mut categories: Vec<_> = stats.categories.iter().collect();
        categories.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.name().cmp(b.0.name())));
        let max_name_len = categories.iter().map(|(c, _)| c.name().len()).max().unwrap_or(0);

        for (category, count) in categories {
            println!(
                "  {} {:<width$} {}",
                terminal::swatch(category.color(), use_color),
                category.name(),
                count,
                width = max_name_len + 1,
            );
        }
    }

    let quiz_stats = &stats.quiz_stats;
    if quiz_stats.total_quizzes > 0 {
        println!(
            "\nQuiz performance: {:.1}% average, {} of {} correct, {} min spent",
            quiz_stats.average_score,
            quiz_stats.correct_answers,
            quiz_stats.total_questions,
            quiz_stats.time_spent,
        );

        let mut per_difficulty: Vec<_> = quiz_stats.difficulty_progress.iter().collect();
        per_difficulty.sort_by_key(|(d, _)| d.question_count());
        let line = per_difficulty.iter()
            .map(|(d, n)| format!("{} \u{00d7}{}", d, n))
            .collect::<Vec<_>>()
            .join("   ");
        if !line.is_empty() {
            println!("  {}", line);
        }
    }

    if !stats.achievements.is_empty() {
        println!("\nAchievements:");
        for achievement in &stats.achievements {
            if achievement.is_unlocked() {
                println!(
                    "  {} {}",
                    achievement.icon,
                    terminal::paint(&achievement.title, terminal::Color::BOLD, use_color),
                );
            } else {
                println!(
                    "  {} {}",
                    terminal::paint(&achievement.icon, terminal::Color::DIM, use_color),
                    terminal::paint(
                        &format!("{} ({}/{})", achievement.title, achievement.progress, achievement.max_progress),
                        terminal::Color::DIM,
                        use_color,
                    ),
                );
            }
        }
    }

    if stats.streak_days > 0 {
        println!("\nStreak: {} day(s)", stats.streak_days);
    }

    Ok(())
}
