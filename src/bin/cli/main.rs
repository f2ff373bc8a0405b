mod app;
mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mindweb_lib::ai::{prompts, Enhancement};

#[derive(Parser)]
#[command(name = "mindweb-cli", about = "MindWeb knowledge base CLI", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Add a knowledge node
    Add {
        /// Node title
        title: String,
        /// Content text (use "-" to read from stdin)
        content: Option<String>,
        /// Category (science, technology, history, ...)
        #[arg(long, default_value = "personal")]
        category: String,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
        /// Where the knowledge came from (book, URL, course)
        #[arg(long)]
        source: Option<String>,
        /// Hex color overriding the category color
        #[arg(long)]
        color: Option<String>,
    },

    /// List knowledge nodes
    List {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show a node with its connections
    Show {
        /// Node title (case-insensitive prefix match)
        title: String,
    },

    /// Connect two nodes
    Connect {
        /// First node title (case-insensitive prefix match)
        a: String,
        /// Second node title
        b: String,
    },

    /// Delete a node
    Delete {
        /// Node title (case-insensitive prefix match)
        title: String,
    },

    /// Move a node on the canvas
    Move {
        /// Node title (case-insensitive prefix match)
        title: String,
        /// New horizontal position
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        /// New vertical position
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },

    /// Show progress, level, and achievements
    Stats,

    /// Generate a quiz and take it interactively
    Quiz {
        /// Difficulty (easy, medium, hard)
        #[arg(long, default_value = "medium")]
        difficulty: String,
        /// Build from these node titles (comma-separated) instead of a random sample
        #[arg(long)]
        nodes: Option<String>,
        /// Print the questions instead of starting a session
        #[arg(long)]
        print: bool,
    },

    /// List past quizzes
    QuizHistory,

    /// Generate content with the configured AI service
    #[command(subcommand)]
    Ai(AiCommand),

    /// Show or change settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Export all data with the API key redacted
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum AiCommand {
    /// Send a free-form prompt
    Prompt {
        /// Prompt text (use "-" to read from stdin)
        text: String,
    },

    /// Draft a title for existing content
    DraftTitle {
        /// Content text (use "-" to read from stdin)
        content: String,
    },

    /// Draft content for a topic
    DraftContent {
        /// Topic or title to expand
        topic: String,
    },

    /// Suggest tags for a node
    DraftTags {
        /// Node title
        title: String,
        /// Content text (use "-" to read from stdin)
        content: String,
    },

    /// Rewrite existing text (creative-title, expand-content, ...)
    Enhance {
        /// Enhancement kind
        kind: String,
        /// Text to enhance (use "-" to read from stdin)
        text: String,
    },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print current settings
    Show,

    /// Change a setting, e.g. `settings set ai-enabled true`
    Set {
        /// Setting key
        key: String,
        /// New value
        value: String,
    },
}

/// Read content from stdin if piped, or resolve "-" as stdin
fn resolve_content(content: Option<String>) -> Option<String> {
    match content.as_deref() {
        Some("-") => {
            // Explicit stdin read
            let mut buf = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf).ok();
            Some(buf)
        }
        Some(_) => content,
        None => {
            // Auto-detect piped stdin
            if !stdin_is_tty() {
                let mut buf = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf).ok();
                if buf.is_empty() { None } else { Some(buf) }
            } else {
                None
            }
        }
    }
}

/// Check if stdin is a terminal (not piped)
fn stdin_is_tty() -> bool {
    unsafe { libc_isatty(0) != 0 }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();

    let mut app = app::App::new(cli.data_dir.clone())?;

    match cli.command {
        Command::Add { title, content, category, tags, source, color } => {
            let content = match resolve_content(content) {
                Some(text) => text,
                None => anyhow::bail!(
                    "No content given. Pass it as an argument, pipe it in, or use \"-\" for stdin."
                ),
            };
            commands::add::run(
                &mut app,
                &title,
                &content,
                &category,
                tags.as_deref(),
                source.as_deref(),
                color.as_deref(),
                &cli.format,
                use_color,
            )?;
        }
        Command::List { category } => {
            commands::list::run(&app, category.as_deref(), &cli.format, use_color)?;
        }
        Command::Show { title } => {
            commands::show::run(&app, &title, &cli.format, use_color)?;
        }
        Command::Connect { a, b } => {
            commands::connect::run(&mut app, &a, &b, &cli.format, use_color)?;
        }
        Command::Delete { title } => {
            commands::delete::run(&mut app, &title, &cli.format, use_color)?;
        }
        Command::Move { title, x, y } => {
            commands::mv::run(&mut app, &title, x, y, &cli.format, use_color)?;
        }
        Command::Stats => {
            commands::stats::run(&app, &cli.format, use_color)?;
        }
        Command::Quiz { difficulty, nodes, print } => {
            commands::quiz::run(&mut app, &difficulty, nodes.as_deref(), print, &cli.format, use_color)?;
        }
        Command::QuizHistory => {
            commands::quiz_history::run(&app, &cli.format, use_color)?;
        }
        Command::Ai(subcmd) => {
            let prompt = match subcmd {
                AiCommand::Prompt { text } => resolve_content(Some(text)).unwrap_or_default(),
                AiCommand::DraftTitle { content } => {
                    let content = resolve_content(Some(content)).unwrap_or_default();
                    prompts::draft_title(&content)
                }
                AiCommand::DraftContent { topic } => prompts::draft_content(&topic),
                AiCommand::DraftTags { title, content } => {
                    let content = resolve_content(Some(content)).unwrap_or_default();
                    prompts::draft_tags(&title, &content)
                }
                AiCommand::Enhance { kind, text } => {
                    let kind: Enhancement = kind.parse()?;
                    let text = resolve_content(Some(text)).unwrap_or_default();
                    prompts::enhance(kind, &text)
                }
            };
            commands::ai::run(&mut app, &prompt, &cli.format, use_color)?;
        }
        Command::Settings(subcmd) => match subcmd {
            SettingsCommand::Show => {
                commands::settings::run_show(&app, &cli.format, use_color)?;
            }
            SettingsCommand::Set { key, value } => {
                commands::settings::run_set(&mut app, &key, &value, &cli.format, use_color)?;
            }
        },
        Command::Export { out } => {
            commands::export::run(&mut app, out.as_deref(), &cli.format, use_color)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
