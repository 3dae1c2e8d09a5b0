mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quizbox", about = "Trivia quizzes and flashcards in the terminal", version)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Quiz database (overrides the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Search quizzes by topic (all quizzes when no query is given)
    Search {
        /// Case-insensitive substring of the topic
        #[arg(default_value = "")]
        query: String,
    },

    /// Show a quiz's questions
    Show {
        /// Quiz id
        id: i64,
        /// Mark the correct answers
        #[arg(long)]
        answers: bool,
    },

    /// Create a quiz from a TOML file of question drafts
    Create {
        /// Quiz topic
        topic: String,
        /// Drafts file with [[questions]] tables
        #[arg(long)]
        file: PathBuf,
    },

    /// Generate questions about a topic with the configured model
    Generate {
        /// Topic to ask the model about
        topic: String,
        /// Save as a new quiz named after the topic instead of the shared pool
        #[arg(long)]
        save: bool,
    },

    /// List generated questions not attached to any quiz
    Pool,

    /// Play a quiz
    #[cfg(feature = "tui")]
    Play {
        /// Quiz id
        id: i64,
    },

    /// Study a quiz as flashcards
    #[cfg(feature = "tui")]
    Cards {
        /// Quiz id
        id: i64,
    },

    /// Launch interactive TUI
    #[cfg(feature = "tui")]
    Tui,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();
    let config_path = cli.config.as_deref();
    let db_path = cli.db.as_deref();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                let app = app::App::new(config_path, db_path)?;
                tui::run(app, tui::StartMode::Browse)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::Search { query }) => {
            let app = app::App::new(config_path, db_path)?;
            commands::search::run(&app, &query, &cli.format, use_color)?;
        }
        Some(Command::Show { id, answers }) => {
            let app = app::App::new(config_path, db_path)?;
            commands::show::run(&app, id, answers, &cli.format, use_color)?;
        }
        Some(Command::Create { topic, file }) => {
            let mut app = app::App::new(config_path, db_path)?;
            commands::create::run(&mut app, &topic, &file, &cli.format, use_color)?;
        }
        Some(Command::Generate { topic, save }) => {
            let mut app = app::App::new(config_path, db_path)?;
            commands::generate::run(&mut app, &topic, save, &cli.format, use_color)?;
        }
        Some(Command::Pool) => {
            let app = app::App::new(config_path, db_path)?;
            commands::pool::run(&app, &cli.format, use_color)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Play { id }) => {
            let app = app::App::new(config_path, db_path)?;
            tui::run(app, tui::StartMode::Quiz(id))?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Cards { id }) => {
            let app = app::App::new(config_path, db_path)?;
            tui::run(app, tui::StartMode::Flashcards(id))?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            let app = app::App::new(config_path, db_path)?;
            tui::run(app, tui::StartMode::Browse)?;
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
