use anyhow::{Context, Result};

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, query: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let results = app
        .storage
        .search_quizzes(query)
        .context("Failed to search quizzes")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Plain => {
            if results.is_empty() {
                if query.is_empty() {
                    println!("No quizzes yet. Create one with `quizbox create` or `quizbox generate --save`.");
                } else {
                    println!("No quizzes found for '{}'.", query);
                }
                return Ok(());
            }

            let id_w = results
                .iter()
                .map(|q| q.id.to_string().len())
                .max()
                .unwrap_or(2)
                .max(2);

            println!("{:>id_w$}  {}", "ID", "Topic", id_w = id_w);
            println!("{}  {}", "\u{2500}".repeat(id_w), "\u{2500}".repeat(40));

            for quiz in &results {
                let id = format!("{:>id_w$}", quiz.id, id_w = id_w);
                println!("{}: {}", terminal::paint(&id, Color::CYAN, use_color), quiz.topic);
            }

            println!("\n{} quizzes", results.len());
        }
    }

    Ok(())
}
