use anyhow::{Context, Result};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let questions = app
        .storage
        .list_unowned_questions()
        .context("Failed to list pool questions")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&questions)?);
        }
        OutputFormat::Plain => {
            if questions.is_empty() {
                println!("The question pool is empty. Run `quizbox generate TOPIC` to fill it.");
                return Ok(());
            }

            for (i, question) in questions.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                for line in terminal::render_question(&question.content, i + 1, true, use_color) {
                    println!("{}", line);
                }
            }

            println!("\n{} questions in pool", questions.len());
        }
    }

    Ok(())
}
