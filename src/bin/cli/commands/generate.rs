use anyhow::{Context, Result};

use quizbox_lib::generator::generate_questions;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

/// Generate questions about `topic` and store them. Without `save` they go
/// to the shared pool; with it they become a new quiz named after the topic.
pub fn run(
    app: &mut App,
    topic: &str,
    save: bool,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let topic = topic.trim();
    if topic.is_empty() {
        anyhow::bail!("Topic must not be empty");
    }

    let generator = app.generator()?;
    if matches!(format, OutputFormat::Plain) {
        let status = format!("Generating questions about '{}'...", topic);
        eprintln!("{}", terminal::paint(&status, Color::DIM, use_color));
    }

    let questions = generate_questions(&generator, topic).context("Question generation failed")?;

    if questions.is_empty() {
        eprintln!(
            "{}",
            terminal::paint("Warning: the model's answer contained no usable questions; nothing was stored.", Color::YELLOW, use_color)
        );
        if matches!(format, OutputFormat::Json) {
            println!("{}", serde_json::json!({ "topic": topic, "stored": 0 }));
        }
        return Ok(());
    }

    let quiz_id = if save {
        Some(app.storage.save_quiz(topic, &questions).context("Failed to save quiz")?)
    } else {
        app.storage
            .insert_unowned_questions(&questions)
            .context("Failed to store questions")?;
        None
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "topic": topic,
                "quizId": quiz_id,
                "stored": questions.len(),
                "questions": questions,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for (i, question) in questions.iter().enumerate() {
                for line in terminal::render_question(question, i + 1, true, use_color) {
                    println!("{}", line);
                }
                println!();
            }
            match quiz_id {
                Some(id) => println!("Saved {} questions as quiz {}.", questions.len(), id),
                None => println!("Added {} questions to the pool.", questions.len()),
            }
        }
    }

    Ok(())
}
