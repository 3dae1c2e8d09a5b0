use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use quizbox_lib::quiz::{QuestionDraft, QuizDraft};

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

/// Drafts file layout:
///
/// ```toml
/// [[questions]]
/// question = "What is the capital of France?"
/// options = ["London", "Paris", "Berlin", "Madrid"]
/// correct = "B"
/// ```
#[derive(Debug, Deserialize)]
struct DraftFile {
    #[serde(default)]
    questions: Vec<QuestionDraft>,
}

/// Validate every draft in `content` into a quiz about `topic`
fn build_quiz(topic: &str, content: &str) -> Result<QuizDraft> {
    let file: DraftFile = toml::from_str(content).context("Invalid drafts file")?;

    let mut quiz = QuizDraft::new(topic);
    for (i, draft) in file.questions.iter().enumerate() {
        quiz.add_question(draft)
            .with_context(|| format!("Question {} is invalid", i + 1))?;
    }
    Ok(quiz)
}

pub fn run(
    app: &mut App,
    topic: &str,
    file: &Path,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let (topic, questions) = build_quiz(topic, &content)?.finish()?;
    let quiz_id = app
        .storage
        .save_quiz(&topic, &questions)
        .context("Failed to save quiz")?;
    log::info!("Created quiz {} '{}' with {} questions", quiz_id, topic, questions.len());

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": quiz_id,
                "topic": topic,
                "questions": questions.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let id = format!("{}", quiz_id);
            println!(
                "Created quiz {}: {} ({} questions)",
                terminal::paint(&id, Color::GREEN, use_color),
                topic,
                questions.len()
            );
        }
    }

    Ok(())
}
