//! Question generation via a text-generation model
//!
//! This module provides:
//! - The `QuestionGenerator` trait (topic in, raw model text out)
//! - The instructional prompt the model is expected to follow
//! - An HTTP generator for OpenAI-compatible completion servers
//! - A background worker that keeps at most one request in flight

mod http;
mod worker;

pub use http::HttpGenerator;
pub use worker::{GenerationOutcome, GenerationWorker};

use thiserror::Error;

use crate::quiz::{parse_generated_questions, QuestionRecord};

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("A generation request is already running")]
    Busy,

    #[error("Generation worker stopped before replying")]
    Disconnected,

    #[error("Generation failed: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Anything that can turn a topic into raw question text
pub trait QuestionGenerator: Send + Sync {
    fn generate(&self, topic: &str) -> Result<String>;
}

impl<F> QuestionGenerator for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn generate(&self, topic: &str) -> Result<String> {
        self(topic)
    }
}

/// Instructional template sent to the model. The example block doubles as
/// the format the parser expects, with the correct answer on the `a)` line.
pub fn prompt_for(topic: &str, count: u32) -> String {
    format!(
        "Generate {count} trivia questions about the topic: {topic}\n\
         Follow this format exactly:\n\
         \n\
         Question #1: What is the capital of France?\n \
         a) Paris\n \
         b) London\n \
         c) Berlin\n \
         d) Madrid\n\
         \n\
         Now generate the rest:"
    )
}

/// Generate and parse questions for `topic`, using the topic as category.
///
/// An empty result is not an error; the caller decides what zero questions means.
pub fn generate_questions(generator: &dyn QuestionGenerator, topic: &str) -> Result<Vec<QuestionRecord>> {
    log::info!("Generating questions about '{}'", topic);
    let raw = generator.generate(topic)?;
    let questions = parse_generated_questions(raw.trim(), topic);
    if questions.is_empty() {
        log::warn!("Generated text for '{}' contained no usable questions", topic);
    } else {
        log::info!("Parsed {} questions about '{}'", questions.len(), topic);
    }
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_topic_and_template() {
        let prompt = prompt_for("volcanoes", 5);
        assert!(prompt.starts_with("Generate 5 trivia questions about the topic: volcanoes\n"));
        assert!(prompt.contains("Question #1: What is the capital of France?\n a) Paris\n b) London"));
        assert!(prompt.ends_with("Now generate the rest:"));
    }

    #[test]
    fn test_generate_questions_parses_output() {
        let generator = |topic: &str| -> Result<String> {
            Ok(format!(
                "\n\nQuestion #1: Which {} is tallest?\n a) Everest\n b) K2\n c) Denali\n d) Elbrus\n\n",
                topic
            ))
        };

        let questions = generate_questions(&generator, "mountain").unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Which mountain is tallest?");
        assert_eq!(questions[0].correct, "Everest");
        assert_eq!(questions[0].category.as_deref(), Some("mountain"));
    }

    #[test]
    fn test_generate_questions_empty_is_ok() {
        let generator = |_: &str| -> Result<String> { Ok("I don't know any trivia.".to_string()) };
        assert!(generate_questions(&generator, "nothing").unwrap().is_empty());
    }

    #[test]
    fn test_generator_failure_propagates() {
        let generator = |_: &str| -> Result<String> { Err(GeneratorError::Other("model unavailable".to_string())) };
        let err = generate_questions(&generator, "anything").unwrap_err();
        assert_eq!(err.to_string(), "Generation failed: model unavailable");
    }
}
