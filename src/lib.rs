//! quizbox: local trivia quizzes and flashcards, with optional question
//! generation by a text-generation model.
//!
//! The library holds everything except the terminal front end:
//! - `quiz`: models, generated-text parser, drafts, SQLite store, quiz session
//! - `flashcards`: flashcard session
//! - `generator`: model-backed question generation
//! - `config`: config file and data directory

pub mod config;
pub mod flashcards;
pub mod generator;
pub mod quiz;

pub use config::AppConfig;
pub use flashcards::FlashcardSession;
pub use generator::{GenerationWorker, HttpGenerator, QuestionGenerator};
pub use quiz::{QuizSession, QuizStorage};
