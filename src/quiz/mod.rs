//! Quizzes for quizbox
//!
//! This module provides:
//! - Question/quiz data models
//! - Parsing of generated question text
//! - Validation of hand-written quizzes
//! - SQLite storage
//! - The quiz-mode session state machine

pub mod draft;
pub mod models;
pub mod parser;
pub mod session;
pub mod storage;

pub use draft::{QuestionDraft, QuizDraft, ValidationError};
pub use models::*;
pub use parser::{parse_generated_questions, QuestionParser};
pub use session::{Prompt, QuizResult, QuizSession, QuizState, SessionError, Submission};
pub use storage::{QuizStorage, QuizStorageError};
