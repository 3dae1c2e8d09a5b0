//! Flashcard mode for quizbox
//!
//! This module provides:
//! - Flashcards built from a quiz's questions (question front, correct answer back)
//! - The flashcard session state machine (flip and advance, wrapping forever)

pub mod models;
pub mod session;

pub use models::*;
pub use session::{FlashcardSession, FlashcardState};
