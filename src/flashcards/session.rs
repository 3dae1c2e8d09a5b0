//! Flashcard mode: cycle through cards, flipping between question and answer.

use serde::Serialize;

use super::models::{CardFace, Flashcard};
use crate::quiz::{Question, SessionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FlashcardState {
    ShowingQuestion(usize),
    ShowingAnswer(usize),
}

pub struct FlashcardSession {
    cards: Vec<Flashcard>,
    index: usize,
    revealed: bool,
}

impl FlashcardSession {
    /// Start on the question side of the first card. Needs at least one card.
    pub fn new(cards: Vec<Flashcard>) -> Result<Self, SessionError> {
        if cards.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }
        Ok(Self {
            cards,
            index: 0,
            revealed: false,
        })
    }

    pub fn from_questions(questions: Vec<Question>) -> Result<Self, SessionError> {
        Self::new(questions.into_iter().map(Flashcard::from).collect())
    }

    pub fn state(&self) -> FlashcardState {
        if self.revealed {
            FlashcardState::ShowingAnswer(self.index)
        } else {
            FlashcardState::ShowingQuestion(self.index)
        }
    }

    pub fn face(&self) -> CardFace {
        if self.revealed {
            CardFace::Answer
        } else {
            CardFace::Question
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn current(&self) -> &Flashcard {
        &self.cards[self.index]
    }

    /// Text on the face-up side of the current card
    pub fn displayed_text(&self) -> &str {
        let card = self.current();
        match self.face() {
            CardFace::Question => &card.front,
            CardFace::Answer => &card.back,
        }
    }

    /// Flip the current card
    pub fn toggle(&mut self) -> FlashcardState {
        self.revealed = !self.revealed;
        self.state()
    }

    /// Move to the next card (wrapping to the first) with its question showing
    pub fn advance(&mut self) -> FlashcardState {
        self.index = (self.index + 1) % self.cards.len();
        self.revealed = false;
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> FlashcardSession {
        FlashcardSession::new(vec![
            Flashcard::new("Capital of France?", "Paris"),
            Flashcard::new("Largest planet?", "Jupiter"),
            Flashcard::new("2+2?", "4"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert!(matches!(FlashcardSession::new(Vec::new()), Err(SessionError::EmptyQuiz)));
    }

    #[test]
    fn test_toggle_flips_same_card() {
        let mut cards = session();
        assert_eq!(cards.state(), FlashcardState::ShowingQuestion(0));
        assert_eq!(cards.displayed_text(), "Capital of France?");

        assert_eq!(cards.toggle(), FlashcardState::ShowingAnswer(0));
        assert_eq!(cards.displayed_text(), "Paris");

        assert_eq!(cards.toggle(), FlashcardState::ShowingQuestion(0));
        assert_eq!(cards.displayed_text(), "Capital of France?");
    }

    #[test]
    fn test_advance_resets_to_question() {
        let mut cards = session();
        cards.toggle();
        assert_eq!(cards.advance(), FlashcardState::ShowingQuestion(1));
        assert_eq!(cards.displayed_text(), "Largest planet?");
    }

    #[test]
    fn test_advance_wraps_around() {
        let mut cards = session();
        for _ in 0..cards.len() {
            cards.advance();
        }
        assert_eq!(cards.index(), 0);
        assert_eq!(cards.state(), FlashcardState::ShowingQuestion(0));
    }

    #[test]
    fn test_single_card_cycles_in_place() {
        let mut cards = FlashcardSession::new(vec![Flashcard::new("Q", "A")]).unwrap();
        cards.toggle();
        assert_eq!(cards.advance(), FlashcardState::ShowingQuestion(0));
    }

    #[test]
    fn test_from_questions_uses_correct_answer() {
        use crate::quiz::QuestionRecord;

        let question = Question {
            id: 1,
            quiz_id: Some(1),
            content: QuestionRecord::new("2+2?", "4", ["3", "5", "6"], None),
        };
        let mut cards = FlashcardSession::from_questions(vec![question]).unwrap();
        cards.toggle();
        assert_eq!(cards.displayed_text(), "4");
    }
}
