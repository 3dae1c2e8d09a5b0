//! Data models for flashcard mode

use serde::{Deserialize, Serialize};

use crate::quiz::Question;

/// A flashcard with question (front) and answer (back)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

impl From<Question> for Flashcard {
    fn from(question: Question) -> Self {
        Self {
            front: question.content.question,
            back: question.content.correct,
        }
    }
}

/// Which side of a card is face up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardFace {
    #[default]
    Question,
    Answer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuestionRecord;

    #[test]
    fn test_card_from_question() {
        let question = Question {
            id: 3,
            quiz_id: Some(1),
            content: QuestionRecord::new("Largest planet?", "Jupiter", ["Mars", "Venus", "Earth"], None),
        };

        assert_eq!(Flashcard::from(question), Flashcard::new("Largest planet?", "Jupiter"));
    }
}
