//! Data models for quizzes and their questions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named collection of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: i64,
    pub topic: String,
}

/// Search hit returned by the quiz store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub id: i64,
    pub topic: String,
}

/// Question content as produced by the parser or a validated draft.
///
/// `correct` is always presented first, followed by the three wrong answers
/// in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub question: String,
    pub correct: String,
    pub wrong1: String,
    pub wrong2: String,
    pub wrong3: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl QuestionRecord {
    pub fn new(
        question: impl Into<String>,
        correct: impl Into<String>,
        wrong: [&str; 3],
        category: Option<&str>,
    ) -> Self {
        let [wrong1, wrong2, wrong3] = wrong;
        Self {
            question: question.into(),
            correct: correct.into(),
            wrong1: wrong1.to_string(),
            wrong2: wrong2.to_string(),
            wrong3: wrong3.to_string(),
            category: category.map(str::to_string),
        }
    }

    /// Answer texts in presentation order (A, B, C, D)
    pub fn choices(&self) -> [&str; 4] {
        [&self.correct, &self.wrong1, &self.wrong2, &self.wrong3]
    }

    /// Whether every text field is non-empty
    pub fn is_complete(&self) -> bool {
        !self.question.is_empty() && self.choices().iter().all(|c| !c.is_empty())
    }
}

/// A persisted question. `quiz_id` is `None` for generated questions that
/// were never assigned to a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub quiz_id: Option<i64>,
    #[serde(flatten)]
    pub content: QuestionRecord,
}

impl Question {
    pub fn text(&self) -> &str {
        &self.content.question
    }

    pub fn correct(&self) -> &str {
        &self.content.correct
    }

    pub fn choices(&self) -> [&str; 4] {
        self.content.choices()
    }
}

/// Choice label as shown next to each answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    pub const ALL: [AnswerLetter; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        };
        write!(f, "{}", c)
    }
}

impl FromStr for AnswerLetter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            other => Err(format!("Unknown answer letter: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_keep_field_order() {
        let record = QuestionRecord::new("2+2?", "4", ["3", "5", "6"], Some("math"));
        assert_eq!(record.choices(), ["4", "3", "5", "6"]);
        assert!(record.is_complete());
    }

    #[test]
    fn test_incomplete_record() {
        let record = QuestionRecord::new("2+2?", "4", ["3", "", "6"], None);
        assert!(!record.is_complete());
    }

    #[test]
    fn test_question_serializes_flat() {
        let question = Question {
            id: 7,
            quiz_id: None,
            content: QuestionRecord::new("2+2?", "4", ["3", "5", "6"], None),
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["id"], 7);
        assert!(json["quizId"].is_null());
        assert_eq!(json["correct"], "4");
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_answer_letter_parse() {
        assert_eq!("b".parse::<AnswerLetter>(), Ok(AnswerLetter::B));
        assert_eq!(" D ".parse::<AnswerLetter>(), Ok(AnswerLetter::D));
        assert!("e".parse::<AnswerLetter>().is_err());
        assert_eq!(AnswerLetter::from_index(2), Some(AnswerLetter::C));
        assert_eq!(AnswerLetter::from_index(4), None);
        assert_eq!(AnswerLetter::C.to_string(), "C");
    }
}
