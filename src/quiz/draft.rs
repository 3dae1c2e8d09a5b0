//! Validation of user-entered quizzes
//!
//! A draft is checked field by field before anything touches the store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::{AnswerLetter, QuestionRecord};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Quiz topic is required")]
    MissingTopic,

    #[error("Question text is required")]
    MissingQuestion,

    #[error("Answer {0} is required")]
    MissingOption(AnswerLetter),

    #[error("Select which answer is correct")]
    MissingCorrectAnswer,

    #[error("Answers {0} and {1} are identical")]
    DuplicateOption(AnswerLetter, AnswerLetter),

    #[error("Add at least one question")]
    NoQuestions,
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// A question as typed in by the user: four options plus the letter of
/// the correct one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub question: String,
    pub options: [String; 4],
    #[serde(default)]
    pub correct: Option<AnswerLetter>,
}

impl QuestionDraft {
    /// Check every field and turn the draft into a record. The selected
    /// option becomes `correct`; the rest keep their A-D order.
    pub fn validate(&self, category: Option<&str>) -> Result<QuestionRecord> {
        let question = self.question.trim();
        if question.is_empty() {
            return Err(ValidationError::MissingQuestion);
        }

        let options: Vec<&str> = self.options.iter().map(|o| o.trim()).collect();
        for (letter, option) in AnswerLetter::ALL.iter().zip(&options) {
            if option.is_empty() {
                return Err(ValidationError::MissingOption(*letter));
            }
        }

        let correct = self.correct.ok_or(ValidationError::MissingCorrectAnswer)?;

        for (i, a) in options.iter().enumerate() {
            for (j, b) in options.iter().enumerate().skip(i + 1) {
                if a == b {
                    return Err(ValidationError::DuplicateOption(
                        AnswerLetter::ALL[i],
                        AnswerLetter::ALL[j],
                    ));
                }
            }
        }

        let wrong: Vec<&str> = options
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != correct.index())
            .map(|(_, o)| *o)
            .collect();

        Ok(QuestionRecord::new(
            question,
            options[correct.index()],
            [wrong[0], wrong[1], wrong[2]],
            category,
        ))
    }
}

/// A quiz being assembled question by question
#[derive(Debug, Clone, Default)]
pub struct QuizDraft {
    pub topic: String,
    questions: Vec<QuestionRecord>,
}

impl QuizDraft {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            questions: Vec::new(),
        }
    }

    /// Validate and append a question. Nothing is appended on error.
    pub fn add_question(&mut self, draft: &QuestionDraft) -> Result<()> {
        let topic = self.topic.trim();
        let category = (!topic.is_empty()).then_some(topic);
        let record = draft.validate(category)?;
        self.questions.push(record);
        Ok(())
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    /// Check the quiz as a whole and hand back `(topic, questions)` ready to save
    pub fn finish(self) -> Result<(String, Vec<QuestionRecord>)> {
        let topic = self.topic.trim().to_string();
        if topic.is_empty() {
            return Err(ValidationError::MissingTopic);
        }
        if self.questions.is_empty() {
            return Err(ValidationError::NoQuestions);
        }
        Ok((topic, self.questions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(correct: Option<AnswerLetter>) -> QuestionDraft {
        QuestionDraft {
            question: "Largest planet?".to_string(),
            options: [
                "Mars".to_string(),
                "Jupiter".to_string(),
                "Venus".to_string(),
                "Earth".to_string(),
            ],
            correct,
        }
    }

    #[test]
    fn test_selected_option_becomes_correct() {
        let record = draft(Some(AnswerLetter::B)).validate(Some("Space")).unwrap();
        assert_eq!(record.question, "Largest planet?");
        assert_eq!(record.correct, "Jupiter");
        assert_eq!(record.wrong1, "Mars");
        assert_eq!(record.wrong2, "Venus");
        assert_eq!(record.wrong3, "Earth");
        assert_eq!(record.category.as_deref(), Some("Space"));
    }

    #[test]
    fn test_missing_fields() {
        let mut d = draft(Some(AnswerLetter::A));
        d.question = "  ".to_string();
        assert_eq!(d.validate(None), Err(ValidationError::MissingQuestion));

        let mut d = draft(Some(AnswerLetter::A));
        d.options[2].clear();
        assert_eq!(d.validate(None), Err(ValidationError::MissingOption(AnswerLetter::C)));

        assert_eq!(draft(None).validate(None), Err(ValidationError::MissingCorrectAnswer));
    }

    #[test]
    fn test_duplicate_options() {
        let mut d = draft(Some(AnswerLetter::A));
        d.options[3] = " Mars ".to_string();
        assert_eq!(
            d.validate(None),
            Err(ValidationError::DuplicateOption(AnswerLetter::A, AnswerLetter::D))
        );
    }

    #[test]
    fn test_invalid_question_is_not_appended() {
        let mut quiz = QuizDraft::new("Space");
        assert!(quiz.add_question(&draft(None)).is_err());
        assert!(quiz.questions().is_empty());

        quiz.add_question(&draft(Some(AnswerLetter::D))).unwrap();
        assert_eq!(quiz.questions().len(), 1);
        assert_eq!(quiz.questions()[0].correct, "Earth");
    }

    #[test]
    fn test_finish_requires_topic_and_questions() {
        assert_eq!(QuizDraft::new("Space").finish(), Err(ValidationError::NoQuestions));

        let mut quiz = QuizDraft::new("   ");
        quiz.add_question(&draft(Some(AnswerLetter::A))).unwrap();
        assert_eq!(quiz.finish(), Err(ValidationError::MissingTopic));

        let mut quiz = QuizDraft::new(" Space ");
        quiz.add_question(&draft(Some(AnswerLetter::A))).unwrap();
        let (topic, questions) = quiz.finish().unwrap();
        assert_eq!(topic, "Space");
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_draft_from_toml() {
        let text = r#"
question = "2+2?"
options = ["3", "4", "5", "6"]
correct = "B"
"#;
        let d: QuestionDraft = toml::from_str(text).unwrap();
        let record = d.validate(Some("math")).unwrap();
        assert_eq!(record.choices(), ["4", "3", "5", "6"]);
    }
}
