//! Quiz mode: one pass over a quiz's questions with scoring.

use serde::Serialize;
use thiserror::Error;

use super::models::Question;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Quiz has no questions")]
    EmptyQuiz,

    #[error("Quiz is already finished")]
    Finished,
}

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QuizState {
    /// Showing the question at this index
    Presenting(usize),
    Finished,
}

/// Final tally of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
}

/// What happened on a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub correct: bool,
    pub state: QuizState,
}

/// The active prompt: question text plus answers in A-D order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt<'a> {
    pub number: usize,
    pub total: usize,
    pub text: &'a str,
    pub choices: [&'a str; 4],
}

pub struct QuizSession {
    questions: Vec<Question>,
    index: usize,
    score: usize,
    selection: Option<String>,
}

impl QuizSession {
    /// Start at the first question. An empty quiz can't be played.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }
        Ok(Self {
            questions,
            index: 0,
            score: 0,
            selection: None,
        })
    }

    pub fn state(&self) -> QuizState {
        if self.index < self.questions.len() {
            QuizState::Presenting(self.index)
        } else {
            QuizState::Finished
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state() == QuizState::Finished
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn prompt(&self) -> Option<Prompt<'_>> {
        self.current().map(|q| Prompt {
            number: self.index + 1,
            total: self.questions.len(),
            text: q.text(),
            choices: q.choices(),
        })
    }

    /// Remember the user's pending choice for the current question
    pub fn select(&mut self, answer: impl Into<String>) {
        self.selection = Some(answer.into());
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Submit the pending selection (empty if nothing was picked).
    pub fn submit_selection(&mut self) -> Result<Submission> {
        let selected = self.selection.take().unwrap_or_default();
        self.submit(&selected)
    }

    /// Score `selected` against the current question and move on.
    ///
    /// Comparison is exact string equality with the correct answer. Nothing
    /// stops the same index from being scored twice if a caller replays it.
    pub fn submit(&mut self, selected: &str) -> Result<Submission> {
        let question = self.current().ok_or(SessionError::Finished)?;
        let correct = selected == question.correct();
        if correct {
            self.score += 1;
        }

        self.index += 1;
        self.selection = None;

        let state = self.state();
        if state == QuizState::Finished {
            log::debug!("Quiz finished with {}/{}", self.score, self.total());
        }
        Ok(Submission { correct, state })
    }

    /// Final score, once every question has been answered
    pub fn result(&self) -> Option<QuizResult> {
        self.is_finished().then(|| QuizResult {
            score: self.score,
            total: self.questions.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::models::QuestionRecord;

    fn questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                id: i as i64 + 1,
                quiz_id: Some(1),
                content: QuestionRecord::new(
                    format!("Question {}", i),
                    format!("right {}", i),
                    ["wrong a", "wrong b", "wrong c"],
                    None,
                ),
            })
            .collect()
    }

    #[test]
    fn test_empty_quiz_rejected() {
        assert_eq!(QuizSession::new(Vec::new()).err(), Some(SessionError::EmptyQuiz));
    }

    #[test]
    fn test_all_correct() {
        let mut session = QuizSession::new(questions(4)).unwrap();
        assert_eq!(session.state(), QuizState::Presenting(0));

        for i in 0..4 {
            let answer = session.current().unwrap().correct().to_string();
            let submission = session.submit(&answer).unwrap();
            assert!(submission.correct);
            if i < 3 {
                assert_eq!(submission.state, QuizState::Presenting(i + 1));
            }
        }

        assert_eq!(session.state(), QuizState::Finished);
        assert_eq!(session.result(), Some(QuizResult { score: 4, total: 4 }));
        assert_eq!(session.submit("anything"), Err(SessionError::Finished));
    }

    #[test]
    fn test_all_wrong_or_empty() {
        let mut session = QuizSession::new(questions(3)).unwrap();
        session.submit("wrong a").unwrap();
        session.submit("").unwrap();
        assert_eq!(session.submit_selection().unwrap().state, QuizState::Finished);
        assert_eq!(session.result(), Some(QuizResult { score: 0, total: 3 }));
    }

    #[test]
    fn test_prompt_uses_fixed_choice_order() {
        let session = QuizSession::new(questions(2)).unwrap();
        let prompt = session.prompt().unwrap();
        assert_eq!(prompt.number, 1);
        assert_eq!(prompt.total, 2);
        assert_eq!(prompt.text, "Question 0");
        assert_eq!(prompt.choices, ["right 0", "wrong a", "wrong b", "wrong c"]);
    }

    #[test]
    fn test_selection_is_submitted_and_cleared() {
        let mut session = QuizSession::new(questions(2)).unwrap();
        session.select("right 0");
        assert_eq!(session.selection(), Some("right 0"));

        let submission = session.submit_selection().unwrap();
        assert!(submission.correct);
        assert_eq!(session.selection(), None);
        assert_eq!(session.prompt().unwrap().text, "Question 1");
        assert_eq!(session.score(), 1);
        assert!(session.result().is_none());
    }

    #[test]
    fn test_answer_match_is_exact() {
        let mut session = QuizSession::new(questions(1)).unwrap();
        assert!(!session.submit("RIGHT 0").unwrap().correct);
        assert_eq!(session.score(), 0);
    }
}
