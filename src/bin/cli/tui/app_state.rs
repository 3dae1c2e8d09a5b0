use anyhow::{Context, Result};

use quizbox_lib::flashcards::FlashcardSession;
use quizbox_lib::generator::GenerationOutcome;
use quizbox_lib::quiz::{AnswerLetter, QuizSession, QuizSummary};
use quizbox_lib::GenerationWorker;

use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Browse,
    Search,
    ModeSelect,
    Quiz,
    Flashcards,
    GenerateInput,
}

/// Where the TUI opens
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartMode {
    Browse,
    Quiz(i64),
    Flashcards(i64),
}

/// What the user last got on a quiz submit
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Correct,
    Wrong { answer: String },
}

pub struct TuiState {
    pub app: App,
    pub mode: Mode,

    // Browser state
    pub quizzes: Vec<QuizSummary>,
    pub selected: usize,
    pub search_input: String,

    // Active session
    pub session_title: String,
    pub quiz: Option<QuizSession>,
    pub quiz_cursor: Option<AnswerLetter>,
    pub feedback: Option<Feedback>,
    pub cards: Option<FlashcardSession>,

    // Generation
    pub worker: GenerationWorker,
    pub input_text: String,

    pub flash_message: Option<String>,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App, worker: GenerationWorker, start: StartMode) -> Result<Self> {
        let mut state = Self {
            app,
            mode: Mode::Browse,
            quizzes: Vec::new(),
            selected: 0,
            search_input: String::new(),
            session_title: String::new(),
            quiz: None,
            quiz_cursor: None,
            feedback: None,
            cards: None,
            worker,
            input_text: String::new(),
            flash_message: None,
            quit: false,
        };

        state.refresh_results()?;
        match start {
            StartMode::Browse => {}
            StartMode::Quiz(id) => state.open_quiz(id)?,
            StartMode::Flashcards(id) => state.open_flashcards(id)?,
        }
        Ok(state)
    }

    /// Re-run the topic search with the current input
    pub fn refresh_results(&mut self) -> Result<()> {
        self.quizzes = self
            .app
            .storage
            .search_quizzes(&self.search_input)
            .context("Failed to search quizzes")?;
        if self.selected >= self.quizzes.len() {
            self.selected = self.quizzes.len().saturating_sub(1);
        }
        Ok(())
    }

    /// Refresh, reporting failures in the status bar
    pub fn update_search(&mut self) {
        self.selected = 0;
        if let Err(e) = self.refresh_results() {
            self.flash_message = Some(format!("{:#}", e));
        }
    }

    pub fn move_down(&mut self) {
        if !self.quizzes.is_empty() && self.selected < self.quizzes.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_quiz(&self) -> Option<&QuizSummary> {
        self.quizzes.get(self.selected)
    }

    /// Ask quiz-or-flashcards for the highlighted quiz
    pub fn choose_mode(&mut self) {
        if self.selected_quiz().is_some() {
            self.mode = Mode::ModeSelect;
        } else {
            self.flash_message = Some("No quiz selected".to_string());
        }
    }

    pub fn open_quiz(&mut self, quiz_id: i64) -> Result<()> {
        let (quiz, questions) = self.app.find_quiz(quiz_id)?;
        let session = QuizSession::new(questions)
            .with_context(|| format!("Can't play '{}'", quiz.topic))?;

        self.session_title = quiz.topic;
        self.quiz = Some(session);
        self.quiz_cursor = None;
        self.feedback = None;
        self.mode = Mode::Quiz;
        Ok(())
    }

    pub fn open_flashcards(&mut self, quiz_id: i64) -> Result<()> {
        let (quiz, questions) = self.app.find_quiz(quiz_id)?;
        let session = FlashcardSession::from_questions(questions)
            .with_context(|| format!("Can't study '{}'", quiz.topic))?;

        self.session_title = quiz.topic;
        self.cards = Some(session);
        self.mode = Mode::Flashcards;
        Ok(())
    }

    /// Open the highlighted quiz in quiz (`flashcards == false`) or flashcard mode
    pub fn open_selected(&mut self, flashcards: bool) {
        let Some(quiz_id) = self.selected_quiz().map(|q| q.id) else {
            self.mode = Mode::Browse;
            return;
        };

        let opened = if flashcards {
            self.open_flashcards(quiz_id)
        } else {
            self.open_quiz(quiz_id)
        };
        if let Err(e) = opened {
            self.mode = Mode::Browse;
            self.flash_message = Some(format!("{:#}", e));
        }
    }

    /// Leave the current session and go back to the browser
    pub fn close_session(&mut self) {
        self.quiz = None;
        self.cards = None;
        self.quiz_cursor = None;
        self.feedback = None;
        self.mode = Mode::Browse;
    }

    /// Highlight an answer and record it as the pending selection
    pub fn quiz_choose(&mut self, letter: AnswerLetter) {
        let Some(session) = self.quiz.as_mut() else {
            return;
        };
        let Some(choice) = session.prompt().map(|p| p.choices[letter.index()].to_string()) else {
            return;
        };
        session.select(choice);
        self.quiz_cursor = Some(letter);
    }

    pub fn quiz_cursor_down(&mut self) {
        let next = match self.quiz_cursor {
            None => AnswerLetter::A,
            Some(letter) => AnswerLetter::from_index(letter.index() + 1).unwrap_or(letter),
        };
        self.quiz_choose(next);
    }

    pub fn quiz_cursor_up(&mut self) {
        let prev = match self.quiz_cursor {
            None | Some(AnswerLetter::A) => AnswerLetter::A,
            Some(letter) => AnswerLetter::from_index(letter.index() - 1).unwrap_or(letter),
        };
        self.quiz_choose(prev);
    }

    /// Submit the pending selection for the current question
    pub fn quiz_submit(&mut self) {
        let Some(session) = self.quiz.as_mut() else {
            return;
        };
        let answer = session.current().map(|q| q.correct().to_string());

        match session.submit_selection() {
            Ok(submission) => {
                self.feedback = Some(if submission.correct {
                    Feedback::Correct
                } else {
                    Feedback::Wrong {
                        answer: answer.unwrap_or_default(),
                    }
                });
                self.quiz_cursor = None;
            }
            Err(e) => self.flash_message = Some(e.to_string()),
        }
    }

    pub fn card_flip(&mut self) {
        if let Some(cards) = self.cards.as_mut() {
            cards.toggle();
        }
    }

    pub fn card_next(&mut self) {
        if let Some(cards) = self.cards.as_mut() {
            cards.advance();
        }
    }

    /// Open the topic prompt, unless a request is already running
    pub fn begin_generate(&mut self) {
        if self.worker.is_busy() {
            self.flash_message = Some(self.generating_label());
            return;
        }
        self.input_text.clear();
        self.mode = Mode::GenerateInput;
    }

    /// Start background generation for the typed topic
    pub fn start_generation(&mut self) {
        let topic = self.input_text.trim().to_string();
        if topic.is_empty() {
            self.flash_message = Some("Topic must not be empty".to_string());
            return;
        }

        match self.worker.start(&topic) {
            Ok(()) => {
                self.input_text.clear();
                self.mode = Mode::Browse;
            }
            Err(e) => self.flash_message = Some(e.to_string()),
        }
    }

    pub fn generating_label(&self) -> String {
        match self.worker.pending_topic() {
            Some(topic) => format!("Generating questions about '{}'...", topic),
            None => String::new(),
        }
    }

    /// Pick up a finished generation, if any, and save it as a quiz
    pub fn poll_generation(&mut self) {
        if let Some(outcome) = self.worker.poll() {
            self.finish_generation(outcome);
        }
    }

    fn finish_generation(&mut self, outcome: GenerationOutcome) {
        let questions = match outcome.result {
            Ok(questions) => questions,
            Err(e) => {
                self.flash_message = Some(format!("Generation failed: {}", e));
                return;
            }
        };

        if questions.is_empty() {
            self.flash_message = Some(format!(
                "No usable questions about '{}'; nothing was saved",
                outcome.topic
            ));
            return;
        }

        match self.app.storage.save_quiz(&outcome.topic, &questions) {
            Ok(quiz_id) => {
                log::info!("Saved generated quiz {} '{}'", quiz_id, outcome.topic);
                self.flash_message = Some(format!(
                    "Saved {} questions about '{}' as quiz {}",
                    questions.len(),
                    outcome.topic,
                    quiz_id
                ));
                if let Err(e) = self.refresh_results() {
                    self.flash_message = Some(format!("{:#}", e));
                }
            }
            Err(e) => self.flash_message = Some(format!("Failed to save quiz: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use quizbox_lib::generator::GeneratorError;
    use quizbox_lib::quiz::{QuestionRecord, QuizStorage};
    use quizbox_lib::AppConfig;

    const RAW: &str = "Question #1: Largest planet?\n a) Jupiter\n b) Mars\n c) Venus\n d) Earth\n";

    fn state_with(generator: impl Fn(&str) -> quizbox_lib::generator::Result<String> + Send + Sync + 'static) -> TuiState {
        let mut storage = QuizStorage::open_in_memory().unwrap();
        storage
            .save_quiz(
                "Math",
                &[
                    QuestionRecord::new("2+2?", "4", ["3", "5", "6"], Some("Math")),
                    QuestionRecord::new("3*3?", "9", ["6", "8", "12"], Some("Math")),
                ],
            )
            .unwrap();
        storage
            .save_quiz("History", &[QuestionRecord::new("1066?", "Hastings", ["a", "b", "c"], None)])
            .unwrap();

        let app = App {
            config: AppConfig::default(),
            storage,
        };
        let worker = GenerationWorker::new(Arc::new(generator));
        TuiState::new(app, worker, StartMode::Browse).unwrap()
    }

    fn idle_state() -> TuiState {
        state_with(|_: &str| Err(GeneratorError::EmptyResponse))
    }

    #[test]
    fn test_search_filters_results() {
        let mut state = idle_state();
        assert_eq!(state.quizzes.len(), 2);

        state.search_input = "hist".to_string();
        state.update_search();
        assert_eq!(state.quizzes.len(), 1);
        assert_eq!(state.selected_quiz().unwrap().topic, "History");
    }

    #[test]
    fn test_quiz_play_through() {
        let mut state = idle_state();
        state.choose_mode();
        assert_eq!(state.mode, Mode::ModeSelect);
        state.open_selected(false);
        assert_eq!(state.mode, Mode::Quiz);
        assert_eq!(state.session_title, "Math");

        state.quiz_choose(AnswerLetter::A);
        state.quiz_submit();
        assert_eq!(state.feedback, Some(Feedback::Correct));

        state.quiz_cursor_down();
        state.quiz_cursor_down();
        assert_eq!(state.quiz_cursor, Some(AnswerLetter::B));
        state.quiz_submit();
        assert_eq!(state.feedback, Some(Feedback::Wrong { answer: "9".to_string() }));

        let result = state.quiz.as_ref().unwrap().result().unwrap();
        assert_eq!((result.score, result.total), (1, 2));

        state.close_session();
        assert_eq!(state.mode, Mode::Browse);
        assert!(state.quiz.is_none());
    }

    #[test]
    fn test_flashcards_flip_and_wrap() {
        let mut state = idle_state();
        state.open_selected(true);
        assert_eq!(state.mode, Mode::Flashcards);

        state.card_flip();
        assert_eq!(state.cards.as_ref().unwrap().displayed_text(), "4");
        state.card_next();
        state.card_next();
        assert_eq!(state.cards.as_ref().unwrap().displayed_text(), "2+2?");
    }

    #[test]
    fn test_unknown_quiz_fails_to_open() {
        let mut state = idle_state();
        assert!(state.open_quiz(999).is_err());
        assert_eq!(state.mode, Mode::Browse);
    }

    #[test]
    fn test_generation_saves_quiz() {
        let mut state = state_with(|_: &str| Ok(RAW.to_string()));
        state.begin_generate();
        assert_eq!(state.mode, Mode::GenerateInput);
        state.input_text = "Space".to_string();
        state.start_generation();
        assert_eq!(state.mode, Mode::Browse);

        let outcome = state.worker.wait().unwrap();
        state.finish_generation(outcome);

        assert_eq!(state.quizzes.len(), 3);
        assert!(state.quizzes.iter().any(|q| q.topic == "Space"));
    }

    #[test]
    fn test_failed_generation_reports_and_stores_nothing() {
        let mut state = idle_state();
        state.input_text = "Space".to_string();
        state.start_generation();

        let outcome = state.worker.wait().unwrap();
        state.finish_generation(outcome);

        assert!(state.flash_message.as_deref().unwrap().starts_with("Generation failed"));
        assert_eq!(state.quizzes.len(), 2);
    }
}
