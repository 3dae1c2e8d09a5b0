use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use quizbox_lib::quiz::{Question, Quiz, QuizStorage, QuizStorageError};
use quizbox_lib::{AppConfig, GenerationWorker, HttpGenerator};

/// Shared application state for CLI commands and the TUI
pub struct App {
    pub config: AppConfig,
    pub storage: QuizStorage,
}

impl App {
    /// Load config and open the quiz database. `db_path` wins over the
    /// config file's `database_path`.
    pub fn new(config_path: Option<&Path>, db_path: Option<&Path>) -> Result<Self> {
        let config = AppConfig::load(config_path).context("Failed to load config")?;

        let db_path = match db_path {
            Some(path) => path.to_path_buf(),
            None => config
                .database_path()
                .context("Failed to get data directory")?,
        };
        let storage = QuizStorage::open(db_path.clone())
            .with_context(|| format!("Failed to open quiz database {}", db_path.display()))?;
        if let Some(path) = storage.db_path() {
            log::debug!("Using quiz database {}", path.display());
        }

        Ok(Self { config, storage })
    }

    /// Look up a quiz together with its questions
    pub fn find_quiz(&self, quiz_id: i64) -> Result<(Quiz, Vec<Question>)> {
        let quiz = match self.storage.get_quiz(quiz_id) {
            Ok(quiz) => quiz,
            Err(QuizStorageError::QuizNotFound(id)) => {
                anyhow::bail!("No quiz with id {}. Try `quizbox search`.", id)
            }
            Err(e) => return Err(e).context("Failed to load quiz"),
        };
        let questions = self
            .storage
            .load_questions(quiz_id)
            .context("Failed to load questions")?;
        Ok((quiz, questions))
    }

    /// HTTP generator for the configured model endpoint
    pub fn generator(&self) -> Result<HttpGenerator> {
        HttpGenerator::new(self.config.generator.clone())
            .context("Failed to set up question generator")
    }

    /// Background worker around the configured generator
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub fn generation_worker(&self) -> Result<GenerationWorker> {
        Ok(GenerationWorker::new(Arc::new(self.generator()?)))
    }
}
