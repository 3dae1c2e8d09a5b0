//! SQLite-backed quiz store.
//!
//! Schema:
//! ```text
//! quizzes(id, topic)
//! questions(id, quiz_id NULL -> quizzes.id, question, correct, wrong1, wrong2, wrong3, category)
//! ```
//! Generated questions that were never attached to a quiz keep a NULL `quiz_id`.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use thiserror::Error;

use super::models::{Question, QuestionRecord, Quiz, QuizSummary};

#[derive(Error, Debug)]
pub enum QuizStorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Quiz not found: {0}")]
    QuizNotFound(i64),

    #[error("Invalid quiz: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, QuizStorageError>;

const QUESTION_COLUMNS: &str = "id, quiz_id, question, correct, wrong1, wrong2, wrong3, category";

/// Quiz and question persistence over a single SQLite connection
pub struct QuizStorage {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl QuizStorage {
    /// Open (or create) the database at `db_path` and make sure the schema exists.
    pub fn open(db_path: PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&db_path)?;
        let storage = Self {
            conn,
            db_path: Some(db_path),
        };
        storage.init()?;
        Ok(storage)
    }

    /// Open a throwaway database that lives only as long as this value.
    pub fn open_in_memory() -> Result<Self> {
        let storage = Self {
            conn: Connection::open_in_memory()?,
            db_path: None,
        };
        storage.init()?;
        Ok(storage)
    }

    /// Create the schema if it is absent
    pub fn init(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS quizzes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                topic TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                quiz_id INTEGER,
                question TEXT NOT NULL,
                correct TEXT NOT NULL,
                wrong1 TEXT NOT NULL,
                wrong2 TEXT NOT NULL,
                wrong3 TEXT NOT NULL,
                category TEXT,
                FOREIGN KEY (quiz_id) REFERENCES quizzes(id)
            );

            CREATE INDEX IF NOT EXISTS idx_questions_quiz_id ON questions(quiz_id);
            "#,
        )?;
        Ok(())
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Save a quiz and its questions in one transaction. Returns the new quiz id.
    pub fn save_quiz(&mut self, topic: &str, questions: &[QuestionRecord]) -> Result<i64> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(QuizStorageError::Invalid("topic is empty".to_string()));
        }
        check_records(questions)?;

        let tx = self.conn.transaction()?;
        tx.execute("INSERT INTO quizzes (topic) VALUES (?1)", params![topic])?;
        let quiz_id = tx.last_insert_rowid();
        insert_questions(&tx, Some(quiz_id), questions)?;
        tx.commit()?;

        log::info!("Saved quiz {} '{}' with {} questions", quiz_id, topic, questions.len());
        Ok(quiz_id)
    }

    /// Insert generated questions that don't belong to any quiz yet.
    pub fn insert_unowned_questions(&mut self, questions: &[QuestionRecord]) -> Result<usize> {
        check_records(questions)?;

        let tx = self.conn.transaction()?;
        insert_questions(&tx, None, questions)?;
        tx.commit()?;

        log::info!("Inserted {} unowned questions", questions.len());
        Ok(questions.len())
    }

    /// Case-insensitive substring search over quiz topics.
    /// An empty query lists every quiz.
    pub fn search_quizzes(&self, query: &str) -> Result<Vec<QuizSummary>> {
        // SQLite LOWER() only folds ASCII, so matching happens here
        let needle = query.to_lowercase();
        let mut stmt = self.conn.prepare("SELECT id, topic FROM quizzes ORDER BY id")?;

        let quizzes = stmt
            .query_map([], |row| {
                Ok(QuizSummary {
                    id: row.get(0)?,
                    topic: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|quiz: &QuizSummary| quiz.topic.to_lowercase().contains(&needle))
            .collect::<Vec<_>>();

        log::debug!("Search '{}' matched {} quizzes", query, quizzes.len());
        Ok(quizzes)
    }

    /// Get a specific quiz
    pub fn get_quiz(&self, quiz_id: i64) -> Result<Quiz> {
        self.conn
            .query_row(
                "SELECT id, topic FROM quizzes WHERE id = ?1",
                params![quiz_id],
                |row| {
                    Ok(Quiz {
                        id: row.get(0)?,
                        topic: row.get(1)?,
                    })
                },
            )
            .optional()?
            .ok_or(QuizStorageError::QuizNotFound(quiz_id))
    }

    /// Questions of a quiz in insertion order
    pub fn load_questions(&self, quiz_id: i64) -> Result<Vec<Question>> {
        let sql = format!(
            "SELECT {} FROM questions WHERE quiz_id = ?1 ORDER BY id",
            QUESTION_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let questions = stmt
            .query_map(params![quiz_id], question_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(questions)
    }

    /// Generated questions not attached to any quiz, oldest first
    pub fn list_unowned_questions(&self) -> Result<Vec<Question>> {
        let sql = format!(
            "SELECT {} FROM questions WHERE quiz_id IS NULL ORDER BY id",
            QUESTION_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let questions = stmt
            .query_map([], question_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(questions)
    }
}

fn check_records(questions: &[QuestionRecord]) -> Result<()> {
    if let Some(pos) = questions.iter().position(|q| !q.is_complete()) {
        return Err(QuizStorageError::Invalid(format!(
            "question {} has an empty field",
            pos + 1
        )));
    }
    Ok(())
}

fn insert_questions(tx: &Transaction<'_>, quiz_id: Option<i64>, questions: &[QuestionRecord]) -> Result<()> {
    let mut stmt = tx.prepare(
        "INSERT INTO questions (quiz_id, question, correct, wrong1, wrong2, wrong3, category) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;

    for q in questions {
        stmt.execute(params![
            quiz_id,
            q.question,
            q.correct,
            q.wrong1,
            q.wrong2,
            q.wrong3,
            q.category,
        ])?;
    }

    Ok(())
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        quiz_id: row.get(1)?,
        content: QuestionRecord {
            question: row.get(2)?,
            correct: row.get(3)?,
            wrong1: row.get(4)?,
            wrong2: row.get(5)?,
            wrong3: row.get(6)?,
            category: row.get(7)?,
        },
    })
}
