//! Application configuration
//!
//! Read from `config.toml` in the platform config directory
//! (e.g. `~/.config/quizbox/config.toml`). Every key is optional:
//!
//! ```toml
//! database_path = "/home/me/quiz.db"
//!
//! [generator]
//! endpoint = "http://localhost:8080/v1/completions"
//! model = "TinyLlama/TinyLlama-1.1B-Chat-v1.0"
//! question_count = 5
//! temperature = 0.8
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "quizbox";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite database file (defaults to the platform data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    pub generator: GeneratorConfig,
}

/// Settings for the text-generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// OpenAI-compatible completions URL
    pub endpoint: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// How many questions the prompt asks for
    pub question_count: u32,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub repetition_penalty: f32,
    /// Request timeout. No timeout unless set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/v1/completions".to_string(),
            model: "TinyLlama/TinyLlama-1.1B-Chat-v1.0".to_string(),
            api_key: None,
            question_count: 5,
            max_tokens: 3000,
            temperature: 0.8,
            top_p: 0.92,
            top_k: 50,
            repetition_penalty: 1.15,
            timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Default location of `config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR).join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => p,
            None => return Ok(Self::default()),
        };

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Database file to use: the configured one, or `<data dir>/quizbox/quiz.db`
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }
        dirs::data_local_dir()
            .map(|p| p.join(APP_DIR).join("quiz.db"))
            .ok_or(ConfigError::DataDirNotFound)
    }
}
