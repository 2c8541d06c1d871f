use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("repository path does not exist or is not a directory: {}", .0.display())]
    InvalidRepository(PathBuf),

    #[error("LLM API error: {0}")]
    LlmApi(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM call budget of {0} exhausted")]
    CallBudgetExhausted(u32),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
