use clap::ValueEnum;
use std::env;
use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| Error::Config("OPENAI_API_KEY environment variable not set".to_string()))?;

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string());

        Ok(Self {
            openai_api_key,
            model,
        })
    }
}

/// How much technical depth the generated documentation should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DetailLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailLevel::Low => write!(f, "low"),
            DetailLevel::Medium => write!(f, "medium"),
            DetailLevel::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub detail_level: DetailLevel,
    pub max_llm_calls: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            detail_level: DetailLevel::Medium,
            max_llm_calls: 20,
        }
    }
}
