use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Summary of one documentation-generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub documents_written: Vec<PathBuf>,
    pub llm_calls_made: u32,
    pub generated_at: DateTime<Utc>,
}
