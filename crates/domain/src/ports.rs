//! Port definitions (traits) for external dependencies
//!
//! Derivers themselves are pure. These traits are the edges where records
//! come in, custom rule tables are loaded, and derived values go out.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{DerivedField, Record};
use crate::rules::RuleTable;

/// Error type for record sources
#[derive(Debug, Error)]
pub enum RecordSourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error in {file}: {message}")]
    Parse { file: String, message: String },
    #[error("No records found in {0}")]
    Empty(String),
}

/// Port for loading exported host records
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Record>, RecordSourceError>;
}

/// Error type for rule table repositories
#[derive(Debug, Error)]
pub enum RuleTableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error in {file}: {message}")]
    Parse { file: String, message: String },
    #[error("Invalid pattern '{pattern}' in table '{table}': {message}")]
    InvalidPattern {
        table: String,
        pattern: String,
        message: String,
    },
    #[error("Duplicate table name '{name}' in files: {files:?}")]
    DuplicateName { name: String, files: Vec<String> },
    #[error("No rule tables found in {0}")]
    Empty(String),
}

impl From<crate::rules::RuleError> for RuleTableError {
    fn from(err: crate::rules::RuleError) -> Self {
        match err {
            crate::rules::RuleError::InvalidPattern {
                table,
                pattern,
                message,
            } => RuleTableError::InvalidPattern {
                table,
                pattern,
                message,
            },
        }
    }
}

/// Port for loading custom rule tables
#[async_trait]
pub trait RuleTableRepo: Send + Sync {
    async fn load(&self) -> Result<Vec<RuleTable>, RuleTableError>;
}

/// Error type for derived-value sinks
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Port for storing derived values
#[async_trait]
pub trait DerivedSink: Send + Sync {
    async fn write(&self, field: &DerivedField) -> Result<(), SinkError>;

    /// Flush buffered output, if any
    async fn flush(&self) -> Result<(), SinkError> {
        Ok(())
    }
}
