//! Filesystem record source for host table exports

use async_trait::async_trait;
use legl_fields_domain::{Record, RecordSource, RecordSourceError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Whole-file export shapes: a bare array or the host API's `{ "records": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum Export {
    List(Vec<Record>),
    Wrapped { records: Vec<Record> },
}

/// Reads records from a `.json` export or a `.jsonl` file
pub struct FsRecordSource {
    path: PathBuf,
}

impl FsRecordSource {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, RecordSourceError> {
        let path = path.as_ref().to_path_buf();

        if !path.is_file() {
            return Err(RecordSourceError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Records file not found: {}", path.display()),
            )));
        }

        Ok(Self { path })
    }

    fn is_jsonl(&self) -> bool {
        self.path.extension().and_then(|e| e.to_str()) == Some("jsonl")
    }
}

fn parse_error(origin: &str, message: impl Into<String>) -> RecordSourceError {
    RecordSourceError::Parse {
        file: origin.to_string(),
        message: message.into(),
    }
}

/// One record per non-blank line
pub(crate) fn parse_lines(origin: &str, content: &str) -> Result<Vec<Record>, RecordSourceError> {
    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(line)
            .map_err(|e| parse_error(origin, format!("line {}: {}", index + 1, e)))?;
        records.push(record);
    }
    Ok(records)
}

/// A whole-document export
pub(crate) fn parse_export(origin: &str, content: &str) -> Result<Vec<Record>, RecordSourceError> {
    let export: Export =
        serde_json::from_str(content).map_err(|e| parse_error(origin, e.to_string()))?;
    Ok(match export {
        Export::List(records) | Export::Wrapped { records } => records,
    })
}

#[async_trait]
impl RecordSource for FsRecordSource {
    async fn load(&self) -> Result<Vec<Record>, RecordSourceError> {
        let content = tokio::fs::read_to_string(&self.path).await?;

        let origin = self.path.display().to_string();
        let records = if self.is_jsonl() {
            parse_lines(&origin, &content)?
        } else {
            parse_export(&origin, &content)?
        };

        if records.is_empty() {
            return Err(RecordSourceError::Empty(origin));
        }

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "Loaded records"
        );

        Ok(records)
    }
}
