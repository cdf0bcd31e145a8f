//! In-memory record source for piped input

use async_trait::async_trait;
use legl_fields_domain::{Record, RecordSource, RecordSourceError};

use crate::records_fs::{parse_export, parse_lines};

const STDIN: &str = "<stdin>";

/// Records already held in memory
pub struct InMemoryRecordSource {
    records: Vec<Record>,
}

impl InMemoryRecordSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse piped input: a whole-document export, or JSON Lines
    pub fn from_stdin_text(content: &str) -> Result<Self, RecordSourceError> {
        let records = match parse_export(STDIN, content) {
            Ok(records) => records,
            Err(err) if content.trim_start().starts_with('[') => return Err(err),
            Err(_) => parse_lines(STDIN, content)?,
        };
        Ok(Self::new(records))
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn load(&self) -> Result<Vec<Record>, RecordSourceError> {
        if self.records.is_empty() {
            return Err(RecordSourceError::Empty(STDIN.to_string()));
        }
        tracing::debug!(count = self.records.len(), "Loaded piped records");
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_piped_wrapped_export() {
        let source = InMemoryRecordSource::from_stdin_text(
            "{\n  \"records\": [\n    {\"id\": \"a\", \"fields\": {\"title\": \"1987\"}}\n  ]\n}\n",
        )
        .unwrap();

        let records = source.load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text("title"), "1987");
    }

    #[tokio::test]
    async fn test_piped_json_lines() {
        let source = InMemoryRecordSource::from_stdin_text(
            "{\"id\":\"a\",\"fields\":{}}\n{\"id\":\"b\",\"fields\":{}}\n",
        )
        .unwrap();

        let records = source.load().await.unwrap();
        let ids: Vec<_> = records.iter().filter_map(|r| r.id.as_deref()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_piped_broken_array_reports_parse_error() {
        assert!(matches!(
            InMemoryRecordSource::from_stdin_text("[{\"fields\": "),
            Err(RecordSourceError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_input_error() {
        let source = InMemoryRecordSource::from_stdin_text("\n\n").unwrap();
        assert!(matches!(
            source.load().await,
            Err(RecordSourceError::Empty(_))
        ));
    }
}
