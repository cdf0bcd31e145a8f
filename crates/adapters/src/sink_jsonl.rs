//! JSON Lines sink for derived values

use async_trait::async_trait;
use legl_fields_domain::{DerivedField, DerivedSink, SinkError};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Appends one JSON object per derived field
#[derive(Debug, Clone)]
pub struct JsonlSink {
    file: Arc<Mutex<tokio::fs::File>>,
}

impl JsonlSink {
    pub async fn new(path: PathBuf) -> Result<Self, SinkError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        Ok(Self {
            file: Arc::new(Mutex::new(file)),
        })
    }
}

#[async_trait]
impl DerivedSink for JsonlSink {
    async fn write(&self, field: &DerivedField) -> Result<(), SinkError> {
        let line = serde_json::to_string(field)?;
        let mut file = self.file.lock().await;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        Ok(())
    }

    async fn flush(&self) -> Result<(), SinkError> {
        self.file.lock().await.flush().await?;
        Ok(())
    }
}

/// Sink that drops everything, for runs that only print
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

#[async_trait]
impl DerivedSink for DiscardSink {
    async fn write(&self, _field: &DerivedField) -> Result<(), SinkError> {
        Ok(())
    }
}
