//! Filesystem repository for custom rule tables
//!
//! Every `*.toml` file in the directory holds one table:
//!
//! ```toml
//! name = "roles"
//! field = "text"
//!
//! [[rules]]
//! pattern = "[Ee]mployer"
//! label = "Employer"
//! ```

use async_trait::async_trait;
use legl_fields_domain::{RuleSpec, RuleTable, RuleTableError, RuleTableRepo};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

fn default_field() -> String {
    "text".to_string()
}

#[derive(Deserialize)]
struct RuleFile {
    name: String,
    #[serde(default = "default_field")]
    field: String,
    #[serde(default)]
    rules: Vec<RuleSpec>,
}

/// Filesystem rule table repository
pub struct FsRuleTableRepo {
    tables_dir: PathBuf,
}

impl FsRuleTableRepo {
    pub fn new(tables_dir: impl AsRef<Path>) -> Result<Self, RuleTableError> {
        let tables_dir = tables_dir.as_ref().to_path_buf();

        if !tables_dir.is_dir() {
            return Err(RuleTableError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Rule tables directory not found: {}", tables_dir.display()),
            )));
        }

        Ok(Self { tables_dir })
    }

    async fn toml_files(&self) -> Result<Vec<PathBuf>, RuleTableError> {
        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.tables_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("toml") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

#[async_trait]
impl RuleTableRepo for FsRuleTableRepo {
    async fn load(&self) -> Result<Vec<RuleTable>, RuleTableError> {
        let mut tables = Vec::new();
        let mut names_seen: HashMap<String, String> = HashMap::new();

        for path in self.toml_files().await? {
            let content = tokio::fs::read_to_string(&path).await?;
            let file: RuleFile = toml::from_str(&content).map_err(|e| RuleTableError::Parse {
                file: path.display().to_string(),
                message: e.to_string(),
            })?;

            if let Some(existing_file) = names_seen.get(&file.name) {
                return Err(RuleTableError::DuplicateName {
                    name: file.name,
                    files: vec![existing_file.clone(), path.display().to_string()],
                });
            }
            names_seen.insert(file.name.clone(), path.display().to_string());

            let table = RuleTable::from_specs(file.name, file.field, &file.rules)?;
            tracing::debug!(
                table = %table.name(),
                rules = table.len(),
                path = %path.display(),
                "Loaded rule table"
            );
            tables.push(table);
        }

        if tables.is_empty() {
            return Err(RuleTableError::Empty(self.tables_dir.display().to_string()));
        }

        tables.sort_by(|a, b| a.name().cmp(b.name()));

        Ok(tables)
    }
}
