//! Classification use case: tag ad-hoc text with rule tables

use crate::{
    derivers::tags,
    model::TagResult,
    ports::{RuleTableError, RuleTableRepo},
    rules::RuleTable,
};

/// Configuration for the classify use case
#[derive(Debug, Clone, Default)]
pub struct ClassifyConfig {
    /// Table names to run (empty = every table)
    pub tables: Vec<String>,
    /// Drop tables that produced no tags
    pub skip_empty: bool,
}

/// Error type for classification
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("Unknown rule table '{0}'")]
    UnknownTable(String),
    #[error(transparent)]
    Rules(#[from] RuleTableError),
}

/// Use case for tagging text against built-in and custom tables
pub struct ClassifyUseCase {
    tables: Vec<RuleTable>,
    config: ClassifyConfig,
}

impl ClassifyUseCase {
    /// Start from the built-in tables only
    pub fn new(config: ClassifyConfig) -> Self {
        let tables = tags::builtin_tables()
            .into_iter()
            .cloned()
            .collect();
        Self { tables, config }
    }

    /// Add custom tables from a repository
    ///
    /// A custom table with a built-in table's name replaces it.
    pub async fn with_repo<R: RuleTableRepo + ?Sized>(
        mut self,
        repo: &R,
    ) -> Result<Self, ClassifyError> {
        let custom = repo.load().await?;
        tracing::info!(count = custom.len(), "Loaded custom rule tables");

        for table in custom {
            match self.tables.iter_mut().find(|t| t.name() == table.name()) {
                Some(existing) => {
                    tracing::debug!(table = %table.name(), "Custom table overrides built-in");
                    *existing = table;
                }
                None => self.tables.push(table),
            }
        }
        Ok(self)
    }

    pub fn tables(&self) -> &[RuleTable] {
        &self.tables
    }

    /// Tag `text` with every selected table, in selection order
    pub fn classify(&self, text: &str) -> Result<Vec<TagResult>, ClassifyError> {
        let selected = self.select_tables()?;

        tracing::info!(
            tables = selected.len(),
            chars = text.chars().count(),
            "Classifying text"
        );

        let results = selected
            .into_iter()
            .map(|table| TagResult {
                table: table.name().to_string(),
                tags: table.tag(text),
            })
            .filter(|result| !self.config.skip_empty || !result.tags.is_empty())
            .collect();

        Ok(results)
    }

    fn select_tables(&self) -> Result<Vec<&RuleTable>, ClassifyError> {
        if self.config.tables.is_empty() {
            return Ok(self.tables.iter().collect());
        }
        self.config
            .tables
            .iter()
            .map(|name| {
                self.tables
                    .iter()
                    .find(|t| t.name() == name)
                    .ok_or_else(|| ClassifyError::UnknownTable(name.clone()))
            })
            .collect()
    }
}
