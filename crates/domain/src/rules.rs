//! Ordered (pattern, label) tables and the two ways of scanning them

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Separator appended after each matched label
pub const LABEL_SEPARATOR: &str = ", ";

/// A single matcher and the fragment it emits
#[derive(Debug, Clone)]
pub struct Rule {
    pub pattern: Regex,
    pub label: String,
}

/// Error building a rule table from pattern source
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Invalid pattern '{pattern}' in table '{table}': {message}")]
    InvalidPattern {
        table: String,
        pattern: String,
        message: String,
    },
}

/// Pattern source for one rule, as written in rule files
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSpec {
    pub pattern: String,
    pub label: String,
}

/// A named, ordered rule table reading one record field
#[derive(Debug, Clone)]
pub struct RuleTable {
    name: String,
    field: String,
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Compile a table from `(pattern, label)` pairs
    pub fn new(
        name: impl Into<String>,
        field: impl Into<String>,
        specs: &[(&str, &str)],
    ) -> Result<Self, RuleError> {
        let name = name.into();
        let mut rules = Vec::with_capacity(specs.len());
        for (pattern, label) in specs {
            rules.push(compile(&name, pattern, label)?);
        }
        Ok(Self {
            name,
            field: field.into(),
            rules,
        })
    }

    /// Compile a table from owned rule specs
    pub fn from_specs(
        name: impl Into<String>,
        field: impl Into<String>,
        specs: &[RuleSpec],
    ) -> Result<Self, RuleError> {
        let name = name.into();
        let rules = specs
            .iter()
            .map(|spec| compile(&name, &spec.pattern, &spec.label))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name,
            field: field.into(),
            rules,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record field this table reads
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Match-all scan: every matching label in table order, `", "`-joined
    pub fn tag(&self, text: &str) -> String {
        let mut acc = String::new();
        for rule in &self.rules {
            if rule.pattern.is_match(text) {
                acc.push_str(&rule.label);
                acc.push_str(LABEL_SEPARATOR);
            }
        }
        strip_separator(acc)
    }

    /// First-match scan: label of the first matching rule
    pub fn first_label(&self, text: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(text))
            .map(|rule| rule.label.as_str())
    }
}

fn compile(table: &str, pattern: &str, label: &str) -> Result<Rule, RuleError> {
    let regex = Regex::new(pattern).map_err(|e| RuleError::InvalidPattern {
        table: table.to_string(),
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    Ok(Rule {
        pattern: regex,
        label: label.to_string(),
    })
}

/// Drop one trailing `", "` left by the accumulator
fn strip_separator(mut acc: String) -> String {
    if acc.ends_with(LABEL_SEPARATOR) {
        acc.truncate(acc.len() - LABEL_SEPARATOR.len());
    }
    acc
}
