//! Output policy for derived values

use serde::{Deserialize, Serialize};

use crate::model::{Derived, DerivedField};

/// What to do when a dispatching deriver meets an unknown selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnUnrecognized {
    /// Emit an empty value and carry on
    #[default]
    Empty,
    /// Fail the derivation
    Reject,
}

/// Policy configuration
#[derive(Debug, Clone, Default)]
pub struct PolicyConfig {
    pub on_unrecognized: OnUnrecognized,
    /// Maximum characters in a derived value
    pub max_value_chars: Option<usize>,
}

/// Policy validator for derived values
#[derive(Debug, Clone, Default)]
pub struct PolicyValidator {
    config: PolicyConfig,
}

impl PolicyValidator {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Turn one derivation into an output row, or a violation
    pub fn validate(
        &self,
        record_id: &str,
        field: &str,
        derived: Derived,
    ) -> Result<DerivedField, PolicyViolation> {
        if let Derived::Unrecognized { selector } = &derived {
            if self.config.on_unrecognized == OnUnrecognized::Reject {
                return Err(PolicyViolation::UnrecognizedVariant {
                    record_id: record_id.to_string(),
                    field: field.to_string(),
                    selector: selector.clone(),
                });
            }
        }

        if let Some(max) = self.config.max_value_chars {
            let len = derived.as_str().chars().count();
            if len > max {
                return Err(PolicyViolation::TooLong {
                    record_id: record_id.to_string(),
                    field: field.to_string(),
                    len,
                    max,
                });
            }
        }

        Ok(DerivedField {
            record_id: record_id.to_string(),
            field: field.to_string(),
            outcome: derived.outcome(),
            value: derived.into_string(),
        })
    }
}

/// Policy violation errors
#[derive(Debug, thiserror::Error)]
pub enum PolicyViolation {
    #[error("Unrecognized variant '{selector}' for {field} on record {record_id}")]
    UnrecognizedVariant {
        record_id: String,
        field: String,
        selector: String,
    },
    #[error("Value of {field} on record {record_id} is too long: {len} > {max} chars")]
    TooLong {
        record_id: String,
        field: String,
        len: usize,
        max: usize,
    },
}
