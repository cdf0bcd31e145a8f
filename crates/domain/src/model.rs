//! Domain models and value objects

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single field value as exported by the host table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(serde_json::Number),
    List(Vec<String>),
    Null,
    /// Lookup rollups, collaborators, attachments and other structured values
    Other(serde_json::Value),
}

impl FieldValue {
    /// Render the value the way the host concatenates it into a string
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Flag(true) => "true".to_string(),
            FieldValue::Flag(false) | FieldValue::Null => String::new(),
            FieldValue::Number(number) => number.to_string(),
            FieldValue::List(items) => items.join(", "),
            FieldValue::Other(value) => render_json(value),
        }
    }
}

/// Objects render as their display name, arrays as their rendered items
fn render_json(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::String(text) => text.clone(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) | Value::Null => String::new(),
        Value::Number(number) => number.to_string(),
        Value::Array(items) => items
            .iter()
            .map(render_json)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => ["name", "filename"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .unwrap_or_default()
            .to_string(),
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// One row of the host table: a record id plus named field values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Host record ID, if the export carried one
    #[serde(default)]
    pub id: Option<String>,
    /// Field name to value
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter
    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Rendered text of a field; missing fields render blank
    pub fn text(&self, name: &str) -> String {
        self.fields
            .get(name)
            .map(FieldValue::render)
            .unwrap_or_default()
    }

    /// Whether the field renders to a non-empty string
    pub fn is_set(&self, name: &str) -> bool {
        !self.text(name).is_empty()
    }

    /// Rendered text of the first populated field among `names`
    pub fn first_text(&self, names: &[&str]) -> String {
        names
            .iter()
            .map(|name| self.text(name))
            .find(|text| !text.is_empty())
            .unwrap_or_default()
    }
}

/// Outcome of one derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derived {
    /// A non-empty derived string
    Value(String),
    /// No rule applied
    Empty,
    /// A dispatching deriver was handed a selector it does not know
    Unrecognized { selector: String },
}

impl Derived {
    /// Wrap a string, mapping "" to `Empty`
    pub fn from_string(value: String) -> Self {
        if value.is_empty() {
            Derived::Empty
        } else {
            Derived::Value(value)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Derived::Value(value) => value,
            Derived::Empty | Derived::Unrecognized { .. } => "",
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Derived::Value(value) => value,
            Derived::Empty | Derived::Unrecognized { .. } => String::new(),
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            Derived::Value(_) => Outcome::Value,
            Derived::Empty => Outcome::Empty,
            Derived::Unrecognized { .. } => Outcome::Unrecognized,
        }
    }
}

/// Serializable tag for a `Derived` outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Value,
    Empty,
    Unrecognized,
}

/// A derived value attached to the record it was computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedField {
    /// Source record ID (or its position when the export had none)
    pub record_id: String,
    /// Deriver name
    pub field: String,
    /// Derived string, empty when nothing applied
    pub value: String,
    pub outcome: Outcome,
}

/// Tagging result for ad-hoc text against one table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagResult {
    /// Table name
    pub table: String,
    /// Comma-joined labels
    pub tags: String,
}
