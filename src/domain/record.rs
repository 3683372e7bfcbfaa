use std::collections::BTreeMap;

use serde_json::{Number, Value};
use thiserror::Error;

/// Column holding the section identifier of a record.
pub const SECTION_COLUMN: &str = "Section";

/// A present field value. Missing values never reach this type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Number),
}

impl FieldValue {
    /// String rendering used for length checks and reporting.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record {index} must be an object")]
    NotAnObject { index: usize },

    #[error("record {index} has no `Section` value")]
    MissingSection { index: usize },

    #[error("record {index} has a non-scalar `Section` value")]
    InvalidSection { index: usize },
}

/// One row of the input table.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    pub index: usize,
    pub section: String,
    fields: BTreeMap<String, FieldValue>,
}

impl InputRecord {
    pub fn new(
        index: usize,
        section: impl Into<String>,
        fields: impl IntoIterator<Item = (String, FieldValue)>,
    ) -> Self {
        Self {
            index,
            section: section.into(),
            fields: fields.into_iter().collect(),
        }
    }

    /// Builds a record from a row object such as `{"Section": "L1", "1": 2}`.
    ///
    /// `null` columns are treated as missing and dropped.
    pub fn from_value(index: usize, value: &Value) -> Result<Self, RecordError> {
        let Value::Object(map) = value else {
            return Err(RecordError::NotAnObject { index });
        };

        let section = match map.get(SECTION_COLUMN) {
            None | Some(Value::Null) => return Err(RecordError::MissingSection { index }),
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(_) => return Err(RecordError::InvalidSection { index }),
        };

        let fields = map
            .iter()
            .filter(|(key, _)| key.as_str() != SECTION_COLUMN)
            .filter_map(|(key, cell)| field_value(cell).map(|field| (key.clone(), field)));

        Ok(Self::new(index, section, fields))
    }

    pub fn field(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column)
    }

    pub fn is_present(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }
}

fn field_value(cell: &Value) -> Option<FieldValue> {
    match cell {
        Value::Null => None,
        Value::String(text) => Some(FieldValue::Text(text.clone())),
        Value::Number(number) => Some(FieldValue::Number(number.clone())),
        other => Some(FieldValue::Text(other.to_string())),
    }
}

/// Converts loaded row objects into records, preserving input order.
pub fn records_from_values(values: &[Value]) -> Result<Vec<InputRecord>, RecordError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| InputRecord::from_value(index, value))
        .collect()
}
