//! Dynamic table row

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;
use crate::error::RowError;

/// A dynamic record displayed as one table line.
///
/// Rows hold field values by name. The table engine only ever reads the field
/// named by the active sort column and the field used for row identity.
/// Fields are kept in key order so a row always serializes the same way.
///
/// # Example
///
/// ```
/// use tabula::model::{Row, Value};
///
/// let row = Row::new().set("id", 1i64).set("name", "Amy");
/// assert_eq!(row.get("name"), Some(&Value::from("Amy")));
/// assert_eq!(row.get("email"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: BTreeMap<String, Value>,
}

impl Row {
    /// Creates a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from a parsed JSON value, which must be an object.
    pub fn from_json(value: serde_json::Value) -> Result<Self, RowError> {
        Self::from_json_at(value, 0)
    }

    fn from_json_at(value: serde_json::Value, index: usize) -> Result<Self, RowError> {
        let serde_json::Value::Object(map) = value else {
            return Err(RowError::not_an_object(index));
        };
        let fields = map
            .into_iter()
            .map(|(name, value)| (name, Value::from_json(value)))
            .collect();
        Ok(Self { fields })
    }

    // =========================================================================
    // Field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field value unless it is absent or null.
    pub fn present(&self, field: &str) -> Option<&Value> {
        self.get(field).filter(|v| !v.is_null())
    }

    /// Returns `true` if the row contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns all fields in key order.
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }
}

/// Parses a JSON array of row objects.
pub fn rows_from_json(json: &str) -> Result<Vec<Row>, RowError> {
    let serde_json::Value::Array(items) = serde_json::from_str::<serde_json::Value>(json)? else {
        return Err(RowError::NotAnArray);
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Row::from_json_at(item, index))
        .collect()
}
