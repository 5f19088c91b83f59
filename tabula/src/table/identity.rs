//! Row identity.

use std::fmt;
use std::sync::Arc;

use crate::model::{Row, Value};

/// Identity used to correlate a row across renders for selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowId {
    /// Numeric identity read from a field.
    Int(i64),
    /// Textual identity read from a string field.
    Text(String),
    /// Any other field value, tagged with its type so `1.5` and `"1.5"`
    /// (or `true` and `"true"`) stay distinct.
    Typed { kind: &'static str, text: String },
    /// Positional fallback: index in the currently ordered rows.
    Index(usize),
}

impl RowId {
    /// Identity for a field value. `None` for null.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Int(i) => Some(RowId::Int(*i)),
            Value::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Some(RowId::Int(*f as i64))
            }
            Value::String(s) => Some(RowId::Text(s.clone())),
            other => Some(RowId::Typed {
                kind: other.type_name(),
                text: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(i) => write!(f, "{}", i),
            RowId::Text(s) => f.write_str(s),
            RowId::Typed { kind, text } => write!(f, "{}:{}", kind, text),
            RowId::Index(i) => write!(f, "#{}", i),
        }
    }
}

impl From<i64> for RowId {
    fn from(v: i64) -> Self {
        RowId::Int(v)
    }
}

impl From<&str> for RowId {
    fn from(v: &str) -> Self {
        RowId::Text(v.to_string())
    }
}

impl From<String> for RowId {
    fn from(v: String) -> Self {
        RowId::Text(v)
    }
}

/// Strategy for deriving a row's identity.
///
/// When the strategy yields nothing the row falls back to its position in
/// the currently ordered list, which is only stable while the order is.
#[derive(Clone)]
pub enum RowKey {
    /// Read identity from a field.
    Field(String),
    /// Caller-supplied identity function.
    Custom(Arc<dyn Fn(&Row) -> Option<RowId> + Send + Sync>),
}

impl RowKey {
    /// Identity from the named field.
    pub fn field(name: impl Into<String>) -> Self {
        RowKey::Field(name.into())
    }

    /// Identity from a caller-supplied function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Row) -> Option<RowId> + Send + Sync + 'static,
    {
        RowKey::Custom(Arc::new(f))
    }

    /// Identity of `row` at position `index` in the ordered rows.
    pub fn id(&self, row: &Row, index: usize) -> RowId {
        let id = match self {
            RowKey::Field(name) => row.get(name).and_then(RowId::from_value),
            RowKey::Custom(f) => f(row),
        };
        id.unwrap_or(RowId::Index(index))
    }
}

impl Default for RowKey {
    fn default() -> Self {
        RowKey::Field("id".to_string())
    }
}

impl fmt::Debug for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Field(name) => f.debug_tuple("Field").field(name).finish(),
            RowKey::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
