//! Error types

/// Error type for loading rows from JSON.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    /// The input is not valid JSON.
    #[error("Invalid row JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an array of rows.
    #[error("Expected a JSON array of rows")]
    NotAnArray,

    /// A row is not a JSON object.
    #[error("Row {index} is not a JSON object")]
    NotAnObject { index: usize },
}

impl RowError {
    /// Creates a new not-an-object error for the row at `index`.
    pub fn not_an_object(index: usize) -> Self {
        Self::NotAnObject { index }
    }
}
