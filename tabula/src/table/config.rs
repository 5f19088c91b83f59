//! Table configuration.

use super::identity::RowKey;

/// Default text shown for a table without rows.
pub const DEFAULT_EMPTY_TEXT: &str = "No data available";

/// Per-table configuration.
///
/// # Example
///
/// ```
/// use tabula::table::{RowKey, TableConfig};
///
/// let config = TableConfig::new()
///     .selectable()
///     .row_key(RowKey::field("email"))
///     .empty_text("Nobody here yet");
/// assert!(config.selectable);
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// How row identity is derived for selection.
    pub row_key: RowKey,

    /// Whether rows can be checked. When false, selection events are ignored.
    pub selectable: bool,

    /// Text shown in place of rows when the table is empty.
    pub empty_text: String,

    /// Data is still being fetched. Rows are hidden and events are ignored.
    pub loading: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_key: RowKey::default(),
            selectable: false,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            loading: false,
        }
    }
}

impl TableConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row identity strategy.
    pub fn row_key(mut self, key: RowKey) -> Self {
        self.row_key = key;
        self
    }

    /// Allow rows to be checked.
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// Set the empty-table text.
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Mark the table as loading.
    pub fn loading(mut self) -> Self {
        self.loading = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;
    use crate::table::RowId;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert!(!config.selectable);
        assert!(!config.loading);
        assert_eq!(config.empty_text, "No data available");
        assert_eq!(config.row_key.id(&Row::new().set("id", 4i64), 0), RowId::Int(4));
    }

    #[test]
    fn test_builder_chain() {
        let config = TableConfig::new().selectable().loading().empty_text("None");
        assert!(config.selectable);
        assert!(config.loading);
        assert_eq!(config.empty_text, "None");
    }
}
