//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use crate::model::{Row, Value};

/// Placeholder shown for a missing cell value.
pub const MISSING_CELL: &str = "—";

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Per-column display callback: `(value, row, index) -> text`.
///
/// Only used for display. Sorting and identity always read the raw value.
pub type CellFormatter = Arc<dyn Fn(Option<&Value>, &Row, usize) -> String + Send + Sync>;

/// Column descriptor.
///
/// `key` identifies the column for sort state and must be unique within a
/// column list. `data_index` names the row field the column compares and
/// displays.
///
/// # Examples
///
/// ```
/// use tabula::table::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("name", "name").title("Name").sortable(),
///     Column::new("age", "age").align(Alignment::Right).sortable(),
///     Column::new("email", "email").width(28),
/// ];
/// assert!(columns[0].sortable);
/// assert!(!columns[2].sortable);
/// ```
#[derive(Clone)]
pub struct Column {
    /// Unique identifier for this column.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Row field read by this column.
    pub data_index: String,
    /// Whether this column takes part in sorting.
    pub sortable: bool,
    /// Fixed display width, if any.
    pub width: Option<u16>,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Optional display callback.
    pub formatter: Option<CellFormatter>,
}

impl Column {
    /// Create a column reading `data_index`. The title defaults to the key.
    pub fn new(key: impl Into<String>, data_index: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            title: key.clone(),
            key,
            data_index: data_index.into(),
            sortable: false,
            width: None,
            align: Alignment::Left,
            formatter: None,
        }
    }

    /// Set the header text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a fixed display width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set a display callback for this column's cells.
    pub fn format<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&Value>, &Row, usize) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(f));
        self
    }

    /// The raw value this column reads from `row`, if present and not null.
    pub fn value<'r>(&self, row: &'r Row) -> Option<&'r Value> {
        row.present(&self.data_index)
    }

    /// Display text for this column's cell in `row` at `index`.
    pub fn cell_text(&self, row: &Row, index: usize) -> String {
        let value = self.value(row);
        if let Some(formatter) = &self.formatter {
            return formatter(value, row, index);
        }
        match value {
            Some(v) => v.to_string(),
            None => MISSING_CELL.to_string(),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("data_index", &self.data_index)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

/// Find the first column with the given key.
pub fn find_column<'c>(columns: &'c [Column], key: &str) -> Option<&'c Column> {
    columns.iter().find(|c| c.key == key)
}
