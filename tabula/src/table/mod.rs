//! Table row engine: sorting, selection, and the reducer composing them.

mod column;
mod compare;
mod config;
mod identity;
mod selection;
mod sort;
mod state;

pub use column::{Alignment, CellFormatter, Column, MISSING_CELL, find_column};
pub use compare::{compare_values, locale_cmp};
pub use config::TableConfig;
pub use identity::{RowId, RowKey};
pub use selection::{CheckState, Selection, SelectionChange, SelectionEngine};
pub use sort::{Direction, SortDirective, compute_order, next_directive, sort_indicator};
pub use state::{HeaderView, Table, TableEvent, TableState, TableView, ViewRow};
