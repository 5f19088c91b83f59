//! Row engine for sortable, selectable data tables
//!
//! Rows are dynamic records of [`model::Value`]s. The [`table`] module orders
//! them by a column's sort directive, tracks which rows are checked, and
//! composes both into a pure reducer that a renderer drives with header and
//! checkbox events.

pub mod error;
pub mod model;
pub mod table;

pub use error::RowError;
pub use model::{Row, Value};
pub use table::{Column, Table, TableConfig, TableEvent, TableState};
