//! Table reducer: explicit state in, event in, next state out.

use std::borrow::Cow;

use log::debug;

use super::column::Column;
use super::config::TableConfig;
use super::selection::{CheckState, Selection, SelectionEngine};
use super::sort::{Direction, SortDirective, compute_order, next_directive, sort_indicator};
use crate::model::Row;

/// Caller-owned table state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    /// Current sort directive.
    pub sort: SortDirective,
    /// Currently selected row identities.
    pub selection: Selection,
}

/// An input event from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The header of the column with this key was activated.
    HeaderClicked(String),
    /// The checkbox of the row at `index` in the current ordering changed.
    RowToggled { index: usize, checked: bool },
    /// The select-all checkbox changed.
    AllToggled(bool),
}

/// A snapshot of table data: rows, columns, and configuration.
///
/// # Example
///
/// ```
/// use tabula::{Column, Row, Table, TableEvent, TableState, Value};
///
/// let table = Table::new(vec![Column::new("name", "name").sortable()]).with_rows(vec![
///     Row::new().set("id", 1i64).set("name", "Bob"),
///     Row::new().set("id", 2i64).set("name", "Amy"),
/// ]);
///
/// let state = table.update(
///     &TableState::default(),
///     TableEvent::HeaderClicked("name".into()),
///     |_| {},
/// );
/// let ordered = table.ordered(&state);
/// assert_eq!(ordered[0].get("name"), Some(&Value::from("Amy")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Row>,
    columns: Vec<Column>,
    config: TableConfig,
}

impl Table {
    /// Create an empty table with column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }

    /// Set the rows (builder pattern).
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    /// Set the configuration (builder pattern).
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the row snapshot.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    /// Rows in caller order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Rows ordered by the state's sort directive.
    pub fn ordered(&self, state: &TableState) -> Cow<'_, [Row]> {
        compute_order(&self.rows, &self.columns, &state.sort)
    }

    /// Apply `event` to `state` and return the next state.
    ///
    /// Selection events operate on the current ordering and call `notify`
    /// with the selected rows in that ordering. They are ignored when the
    /// table is not selectable. Sorting keeps the selection. A loading
    /// table ignores every event.
    pub fn update<F>(&self, state: &TableState, event: TableEvent, notify: F) -> TableState
    where
        F: FnOnce(&[&Row]),
    {
        match event {
            _ if self.config.loading => {
                debug!("Ignoring {:?} while loading", event);
                state.clone()
            }
            TableEvent::HeaderClicked(key) => TableState {
                sort: next_directive(&state.sort, &self.columns, &key),
                selection: state.selection.clone(),
            },
            TableEvent::RowToggled { .. } | TableEvent::AllToggled(_) if !self.config.selectable => {
                debug!("Ignoring {:?} on non-selectable table", event);
                state.clone()
            }
            TableEvent::RowToggled { index, checked } => {
                let ordered = self.ordered(state);
                let engine = SelectionEngine::new(&ordered, &self.config.row_key);
                let change = engine.toggle_row(&state.selection, index, checked, notify);
                TableState {
                    sort: state.sort.clone(),
                    selection: change.selection,
                }
            }
            TableEvent::AllToggled(checked) => {
                let ordered = self.ordered(state);
                let engine = SelectionEngine::new(&ordered, &self.config.row_key);
                let change = engine.select_all(checked, notify);
                TableState {
                    sort: state.sort.clone(),
                    selection: change.selection,
                }
            }
        }
    }

    /// Render-ready projection of this table under `state`.
    ///
    /// While loading, the view has headers but no rows, no empty text and
    /// no select-all checkbox.
    pub fn view(&self, state: &TableState) -> TableView<'_> {
        let loading = self.config.loading;
        let ordered = if loading {
            Cow::Borrowed(&[][..])
        } else {
            self.ordered(state)
        };
        let (checked, select_all) = {
            let engine = SelectionEngine::new(&ordered, &self.config.row_key);
            let checked = (0..ordered.len())
                .map(|index| {
                    engine
                        .id_at(index)
                        .is_some_and(|id| state.selection.contains(&id))
                })
                .collect::<Vec<bool>>();
            let select_all = self
                .config
                .selectable
                .then(|| engine.header_checkbox(&state.selection))
                .filter(|_| !loading);
            (checked, select_all)
        };

        let headers = self
            .columns
            .iter()
            .map(|column| HeaderView {
                column,
                indicator: sort_indicator(&state.sort, &column.key),
            })
            .collect();

        TableView {
            empty_text: (ordered.is_empty() && !loading)
                .then_some(self.config.empty_text.as_str()),
            ordered,
            checked,
            headers,
            select_all,
            loading,
        }
    }
}

/// Header cell of a [`TableView`].
#[derive(Debug, Clone)]
pub struct HeaderView<'a> {
    pub column: &'a Column,
    /// Sort arrow to show, if this column is the active one.
    pub indicator: Option<Direction>,
}

/// One row of a [`TableView`].
#[derive(Debug, Clone, Copy)]
pub struct ViewRow<'v> {
    /// Position in the current ordering.
    pub index: usize,
    pub row: &'v Row,
    pub checked: bool,
}

impl ViewRow<'_> {
    /// Display text of each column's cell, in column order.
    pub fn cells(&self, columns: &[Column]) -> Vec<String> {
        columns
            .iter()
            .map(|column| column.cell_text(self.row, self.index))
            .collect()
    }
}

/// Everything a renderer needs to draw a table.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    ordered: Cow<'a, [Row]>,
    checked: Vec<bool>,
    pub headers: Vec<HeaderView<'a>>,
    /// Select-all checkbox; `None` when the table is not selectable.
    pub select_all: Option<CheckState>,
    /// Set when there are no rows to show.
    pub empty_text: Option<&'a str>,
    /// The table is waiting for data.
    pub loading: bool,
}

impl TableView<'_> {
    /// Rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = ViewRow<'_>> {
        self.ordered
            .iter()
            .zip(&self.checked)
            .enumerate()
            .map(|(index, (row, checked))| ViewRow {
                index,
                row,
                checked: *checked,
            })
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;
    use crate::table::RowId;

    fn table() -> Table {
        Table::new(vec![
            Column::new("name", "name").sortable(),
            Column::new("age", "age").sortable(),
        ])
        .with_rows(vec![
            Row::new().set("id", 1i64).set("name", "Bob").set("age", 41i64),
            Row::new().set("id", 2i64).set("name", "Amy").set("age", 29i64),
        ])
    }

    #[test]
    fn test_selection_ignored_when_not_selectable() {
        let table = table();
        let mut notified = false;
        let state = table.update(&TableState::default(), TableEvent::AllToggled(true), |_| {
            notified = true
        });

        assert!(!notified);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_sort_keeps_selection() {
        let table = table().with_config(TableConfig::new().selectable());
        let state = table.update(
            &TableState::default(),
            TableEvent::RowToggled { index: 0, checked: true },
            |_| {},
        );
        let state = table.update(&state, TableEvent::HeaderClicked("age".into()), |_| {});

        assert_eq!(state.sort, SortDirective::ascending("age"));
        assert!(state.selection.contains(&RowId::Int(1)));
    }

    #[test]
    fn test_view_marks_checked_rows_in_order() {
        let table = table().with_config(TableConfig::new().selectable());
        let state = TableState {
            sort: SortDirective::ascending("name"),
            selection: [RowId::Int(1)].into_iter().collect(),
        };

        let view = table.view(&state);
        let rows: Vec<_> = view
            .rows()
            .map(|r| (r.row.get("name").cloned(), r.checked))
            .collect();

        assert_eq!(
            rows,
            vec![
                (Some(Value::from("Amy")), false),
                (Some(Value::from("Bob")), true)
            ]
        );
        assert_eq!(view.select_all, Some(CheckState::Indeterminate));
        assert_eq!(view.headers[0].indicator, Some(Direction::Ascending));
        assert_eq!(view.headers[1].indicator, None);
        assert!(view.empty_text.is_none());
    }

    #[test]
    fn test_view_empty_table() {
        let table = Table::new(vec![Column::new("name", "name")])
            .with_config(TableConfig::new().empty_text("Nothing yet"));
        let view = table.view(&TableState::default());

        assert!(view.is_empty());
        assert_eq!(view.empty_text, Some("Nothing yet"));
        assert_eq!(view.select_all, None);
    }

    #[test]
    fn test_view_row_cells() {
        let table = table();
        let view = table.view(&TableState::default());
        let first = view.rows().next().unwrap();
        assert_eq!(first.cells(table.columns()), vec!["Bob", "41"]);
    }

    #[test]
    fn test_view_while_loading() {
        let table = table().with_config(TableConfig::new().selectable().loading());
        let view = table.view(&TableState::default());

        assert!(view.loading);
        assert!(view.is_empty());
        assert_eq!(view.rows().count(), 0);
        assert_eq!(view.headers.len(), 2);
        assert_eq!(view.empty_text, None);
        assert_eq!(view.select_all, None);
    }

    #[test]
    fn test_events_ignored_while_loading() {
        let table = table().with_config(TableConfig::new().selectable().loading());
        let mut notified = false;
        let state = table.update(&TableState::default(), TableEvent::AllToggled(true), |_| {
            notified = true
        });
        let state = table.update(&state, TableEvent::HeaderClicked("name".into()), |_| {});

        assert!(!notified);
        assert_eq!(state, TableState::default());
    }

    #[test]
    fn test_empty_loading_table_hides_empty_text() {
        let table = Table::new(vec![Column::new("name", "name")])
            .with_config(TableConfig::new().loading());
        let view = table.view(&TableState::default());

        assert!(view.loading);
        assert_eq!(view.empty_text, None);
    }
}
