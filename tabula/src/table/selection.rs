//! Selection engine: checkbox bookkeeping over the ordered rows.

use std::collections::HashSet;

use log::debug;

use super::identity::{RowId, RowKey};
use crate::model::Row;

/// Tracks selected rows by their identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<RowId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an identity is selected.
    pub fn contains(&self, id: &RowId) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected identities.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate selected identities in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RowId> {
        self.selected.iter()
    }
}

impl FromIterator<RowId> for Selection {
    fn from_iter<I: IntoIterator<Item = RowId>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

/// Tri-state of a checkbox that summarizes several rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Result of a selection mutation: the new set, and the selected rows in
/// ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange<'a> {
    pub selection: Selection,
    pub rows: Vec<&'a Row>,
}

/// Selection operations over the currently ordered rows.
///
/// Identities are derived with `key`, so index-fallback identities refer to
/// positions in *this* ordering.
#[derive(Debug, Clone, Copy)]
pub struct SelectionEngine<'a> {
    rows: &'a [Row],
    key: &'a RowKey,
}

impl<'a> SelectionEngine<'a> {
    pub fn new(rows: &'a [Row], key: &'a RowKey) -> Self {
        Self { rows, key }
    }

    /// Identity of the row at `index`.
    pub fn id_at(&self, index: usize) -> Option<RowId> {
        self.rows.get(index).map(|row| self.key.id(row, index))
    }

    fn ids(&self) -> impl Iterator<Item = RowId> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| self.key.id(row, index))
    }

    /// Ordered rows whose identity is in `selection`.
    pub fn selected_rows(&self, selection: &Selection) -> Vec<&'a Row> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(index, row)| selection.contains(&self.key.id(row, *index)))
            .map(|(_, row)| row)
            .collect()
    }

    /// Check or uncheck the row at `index`.
    ///
    /// Calls `notify` with the resulting selected rows. An out-of-range index
    /// leaves the selection unchanged and does not notify.
    pub fn toggle_row<F>(
        &self,
        selection: &Selection,
        index: usize,
        checked: bool,
        notify: F,
    ) -> SelectionChange<'a>
    where
        F: FnOnce(&[&'a Row]),
    {
        let Some(id) = self.id_at(index) else {
            debug!(
                "Ignoring toggle of row {} ({} rows)",
                index,
                self.rows.len()
            );
            return SelectionChange {
                selection: selection.clone(),
                rows: self.selected_rows(selection),
            };
        };

        let mut next = selection.clone();
        if checked {
            next.selected.insert(id);
        } else {
            next.selected.remove(&id);
        }
        debug!(
            "Row {} {}, {} selected",
            index,
            if checked { "checked" } else { "unchecked" },
            next.len()
        );

        let rows = self.selected_rows(&next);
        notify(&rows);
        SelectionChange {
            selection: next,
            rows,
        }
    }

    /// Check or uncheck every row. Always calls `notify`.
    pub fn select_all<F>(&self, checked: bool, notify: F) -> SelectionChange<'a>
    where
        F: FnOnce(&[&'a Row]),
    {
        let change = if checked {
            SelectionChange {
                selection: self.ids().collect(),
                rows: self.rows.iter().collect(),
            }
        } else {
            SelectionChange {
                selection: Selection::new(),
                rows: Vec::new(),
            }
        };
        debug!("Select all {}: {} selected", checked, change.selection.len());
        notify(&change.rows);
        change
    }

    /// True iff there are rows and every one of them is selected.
    pub fn is_all_selected(&self, selection: &Selection) -> bool {
        !self.rows.is_empty() && self.ids().all(|id| selection.contains(&id))
    }

    /// True iff something is selected but not every row.
    pub fn is_partially_selected(&self, selection: &Selection) -> bool {
        !selection.is_empty() && !self.is_all_selected(selection)
    }

    /// State of the select-all checkbox.
    pub fn header_checkbox(&self, selection: &Selection) -> CheckState {
        if self.is_all_selected(selection) {
            CheckState::Checked
        } else if self.is_partially_selected(selection) {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        (1..=3i64).map(|id| Row::new().set("id", id)).collect()
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let rows = rows();
        let key = RowKey::default();
        let engine = SelectionEngine::new(&rows, &key);
        let selection: Selection = [RowId::Int(2)].into_iter().collect();

        let mut notified = false;
        let change = engine.toggle_row(&selection, 10, true, |_| notified = true);

        assert!(!notified);
        assert_eq!(change.selection, selection);
        assert_eq!(change.rows, vec![&rows[1]]);
    }

    #[test]
    fn test_uncheck_removes_identity() {
        let rows = rows();
        let key = RowKey::default();
        let engine = SelectionEngine::new(&rows, &key);
        let selection: Selection = [RowId::Int(1), RowId::Int(3)].into_iter().collect();

        let change = engine.toggle_row(&selection, 0, false, |_| {});

        assert!(!change.selection.contains(&RowId::Int(1)));
        assert_eq!(change.rows, vec![&rows[2]]);
        // input untouched
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_header_checkbox_states() {
        let rows = rows();
        let key = RowKey::default();
        let engine = SelectionEngine::new(&rows, &key);

        assert_eq!(engine.header_checkbox(&Selection::new()), CheckState::Unchecked);
        let some: Selection = [RowId::Int(1)].into_iter().collect();
        assert_eq!(engine.header_checkbox(&some), CheckState::Indeterminate);
        let all: Selection = (1..=3).map(RowId::Int).collect();
        assert_eq!(engine.header_checkbox(&all), CheckState::Checked);
    }

    #[test]
    fn test_empty_rows_never_all_selected() {
        let key = RowKey::default();
        let engine = SelectionEngine::new(&[], &key);
        assert!(!engine.is_all_selected(&Selection::new()));
        assert!(!engine.is_partially_selected(&Selection::new()));
    }

    #[test]
    fn test_stale_identity_counts_as_partial() {
        let rows = rows();
        let key = RowKey::default();
        let engine = SelectionEngine::new(&rows, &key);
        let stale: Selection = [RowId::Int(99)].into_iter().collect();

        assert!(engine.is_partially_selected(&stale));
        assert!(engine.selected_rows(&stale).is_empty());
    }
}
