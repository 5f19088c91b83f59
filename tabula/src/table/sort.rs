//! Sort engine: directive transitions and row ordering.

use std::borrow::Cow;
use std::cmp::Ordering;

use log::{debug, trace};

use super::column::{Column, find_column};
use super::compare::compare_values;
use crate::model::Row;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl Direction {
    /// Orient an ascending comparison result for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// The active sort column and direction.
///
/// `Unsorted` carries no key: rows keep the caller's input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortDirective {
    #[default]
    Unsorted,
    Sorted { key: String, direction: Direction },
}

impl SortDirective {
    /// Sort ascending by the column with `key`.
    pub fn ascending(key: impl Into<String>) -> Self {
        SortDirective::Sorted {
            key: key.into(),
            direction: Direction::Ascending,
        }
    }

    /// Sort descending by the column with `key`.
    pub fn descending(key: impl Into<String>) -> Self {
        SortDirective::Sorted {
            key: key.into(),
            direction: Direction::Descending,
        }
    }

    /// The active column key, if sorted.
    pub fn active_key(&self) -> Option<&str> {
        match self {
            SortDirective::Unsorted => None,
            SortDirective::Sorted { key, .. } => Some(key),
        }
    }

    /// The active direction, if sorted.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            SortDirective::Unsorted => None,
            SortDirective::Sorted { direction, .. } => Some(*direction),
        }
    }

    /// Returns `true` unless unsorted.
    pub fn is_sorted(&self) -> bool {
        matches!(self, SortDirective::Sorted { .. })
    }
}

/// Order `rows` by `directive`.
///
/// Returns the input slice itself when there is nothing to sort by: the
/// directive is unsorted, names no known column, or names a column that is
/// not sortable. Otherwise returns a stably sorted copy; rows comparing
/// equal keep their input order in both directions.
pub fn compute_order<'a>(
    rows: &'a [Row],
    columns: &[Column],
    directive: &SortDirective,
) -> Cow<'a, [Row]> {
    let SortDirective::Sorted { key, direction } = directive else {
        return Cow::Borrowed(rows);
    };
    let Some(column) = find_column(columns, key).filter(|c| c.sortable) else {
        trace!("No sortable column '{}', keeping input order", key);
        return Cow::Borrowed(rows);
    };

    let mut sorted = rows.to_vec();
    // slice::sort_by is stable
    sorted.sort_by(|a, b| compare_values(column.value(a), column.value(b), *direction));
    Cow::Owned(sorted)
}

/// Next directive after the header of column `clicked` is activated.
///
/// A sortable column cycles ascending → descending → unsorted. Clicking a
/// different sortable column starts it at ascending. Unknown or
/// non-sortable columns leave the directive unchanged.
pub fn next_directive(
    current: &SortDirective,
    columns: &[Column],
    clicked: &str,
) -> SortDirective {
    if !find_column(columns, clicked).is_some_and(|c| c.sortable) {
        debug!("Ignoring header click on non-sortable column '{}'", clicked);
        return current.clone();
    }

    let next = match current {
        SortDirective::Sorted { key, direction } if key == clicked => match direction {
            Direction::Ascending => SortDirective::descending(clicked),
            Direction::Descending => SortDirective::Unsorted,
        },
        _ => SortDirective::ascending(clicked),
    };
    debug!("Sort directive {:?} -> {:?}", current, next);
    next
}

/// Direction to indicate in the header of column `key`, if it is active.
pub fn sort_indicator(directive: &SortDirective, key: &str) -> Option<Direction> {
    match directive {
        SortDirective::Sorted { key: active, direction } if active == key => Some(*direction),
        _ => None,
    }
}
