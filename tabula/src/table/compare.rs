//! Value comparison used by the sort engine.

use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};

use super::sort::Direction;
use crate::model::Value;

thread_local! {
    // Root locale, punctuation not ignorable, ties broken by code point.
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}

/// Locale-aware string ordering (Unicode Collation Algorithm, root locale).
///
/// Accents and case only break ties between otherwise equal strings, so
/// `"Émile" < "Frank"` and `"a" < "A"`. The relation is a total order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}

/// Compare two cell values for the given direction.
///
/// A missing value (absent or null) always ranks after a present one,
/// whichever the direction. Two missing values tie.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, direction: Direction) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    let (a, b) = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(a), Some(b)) => (a, b),
    };

    let ordering = match (a, b) {
        (Value::String(a), Value::String(b)) => locale_cmp(a, b),
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => locale_cmp(&a.to_string(), &b.to_string()),
        },
    };

    direction.apply(ordering)
}
