use std::borrow::Cow;

use tabula::model::{Row, Value};
use tabula::table::{Column, SortDirective, compute_order, next_directive};

fn ids(rows: &[Row]) -> Vec<i64> {
    rows.iter()
        .map(|r| match r.get("id") {
            Some(Value::Int(id)) => *id,
            other => panic!("row without integer id: {:?}", other),
        })
        .collect()
}

fn v_columns() -> Vec<Column> {
    vec![Column::new("v", "v").sortable()]
}

// ============================================================================
// No-op ordering
// ============================================================================

#[test]
fn test_unsorted_returns_input_slice() {
    let rows = vec![
        Row::new().set("id", 2i64).set("v", 9i64),
        Row::new().set("id", 1i64).set("v", 1i64),
    ];

    let ordered = compute_order(&rows, &v_columns(), &SortDirective::Unsorted);

    match ordered {
        Cow::Borrowed(slice) => assert!(std::ptr::eq(slice, rows.as_slice())),
        Cow::Owned(_) => panic!("unsorted order should borrow the input"),
    }
}

#[test]
fn test_unknown_key_returns_input_slice() {
    let rows = vec![Row::new().set("id", 1i64)];
    let ordered = compute_order(&rows, &v_columns(), &SortDirective::ascending("nope"));
    assert!(matches!(ordered, Cow::Borrowed(_)));
}

#[test]
fn test_empty_rows() {
    let ordered = compute_order(&[], &v_columns(), &SortDirective::ascending("v"));
    assert!(ordered.is_empty());
}

// ============================================================================
// Ordering rules
// ============================================================================

#[test]
fn test_missing_values_sort_last() {
    let rows = vec![
        Row::new().set("id", 1i64).set("v", 5i64),
        Row::new().set("id", 2i64),
        Row::new().set("id", 3i64).set("v", 2i64),
    ];

    let asc = compute_order(&rows, &v_columns(), &SortDirective::ascending("v"));
    assert_eq!(ids(&asc), vec![3, 1, 2]);

    let desc = compute_order(&rows, &v_columns(), &SortDirective::descending("v"));
    assert_eq!(ids(&desc), vec![1, 3, 2]);
}

#[test]
fn test_explicit_null_is_missing() {
    let rows = vec![
        Row::new().set("id", 1i64).set("v", Value::Null),
        Row::new().set("id", 2i64).set("v", "b"),
        Row::new().set("id", 3i64),
        Row::new().set("id", 4i64).set("v", "a"),
    ];

    let asc = compute_order(&rows, &v_columns(), &SortDirective::ascending("v"));
    assert_eq!(ids(&asc), vec![4, 2, 1, 3]);

    let desc = compute_order(&rows, &v_columns(), &SortDirective::descending("v"));
    assert_eq!(ids(&desc), vec![2, 4, 1, 3]);
}

#[test]
fn test_stable_with_duplicates() {
    let rows = vec![
        Row::new().set("id", 1i64).set("v", "x"),
        Row::new().set("id", 2i64).set("v", "a"),
        Row::new().set("id", 3i64).set("v", "x"),
        Row::new().set("id", 4i64).set("v", "a"),
        Row::new().set("id", 5i64).set("v", "x"),
    ];

    let asc = compute_order(&rows, &v_columns(), &SortDirective::ascending("v"));
    assert_eq!(ids(&asc), vec![2, 4, 1, 3, 5]);

    let desc = compute_order(&rows, &v_columns(), &SortDirective::descending("v"));
    assert_eq!(ids(&desc), vec![1, 3, 5, 2, 4]);
}

#[test]
fn test_numbers_not_lexicographic() {
    let rows = vec![
        Row::new().set("id", 1i64).set("v", 10i64),
        Row::new().set("id", 2i64).set("v", 9.5),
        Row::new().set("id", 3i64).set("v", -3i64),
    ];

    let asc = compute_order(&rows, &v_columns(), &SortDirective::ascending("v"));
    assert_eq!(ids(&asc), vec![3, 2, 1]);
}

#[test]
fn test_strings_ignore_case() {
    let rows = vec![
        Row::new().set("id", 1i64).set("v", "banana"),
        Row::new().set("id", 2i64).set("v", "Apple"),
        Row::new().set("id", 3i64).set("v", "cherry"),
    ];

    let asc = compute_order(&rows, &v_columns(), &SortDirective::ascending("v"));
    assert_eq!(ids(&asc), vec![2, 1, 3]);
}

#[test]
fn test_mixed_types_compare_as_text() {
    let rows = vec![
        Row::new().set("id", 1i64).set("v", "20"),
        Row::new().set("id", 2i64).set("v", 3i64),
        Row::new().set("id", 3i64).set("v", true),
    ];

    // "20", "3", "true"
    let asc = compute_order(&rows, &v_columns(), &SortDirective::ascending("v"));
    assert_eq!(ids(&asc), vec![1, 2, 3]);
}

#[test]
fn test_input_not_mutated() {
    let rows = vec![
        Row::new().set("id", 1i64).set("v", 3i64),
        Row::new().set("id", 2i64).set("v", 1i64),
    ];
    let before = rows.clone();

    let _ = compute_order(&rows, &v_columns(), &SortDirective::ascending("v"));

    assert_eq!(rows, before);
}

#[test]
fn test_sorts_by_data_index_not_key() {
    let columns = vec![Column::new("years", "age").sortable()];
    let rows = vec![
        Row::new().set("id", 1i64).set("age", 50i64).set("years", 1i64),
        Row::new().set("id", 2i64).set("age", 20i64).set("years", 2i64),
    ];

    let asc = compute_order(&rows, &columns, &SortDirective::ascending("years"));
    assert_eq!(ids(&asc), vec![2, 1]);
}

// ============================================================================
// Directive cycle
// ============================================================================

#[test]
fn test_toggle_cycle_repeats() {
    let columns = vec![Column::new("k", "k").sortable()];
    let mut directive = SortDirective::Unsorted;
    let mut seen = Vec::new();

    for _ in 0..4 {
        directive = next_directive(&directive, &columns, "k");
        seen.push(directive.clone());
    }

    assert_eq!(
        seen,
        vec![
            SortDirective::ascending("k"),
            SortDirective::descending("k"),
            SortDirective::Unsorted,
            SortDirective::ascending("k"),
        ]
    );
}

#[test]
fn test_switching_columns_restarts_ascending() {
    let columns = vec![
        Column::new("a", "a").sortable(),
        Column::new("b", "b").sortable(),
    ];

    let directive = next_directive(&SortDirective::Unsorted, &columns, "a");
    let directive = next_directive(&directive, &columns, "a");
    assert_eq!(directive, SortDirective::descending("a"));

    let directive = next_directive(&directive, &columns, "b");
    assert_eq!(directive, SortDirective::ascending("b"));
}

#[test]
fn test_non_sortable_click_is_identity() {
    let columns = vec![Column::new("a", "a").sortable(), Column::new("b", "b")];
    let current = SortDirective::descending("a");

    assert_eq!(next_directive(&current, &columns, "b"), current);
    assert_eq!(
        next_directive(&SortDirective::Unsorted, &columns, "b"),
        SortDirective::Unsorted
    );
}
