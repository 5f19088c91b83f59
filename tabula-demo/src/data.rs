//! Demo datasets.

use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use log::info;
use tabula::model::{Row, Value, rows_from_json};
use tabula::table::{Alignment, Column, MISSING_CELL};

use crate::error::DemoError;

/// Rows with the columns used to display them.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

fn person(id: i64, name: &str, age: Option<i64>, email: &str, joined: (i32, u32, u32)) -> Row {
    let (year, month, day) = joined;
    Row::new()
        .set("id", id)
        .set("name", name)
        .set("age", age)
        .set("email", email)
        .set("joined", Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).single())
}

/// Built-in people dataset, with a few unknown ages.
pub fn people() -> Dataset {
    let columns = vec![
        Column::new("name", "name").title("Name").sortable(),
        Column::new("age", "age")
            .title("Age")
            .align(Alignment::Right)
            .sortable(),
        Column::new("email", "email").title("Email").width(24),
        Column::new("joined", "joined")
            .title("Joined")
            .sortable()
            .format(|value, _, _| match value {
                Some(Value::DateTime(dt)) => dt.format("%Y-%m-%d").to_string(),
                Some(other) => other.to_string(),
                None => MISSING_CELL.to_string(),
            }),
    ];

    let rows = vec![
        person(1, "John Doe", Some(30), "john@example.com", (2021, 3, 14)),
        person(2, "Jane Smith", Some(25), "jane@example.com", (2022, 7, 1)),
        person(3, "Bob Johnson", Some(35), "bob@example.com", (2020, 11, 23)),
        person(4, "alice Wong", None, "alice@example.com", (2023, 1, 9)),
        person(5, "Émile Zola", Some(25), "emile@example.com", (2019, 5, 30)),
        person(6, "Carlos Díaz", None, "carlos.diaz@example.com", (2022, 7, 1)),
    ];

    Dataset {
        name: "people".to_string(),
        columns,
        rows,
    }
}

/// Load a JSON array of row objects. Every field becomes a sortable column,
/// in first-seen order.
pub fn load(path: &Path) -> Result<Dataset, DemoError> {
    let json = fs::read_to_string(path).map_err(|e| DemoError::io(path, e))?;
    let rows = rows_from_json(&json)?;

    let mut columns: Vec<Column> = Vec::new();
    for row in &rows {
        for field in row.fields().keys() {
            if !columns.iter().any(|c| &c.key == field) {
                columns.push(Column::new(field.as_str(), field.as_str()).sortable());
            }
        }
    }
    info!(
        "Loaded {} rows with {} columns from {}",
        rows.len(),
        columns.len(),
        path.display()
    );

    Ok(Dataset {
        name: path.display().to_string(),
        columns,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_people_has_missing_ages() {
        let dataset = people();
        let missing = dataset
            .rows
            .iter()
            .filter(|r| r.present("age").is_none())
            .count();
        assert_eq!(missing, 2);
        assert!(dataset.rows.iter().all(|r| r.present("joined").is_some()));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/rows.json")).unwrap_err();
        assert!(matches!(err, DemoError::Io { .. }));
    }
}
