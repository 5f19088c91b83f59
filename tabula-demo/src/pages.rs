//! Demo pages: scripted event sequences replayed against a table.

use std::io::Write;

use log::{debug, info};
use tabula::model::Row;
use tabula::table::{Column, TableConfig};
use tabula::{Table, TableEvent, TableState};

use crate::data::Dataset;
use crate::error::DemoError;
use crate::render::render;

/// A titled table with the events to replay on it.
pub struct Page {
    pub title: String,
    pub table: Table,
    pub events: Vec<TableEvent>,
}

impl Page {
    fn describe(&self, event: &TableEvent) -> String {
        match event {
            TableEvent::HeaderClicked(key) => {
                let title = self
                    .table
                    .columns()
                    .iter()
                    .find(|c| &c.key == key)
                    .map_or(key.as_str(), |c| c.title.as_str());
                format!("click header \"{}\"", title)
            }
            TableEvent::RowToggled { index, checked } => format!(
                "{} row {}",
                if *checked { "check" } else { "uncheck" },
                index + 1
            ),
            TableEvent::AllToggled(checked) => {
                format!("{} all", if *checked { "check" } else { "uncheck" })
            }
        }
    }

    /// Replay every event, writing the view after each one.
    pub fn run(&self, out: &mut impl Write) -> Result<TableState, DemoError> {
        info!("Running page '{}' ({} events)", self.title, self.events.len());
        writeln!(out, "== {} ==", self.title)?;
        writeln!(out, "{}\n", render(&self.table.view(&TableState::default())))?;

        let mut state = TableState::default();
        for event in &self.events {
            debug!("Page '{}': {:?}", self.title, event);
            writeln!(out, "> {}", self.describe(event))?;

            let mut notified: Option<Vec<Row>> = None;
            state = self.table.update(&state, event.clone(), |rows| {
                notified = Some(rows.iter().map(|r| (*r).clone()).collect());
            });

            if let Some(rows) = notified {
                writeln!(out, "selected: {}", serde_json::to_string(&rows)?)?;
            }
            writeln!(out, "{}\n", render(&self.table.view(&state)))?;
        }
        Ok(state)
    }
}

fn sortable(columns: &[Column]) -> impl Iterator<Item = &Column> {
    columns.iter().filter(|c| c.sortable)
}

/// Build the demo pages for a dataset.
pub fn pages(dataset: &Dataset) -> Vec<Page> {
    let mut pages = Vec::new();
    let plain = Table::new(dataset.columns.clone()).with_rows(dataset.rows.clone());

    for column in sortable(&dataset.columns) {
        let click = TableEvent::HeaderClicked(column.key.clone());
        pages.push(Page {
            title: format!("{}: sort by {}", dataset.name, column.title),
            table: plain.clone(),
            events: vec![click.clone(), click.clone(), click],
        });
    }

    if let Some(fixed) = dataset.columns.iter().find(|c| !c.sortable) {
        pages.push(Page {
            title: format!("{}: click a fixed column", dataset.name),
            table: plain.clone(),
            events: vec![TableEvent::HeaderClicked(fixed.key.clone())],
        });
    }

    let mut events = vec![
        TableEvent::RowToggled { index: 0, checked: true },
        TableEvent::RowToggled { index: 2, checked: true },
    ];
    if let Some(column) = sortable(&dataset.columns).next() {
        events.push(TableEvent::HeaderClicked(column.key.clone()));
        events.push(TableEvent::HeaderClicked(column.key.clone()));
    }
    events.extend([
        TableEvent::RowToggled { index: 0, checked: false },
        TableEvent::AllToggled(true),
        TableEvent::AllToggled(false),
    ]);
    pages.push(Page {
        title: format!("{}: selection", dataset.name),
        table: plain.clone().with_config(TableConfig::new().selectable()),
        events,
    });

    pages.push(Page {
        title: format!("{}: empty table", dataset.name),
        table: Table::new(dataset.columns.clone()).with_config(
            TableConfig::new()
                .selectable()
                .empty_text("Nothing to show yet"),
        ),
        events: vec![TableEvent::AllToggled(true)],
    });

    let mut events = vec![TableEvent::AllToggled(true)];
    events.extend(
        sortable(&dataset.columns)
            .next()
            .map(|column| TableEvent::HeaderClicked(column.key.clone())),
    );
    pages.push(Page {
        title: format!("{}: loading", dataset.name),
        table: plain.with_config(TableConfig::new().selectable().loading()),
        events,
    });

    pages
}
