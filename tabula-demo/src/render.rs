//! Plain-text table rendering.

use tabula::table::{Alignment, CheckState, Column, Direction, TableView};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Gap between columns.
const GAP: &str = "  ";

/// Shown under the header while the table waits for data.
pub const LOADING_TEXT: &str = "Loading data...";

fn checkbox(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => "[x]",
        CheckState::Indeterminate => "[-]",
        CheckState::Unchecked => "[ ]",
    }
}

fn header_text(column: &Column, indicator: Option<Direction>) -> String {
    match indicator {
        Some(Direction::Ascending) => format!("{} ▲", column.title),
        Some(Direction::Descending) => format!("{} ▼", column.title),
        None => column.title.clone(),
    }
}

/// Truncate `text` to at most `width` display columns.
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    let limit = width.saturating_sub(1);
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}

/// Pad `text` to exactly `width` display columns.
fn fit(text: &str, width: usize, align: Alignment) -> String {
    let text = truncate(text, width);
    let pad = width.saturating_sub(text.width());
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(pad)),
        Alignment::Right => format!("{}{}", " ".repeat(pad), text),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
        }
    }
}

/// Render a view as lines of text.
pub fn render(view: &TableView<'_>) -> String {
    let headers: Vec<String> = view
        .headers
        .iter()
        .map(|h| header_text(h.column, h.indicator))
        .collect();
    let cells: Vec<(bool, Vec<String>)> = view
        .rows()
        .map(|row| {
            let texts = view
                .headers
                .iter()
                .map(|h| h.column.cell_text(row.row, row.index))
                .collect();
            (row.checked, texts)
        })
        .collect();

    let widths: Vec<usize> = view
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| match h.column.width {
            Some(w) => usize::from(w),
            None => cells
                .iter()
                .map(|(_, texts)| texts[i].width())
                .chain(std::iter::once(headers[i].width()))
                .max()
                .unwrap_or(0),
        })
        .collect();

    let mut lines = Vec::new();

    let mut header_line = String::new();
    if let Some(state) = view.select_all {
        header_line.push_str(checkbox(state));
        header_line.push_str(GAP);
    }
    let header_cells: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(text, width)| fit(text, *width, Alignment::Left))
        .collect();
    header_line.push_str(&header_cells.join(GAP));
    lines.push(header_line.trim_end().to_string());

    let total = header_cells.iter().map(|c| c.width()).sum::<usize>()
        + GAP.len() * header_cells.len().saturating_sub(1)
        + if view.select_all.is_some() { 3 + GAP.len() } else { 0 };
    lines.push("─".repeat(total));

    if view.loading {
        lines.push(LOADING_TEXT.to_string());
    }
    if let Some(empty) = view.empty_text {
        lines.push(empty.to_string());
    }

    for (checked, texts) in &cells {
        let mut line = String::new();
        if view.select_all.is_some() {
            let state = if *checked {
                CheckState::Checked
            } else {
                CheckState::Unchecked
            };
            line.push_str(checkbox(state));
            line.push_str(GAP);
        }
        let row_cells: Vec<String> = texts
            .iter()
            .zip(&widths)
            .zip(&view.headers)
            .map(|((text, width), header)| fit(text, *width, header.column.align))
            .collect();
        line.push_str(&row_cells.join(GAP));
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}
