//! Tabular view of venue comparison scores.

use crossterm::style::Stylize;

use super::text::visible_width;

use crate::analysis::ComparisonRow;

const HEADERS: [&str; 5] = ["Venue", "Overall Rating", "Service", "Food", "Location"];

/// Renders comparison rows as a table with one decimal place per score.
///
/// Rows keep their input order; even rows are shaded.
#[must_use]
pub fn comparison_table(rows: &[ComparisonRow]) -> String {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                format!("{:.1}", row.rating),
                format!("{:.1}", row.service),
                format!("{:.1}", row.food),
                format!("{:.1}", row.location),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(visible_width);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(visible_width(cell));
        }
    }

    let mut output = format_row(&HEADERS.map(str::to_owned), &widths).bold().to_string();
    output.push('\n');
    for (row, shaded) in cells.iter().zip([true, false].into_iter().cycle()) {
        let line = format_row(row, &widths);
        if shaded {
            output.push_str(&line.on_dark_grey().to_string());
        } else {
            output.push_str(&line);
        }
        output.push('\n');
    }
    output
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(visible_width(cell));
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join("  ")
}
