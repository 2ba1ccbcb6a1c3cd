//! Tabular text rendering for table listings and search results.
//!
//! Output layout: a left index column (row position), then one
//! right-aligned column per header field, separated by two spaces.

use crate::domain::Record;

/// Render `rows` under `R::HEADER` with a leading position index.
pub fn render_rows<R: Record>(rows: &[R]) -> String {
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);

    let mut header = vec![String::new()];
    header.extend(R::HEADER.iter().map(|h| (*h).to_string()));
    grid.push(header);

    for (index, row) in rows.iter().enumerate() {
        let mut line = vec![index.to_string()];
        line.extend(row.cells());
        grid.push(line);
    }

    let columns = R::HEADER.len() + 1;
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            grid.iter()
                .filter_map(|line| line.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in &grid {
        let rendered: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:>width$}"))
            .collect();
        out.push_str(rendered.join("  ").trim_end());
        out.push('\n');
    }
    out
}
