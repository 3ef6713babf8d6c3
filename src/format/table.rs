//! Pipe-delimited table alignment.
//!
//! Column widths are a property of the whole block, so rows are buffered in a
//! [`TableBlock`] and rendered together once the block closes.

use unicode_width::UnicodeWidthStr;

/// A contiguous run of pipe-delimited rows awaiting alignment
#[derive(Debug, Clone, Default)]
pub struct TableBlock {
    rows: Vec<Vec<String>>,
}

impl TableBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: &str) {
        self.rows.push(split_cells(row));
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Display width of each column index that appears in any row.
    ///
    /// Rows are allowed to disagree on their cell count: a column's width is the
    /// widest cell among the rows that have that column.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            for (index, cell) in row.iter().enumerate() {
                let width = cell.width();
                match widths.get_mut(index) {
                    Some(existing) => *existing = (*existing).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    /// Render every row as `| cell | cell |`, each cell right-padded to its column width
    /// and each row prefixed with `indent`.
    pub fn render(&self, indent: &str) -> Vec<String> {
        let widths = self.column_widths();
        self.rows
            .iter()
            .map(|cells| {
                if cells.is_empty() {
                    return format!("{indent}|");
                }
                let padded: Vec<String> = cells
                    .iter()
                    .zip(&widths)
                    .map(|(cell, &width)| format!("{cell}{}", " ".repeat(width - cell.width())))
                    .collect();
                format!("{indent}| {} |", padded.join(" | "))
            })
            .collect()
    }

    /// Render and empty the block.
    pub fn drain(&mut self, indent: &str) -> Vec<String> {
        let rendered = self.render(indent);
        self.rows.clear();
        rendered
    }
}

/// Split a row on unescaped pipes, trim every cell, and drop the empty cells
/// produced by the row's outer delimiters.
pub fn split_cells(row: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = row.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push(c);
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            '|' => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    cells.push(current);

    let mut cells: Vec<String> = cells.into_iter().map(|cell| cell.trim().to_string()).collect();
    if cells.first().is_some_and(String::is_empty) {
        cells.remove(0);
    }
    if cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }
    cells
}
