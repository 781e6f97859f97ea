//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// A bordered grid table.
///
/// Cells may carry ANSI colour codes; column widths are computed on the
/// visible text so coloured cells stay aligned.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&rule(&widths, '-'));
        out.push_str(&format_row(&self.headers, &widths));
        out.push_str(&rule(&widths, '='));
        for row in &self.rows {
            out.push_str(&format_row(row, &widths));
            out.push_str(&rule(&widths, '-'));
        }
        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(visible_width(cell));
                }
            }
        }
        widths
    }
}

/// One `| cell | cell |` line; short rows are padded with empty cells.
fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = width.saturating_sub(visible_width(cell));
        line.push_str("| ");
        line.push_str(cell);
        line.push_str(&" ".repeat(pad));
        line.push(' ');
    }
    line.push_str("|\n");
    line
}

/// `+---+---+` style separator; `=` is used for the rule under the header.
fn rule(widths: &[usize], fill: char) -> String {
    let mut line = String::new();
    for width in widths {
        line.push('+');
        line.push_str(&fill.to_string().repeat(width + 2));
    }
    line.push_str("+\n");
    line
}

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}
