//! Plain comma-separated tables: a header line followed by data rows.
//!
//! There is no quoting or escaping. A value containing the delimiter will
//! split — the tables are hand-edited and this stays a documented limitation
//! of the format rather than something the parser guesses around. The tips
//! loader sidesteps it for its one free-text column (see [`crate::tips`]).

/// A parsed table: column names plus rows padded to the column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse raw table text. Blank lines are skipped, every value is
    /// trimmed, short rows are padded with empty strings and excess values
    /// beyond the header width are dropped. Empty input yields an empty
    /// table, never an error.
    pub fn parse(text: &str) -> Table {
        let mut lines = text
            .split(['\r', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty());

        let Some(header) = lines.next() else {
            return Table {
                columns: Vec::new(),
                rows: Vec::new(),
            };
        };
        let columns: Vec<String> = header.split(',').map(|c| c.trim().to_string()).collect();

        let rows = lines
            .map(|line| {
                let mut values: Vec<String> =
                    line.split(',').map(|v| v.trim().to_string()).collect();
                values.resize(columns.len(), String::new());
                values
            })
            .collect();

        Table { columns, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Value of `column` in `row`, or "" when the column is unknown.
    pub fn value<'a>(&self, row: &'a [String], column: &str) -> &'a str {
        self.column_index(column)
            .and_then(|i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Serialize a table back to text: header line plus one comma-joined line
/// per row. Line breaks inside a value would break the one-row-per-line
/// framing, so any CR/LF run is collapsed to a single space (lossy).
pub fn serialize(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = columns.join(",");
    for row in rows {
        out.push('\n');
        let line: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, _)| sanitize_value(row.get(i).map(String::as_str).unwrap_or("")))
            .collect();
        out.push_str(&line.join(","));
    }
    out
}

fn sanitize_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_break = false;
    for ch in value.chars() {
        if ch == '\r' || ch == '\n' {
            if !in_break {
                out.push(' ');
                in_break = true;
            }
        } else {
            out.push(ch);
            in_break = false;
        }
    }
    out
}
