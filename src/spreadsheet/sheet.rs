use crate::spreadsheet::cell::Cell;
use calamine::{Data, Range};
use std::collections::HashSet;

/// A worksheet read into memory: one header row naming the columns, then the data rows.
///
/// Every row holds exactly `columns.len()` cells.
#[derive(Clone, Debug)]
pub struct Sheet {
    /// Sheet name as stored in the workbook
    pub name: String,
    /// Column names taken from the header row
    pub columns: Vec<String>,
    /// Data rows, fully empty rows excluded
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Builds a sheet from the used range of a worksheet.
    ///
    /// The first row of the range is the header. Header cells without a value are named
    /// `column<N>` after their 1-based position; data rows whose cells are all empty are skipped.
    pub(crate) fn from_range(name: &str, range: &Range<Data>) -> Self {
        let (row_offset, col_offset) = match range.start() {
            Some((row, col)) if !range.is_empty() => (row as usize, col as usize),
            _ => {
                return Sheet {
                    name: name.to_owned(),
                    columns: Vec::new(),
                    rows: Vec::new(),
                }
            }
        };

        let mut rows = range.rows().enumerate().map(|(index, values)| {
            values
                .iter()
                .enumerate()
                .map(|(col, value)| Cell::new(row_offset + index, col_offset + col, value.to_owned()))
                .collect::<Vec<Cell>>()
        });

        let columns = rows
            .next()
            .map(|header| {
                header
                    .iter()
                    .enumerate()
                    .map(|(index, cell)| {
                        if cell.is_empty() {
                            format!("column{}", index + 1)
                        } else {
                            cell.to_string()
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Sheet {
            name: name.to_owned(),
            columns,
            rows: rows
                .filter(|row| !row.iter().all(Cell::is_empty))
                .collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the sheet has no header, hence nothing that can become a table.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Trims the whitespace around every column name. Values are left untouched.
    ///
    /// The database compares identifiers case-insensitively and refuses blank ones, so a name
    /// that ends up blank becomes `column<N>` and a name already taken gets a `.<k>` suffix.
    /// The number and order of columns never change.
    pub fn trim_column_names(&mut self) {
        let mut taken = HashSet::<String>::new();
        for (index, column) in self.columns.iter_mut().enumerate() {
            let trimmed = column.trim();
            let base = if trimmed.is_empty() {
                format!("column{}", index + 1)
            } else {
                trimmed.to_owned()
            };

            let mut name = base.clone();
            let mut suffix = 0usize;
            while taken.contains(&name.to_lowercase()) {
                suffix += 1;
                name = format!("{base}.{suffix}");
            }
            taken.insert(name.to_lowercase());
            *column = name;
        }
    }
}
