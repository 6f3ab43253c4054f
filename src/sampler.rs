//! Random sampling of an existing database.
use crate::config::SampleOptions;
use crate::database::Database;
use crate::error::{DatabaseContext, Result, SheetDbError};
use crate::report::Reporter;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::fmt::{Display, Formatter};

/// Rows drawn from one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub table: String,
    pub columns: Vec<String>,
    /// Values rendered as text, `None` for NULL
    pub rows: Vec<Vec<Option<String>>>,
}

impl Sample {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table exists but has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Draws up to `options.size` random rows from `options.table`, or from a random table.
///
/// `rng` decides the table when none is named and seeds the row order.
pub fn sample<R>(options: &SampleOptions, rng: &mut R, reporter: &dyn Reporter) -> Result<Sample>
where
    R: Rng + ?Sized,
{
    let path = options.database.as_path();
    if !path.exists() {
        return Err(SheetDbError::DatabaseNotFound(path.to_owned()));
    }

    let target = path.display().to_string();
    let database = Database::open_read_only(path).query_context(&target)?;
    let tables = database.list_tables().query_context(&target)?;
    if tables.is_empty() {
        return Err(SheetDbError::NoTables(path.to_owned()));
    }

    // Only names read back from the catalog reach the SQL text.
    let table = match &options.table {
        Some(requested) => tables
            .iter()
            .find(|table| *table == requested)
            .ok_or_else(|| SheetDbError::UnknownTable {
                table: requested.to_owned(),
                available: tables.clone(),
            })?,
        None => tables
            .choose(rng)
            .ok_or_else(|| SheetDbError::NoTables(path.to_owned()))?,
    };

    reporter.info(&format!("Sampling {} row(s) from table: {table}", options.size));
    let columns = database.table_columns(table).query_context(table)?;
    let rows = database
        .random_rows(table, &columns, options.size.get(), rng.random::<f64>())
        .query_context(table)?;

    let sample = Sample {
        table: table.to_owned(),
        columns,
        rows,
    };
    if sample.is_empty() {
        reporter.info(&format!("Table '{table}' has no rows."));
    }
    Ok(sample)
}

impl Display for Sample {
    /// Header line followed by the rows as a left-aligned text grid.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Table: {}  (columns: {}  rows returned: {})",
            self.table,
            self.column_count(),
            self.rows.len()
        )?;
        writeln!(f)?;

        let cells: Vec<Vec<&str>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|value| value.as_deref().unwrap_or("NULL")).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                cells
                    .iter()
                    .map(|row| row[index].chars().count())
                    .chain(std::iter::once(column.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |values: Vec<&str>| {
            values
                .iter()
                .zip(&widths)
                .map(|(value, width)| format!("{value:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_owned()
        };
        writeln!(f, "{}", line(self.columns.iter().map(String::as_str).collect()))?;
        for row in cells {
            writeln!(f, "{}", line(row))?;
        }
        Ok(())
    }
}
