//! # Database Access
//!
//! Thin wrapper over a DuckDB connection: replacing a table with the content of a sheet,
//! listing the user tables and reading rows back for sampling.
use crate::database::table::Table;
use crate::error::{DatabaseContext, Result, ResultContext};
use crate::report::Reporter;
use crate::spreadsheet::cell::CellType;
use crate::spreadsheet::Sheet;
use duckdb::{appender_params_from_iter, params, AccessMode, Config, Connection};
use std::path::{Path, PathBuf};

pub mod column;
pub mod identifier;
pub mod table;
mod writer;

use identifier::quote_identifier;

/// An open database file. The connection is closed when the value is dropped.
pub struct Database {
    path: PathBuf,
    connection: Connection,
}

impl Database {
    /// Opens the database for writing, creating the file and its parent directory if needed.
    pub fn create(path: &Path) -> Result<Database> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let target = path.display().to_string();
        let connection = Connection::open(path).write_context(&target)?;
        Ok(Database {
            path: path.to_owned(),
            connection,
        })
    }

    /// Opens an existing database without write access. The caller checks that the file exists,
    /// DuckDB would otherwise create it.
    pub fn open_read_only(path: &Path) -> duckdb::Result<Database> {
        let config = Config::default().access_mode(AccessMode::ReadOnly)?;
        Ok(Database {
            path: path.to_owned(),
            connection: Connection::open_with_flags(path, config)?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the user tables, sorted. Catalog and system tables are not included.
    pub fn list_tables(&self) -> duckdb::Result<Vec<String>> {
        let mut statement = self.connection.prepare(
            "SELECT table_name FROM information_schema.tables \
             WHERE table_schema = 'main' AND table_type = 'BASE TABLE' \
             ORDER BY table_name",
        )?;
        let names = statement.query_map([], |row| row.get::<_, String>(0))?;
        names.collect()
    }

    /// Column names of a table in declaration order.
    pub fn table_columns(&self, table: &str) -> duckdb::Result<Vec<String>> {
        let mut statement = self.connection.prepare(
            "SELECT column_name FROM information_schema.columns \
             WHERE table_schema = 'main' AND table_name = ? \
             ORDER BY ordinal_position",
        )?;
        let names = statement.query_map(params![table], |row| row.get::<_, String>(0))?;
        names.collect()
    }

    /// Number of rows stored in `table`. `table` must be a known table name.
    pub fn count_rows(&self, table: &str) -> duckdb::Result<usize> {
        let sql = format!("SELECT count(*) FROM {}", quote_identifier(table));
        let count: i64 = self.connection.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Replaces `table` with the rows of `sheet` and returns the number of rows written.
    ///
    /// Dropping, re-creating and filling the table happen in one transaction: a failure
    /// leaves the previous content of that table in place.
    pub fn replace_table(&mut self, table: &Table, sheet: &Sheet, reporter: &dyn Reporter) -> Result<usize> {
        let target = table.name.as_str();
        let transaction = self.connection.transaction().write_context(target)?;

        let statements = format!("{}; {};", table.drop_sql(), table.create_sql());
        reporter.debug(&statements);
        transaction.execute_batch(&statements).write_context(target)?;

        {
            let mut appender = transaction.appender(target).write_context(target)?;
            for row in &sheet.rows {
                for cell in row.iter().filter(|cell| cell.kind() == CellType::Error) {
                    reporter.warn(&format!(
                        "Error value {cell} at '{}' in sheet '{}' stored as NULL",
                        cell.reference(),
                        sheet.name
                    ));
                }
                let values = writer::to_row(sheet, &table.columns, row).read_context(&sheet.name)?;
                appender
                    .append_row(appender_params_from_iter(values))
                    .write_context(target)?;
            }
            appender.flush().write_context(target)?;
        }

        transaction.commit().write_context(target)?;
        self.count_rows(target).query_context(target)
    }

    /// Drops `table` if it exists.
    pub fn drop_table(&self, table: &str, reporter: &dyn Reporter) -> Result<()> {
        let statement = format!("DROP TABLE IF EXISTS {}", quote_identifier(table));
        reporter.debug(&statement);
        self.connection.execute_batch(&statement).write_context(table)
    }

    /// Up to `limit` rows of `table` in random order, every value rendered as text.
    ///
    /// `seed` (between 0 and 1) seeds the engine's random generator for this query.
    /// `table` and `columns` must come from [`Database::list_tables`] and
    /// [`Database::table_columns`]; they are quoted but never checked again here.
    pub fn random_rows(
        &self,
        table: &str,
        columns: &[String],
        limit: usize,
        seed: f64,
    ) -> duckdb::Result<Vec<Vec<Option<String>>>> {
        self.connection
            .query_row("SELECT setseed(?)", params![seed], |_| Ok(()))?;

        let projection = columns
            .iter()
            .map(|column| format!("CAST({} AS VARCHAR)", quote_identifier(column)))
            .collect::<Vec<_>>()
            .join(", ");
        // LIMIT takes a BIGINT.
        let limit = limit.min(i64::MAX as usize);
        let sql = format!(
            "SELECT {projection} FROM {} ORDER BY random() LIMIT {limit}",
            quote_identifier(table)
        );
        let mut statement = self.connection.prepare(&sql)?;
        let width = columns.len();
        let rows = statement.query_map([], |row| {
            (0..width)
                .map(|index| row.get::<_, Option<String>>(index))
                .collect::<duckdb::Result<Vec<_>>>()
        })?;
        rows.collect()
    }
}
