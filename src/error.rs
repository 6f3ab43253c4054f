use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sheetdb.
/// Every variant names the thing that failed (path, sheet, table or cell) so the message
/// can be shown to the operator as is.
#[derive(Error, Debug)]
pub enum SheetDbError {
    #[error("Excel file not found. Provide a path with --excel or place the file in Downloads (searched: {})", join_paths(.searched))]
    WorkbookNotFound { searched: Vec<PathBuf> },

    #[error("No matching sheets found for requested names [{}] (available: {})", .requested.join(", "), .available.join(", "))]
    EmptySelection {
        requested: Vec<String>,
        available: Vec<String>,
    },

    #[error("Read '{context}' failed: {source}")]
    ReadFailure {
        context: String,
        #[source]
        source: crate::spreadsheet::SpreadsheetError,
    },

    #[error("Write '{target}' failed: {source}")]
    WriteFailure {
        target: String,
        #[source]
        source: duckdb::Error,
    },

    #[error("Database file does not exist: {}", .0.display())]
    DatabaseNotFound(PathBuf),

    #[error("No tables found in database: {}", .0.display())]
    NoTables(PathBuf),

    #[error("Requested table '{table}' not found in DB. Available tables: {}", .available.join(", "))]
    UnknownTable {
        table: String,
        available: Vec<String>,
    },

    #[error("Failed to query table '{table}': {source}")]
    QueryFailure {
        table: String,
        #[source]
        source: duckdb::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T, E = SheetDbError> = std::result::Result<T, E>;

/// Attaches the failing object's name to lower-level errors.
pub(crate) trait ResultContext<T> {
    fn read_context(self, context: &str) -> Result<T>;
}

impl<T> ResultContext<T> for std::result::Result<T, crate::spreadsheet::SpreadsheetError> {
    fn read_context(self, context: &str) -> Result<T> {
        self.map_err(|source| SheetDbError::ReadFailure {
            context: context.to_owned(),
            source,
        })
    }
}

/// Same as [`ResultContext`] for the database side; `query` selects between the import
/// (`WriteFailure`) and sampling (`QueryFailure`) variants.
pub(crate) trait DatabaseContext<T> {
    fn write_context(self, target: &str) -> Result<T>;
    fn query_context(self, table: &str) -> Result<T>;
}

impl<T> DatabaseContext<T> for std::result::Result<T, duckdb::Error> {
    fn write_context(self, target: &str) -> Result<T> {
        self.map_err(|source| SheetDbError::WriteFailure {
            target: target.to_owned(),
            source,
        })
    }

    fn query_context(self, table: &str) -> Result<T> {
        self.map_err(|source| SheetDbError::QueryFailure {
            table: table.to_owned(),
            source,
        })
    }
}

impl SheetDbError {
    /// Process exit status for the command line front end.
    pub fn exit_code(&self) -> u8 {
        match self {
            SheetDbError::WorkbookNotFound { .. } => 2,
            _ => 1,
        }
    }
}
