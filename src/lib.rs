//! # sheetdb
//!
//! Imports every sheet of a spreadsheet workbook into a DuckDB database, one table per
//! sheet, and samples random rows from the result.
//!
//! ## Features
//!
//! - **Multi-format support**: Excel (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`) and OpenDocument
//!   (`.ods`) workbooks
//! - **Deterministic table names**: sheet names are reduced to `[0-9a-z_]` identifiers
//! - **Typed columns**: Boolean, BigInt, Double, Varchar, Timestamp, Date and Time columns
//!   are detected from the cell values
//! - **Idempotent imports**: each run drops and re-creates the tables it writes
//! - **Sampling**: random rows from a named or random table of an existing database
//!
//! ## Modes
//!
//! - [`pipeline::run`]: preview or import a workbook
//! - [`sampler::sample`]: print random rows of an imported database
//!
//! Both take a [`report::Reporter`] that receives every progress message.
pub mod config;
pub mod database;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod sampler;
pub mod spreadsheet;

pub use config::{ConvertOptions, SampleOptions};
pub use error::{Result, SheetDbError};
pub use pipeline::SheetSummary;
pub use report::{LogReporter, MemoryReporter, Reporter};
pub use sampler::Sample;
