//! # Spreadsheet Reading
//!
//! Opens Excel (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`) and OpenDocument (`.ods`) workbooks
//! through calamine and turns worksheets into [`Sheet`]s: a header row plus data rows of
//! [`Cell`]s that keep their position for error messages.
use calamine::{open_workbook_auto, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod cell;
pub mod criteria;
pub(crate) mod reference;
pub mod sheet;

pub use cell::Cell;
pub use criteria::{select, Criteria};
pub use sheet::Sheet;

/// Errors raised while reading a workbook.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    /// The workbook or one of its sheets could not be parsed
    #[error("{0}")]
    InvalidWorkbook(#[from] calamine::Error),

    /// A cell value does not fit the type detected for its column
    #[error("Invalid cell value at '{reference}' in sheet '{sheet}': {message}")]
    CellValueError {
        sheet: String,
        reference: String,
        message: String,
    },
}

/// An open workbook. The file handle is released when the value is dropped.
pub struct Workbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    /// Opens a workbook, detecting the format from the file extension.
    pub fn open(path: &Path) -> Result<Workbook, SpreadsheetError> {
        Ok(Workbook {
            path: path.to_owned(),
            sheets: open_workbook_auto(path)?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all sheets, in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// Reads one worksheet into memory.
    pub fn read_sheet(&mut self, sheet_name: &str) -> Result<Sheet, SpreadsheetError> {
        let range = self.sheets.worksheet_range(sheet_name)?;
        Ok(Sheet::from_range(sheet_name, &range))
    }
}
