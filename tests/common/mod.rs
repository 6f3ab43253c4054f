//! Workbook fixtures written on the fly.
#![allow(dead_code)]

use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::{Path, PathBuf};

/// A cell value of a fixture sheet.
pub enum Value {
    Text(&'static str),
    Number(f64),
    Bool(bool),
    Blank,
}

pub use Value::{Blank, Bool, Number, Text};

/// Writes an `.xlsx` file with one worksheet per `(name, rows)` entry.
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Value>>)]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name)?;
        for (row, values) in rows.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                let (row, col) = (row as u32, col as u16);
                match value {
                    Text(text) => worksheet.write_string(row, col, *text)?,
                    Number(number) => worksheet.write_number(row, col, *number)?,
                    Bool(flag) => worksheet.write_boolean(row, col, *flag)?,
                    Blank => continue,
                };
            }
        }
    }
    workbook.save(path)
}

/// Header plus `count` rows of patient intake data, four columns wide.
pub fn intake_rows(count: usize) -> Vec<Vec<Value>> {
    const NAMES: [&str; 4] = ["Ann", "Bob", "Cleo", "Dan"];
    let mut rows = vec![vec![Text("Patient ID"), Text("Name"), Text("Age"), Text("Active")]];
    for index in 0..count {
        rows.push(vec![
            Number(index as f64 + 1.0),
            Text(NAMES[index % NAMES.len()]),
            Number(20.0 + index as f64),
            Bool(index % 2 == 0),
        ]);
    }
    rows
}

/// Path of the fixture workbook inside `dir`.
pub fn workbook_path(dir: &Path) -> PathBuf {
    dir.join("EMR mental health database.xlsx")
}

pub fn database_path(dir: &Path) -> PathBuf {
    dir.join("out").join("emr.db")
}
