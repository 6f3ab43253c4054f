//! Built-in defaults and the option sets the two modes run with.
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Database file created in the working directory when `--db` is not given.
pub const DEFAULT_DATABASE_FILE: &str = "emr_mental_health.db";

/// File names probed, in order, inside the Downloads directory when `--excel` is not given.
/// The first one carries the stray space the workbook is usually exported with.
pub const WORKBOOK_CANDIDATES: [&str; 3] = [
    "EMR mental health database .xlsx",
    "EMR mental health database.xlsx",
    "EMR mental health database.xls",
];

pub const DEFAULT_SAMPLE_SIZE: usize = 5;

pub const ENV_EXCEL: &str = "SHEETDB_EXCEL";
pub const ENV_DATABASE: &str = "SHEETDB_DB";

/// Options of the import / preview mode.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    pub workbook: PathBuf,
    pub database: PathBuf,
    /// Requested sheet names; `None` means every sheet.
    pub sheets: Option<Vec<String>>,
    pub preview: bool,
}

/// Options of the sample mode.
#[derive(Clone, Debug)]
pub struct SampleOptions {
    pub database: PathBuf,
    pub table: Option<String>,
    pub size: NonZeroUsize,
}

impl SampleOptions {
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
            table: None,
            size: NonZeroUsize::new(DEFAULT_SAMPLE_SIZE).expect("Hardcode sample size"),
        }
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn size(mut self, size: NonZeroUsize) -> Self {
        self.size = size;
        self
    }
}

/// Splits a comma-separated `--sheets` value. Names are trimmed and blank entries dropped.
///
/// Only an empty value means "all sheets" (`None`). A value made of separators and blanks
/// requests no sheet at all, which the selection later rejects.
pub fn parse_sheet_list(value: &str) -> Option<Vec<String>> {
    if value.is_empty() {
        return None;
    }
    let names = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect();
    Some(names)
}

/// Database path used when none is configured.
pub fn default_database_path(working_dir: PathBuf) -> PathBuf {
    working_dir.join(DEFAULT_DATABASE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_list_is_trimmed() {
        assert_eq!(
            parse_sheet_list(" Intake , Patient Notes,,"),
            Some(vec!["Intake".to_owned(), "Patient Notes".to_owned()])
        );
        assert_eq!(parse_sheet_list(""), None);
    }

    #[test]
    fn separators_only_request_nothing() {
        assert_eq!(parse_sheet_list(","), Some(Vec::new()));
        assert_eq!(parse_sheet_list(" , "), Some(Vec::new()));
    }

    #[test]
    fn sample_options_builder() {
        let options = SampleOptions::new("x.db")
            .table("patients")
            .size(NonZeroUsize::new(3).unwrap());
        assert_eq!(options.table.as_deref(), Some("patients"));
        assert_eq!(options.size.get(), 3);
        assert_eq!(SampleOptions::new("x.db").size.get(), DEFAULT_SAMPLE_SIZE);
    }

    #[test]
    fn default_database_lives_in_working_dir() {
        assert_eq!(
            default_database_path(PathBuf::from("/work")),
            PathBuf::from("/work/emr_mental_health.db")
        );
    }
}
