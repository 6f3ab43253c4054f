//! Workbook to database conversion.
use crate::config::ConvertOptions;
use crate::database::identifier::normalize_table_name;
use crate::database::table::Table;
use crate::database::Database;
use crate::error::{Result, ResultContext};
use crate::report::Reporter;
use crate::spreadsheet::{Criteria, Workbook};
use std::collections::HashMap;
use std::path::Path;

/// What happened to one selected sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetSummary {
    pub sheet: String,
    /// Table written for the sheet; `None` in preview mode and for sheets without cells
    pub table: Option<String>,
    /// Data rows read (preview) or stored (import)
    pub rows: usize,
    pub columns: usize,
}

/// Runs a conversion with the given options.
pub fn run(options: &ConvertOptions, reporter: &dyn Reporter) -> Result<Vec<SheetSummary>> {
    let criteria = Criteria::new(options.sheets.clone());
    if options.preview {
        preview(&options.workbook, &criteria, reporter)
    } else {
        import(&options.workbook, &options.database, &criteria, reporter)
    }
}

/// Reports the size of every selected sheet. The database is not touched.
pub fn preview(workbook_path: &Path, criteria: &Criteria, reporter: &dyn Reporter) -> Result<Vec<SheetSummary>> {
    let (mut workbook, selected) = open_and_select(workbook_path, criteria, reporter)?;

    selected
        .iter()
        .map(|sheet_name| -> Result<SheetSummary> {
            let sheet = workbook.read_sheet(sheet_name).read_context(sheet_name)?;
            reporter.info(&format!(
                "Preview - sheet: {} rows: {} cols: {}",
                sheet.name,
                sheet.row_count(),
                sheet.column_count()
            ));
            Ok(SheetSummary {
                sheet: sheet.name.to_owned(),
                table: None,
                rows: sheet.row_count(),
                columns: sheet.column_count(),
            })
        })
        .collect()
}

/// Replaces one table per selected sheet, in workbook order.
///
/// The first failing sheet stops the run. Tables replaced before it keep their new content.
pub fn import(
    workbook_path: &Path,
    database_path: &Path,
    criteria: &Criteria,
    reporter: &dyn Reporter,
) -> Result<Vec<SheetSummary>> {
    let (mut workbook, selected) = open_and_select(workbook_path, criteria, reporter)?;
    let mut database = Database::create(database_path)?;

    let mut written = HashMap::<String, String>::new();
    let mut summaries = Vec::with_capacity(selected.len());
    for sheet_name in &selected {
        reporter.info(&format!("Reading sheet: {sheet_name}"));
        let mut sheet = workbook.read_sheet(sheet_name).read_context(sheet_name)?;
        let table_name = normalize_table_name(sheet_name);
        if let Some(previous) = written.insert(table_name.to_owned(), sheet_name.to_owned()) {
            reporter.warn(&format!(
                "Sheets '{previous}' and '{sheet_name}' both map to table '{table_name}', keeping '{sheet_name}'"
            ));
        }

        if sheet.is_empty() {
            reporter.warn(&format!("Sheet '{sheet_name}' has no cells, table '{table_name}' removed"));
            database.drop_table(&table_name, reporter)?;
            summaries.push(SheetSummary {
                sheet: sheet.name,
                table: None,
                rows: 0,
                columns: 0,
            });
            continue;
        }

        sheet.trim_column_names();
        let table = Table::from_sheet(&sheet);
        reporter.info(&format!("Writing {} rows to table: {}", sheet.row_count(), table.name));
        let rows = database.replace_table(&table, &sheet, reporter)?;
        summaries.push(SheetSummary {
            sheet: sheet.name.to_owned(),
            table: Some(table.name.to_owned()),
            rows,
            columns: table.columns.len(),
        });
    }

    reporter.info(&format!("Database written to: {}", database.path().display()));
    Ok(summaries)
}

fn open_and_select(
    workbook_path: &Path,
    criteria: &Criteria,
    reporter: &dyn Reporter,
) -> Result<(Workbook, Vec<String>)> {
    reporter.info(&format!("Opening Excel file: {}", workbook_path.display()));
    let workbook = Workbook::open(workbook_path).read_context(&workbook_path.display().to_string())?;

    let available = workbook.sheet_names();
    reporter.info(&format!("Found sheets: {}", available.join(", ")));
    for name in criteria.unmatched(&available) {
        reporter.warn(&format!("Requested sheet '{name}' not found in workbook"));
    }

    let selected = criteria.select(&available)?;
    Ok((workbook, selected))
}
