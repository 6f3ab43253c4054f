//! Conversion of sheet cells to DuckDB values for the appender.
use crate::database::column::{Column, ColumnType};
use crate::spreadsheet::cell::{Cell, CellType};
use crate::spreadsheet::{Sheet, SpreadsheetError};
use duckdb::types::{TimeUnit, Value};

/// Converts a cell to the value stored in a column of the given type.
/// Empty and error cells become NULL.
pub(super) fn to_value(sheet: &Sheet, column: &Column, cell: &Cell) -> Result<Value, SpreadsheetError> {
    let mapper = |message: String| SpreadsheetError::CellValueError {
        sheet: sheet.name.to_owned(),
        reference: cell.reference(),
        message,
    };
    if matches!(cell.kind(), CellType::Empty | CellType::Error) {
        return Ok(Value::Null);
    }
    let value = match column.kind {
        ColumnType::Varchar => Value::Text(cell.to_string()),
        ColumnType::Boolean => Value::Boolean(cell.to_boolean().map_err(mapper)?),
        ColumnType::BigInt => Value::BigInt(cell.to_bigint().map_err(mapper)?),
        ColumnType::Double => Value::Double(cell.to_double().map_err(mapper)?),
        ColumnType::Timestamp => {
            Value::Timestamp(TimeUnit::Microsecond, cell.to_datetime().map_err(mapper)?)
        }
        ColumnType::Date => Value::Date32(cell.to_date().map_err(mapper)?),
        ColumnType::Time => Value::Time64(TimeUnit::Microsecond, cell.to_time().map_err(mapper)?),
    };
    Ok(value)
}

/// Converts a whole row, in column order.
pub(super) fn to_row(sheet: &Sheet, columns: &[Column], row: &[Cell]) -> Result<Vec<Value>, SpreadsheetError> {
    columns
        .iter()
        .zip(row)
        .map(|(column, cell)| to_value(sheet, column, cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{CellErrorType, Data};

    fn sheet() -> Sheet {
        Sheet {
            name: "Intake".to_owned(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn column(kind: ColumnType) -> Column {
        Column {
            name: "c".to_owned(),
            kind,
        }
    }

    #[test]
    fn typed_values() {
        let sheet = sheet();
        assert_eq!(
            to_value(&sheet, &column(ColumnType::BigInt), &Cell::new(1, 0, Data::Float(4.0))).unwrap(),
            Value::BigInt(4)
        );
        assert_eq!(
            to_value(&sheet, &column(ColumnType::Double), &Cell::new(1, 0, Data::Int(4))).unwrap(),
            Value::Double(4.0)
        );
        assert_eq!(
            to_value(&sheet, &column(ColumnType::Varchar), &Cell::new(1, 0, Data::Float(4.0))).unwrap(),
            Value::Text("4".to_owned())
        );
        assert_eq!(
            to_value(&sheet, &column(ColumnType::Boolean), &Cell::new(1, 0, Data::Bool(true))).unwrap(),
            Value::Boolean(true)
        );
    }

    #[test]
    fn empty_and_error_cells_are_null() {
        let sheet = sheet();
        assert_eq!(
            to_value(&sheet, &column(ColumnType::BigInt), &Cell::new(1, 0, Data::Empty)).unwrap(),
            Value::Null
        );
        assert_eq!(
            to_value(&sheet, &column(ColumnType::Double), &Cell::new(1, 0, Data::Error(CellErrorType::NA))).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn dates_and_times_share_a_timestamp_column() {
        use crate::database::table::Table;

        let visits = Sheet {
            name: "Visits".to_owned(),
            columns: vec!["seen".to_owned()],
            rows: vec![
                vec![Cell::new(1, 0, Data::DateTimeIso("2024-01-02".to_owned()))],
                vec![Cell::new(2, 0, Data::DateTimeIso("09:30:00".to_owned()))],
                vec![Cell::new(3, 0, Data::DurationIso("PT45M".to_owned()))],
            ],
        };
        let table = Table::from_sheet(&visits);
        assert_eq!(table.columns[0].kind, ColumnType::Timestamp);

        let values: Vec<Value> = visits
            .rows
            .iter()
            .map(|row| to_row(&visits, &table.columns, row).unwrap().remove(0))
            .collect();
        assert_eq!(
            values,
            vec![
                Value::Timestamp(TimeUnit::Microsecond, 19_724 * 86_400_000_000),
                Value::Timestamp(TimeUnit::Microsecond, 34_200_000_000),
                Value::Timestamp(TimeUnit::Microsecond, 2_700_000_000),
            ]
        );
    }

    #[test]
    fn mismatch_names_the_cell() {
        let error = to_value(
            &sheet(),
            &column(ColumnType::BigInt),
            &Cell::new(2, 1, Data::String("abc".to_owned())),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid cell value at 'B3' in sheet 'Intake': cast 'abc' to bigint failed"
        );
    }
}
