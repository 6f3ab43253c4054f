use crate::database::column::{Column, ColumnType};
use crate::database::identifier::{normalize_table_name, quote_identifier};
use crate::spreadsheet::Sheet;

/// Target table for one sheet: normalized name plus typed columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    /// Table name derived from the sheet name
    pub name: String,
    pub columns: Vec<Column>,
}

impl Table {
    /// Derives the table for a sheet. Column types are detected from every data row.
    pub fn from_sheet(sheet: &Sheet) -> Self {
        let columns = sheet
            .columns
            .iter()
            .enumerate()
            .map(|(index, name)| Column {
                name: name.to_owned(),
                kind: ColumnType::detect(
                    sheet
                        .rows
                        .iter()
                        .map(|row| ColumnType::from(row[index].kind())),
                ),
            })
            .collect();
        Table {
            name: normalize_table_name(&sheet.name),
            columns,
        }
    }

    /// `CREATE TABLE` statement for this table.
    pub fn create_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|column| format!("{} {}", quote_identifier(&column.name), column.kind.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("CREATE TABLE {} ({columns})", quote_identifier(&self.name))
    }

    pub fn drop_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", quote_identifier(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreadsheet::Cell;
    use calamine::Data;

    fn sheet() -> Sheet {
        Sheet {
            name: "Patient Notes".to_owned(),
            columns: vec!["id".into(), "note".into(), "score".into(), "flag".into()],
            rows: vec![
                vec![
                    Cell::new(1, 0, Data::Float(1.0)),
                    Cell::new(1, 1, Data::String("first".into())),
                    Cell::new(1, 2, Data::Float(1.5)),
                    Cell::new(1, 3, Data::Empty),
                ],
                vec![
                    Cell::new(2, 0, Data::Int(2)),
                    Cell::new(2, 1, Data::Float(7.0)),
                    Cell::new(2, 2, Data::Int(3)),
                    Cell::new(2, 3, Data::Bool(true)),
                ],
            ],
        }
    }

    #[test]
    fn columns_are_typed_from_rows() {
        let table = Table::from_sheet(&sheet());
        assert_eq!(table.name, "patient_notes");
        let kinds: Vec<ColumnType> = table.columns.iter().map(|column| column.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ColumnType::BigInt,
                ColumnType::Varchar,
                ColumnType::Double,
                ColumnType::Boolean
            ]
        );
    }

    #[test]
    fn statements() {
        let table = Table::from_sheet(&sheet());
        assert_eq!(
            table.create_sql(),
            "CREATE TABLE \"patient_notes\" (\"id\" BIGINT, \"note\" VARCHAR, \"score\" DOUBLE, \"flag\" BOOLEAN)"
        );
        assert_eq!(table.drop_sql(), "DROP TABLE IF EXISTS \"patient_notes\"");
    }
}
