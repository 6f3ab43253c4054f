use crate::spreadsheet::cell::CellType;

/// SQL type of a table column, chosen from the cells of the matching sheet column.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColumnType {
    Boolean,
    /// Whole numbers within the i64 range
    BigInt,
    Double,
    /// Text, and the fallback for mixed columns
    Varchar,
    /// Microsecond precision; time-only cells land on 1970-01-01
    Timestamp,
    Date,
    Time,
}

/// A column of an imported table.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Header text after trimming
    pub name: String,
    pub kind: ColumnType,
}

impl ColumnType {
    /// Type name used in `CREATE TABLE`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::BigInt => "BIGINT",
            ColumnType::Double => "DOUBLE",
            ColumnType::Varchar => "VARCHAR",
            ColumnType::Timestamp => "TIMESTAMP",
            ColumnType::Date => "DATE",
            ColumnType::Time => "TIME",
        }
    }

    /// Candidate type for a single cell. Empty and error cells have none.
    pub(crate) fn from(cell_type: CellType) -> Option<Self> {
        match cell_type {
            CellType::Boolean => Some(ColumnType::Boolean),
            CellType::Integer => Some(ColumnType::BigInt),
            CellType::Float => Some(ColumnType::Double),
            CellType::Date => Some(ColumnType::Date),
            CellType::Time => Some(ColumnType::Time),
            CellType::DateTime => Some(ColumnType::Timestamp),
            CellType::Text => Some(ColumnType::Varchar),
            CellType::Empty | CellType::Error => None,
        }
    }

    /// Type of a sheet column, given the candidate type of each of its cells.
    ///
    /// Cells without a candidate are ignored. The first type in the order BOOLEAN, BIGINT,
    /// DOUBLE, DATE, TIME, TIMESTAMP that holds every candidate wins; otherwise VARCHAR.
    pub fn detect<I>(candidates: I) -> ColumnType
    where
        I: IntoIterator<Item = Option<ColumnType>>,
    {
        let candidates: Vec<ColumnType> = candidates.into_iter().flatten().collect();
        if candidates.is_empty() {
            return ColumnType::Varchar;
        }
        [
            ColumnType::Boolean,
            ColumnType::BigInt,
            ColumnType::Double,
            ColumnType::Date,
            ColumnType::Time,
            ColumnType::Timestamp,
        ]
        .into_iter()
        .find(|target| candidates.iter().all(|candidate| candidate.fits(*target)))
        .unwrap_or(ColumnType::Varchar)
    }

    /// True when a cell of this type can be stored in a `target` column without loss.
    pub fn fits(self, target: ColumnType) -> bool {
        match target {
            ColumnType::Double => matches!(self, ColumnType::BigInt | ColumnType::Double),
            ColumnType::Timestamp => {
                matches!(self, ColumnType::Timestamp | ColumnType::Date | ColumnType::Time)
            }
            ColumnType::Varchar => true,
            _ => self == target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ColumnType::*;
    use super::*;

    #[test]
    fn detect_most_specific_type() {
        assert_eq!(ColumnType::detect(vec![]), Varchar);
        assert_eq!(ColumnType::detect(vec![None, None]), Varchar);
        assert_eq!(ColumnType::detect(vec![Some(Boolean), None]), Boolean);
        assert_eq!(ColumnType::detect(vec![Some(BigInt), Some(BigInt)]), BigInt);
        assert_eq!(ColumnType::detect(vec![Some(BigInt), Some(Double)]), Double);
        assert_eq!(ColumnType::detect(vec![Some(Date), None, Some(Date)]), Date);
        assert_eq!(ColumnType::detect(vec![Some(Time)]), Time);
        assert_eq!(ColumnType::detect(vec![Some(Date), Some(Timestamp)]), Timestamp);
        assert_eq!(ColumnType::detect(vec![Some(Date), Some(Time)]), Timestamp);
        assert_eq!(ColumnType::detect(vec![Some(BigInt), Some(Varchar)]), Varchar);
        assert_eq!(ColumnType::detect(vec![Some(Boolean), Some(BigInt)]), Varchar);
    }

    #[test]
    fn widening() {
        assert!(BigInt.fits(Double));
        assert!(!Double.fits(BigInt));
        assert!(Time.fits(Timestamp));
        assert!(!Timestamp.fits(Date));
        assert!(Boolean.fits(Varchar));
    }

    #[test]
    fn cell_candidates() {
        assert_eq!(ColumnType::from(CellType::Integer), Some(BigInt));
        assert_eq!(ColumnType::from(CellType::Text), Some(Varchar));
        assert_eq!(ColumnType::from(CellType::Error), None);
        assert_eq!(ColumnType::from(CellType::Empty), None);
    }
}
