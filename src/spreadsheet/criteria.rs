use crate::error::{Result, SheetDbError};

/// Which sheets of a workbook to process.
#[derive(Clone, Debug, Default)]
pub struct Criteria {
    /// Requested sheet names, `None` for every sheet.
    pub(crate) sheet_names: Option<Vec<String>>,
}

impl Criteria {
    pub fn new(sheet_names: Option<Vec<String>>) -> Self {
        Self { sheet_names }
    }

    /// Returns true if no names are requested or if `sheet_name` is one of them.
    pub fn accept(&self, sheet_name: &str) -> bool {
        match &self.sheet_names {
            Some(names) => names.iter().any(|name| name == sheet_name),
            None => true,
        }
    }

    /// Requested names that are not sheets of the workbook.
    pub fn unmatched(&self, available: &[String]) -> Vec<String> {
        self.sheet_names
            .iter()
            .flatten()
            .filter(|name| !available.contains(name))
            .cloned()
            .collect()
    }

    /// The sheets to process, in workbook order.
    ///
    /// Fails with [`SheetDbError::EmptySelection`] when nothing is left to process.
    pub fn select(&self, available: &[String]) -> Result<Vec<String>> {
        let selected: Vec<String> = available
            .iter()
            .filter(|name| self.accept(name))
            .cloned()
            .collect();
        if selected.is_empty() {
            Err(SheetDbError::EmptySelection {
                requested: self.sheet_names.clone().unwrap_or_default(),
                available: available.to_vec(),
            })
        } else {
            Ok(selected)
        }
    }
}

/// Shorthand for `Criteria::new(requested).select(available)`.
pub fn select(available: &[String], requested: Option<&[String]>) -> Result<Vec<String>> {
    Criteria::new(requested.map(<[String]>::to_vec)).select(available)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn all_sheets_without_request() {
        let available = names(&["A", "B", "C"]);
        assert_eq!(select(&available, None).unwrap(), available);
    }

    #[test]
    fn workbook_order_wins_over_request_order() {
        let available = names(&["A", "B", "C"]);
        let requested = names(&["C", "A"]);
        assert_eq!(select(&available, Some(&requested)).unwrap(), names(&["A", "C"]));
    }

    #[test]
    fn unknown_requests_are_dropped() {
        let available = names(&["Intake", "Notes"]);
        let criteria = Criteria::new(Some(names(&["Notes", "Billing"])));
        assert_eq!(criteria.select(&available).unwrap(), names(&["Notes"]));
        assert_eq!(criteria.unmatched(&available), names(&["Billing"]));
    }

    #[test]
    fn names_match_exactly() {
        let available = names(&["Intake", "intake "]);
        let requested = names(&["intake"]);
        assert!(matches!(
            select(&available, Some(&requested)),
            Err(SheetDbError::EmptySelection { .. })
        ));
    }

    #[test]
    fn empty_request_selects_nothing() {
        let available = names(&["A", "B"]);
        let requested: Vec<String> = Vec::new();
        assert!(matches!(
            select(&available, Some(&requested)),
            Err(SheetDbError::EmptySelection { requested, .. }) if requested.is_empty()
        ));
    }

    #[test]
    fn empty_selection_is_an_error() {
        let available = names(&["A", "B"]);
        let requested = names(&["X"]);
        match select(&available, Some(&requested)) {
            Err(SheetDbError::EmptySelection {
                requested,
                available,
            }) => {
                assert_eq!(requested, names(&["X"]));
                assert_eq!(available, names(&["A", "B"]));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(select(&[], None).is_err());
    }
}
