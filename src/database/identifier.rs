use regex::Regex;

/// Table name used when a sheet name has no letters or digits at all.
pub const FALLBACK_TABLE_NAME: &str = "sheet";

/// Derives an SQL-safe table name from a sheet name.
///
/// The result only contains `[0-9a-z_]`, never starts with a digit, and is the same for the
/// same input. Runs of other characters collapse to one underscore and underscores at
/// either end are removed.
///
/// ```
/// use sheetdb::database::identifier::normalize_table_name;
///
/// assert_eq!(normalize_table_name("  Patient Notes!! "), "patient_notes");
/// assert_eq!(normalize_table_name("123"), "_123");
/// assert_eq!(normalize_table_name("***"), "sheet");
/// ```
pub fn normalize_table_name(sheet_name: &str) -> String {
    let pattern = Regex::new(r"[^0-9a-z]+").expect("Hardcode regex pattern");
    let lowered = sheet_name.trim().to_lowercase();
    let collapsed = pattern.replace_all(&lowered, "_");
    let name = collapsed.trim_matches('_');
    if name.is_empty() {
        FALLBACK_TABLE_NAME.to_owned()
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name.to_owned()
    }
}

/// Wraps an identifier in double quotes, doubling any embedded quote.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_reduced(name: &str) -> bool {
        let pattern = Regex::new(r"^[0-9a-z_]+$").unwrap();
        pattern.is_match(name)
            && !name.starts_with(|c: char| c.is_ascii_digit())
            && !name.contains("__")
    }

    #[test]
    fn examples() {
        assert_eq!(normalize_table_name("  Patient Notes!! "), "patient_notes");
        assert_eq!(normalize_table_name("123"), "_123");
        assert_eq!(normalize_table_name("***"), "sheet");
        assert_eq!(normalize_table_name(""), "sheet");
        assert_eq!(normalize_table_name("   "), "sheet");
        assert_eq!(normalize_table_name("Intake"), "intake");
        assert_eq!(normalize_table_name("2024 Q1 - Visits"), "_2024_q1_visits");
        assert_eq!(normalize_table_name("__a__b__"), "a_b");
        assert_eq!(normalize_table_name("Café Menu"), "caf_menu");
    }

    #[test]
    fn total_and_reduced() {
        let inputs = [
            "", " ", "_", "___", "9", "a", "A-B", "Ünïcödé", "日本語", "tab\tname", "x__y",
            "-1", "1-", "  _7_  ", "Sheet1", "\"quoted\"", "a;DROP TABLE x;--",
        ];
        for input in inputs {
            let name = normalize_table_name(input);
            assert!(is_reduced(&name), "{input:?} -> {name:?}");
            assert_eq!(name, normalize_table_name(input));
        }
    }

    #[test]
    fn no_alphanumerics_means_fallback() {
        for input in ["!!!", "---", " . ", "日本", "_"] {
            assert_eq!(normalize_table_name(input), FALLBACK_TABLE_NAME);
        }
    }

    #[test]
    fn quoting() {
        assert_eq!(quote_identifier("name"), "\"name\"");
        assert_eq!(quote_identifier("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(quote_identifier(" Age "), "\" Age \"");
    }
}
