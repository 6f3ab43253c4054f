/// Converts 0-based row & column indexes to an Excel-style cell reference (e.g. "A1", "AB12").
pub(crate) fn index_to_reference(row: usize, col: usize) -> String {
    let mut column = col + 1;
    let mut reference = String::new();
    while column > 0 {
        column -= 1;
        reference.insert(0, (b'A' + (column % 26) as u8) as char);
        column /= 26;
    }
    reference.push_str(&(row + 1).to_string());
    reference
}
