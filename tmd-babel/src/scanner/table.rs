//! Table row handling
//!
//! A row is any line containing the separator. Cells are the trimmed pieces between
//! separators; a leading and a trailing separator only delimit the row, so the empty pieces
//! outside them are dropped. Empty cells between two separators are kept. A lone separator
//! has nothing on either side of it and yields a row without cells.

use super::TABLE_SEPARATOR;

/// Split a table row into trimmed cells.
pub fn split_cells(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    if trimmed.chars().eq([TABLE_SEPARATOR]) {
        return Vec::new();
    }
    let inner = trimmed.strip_prefix(TABLE_SEPARATOR).unwrap_or(trimmed);
    let inner = inner.strip_suffix(TABLE_SEPARATOR).unwrap_or(inner);
    inner.split(TABLE_SEPARATOR).map(str::trim).collect()
}
