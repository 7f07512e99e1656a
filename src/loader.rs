// 📂 Loader - tab-separated text → raw rows
//
// The header is returned like any other row; MatchCatalog decides to skip it.
// Lines are split by hand: the csv reader drops blank lines, and a blank line
// has to reach the catalog as a (short) row.

use crate::error::{CatalogError, Result};
use crate::record::RawRow;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Read every line of a TSV source as a row, split on single tabs.
///
/// Quotes carry no meaning and rows may have any number of columns; field
/// count is checked when rows are typed. A blank line is a row with one empty
/// field. Text that is not valid UTF-8 is a read failure.
pub fn read_rows<R: Read>(reader: R, source_name: &Path) -> Result<Vec<RawRow>> {
    let mut rows = Vec::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|e| CatalogError::read(source_name, e))?;
        rows.push(RawRow::from_line(index as u64 + 1, &line));
    }

    Ok(rows)
}

/// Open `path` and read all of its rows.
pub fn read_rows_from_path(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path).map_err(|e| CatalogError::read(path, e))?;
    read_rows(file, path)
}
