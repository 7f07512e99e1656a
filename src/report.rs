// 📝 Reporter - console sections and the per-location count file
//
// Count file format: one `location%count` line per location, no header.

use crate::catalog::LocationCount;
use crate::error::{CatalogError, Result};
use crate::record::MatchRecord;
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Field separator of the count report
pub const COUNT_DELIMITER: u8 = b'%';

/// Write a titled list of matches, one display line per match.
pub fn render_section<'a, W, I>(out: &mut W, title: &str, records: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a MatchRecord>,
{
    writeln!(out, "{}", title)?;
    let mut written = 0;
    for record in records {
        writeln!(out, "{}", record)?;
        written += 1;
    }
    Ok(written)
}

/// Write `location%count` lines in the given order.
pub fn write_location_counts<W: Write>(out: W, counts: &[LocationCount]) -> io::Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(COUNT_DELIMITER)
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    for count in counts {
        writer.serialize(count)?;
    }
    writer.flush()
}

/// Replace the file at `path` with the count report.
///
/// The handle is owned by this call and dropped on every exit path; a failure
/// halfway can leave a partial file behind.
pub fn write_count_report(path: &Path, counts: &[LocationCount]) -> Result<()> {
    let file = File::create(path).map_err(|e| CatalogError::write(path, e))?;
    write_location_counts(file, counts).map_err(|e| CatalogError::write(path, e))?;

    tracing::info!("Wrote {} location counts to {}", counts.len(), path.display());
    Ok(())
}

/// Parse a count report back into pairs, keeping line order.
///
/// Locations containing `%` cannot be read back.
pub fn read_count_report<R: Read>(input: R, source_name: &Path) -> Result<Vec<LocationCount>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(COUNT_DELIMITER)
        .has_headers(false)
        .quoting(false)
        .from_reader(input);

    reader
        .deserialize::<LocationCount>()
        .map(|result| result.map_err(|e| CatalogError::from_csv(source_name, e)))
        .collect()
}

pub fn read_count_report_from_path(path: &Path) -> Result<Vec<LocationCount>> {
    let file = File::open(path).map_err(|e| CatalogError::read(path, e))?;
    read_count_report(file, path)
}
