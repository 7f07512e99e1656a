// ⚽ Match records - one typed row of the venue list

use crate::error::{CatalogError, Result};
use std::fmt;

/// Number of columns a data row must carry: id, team1, team2, date, location, capacity
pub const FIELD_COUNT: usize = 6;

// ============================================================================
// RAW ROW
// ============================================================================

/// A row as handed over by the loader, before any typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source (0 when the row did not come from a file)
    pub line: u64,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new<I, S>(line: u64, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawRow {
            line,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Split one line of text on single tab characters, without trimming.
    pub fn from_line(line: u64, text: &str) -> Self {
        RawRow::new(line, text.split('\t'))
    }
}

// ============================================================================
// MATCH RECORD
// ============================================================================

/// One match. Immutable once loaded.
///
/// `date` is kept as text: all queries compare it lexicographically, which is
/// only meaningful while every row uses the same fixed-width `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub id: i32,
    pub team1: String,
    pub team2: String,
    pub date: String,
    pub location: String,
    pub capacity: u32,
}

impl MatchRecord {
    pub fn new(
        id: i32,
        team1: impl Into<String>,
        team2: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
        capacity: u32,
    ) -> Self {
        MatchRecord {
            id,
            team1: team1.into(),
            team2: team2.into(),
            date: date.into(),
            location: location.into(),
            capacity,
        }
    }

    /// Build a record from a raw row.
    ///
    /// Columns past the sixth are ignored. Fields are taken exactly as split;
    /// only `id` and `capacity` are parsed (base 10).
    pub fn from_row(row: &RawRow) -> Result<Self> {
        let fields = &row.fields;
        if fields.len() < FIELD_COUNT {
            return Err(CatalogError::parse(
                row.line,
                format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            ));
        }

        let id = fields[0].parse::<i32>().map_err(|e| {
            CatalogError::parse(row.line, format!("invalid id {:?}: {}", fields[0], e))
        })?;
        let capacity = fields[5].parse::<u32>().map_err(|e| {
            CatalogError::parse(row.line, format!("invalid capacity {:?}: {}", fields[5], e))
        })?;

        Ok(MatchRecord::new(
            id,
            fields[1].as_str(),
            fields[2].as_str(),
            fields[3].as_str(),
            fields[4].as_str(),
            capacity,
        ))
    }
}

/// Console line: `{team1} vs {team2} - Date: {date} - Location: {location}`
impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} - Date: {} - Location: {}",
            self.team1, self.team2, self.date, self.location
        )
    }
}
