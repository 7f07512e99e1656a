// 🏟️ Match Catalog - in-memory match list and its queries
//
// Built once from a row source, never mutated afterwards. Every query borrows
// the catalog read-only, so any number of readers can share it.

use crate::error::Result;
use crate::loader;
use crate::record::{MatchRecord, RawRow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

// ============================================================================
// LOCATION COUNT
// ============================================================================

/// Number of matches played at one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

impl LocationCount {
    pub fn new(location: impl Into<String>, count: usize) -> Self {
        LocationCount {
            location: location.into(),
            count,
        }
    }
}

// ============================================================================
// MATCH CATALOG
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct MatchCatalog {
    matches: Vec<MatchRecord>,
}

impl MatchCatalog {
    /// Build a catalog from raw rows. The first row is a header and is
    /// skipped without looking at it.
    ///
    /// Any bad data row aborts the whole load; no partial catalog is returned.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let matches = rows
            .into_iter()
            .skip(1)
            .map(|row| MatchRecord::from_row(&row))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Loaded {} matches", matches.len());
        Ok(MatchCatalog { matches })
    }

    /// Read and parse a TSV file.
    pub fn load(path: &Path) -> Result<Self> {
        let rows = loader::read_rows_from_path(path)?;
        Self::from_rows(rows)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// All matches in file order
    pub fn records(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchRecord> {
        self.matches.iter()
    }

    /// Matches with `capacity >= min_capacity`, in file order.
    pub fn filter_by_capacity(
        &self,
        min_capacity: u32,
    ) -> impl Iterator<Item = &MatchRecord> + '_ {
        self.matches
            .iter()
            .filter(move |m| m.capacity >= min_capacity)
    }

    /// Matches at exactly `location` (byte-exact, case-sensitive) dated strictly
    /// after `after_date`, sorted ascending by date.
    ///
    /// Dates compare as strings. Same-date matches keep file order.
    pub fn matches_in_location_after_date<'a>(
        &'a self,
        location: &str,
        after_date: &str,
    ) -> std::vec::IntoIter<&'a MatchRecord> {
        let mut selected: Vec<&MatchRecord> = self
            .matches
            .iter()
            .filter(|m| m.location == location && m.date.as_str() > after_date)
            .collect();

        // stable: ties stay in file order
        selected.sort_by(|a, b| a.date.cmp(&b.date));

        tracing::debug!(
            "{} matches in {:?} after {}",
            selected.len(),
            location,
            after_date
        );
        selected.into_iter()
    }

    /// Matches per location, most matches first; equal counts ordered by
    /// location name ascending.
    pub fn count_per_location(&self) -> Vec<LocationCount> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for m in &self.matches {
            *counts.entry(m.location.as_str()).or_insert(0) += 1;
        }

        let mut sorted: Vec<LocationCount> = counts
            .into_iter()
            .map(|(location, count)| LocationCount::new(location, count))
            .collect();

        sorted.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.location.cmp(&b.location))
        });

        sorted
    }
}

impl<'a> IntoIterator for &'a MatchCatalog {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
