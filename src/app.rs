// 🚀 Report run - load, print the two match lists, write the count file
//
// Failures are scoped per step: a bad input stops the run before anything is
// printed, a bad output path fails after the two console sections are out.

use crate::catalog::MatchCatalog;
use crate::config::RunConfig;
use crate::error::{CatalogError, Result};
use crate::report;
use std::io::Write;

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub loaded: usize,
    pub high_capacity: usize,
    pub location_matches: usize,
    pub locations: usize,
}

/// Run the three reports against an already built catalog.
pub fn run_with_catalog<W: Write>(
    catalog: &MatchCatalog,
    config: &RunConfig,
    out: &mut W,
) -> Result<RunSummary> {
    let high_capacity = report::render_section(
        out,
        &format!("1. Filtered Matches (Capacity >= {}):", config.min_capacity),
        catalog.filter_by_capacity(config.min_capacity),
    )
    .map_err(CatalogError::Output)?;

    writeln!(out).map_err(CatalogError::Output)?;
    let location_matches = report::render_section(
        out,
        &format!(
            "2. Matches in {} (After {}):",
            config.location, config.after_date
        ),
        catalog.matches_in_location_after_date(&config.location, &config.after_date),
    )
    .map_err(CatalogError::Output)?;

    writeln!(out, "\n3. Writing match counts per location to file...")
        .map_err(CatalogError::Output)?;
    // sections 1 and 2 stay visible even if the count file fails
    out.flush().map_err(CatalogError::Output)?;

    let counts = catalog.count_per_location();
    report::write_count_report(&config.output, &counts)?;
    writeln!(out, "Match counts saved to {}", config.output.display())
        .map_err(CatalogError::Output)?;

    Ok(RunSummary {
        loaded: catalog.len(),
        high_capacity,
        location_matches,
        locations: counts.len(),
    })
}

/// Load `config.input` and run every report, printing to `out`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<RunSummary> {
    let catalog = MatchCatalog::load(&config.input)?;
    tracing::debug!(
        "Catalog ready: {} matches from {}",
        catalog.len(),
        config.input.display()
    );

    run_with_catalog(&catalog, config, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SPIELORTE: &str = "ID\tTeam1\tTeam2\tDatum\tSpielort\tKapazität\n\
        1\tDeutschland\tSchottland\t2024-06-14\tMünchen\t66000\n\
        2\tSpanien\tKroatien\t2024-06-15\tBerlin\t71000\n\
        3\tSerbien\tEngland\t2024-06-16\tGelsenkirchen\t50000\n\
        4\tRumänien\tUkraine\t2024-07-02\tMünchen\t66000\n\
        5\tPortugal\tFrankreich\t2024-07-05\tHamburg\t50000\n\
        6\tSpanien\tFrankreich\t2024-07-09\tMünchen\t66000\n\
        7\tSpanien\tEngland\t2024-07-14\tBerlin\t71000\n";

    fn setup(input: &str) -> (tempfile::TempDir, RunConfig) {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("spielorte.tsv");
        fs::write(&input_path, input).unwrap();
        let mut config = RunConfig::with_paths(input_path, dir.path().join("spielanzahl.txt"));
        config.min_capacity = 70000;
        (dir, config)
    }

    #[test]
    fn test_full_run() {
        let (_dir, config) = setup(SPIELORTE);
        let mut out = Vec::new();

        let summary = run(&config, &mut out).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                loaded: 7,
                high_capacity: 2,
                location_matches: 2,
                locations: 4,
            }
        );

        let expected_console = format!(
            "1. Filtered Matches (Capacity >= 70000):\n\
             Spanien vs Kroatien - Date: 2024-06-15 - Location: Berlin\n\
             Spanien vs England - Date: 2024-07-14 - Location: Berlin\n\
             \n\
             2. Matches in München (After 2024-06-30):\n\
             Rumänien vs Ukraine - Date: 2024-07-02 - Location: München\n\
             Spanien vs Frankreich - Date: 2024-07-09 - Location: München\n\
             \n\
             3. Writing match counts per location to file...\n\
             Match counts saved to {}\n",
            config.output.display()
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected_console);

        assert_eq!(
            fs::read_to_string(&config.output).unwrap(),
            "München%3\nBerlin%2\nGelsenkirchen%1\nHamburg%1\n"
        );
    }

    #[test]
    fn test_load_failure_prints_nothing() {
        let (_dir, config) = setup("h\n1\tA\tB\t2024-06-10\n");
        let mut out = Vec::new();

        let err = run(&config, &mut out).unwrap_err();

        assert!(matches!(err, CatalogError::Parse { line: 2, .. }));
        assert!(out.is_empty());
        assert!(!config.output.exists());
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::with_paths(dir.path().join("nope.tsv"), dir.path().join("out.txt"));

        let err = run(&config, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_write_failure_keeps_earlier_sections() {
        let (dir, mut config) = setup(SPIELORTE);
        config.output = dir.path().join("missing_dir").join("spielanzahl.txt");
        let catalog = MatchCatalog::load(&config.input).unwrap();
        let mut out = Vec::new();

        let err = run_with_catalog(&catalog, &config, &mut out).unwrap_err();

        assert!(matches!(err, CatalogError::Write { .. }));
        let console = String::from_utf8(out).unwrap();
        assert!(console.contains("2. Matches in München (After 2024-06-30):"));
        assert!(!console.contains("Match counts saved"));

        // the catalog is untouched and still answers queries
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.count_per_location()[0].count, 3);
    }
}
