// Euro 2024 match catalog - Core Library
// Loads the venue list, answers the queries, writes the reports

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod record;
pub mod report;

// Re-export commonly used types
pub use app::{run, run_with_catalog, RunSummary};
pub use catalog::{LocationCount, MatchCatalog};
pub use config::RunConfig;
pub use error::{CatalogError, Result};
pub use loader::{read_rows, read_rows_from_path};
pub use record::{MatchRecord, RawRow};
pub use report::{
    read_count_report, read_count_report_from_path, render_section, write_count_report,
    write_location_counts,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
