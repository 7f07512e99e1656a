use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "spielorte.tsv";
pub const DEFAULT_OUTPUT: &str = "spielanzahl.txt";
pub const DEFAULT_MIN_CAPACITY: u32 = 70000;
pub const DEFAULT_LOCATION: &str = "München";
pub const DEFAULT_AFTER_DATE: &str = "2024-06-30";

/// Everything one report run needs: where to read, where to write, and the
/// query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub min_capacity: u32,
    pub location: String,
    /// Exclusive lower bound, `YYYY-MM-DD`
    pub after_date: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            min_capacity: DEFAULT_MIN_CAPACITY,
            location: DEFAULT_LOCATION.to_string(),
            after_date: DEFAULT_AFTER_DATE.to_string(),
        }
    }
}

impl RunConfig {
    /// Same queries, different files
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        RunConfig {
            input: input.into(),
            output: output.into(),
            ..Default::default()
        }
    }
}
