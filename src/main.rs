use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use euro_matches::config::{
    DEFAULT_AFTER_DATE, DEFAULT_INPUT, DEFAULT_LOCATION, DEFAULT_MIN_CAPACITY, DEFAULT_OUTPUT,
};
use euro_matches::{logging, run, RunConfig, RunSummary};

#[derive(Parser)]
#[command(name = "euro-matches")]
#[command(version = euro_matches::VERSION)]
#[command(about = "Filter and count Euro 2024 matches from a TSV venue list", long_about = None)]
struct Cli {
    /// Tab-separated match list (first line is a header)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where the per-location counts are written (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Minimum stadium capacity for the first list
    #[arg(long, default_value_t = DEFAULT_MIN_CAPACITY)]
    min_capacity: u32,

    /// Location for the second list, matched exactly
    #[arg(long, default_value = DEFAULT_LOCATION)]
    location: String,

    /// Only matches strictly after this date (YYYY-MM-DD)
    #[arg(long, default_value = DEFAULT_AFTER_DATE)]
    after: String,

    /// trace, debug, info, warn, error or off
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            input: cli.input,
            output: cli.output,
            min_capacity: cli.min_capacity,
            location: cli.location,
            after_date: cli.after,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    match try_main(RunConfig::from(cli)) {
        Ok(summary) => {
            tracing::debug!(?summary, "Run finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!("Run failed: {:?}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_main(config: RunConfig) -> Result<RunSummary> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = run(&config, &mut out)
        .with_context(|| format!("report run on {} failed", config.input.display()))?;
    out.flush().context("Failed to flush stdout")?;

    Ok(summary)
}
