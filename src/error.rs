use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the match list or writing reports.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A row could not be turned into a match (missing fields, bad number)
    #[error("parse error on line {line}: {reason}")]
    Parse { line: u64, reason: String },

    /// The input source could not be opened or read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report destination could not be opened or written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Console output failed
    #[error("failed to write report output: {0}")]
    Output(#[source] io::Error),
}

impl CatalogError {
    pub fn parse(line: u64, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Map a csv reader failure: I/O problems and undecodable text are read
    /// failures, everything else is a bad row.
    pub(crate) fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::read(path, source),
            csv::ErrorKind::Utf8 { .. } => {
                Self::read(path, io::Error::new(io::ErrorKind::InvalidData, message))
            }
            _ => Self::parse(line, message),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
