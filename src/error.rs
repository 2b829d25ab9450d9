use std::{num::ParseFloatError, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a report from being produced.
#[derive(Debug, Error)]
pub enum Error {
    /// The timesheet at `path` could not be opened or read.
    #[error("reading {path:?}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// A numeric column held something that isn't a number.
    #[error("bad {field} value {value:?}")]
    ValueParse {
        field: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("unknown report type {0:?}")]
    UnknownReport(String),
}
