//! Error types for the relabeling run.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a run. All of these are fatal.
#[derive(Debug, Error)]
pub enum RelabelError {
    /// The working directory could not be entered.
    #[error("{} directory not found.", path.display())]
    WorkdirMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The exported table is absent.
    #[error("{} file not found.", path.display())]
    SourceMissing { path: PathBuf },

    /// The cleaned table or the fastq directory is absent.
    #[error(
        "Either the required {} file or the {} directory were not found.",
        table.display(),
        fastq_dir.display()
    )]
    MissingInput { table: PathBuf, fastq_dir: PathBuf },

    /// An eligible fastq file does not have exactly five `_`-separated fields.
    #[error("The file naming convention does not match the expected pattern for renaming: {file}")]
    NamingConventionViolation { file: String },

    /// The cleaned table has no column of that name.
    #[error("required column '{column}' not found in {}", path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl RelabelError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RelabelError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RelabelError>;
