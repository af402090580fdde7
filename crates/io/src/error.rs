//! Error types for hydrosep-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the hydrosep-io crate.
///
/// Covers missing files, read/write failures, malformed or inconsistent
/// rows in a streamflow table, and result columns that do not line up with
/// the series they were computed from.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an operating-system error while reading or writing a file.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Wraps a CSV encoding or decoding error that is not tied to one row.
    #[error("csv error on {}: {source}", path.display())]
    Csv {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: csv::Error,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a file holds no data rows.
    #[error("no data rows in {}", path.display())]
    EmptyFile {
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a column has an unexpected length.
    #[error("column '{name}' mismatch: expected {expected} rows, got {got}")]
    DimensionMismatch {
        /// Name of the column.
        name: String,
        /// Expected number of rows.
        expected: usize,
        /// Actual number of rows.
        got: usize,
    },
}

impl IoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        IoError::Csv {
            path: path.into(),
            source,
        }
    }

    /// Replaces the path carried by `Io` and `Csv` errors.
    pub(crate) fn with_path(self, path: &std::path::Path) -> Self {
        match self {
            IoError::Io { source, .. } => IoError::io(path, source),
            IoError::Csv { source, .. } => IoError::csv(path, source),
            other => other,
        }
    }
}
