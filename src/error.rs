//! Refreturn error types.
//!
//! Errors fall into two severities: fatal errors abort a scan (directory
//! traversal failures, worker infrastructure failures), recoverable errors
//! are confined to a single file and only ever logged.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for refreturn operations.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Directory traversal failed. Always fatal.
    #[error("Failed to walk {path}: {source}")]
    Walk {
        /// The path being visited when traversal failed.
        path: PathBuf,
        /// The underlying traversal error.
        #[source]
        source: walkdir::Error,
    },

    /// I/O error while reading a source file.
    #[error("I/O error for path {path}: {source}")]
    Io {
        /// The file path that caused the I/O error.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Tree-sitter could not produce an error-free syntax tree.
    #[error("Parse error in {file}: {message}")]
    Parse {
        /// The file that failed to parse.
        file: PathBuf,
        /// The parse error message.
        message: String,
    },

    /// The Go grammar could not be loaded into tree-sitter.
    #[error("Failed to load Go grammar: {0}")]
    Grammar(String),

    /// Source text is not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Writing a match to the output sink failed.
    #[error("Failed to write report: {source}")]
    Report {
        /// The underlying write error.
        #[source]
        source: std::io::Error,
    },

    /// The job queue has no consumers left.
    #[error("Job queue closed before the walk finished")]
    QueueClosed,

    /// A worker thread could not be started.
    #[error("Failed to spawn worker {id}: {source}")]
    WorkerSpawn {
        /// Worker index.
        id: usize,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// A worker thread panicked while processing files.
    #[error("Worker {id} panicked")]
    WorkerPanicked {
        /// Worker index.
        id: usize,
    },

    /// Scan configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ScanError {
    /// Whether this error aborts a scan.
    ///
    /// Per-file errors (`Io`, `Parse`, `Utf8`, `Report`) are recoverable:
    /// the worker logs them as warnings and moves on to the next file. Any
    /// other kind reaching a worker is logged as an error, and the file is
    /// still skipped.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ScanError::Io { .. }
                | ScanError::Parse { .. }
                | ScanError::Utf8(_)
                | ScanError::Report { .. }
        )
    }
}

/// Result type alias for refreturn operations.
pub type Result<T> = std::result::Result<T, ScanError>;
