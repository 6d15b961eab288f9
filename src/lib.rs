//! refreturn: find Go functions that return a pointer.
//!
//! Scans a directory tree with a fixed pool of worker threads, parses each
//! Go file with tree-sitter and reports every function declaration whose
//! results include a pointer type - a hint of a potentially unnecessary
//! heap allocation.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod scan;
pub mod syntax;
pub mod visit;

/// Re-export common error types for convenience.
pub use error::{Result, ScanError};

/// Re-export the scan entry points for convenience.
pub use scan::{ScanSummary, Scanner};
