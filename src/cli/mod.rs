//! Command-line interface for refreturn.
//!
//! This module handles argument parsing only. Scanning lives in
//! [`crate::scan`].

use crate::config::{ScanConfig, DEFAULT_EXTENSION, DEFAULT_QUEUE_CAPACITY, DEFAULT_WORKERS};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Find functions that return a reference and cause allocations.
#[derive(Parser, Debug)]
#[command(name = "refreturn")]
#[command(author, version, about)]
#[command(
    long_about = "refreturn finds all Go functions in a directory tree that return a reference \
                  and cause a potential unnecessary heap allocation.\n\n\
                  Each match is printed as <file>:<line>:<column>: <function>."
)]
pub struct Cli {
    /// Directory to scan.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Number of worker threads parsing files.
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Maximum number of files waiting to be parsed.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_QUEUE_CAPACITY)]
    pub queue_size: usize,

    /// Extension of source files to scan.
    #[arg(long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the validated scan configuration from the parsed flags.
    pub fn scan_config(&self) -> Result<ScanConfig> {
        ScanConfig::new(self.workers, self.queue_size, &self.extension)
    }
}

/// Parse command-line arguments.
pub fn parse_args() -> Cli {
    Cli::parse()
}
