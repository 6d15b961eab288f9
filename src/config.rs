//! Scan configuration.
//!
//! There is no configuration file: every knob comes from the command line
//! and is validated here before a scan starts.

use crate::error::{Result, ScanError};
use std::path::Path;

/// Default number of worker threads.
pub const DEFAULT_WORKERS: usize = 4;

/// Default job queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Default source file extension (without the leading dot).
pub const DEFAULT_EXTENSION: &str = "go";

/// Maximum reasonable worker count
const MAX_WORKERS: usize = 512;

/// Validated settings for one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Number of worker threads parsing files.
    pub workers: usize,

    /// Capacity of the bounded job queue. Zero makes every push a hand-off.
    pub queue_capacity: usize,

    /// File extension to scan, without the leading dot.
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ScanConfig {
    /// Build a configuration, normalising the extension (`.go` and `go`
    /// are equivalent) and validating the result.
    pub fn new(workers: usize, queue_capacity: usize, extension: &str) -> Result<Self> {
        let config = Self {
            workers,
            queue_capacity,
            extension: extension.trim_start_matches('.').to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings a scan cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(ScanError::InvalidConfig(format!(
                "worker count must be between 1 and {}, got {}",
                MAX_WORKERS, self.workers
            )));
        }

        if self.extension.is_empty() {
            return Err(ScanError::InvalidConfig(
                "file extension must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether `path` carries the configured extension (case-sensitive).
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}
