//! Match reporting.
//!
//! Workers report concurrently; each match is formatted into a complete
//! line first and written under a lock, so lines never interleave.

use crate::error::{Result, ScanError};
use crate::visit::Match;
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// Format one match as `<file>:<line>:<column>: <name>`.
pub fn format_match(file: &Path, found: &Match) -> String {
    format!("{}:{}: {}", file.display(), found.position, found.function_name)
}

/// Line-oriented, thread-safe match writer.
pub struct Reporter<W: Write> {
    sink: Mutex<W>,
}

impl<W: Write> Reporter<W> {
    /// Wrap an output sink.
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Write one match line.
    pub fn report(&self, file: &Path, found: &Match) -> Result<()> {
        let mut line = format_match(file, found);
        line.push('\n');

        // Poisoned only if another worker panicked while holding the lock.
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(line.as_bytes())
            .and_then(|()| sink.flush())
            .map_err(|source| ScanError::Report { source })
    }

    /// Consume the reporter and return the sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Position;

    #[test]
    fn test_line_format() {
        let found = Match {
            position: Position { line: 3, column: 1 },
            function_name: "F".to_string(),
        };
        assert_eq!(format_match(Path::new("pkg/a.go"), &found), "pkg/a.go:3:1: F");
    }

    #[test]
    fn test_report_appends_newline() {
        let reporter = Reporter::new(Vec::new());
        let found = Match {
            position: Position { line: 10, column: 2 },
            function_name: "New".to_string(),
        };
        reporter.report(Path::new("x.go"), &found).unwrap();
        reporter.report(Path::new("y.go"), &found).unwrap();

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "x.go:10:2: New\ny.go:10:2: New\n");
    }
}
