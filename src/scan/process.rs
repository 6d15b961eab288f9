//! Per-file processing: read, parse, visit, report.

use crate::error::{Result, ScanError};
use crate::report::Reporter;
use crate::syntax::GoParser;
use crate::visit::Visitor;
use std::io::Write;
use std::path::Path;

/// Turns one source file into reported matches.
///
/// Owns a parser, so each worker needs its own processor.
pub struct FileProcessor<'r, W: Write> {
    parser: GoParser,
    reporter: &'r Reporter<W>,
}

impl<'r, W: Write> FileProcessor<'r, W> {
    /// Create a processor reporting into `reporter`.
    pub fn new(reporter: &'r Reporter<W>) -> Result<Self> {
        Ok(Self {
            parser: GoParser::new()?,
            reporter,
        })
    }

    /// Process one file and return the number of matches reported.
    ///
    /// A file that cannot be read or parsed reports nothing: the whole tree
    /// is checked for syntax errors before the first match is produced.
    pub fn process(&mut self, path: &Path) -> Result<usize> {
        let source = std::fs::read(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = self.parser.parse(path, source)?;

        let mut reported = 0;
        for found in Visitor::new(&parsed) {
            self.reporter.report(path, &found)?;
            reported += 1;
        }
        Ok(reported)
    }
}
