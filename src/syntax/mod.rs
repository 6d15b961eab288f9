//! Go source → syntax tree.
//!
//! Wraps tree-sitter-go behind the two operations the scanner needs:
//! parsing source text into an error-free tree, and resolving byte
//! offsets back to 1-based line/column positions.

pub mod go;

use crate::error::{Result, ScanError};
use ropey::Rope;
use std::fmt;
use std::path::Path;
use tree_sitter::{Node, Tree};

pub use go::{FunctionDecl, FunctionKind, GoNode, ReturnType};

/// A resolved source position.
///
/// Both fields are 1-based; `column` counts bytes from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (1-based).
    pub line: usize,
    /// Byte column (1-based).
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Tree-sitter parser loaded with the Go grammar.
///
/// A parser is not shareable between threads, so every worker owns one.
pub struct GoParser {
    parser: tree_sitter::Parser,
}

impl GoParser {
    /// Create a parser for Go source.
    pub fn new() -> Result<Self> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_go::language())
            .map_err(|e| ScanError::Grammar(format!("{:?}", e)))?;

        Ok(Self { parser })
    }

    /// Parse `source` into a syntax tree.
    ///
    /// Fails with `ScanError::Parse` when the tree contains any ERROR or
    /// MISSING node, and with `ScanError::Utf8` for non-UTF-8 input.
    pub fn parse(&mut self, path: &Path, source: Vec<u8>) -> Result<ParsedFile> {
        let rope = Rope::from_str(std::str::from_utf8(&source)?);

        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| ScanError::Parse {
                file: path.to_path_buf(),
                message: "Parse failed - no tree returned".to_string(),
            })?;

        let parsed = ParsedFile { source, rope, tree };

        if parsed.root().has_error() {
            let message = match first_error(parsed.root()) {
                Some(node) => format!("syntax error at {}", parsed.resolve(node.start_byte())),
                None => "syntax error".to_string(),
            };
            return Err(ScanError::Parse {
                file: path.to_path_buf(),
                message,
            });
        }

        Ok(parsed)
    }
}

/// An error-free syntax tree together with the text it was parsed from.
pub struct ParsedFile {
    source: Vec<u8>,
    rope: Rope,
    tree: Tree,
}

impl ParsedFile {
    /// Root node of the tree (`source_file`).
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Raw source bytes.
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// Convert a byte offset into a line/column position.
    ///
    /// Only `\n` starts a new line; form feed, a lone `\r` and Unicode line
    /// separators are ordinary column bytes. Offsets past the end of the file
    /// resolve to the end of the file.
    pub fn resolve(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_bytes());
        let line = self.rope.byte_to_line(offset);
        let column = offset - self.rope.line_to_byte(line);

        Position {
            line: line + 1,
            column: column + 1,
        }
    }
}

/// Find the first ERROR or MISSING node in document order.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .filter(|child| child.has_error())
        .find_map(first_error);
    found
}
