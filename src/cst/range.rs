//! Position and range types for rendered source locations
//!
//! Positions are produced by a render pass over the tree: the codegen cursor
//! advances over every emitted fragment, and each node records the cursor at
//! entry and exit of its own emission. Lines are 1-based, columns 0-based.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cursor position in rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number
    pub line: usize,
    /// 0-based column number
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The range a node's own emission occupies in rendered output.
///
/// `start` is inclusive, `end` exclusive. A node that emits nothing gets a
/// degenerate range with `start == end` at the cursor position it was
/// visited at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeRange {
    pub start: Position,
    pub end: Position,
}

impl CodeRange {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Build a range from `(line, column)` pairs.
    pub fn from_pairs(start: (usize, usize), end: (usize, usize)) -> Self {
        Self {
            start: Position::new(start.0, start.1),
            end: Position::new(end.0, end.1),
        }
    }

    /// True for a zero-width emission.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for CodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
