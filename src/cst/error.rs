//! Validation errors
//!
//! Both error kinds are raised only by `validate()`; `codegen` is total over
//! validated trees and never fails. The errors describe construction defects,
//! never transient conditions, so callers are expected to fix the tree rather
//! than retry.

use std::fmt;

/// Errors reported while validating a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CstError {
    /// The tree shape itself is invalid: a zero-length sequence without
    /// parentheses, or unbalanced paren lists on some node.
    Structural(String),
    /// A sequence sits flush against fixed keyword text without either
    /// configured whitespace or a lexically safe boundary.
    Adjacency(String),
}

impl fmt::Display for CstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CstError::Structural(msg) => write!(f, "Structural error: {}", msg),
            CstError::Adjacency(msg) => write!(f, "Adjacency error: {}", msg),
        }
    }
}

impl std::error::Error for CstError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind() {
        let err = CstError::Structural("unbalanced parentheses".to_string());
        assert_eq!(err.to_string(), "Structural error: unbalanced parentheses");
        let err = CstError::Adjacency("must have a space".to_string());
        assert_eq!(err.to_string(), "Adjacency error: must have a space");
    }
}
