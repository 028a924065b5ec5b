//! Shared node capabilities
//!
//! Nodes form a closed set of variants dispatched through these traits:
//! everything can be validated and rendered, parenthesizable nodes expose
//! their own paren lists uniformly, and sequence-shaped nodes answer the
//! narrow boundary-safety question their consumers need without those
//! consumers re-deriving any structural detail.

use crate::cst::error::CstError;
use crate::cst::tokens::{LeftParen, RightParen};

/// Structural and adjacency validation.
///
/// Idempotent and side-effect free; walks the subtree bottom-up. A tree that
/// validates successfully renders deterministically and totally.
pub trait Validate {
    fn validate(&self) -> Result<(), CstError>;
}

/// Uniform access to a node's own wrapping parenthesis pairs.
///
/// Pairs nest outer-to-inner: `lpar` renders in order before the node body,
/// `rpar` in order after it, so `lpar[0]`/`rpar[last]` form the outermost
/// pair. Trees are immutable values, so `with_parens` is copy-with-override:
/// it consumes the node and returns a new one with an extra outermost pair.
pub trait ParenthesizedNode: Sized {
    fn lpar(&self) -> &[LeftParen];
    fn rpar(&self) -> &[RightParen];

    /// Wrap this node in one more (outermost) pair of parentheses.
    fn with_parens(self, lpar: LeftParen, rpar: RightParen) -> Self;

    /// The balanced-parens check shared by every paren owner: opening and
    /// closing counts must match, independently of any other rule.
    fn validate_parens(&self, describing: &str) -> Result<(), CstError> {
        let (open, close) = (self.lpar().len(), self.rpar().len());
        if open != close {
            return Err(CstError::Structural(format!(
                "{} has unbalanced parentheses: {} opening, {} closing",
                describing, open, close
            )));
        }
        Ok(())
    }
}

/// Whether a node's first/last rendered character is lexically distinct
/// enough from adjacent fixed keyword text that no separating whitespace is
/// required.
///
/// Consumers placing a node flush against a keyword ask these yes/no
/// questions instead of inspecting the node's internals.
pub trait BoundarySafety {
    /// Safe to sit directly after keyword text.
    fn leading_is_safe(&self) -> bool;

    /// Safe to sit directly before keyword text.
    fn trailing_is_safe(&self) -> bool;
}
