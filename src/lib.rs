//! # recst
//!
//! A lossless concrete syntax tree for bracketed sequence constructs.
//!
//! Trees produced by an external parser (or built directly by a caller)
//! validate on demand and render back to source text exactly; a single
//! render pass also computes the line/column range of every node.

pub mod cst;

pub use cst::{
    compute_positions, render, BoundarySafety, Codegen, CodegenState, CodeRange, Comma, CommaSlot,
    CstError, CstSnapshot, Element, Expression, ForBinding, LeftParen, Name, ParenthesizedNode,
    Position, PositionMap, RightParen, SimpleWhitespace, Snapshot, StarredElement, Tuple,
    TupleElement, Validate,
};
