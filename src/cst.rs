//! Lossless concrete syntax tree for bracketed sequence constructs
//!
//! The tree preserves every lexical detail of source text - whitespace,
//! redundant delimiters, trailing separators - so regenerating text from a
//! parsed tree reproduces the original byte-for-byte, while the node model
//! stays structured and queryable for tooling.
//!
//! ## Modules
//!
//! - `range` - line/column positions and ranges in rendered output
//! - `whitespace` - the whitespace fragment primitive
//! - `tokens` - delimiter leaf tokens and the tri-state separator slot
//! - `elements` - node definitions: values, element wrappers, the sequence
//!   node, and the keyword binding clause
//! - `traits` - shared capabilities: validation, paren ownership, boundary
//!   safety
//! - `codegen` - the rendering engine and per-node position recording
//! - `position` - render and position-computation entry points
//! - `snapshot` - normalized serializable tree summaries
//! - `error` - validation errors
//!
//! ## Contract
//!
//! `validate()` is idempotent and side-effect free; `codegen`/`render` are
//! total and deterministic over validated trees. Nodes are immutable values
//! with exactly one owner; edits are copy-with-override and produce new
//! trees.

pub mod codegen;
pub mod elements;
pub mod error;
pub mod position;
pub mod range;
pub mod snapshot;
pub mod tokens;
pub mod traits;
pub mod whitespace;

// Re-export commonly used types at module root
pub use codegen::{Codegen, CodegenState, PositionMap};
pub use elements::{Element, Expression, ForBinding, Name, StarredElement, Tuple, TupleElement};
pub use error::CstError;
pub use position::{compute_positions, render};
pub use range::{CodeRange, Position};
pub use snapshot::{CstSnapshot, Snapshot};
pub use tokens::{Comma, CommaSlot, LeftParen, RightParen};
pub use traits::{BoundarySafety, ParenthesizedNode, Validate};
pub use whitespace::SimpleWhitespace;
