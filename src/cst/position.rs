//! Render and position-computation entry points
//!
//! Position computation is not a bespoke traversal: it is one full render
//! pass with the cursor hooks enabled, so for any node the recorded range
//! brackets exactly the node's own emission. Identical trees always produce
//! identical text and identical ranges.

use crate::cst::codegen::{Codegen, CodegenState, PositionMap};

/// Render a validated node to text.
pub fn render<T: Codegen>(node: &T) -> String {
    let mut state = CodegenState::new();
    node.codegen(&mut state);
    state.finish()
}

/// Render a validated node and record the range of every node it contains.
///
/// The returned map is keyed by node identity within the borrowed tree;
/// query it with references into the same tree that was passed in.
pub fn compute_positions<T: Codegen>(node: &T) -> (String, PositionMap) {
    let mut state = CodegenState::with_position_tracking();
    node.codegen(&mut state);
    state.into_parts()
}
