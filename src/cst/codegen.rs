//! Rendering engine
//!
//! [`CodegenState`] is the output sink for the whole tree: nodes append
//! literal text with [`CodegenState::add_token`], and the state keeps a
//! line/column cursor in step with every emitted fragment. The same pass
//! doubles as position computation: when tracking is enabled, each node's
//! `begin_node`/`end_node` calls record the cursor at entry and exit of the
//! node's own emission into a [`PositionMap`].
//!
//! Rendering is total over validated trees; nothing in this module fails.

use crate::cst::range::{CodeRange, Position};
use std::any::TypeId;
use std::collections::HashMap;

/// Emit this node's exact source text into the state.
///
/// Defined total only over validated trees; invoking it on a tree that fails
/// `validate()` produces unspecified (but non-panicking) output.
pub trait Codegen {
    fn codegen(&self, state: &mut CodegenState);
}

/// Identity of a node within one borrowed tree.
///
/// Keys combine the node's address with its concrete type: every node has
/// exactly one owner so addresses are unambiguous for the duration of a
/// render-plus-lookup borrow, and the type component keeps a node distinct
/// from a differently-typed node it happens to start at the same address as
/// (a struct and its first field, an enum and its payload).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    addr: usize,
    ty: TypeId,
}

impl NodeKey {
    pub fn of<T: 'static>(node: &T) -> Self {
        Self {
            addr: node as *const T as usize,
            ty: TypeId::of::<T>(),
        }
    }
}

/// Mapping from node identity to the range of its own emission.
#[derive(Debug, Clone, Default)]
pub struct PositionMap {
    ranges: HashMap<NodeKey, CodeRange>,
}

impl PositionMap {
    /// The recorded range for `node`, if the render pass visited it.
    pub fn range_of<T: 'static>(&self, node: &T) -> Option<CodeRange> {
        self.ranges.get(&NodeKey::of(node)).copied()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Output sink plus cursor for one render pass.
#[derive(Debug)]
pub struct CodegenState {
    output: String,
    line: usize,
    column: usize,
    positions: Option<PositionMap>,
}

impl CodegenState {
    /// Plain rendering; `begin_node`/`end_node` are no-ops.
    pub fn new() -> Self {
        Self {
            output: String::new(),
            line: 1,
            column: 0,
            positions: None,
        }
    }

    /// Rendering with per-node range recording.
    pub fn with_position_tracking() -> Self {
        Self {
            positions: Some(PositionMap::default()),
            ..Self::new()
        }
    }

    /// Append literal text, advancing the cursor. Every embedded newline
    /// resets the column and bumps the line.
    pub fn add_token(&mut self, value: &str) {
        for ch in value.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        self.output.push_str(value);
    }

    /// The cursor's current position.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Record the cursor as `node`'s range start. A node that emits nothing
    /// between `begin_node` and `end_node` keeps the degenerate zero-width
    /// range recorded here.
    pub fn begin_node<T: 'static>(&mut self, node: &T) {
        let at = self.position();
        if let Some(positions) = &mut self.positions {
            positions
                .ranges
                .insert(NodeKey::of(node), CodeRange::new(at, at));
        }
    }

    /// Record the cursor as `node`'s exclusive range end.
    pub fn end_node<T: 'static>(&mut self, node: &T) {
        let at = self.position();
        if let Some(positions) = &mut self.positions {
            if let Some(range) = positions.ranges.get_mut(&NodeKey::of(node)) {
                range.end = at;
            }
        }
    }

    /// Finish the pass, keeping only the rendered text.
    pub fn finish(self) -> String {
        self.output
    }

    /// Finish the pass with the recorded ranges (empty when tracking was
    /// disabled).
    pub fn into_parts(self) -> (String, PositionMap) {
        (self.output, self.positions.unwrap_or_default())
    }
}

impl Default for CodegenState {
    fn default() -> Self {
        Self::new()
    }
}
