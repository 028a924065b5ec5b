//! Delimiter leaf tokens
//!
//! Parentheses and separators are the rendering leaves of the tree. Each
//! token owns its immediately adjacent whitespace and renders its literal
//! text plus that whitespace, nothing else. Separator slots are tri-state:
//! a slot may be absent, carry an explicit caller-supplied [`Comma`], or hold
//! a sentinel whose rendering is resolved by the owning sequence node based
//! on the element's position among its siblings.

use crate::cst::codegen::{Codegen, CodegenState};
use crate::cst::whitespace::SimpleWhitespace;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// An opening parenthesis together with the whitespace that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeftParen {
    pub whitespace_after: SimpleWhitespace,
}

impl LeftParen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_whitespace_after(whitespace_after: impl Into<SimpleWhitespace>) -> Self {
        Self {
            whitespace_after: whitespace_after.into(),
        }
    }
}

impl Codegen for LeftParen {
    fn codegen(&self, state: &mut CodegenState) {
        state.begin_node(self);
        state.add_token("(");
        self.whitespace_after.codegen(state);
        state.end_node(self);
    }
}

/// A closing parenthesis together with the whitespace that precedes it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RightParen {
    pub whitespace_before: SimpleWhitespace,
}

impl RightParen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_whitespace_before(whitespace_before: impl Into<SimpleWhitespace>) -> Self {
        Self {
            whitespace_before: whitespace_before.into(),
        }
    }
}

impl Codegen for RightParen {
    fn codegen(&self, state: &mut CodegenState) {
        state.begin_node(self);
        self.whitespace_before.codegen(state);
        state.add_token(")");
        state.end_node(self);
    }
}

/// A separator with caller-controlled whitespace on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Comma {
    pub whitespace_before: SimpleWhitespace,
    pub whitespace_after: SimpleWhitespace,
}

impl Comma {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spaced(before: impl Into<SimpleWhitespace>, after: impl Into<SimpleWhitespace>) -> Self {
        Self {
            whitespace_before: before.into(),
            whitespace_after: after.into(),
        }
    }
}

impl Codegen for Comma {
    fn codegen(&self, state: &mut CodegenState) {
        state.begin_node(self);
        self.whitespace_before.codegen(state);
        state.add_token(",");
        self.whitespace_after.codegen(state);
        state.end_node(self);
    }
}

/// The separator slot on an element.
///
/// `Sentinel` means "decide at render time": the owning sequence resolves it
/// from the element's position among siblings, because an element in
/// isolation cannot know whether it is last or sole.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CommaSlot {
    /// No separator, ever.
    Absent,
    /// Resolved positionally by the owning sequence at render time.
    #[default]
    Sentinel,
    /// Caller-supplied separator, rendered as part of the element itself.
    Explicit(Comma),
}

impl CommaSlot {
    pub fn is_sentinel(&self) -> bool {
        matches!(self, CommaSlot::Sentinel)
    }

    /// Whether this slot will render any text, given the positional facts
    /// only the owning sequence knows. Feeds the trailing boundary-safety
    /// query.
    pub(crate) fn renders_nonempty(&self, is_last: bool, is_sole: bool) -> bool {
        match self {
            CommaSlot::Absent => false,
            CommaSlot::Explicit(_) => true,
            CommaSlot::Sentinel => !is_last || is_sole,
        }
    }
}

/// Sentinel separator between two elements: a comma followed by one space.
static SPACED_COMMA: Lazy<Comma> = Lazy::new(|| Comma {
    whitespace_before: SimpleWhitespace::default(),
    whitespace_after: SimpleWhitespace::from(" "),
});

/// Sentinel separator after a sole element: a bare comma. Required so the
/// single-element sequence reads as a sequence rather than a parenthesized
/// expression.
static BARE_COMMA: Lazy<Comma> = Lazy::new(Comma::new);

/// Positional resolution of a sentinel slot.
///
/// Returns the separator the owning sequence must emit after the element's
/// own emission. Absent and Explicit slots resolve to nothing here: Absent
/// renders nothing anywhere, and an Explicit comma belongs to the element
/// and is rendered by it.
pub(crate) fn resolve_sentinel(slot: &CommaSlot, is_last: bool, is_sole: bool) -> Option<&'static Comma> {
    match slot {
        CommaSlot::Sentinel if !is_last => Some(&SPACED_COMMA),
        CommaSlot::Sentinel if is_sole => Some(&BARE_COMMA),
        _ => None,
    }
}
