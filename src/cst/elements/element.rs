//! Element wrappers
//!
//! An element wraps exactly one value, an optional trailing separator slot,
//! and its own parenthesis pairs, independent of whatever parens its owning
//! sequence carries. The separator slot's sentinel and absent states are
//! resolved and rendered by the owning sequence, never here: an element in
//! isolation cannot know whether it is last among its siblings or the sole
//! element. Only an explicit separator belongs to the element's own
//! emission.
//!
//! A starred element additionally owns the spread marker and the whitespace
//! between the marker and the value.

use crate::cst::codegen::{Codegen, CodegenState};
use crate::cst::elements::expression::Expression;
use crate::cst::error::CstError;
use crate::cst::tokens::{Comma, CommaSlot, LeftParen, RightParen};
use crate::cst::traits::{ParenthesizedNode, Validate};
use crate::cst::whitespace::SimpleWhitespace;
use serde::{Deserialize, Serialize};

/// A plain element of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub value: Expression,
    pub comma: CommaSlot,
    pub lpar: Vec<LeftParen>,
    pub rpar: Vec<RightParen>,
}

impl Element {
    pub fn new(value: impl Into<Expression>) -> Self {
        Self {
            value: value.into(),
            comma: CommaSlot::Sentinel,
            lpar: Vec::new(),
            rpar: Vec::new(),
        }
    }

    /// Copy-with-override: replace the separator slot with an explicit comma.
    pub fn with_comma(mut self, comma: Comma) -> Self {
        self.comma = CommaSlot::Explicit(comma);
        self
    }

    /// Copy-with-override: never render a separator for this element.
    pub fn without_comma(mut self) -> Self {
        self.comma = CommaSlot::Absent;
        self
    }

    /// Safe to sit directly after keyword text only when wrapped in at least
    /// one of its own parens.
    pub fn leading_is_safe(&self) -> bool {
        !self.lpar.is_empty()
    }

    /// Safe to sit directly before keyword text when wrapped in at least one
    /// of its own parens, or when the separator it will resolve to renders
    /// non-empty text. The positional flags come from the owning sequence.
    pub fn trailing_is_safe(&self, is_last: bool, is_sole: bool) -> bool {
        !self.rpar.is_empty() || self.comma.renders_nonempty(is_last, is_sole)
    }
}

impl ParenthesizedNode for Element {
    fn lpar(&self) -> &[LeftParen] {
        &self.lpar
    }

    fn rpar(&self) -> &[RightParen] {
        &self.rpar
    }

    fn with_parens(mut self, lpar: LeftParen, rpar: RightParen) -> Self {
        self.lpar.insert(0, lpar);
        self.rpar.push(rpar);
        self
    }
}

impl Validate for Element {
    fn validate(&self) -> Result<(), CstError> {
        self.validate_parens("element")?;
        self.value.validate()
    }
}

impl Codegen for Element {
    fn codegen(&self, state: &mut CodegenState) {
        state.begin_node(self);
        for lpar in &self.lpar {
            lpar.codegen(state);
        }
        self.value.codegen(state);
        for rpar in &self.rpar {
            rpar.codegen(state);
        }
        if let CommaSlot::Explicit(comma) = &self.comma {
            comma.codegen(state);
        }
        state.end_node(self);
    }
}

/// An element prefixed with a spread/unpack marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarredElement {
    pub value: Expression,
    pub comma: CommaSlot,
    pub lpar: Vec<LeftParen>,
    pub rpar: Vec<RightParen>,
    /// Whitespace between the marker and the value.
    pub whitespace_after_star: SimpleWhitespace,
}

impl StarredElement {
    pub fn new(value: impl Into<Expression>) -> Self {
        Self {
            value: value.into(),
            comma: CommaSlot::Sentinel,
            lpar: Vec::new(),
            rpar: Vec::new(),
            whitespace_after_star: SimpleWhitespace::default(),
        }
    }

    pub fn with_comma(mut self, comma: Comma) -> Self {
        self.comma = CommaSlot::Explicit(comma);
        self
    }

    pub fn without_comma(mut self) -> Self {
        self.comma = CommaSlot::Absent;
        self
    }

    pub fn with_whitespace_after_star(mut self, whitespace: impl Into<SimpleWhitespace>) -> Self {
        self.whitespace_after_star = whitespace.into();
        self
    }

    /// The marker itself is lexically distinct from keyword text, so a
    /// starred element's leading boundary is always safe.
    pub fn leading_is_safe(&self) -> bool {
        true
    }

    pub fn trailing_is_safe(&self, is_last: bool, is_sole: bool) -> bool {
        !self.rpar.is_empty() || self.comma.renders_nonempty(is_last, is_sole)
    }
}

impl ParenthesizedNode for StarredElement {
    fn lpar(&self) -> &[LeftParen] {
        &self.lpar
    }

    fn rpar(&self) -> &[RightParen] {
        &self.rpar
    }

    fn with_parens(mut self, lpar: LeftParen, rpar: RightParen) -> Self {
        self.lpar.insert(0, lpar);
        self.rpar.push(rpar);
        self
    }
}

impl Validate for StarredElement {
    fn validate(&self) -> Result<(), CstError> {
        self.validate_parens("starred element")?;
        self.value.validate()
    }
}

impl Codegen for StarredElement {
    fn codegen(&self, state: &mut CodegenState) {
        state.begin_node(self);
        for lpar in &self.lpar {
            lpar.codegen(state);
        }
        state.add_token("*");
        self.whitespace_after_star.codegen(state);
        self.value.codegen(state);
        for rpar in &self.rpar {
            rpar.codegen(state);
        }
        if let CommaSlot::Explicit(comma) = &self.comma {
            comma.codegen(state);
        }
        state.end_node(self);
    }
}
