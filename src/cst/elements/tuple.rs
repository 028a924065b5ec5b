//! The composite sequence node
//!
//! A tuple owns an ordered list of elements plus its own parenthesis pairs,
//! and is the authority for the structural invariants and for sentinel
//! separator resolution. Elements are never shared between owners; edits
//! produce new trees by copy-with-override.

use crate::cst::codegen::{Codegen, CodegenState};
use crate::cst::elements::element::{Element, StarredElement};
use crate::cst::error::CstError;
use crate::cst::tokens::{self, CommaSlot, LeftParen, RightParen};
use crate::cst::traits::{BoundarySafety, ParenthesizedNode, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a tuple: a plain or a starred element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TupleElement {
    Plain(Element),
    Starred(StarredElement),
}

impl TupleElement {
    pub fn comma(&self) -> &CommaSlot {
        match self {
            TupleElement::Plain(element) => &element.comma,
            TupleElement::Starred(element) => &element.comma,
        }
    }

    pub fn leading_is_safe(&self) -> bool {
        match self {
            TupleElement::Plain(element) => element.leading_is_safe(),
            TupleElement::Starred(element) => element.leading_is_safe(),
        }
    }

    pub fn trailing_is_safe(&self, is_last: bool, is_sole: bool) -> bool {
        match self {
            TupleElement::Plain(element) => element.trailing_is_safe(is_last, is_sole),
            TupleElement::Starred(element) => element.trailing_is_safe(is_last, is_sole),
        }
    }
}

impl From<Element> for TupleElement {
    fn from(value: Element) -> Self {
        TupleElement::Plain(value)
    }
}

impl From<StarredElement> for TupleElement {
    fn from(value: StarredElement) -> Self {
        TupleElement::Starred(value)
    }
}

impl Validate for TupleElement {
    fn validate(&self) -> Result<(), CstError> {
        match self {
            TupleElement::Plain(element) => element.validate(),
            TupleElement::Starred(element) => element.validate(),
        }
    }
}

impl Codegen for TupleElement {
    fn codegen(&self, state: &mut CodegenState) {
        state.begin_node(self);
        match self {
            TupleElement::Plain(element) => element.codegen(state),
            TupleElement::Starred(element) => element.codegen(state),
        }
        state.end_node(self);
    }
}

/// An ordered sequence of elements with optional wrapping parentheses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuple {
    pub elements: Vec<TupleElement>,
    pub lpar: Vec<LeftParen>,
    pub rpar: Vec<RightParen>,
}

impl Tuple {
    /// A tuple wrapped in one pair of parentheses, the common form.
    pub fn new(elements: Vec<TupleElement>) -> Self {
        Self {
            elements,
            lpar: vec![LeftParen::new()],
            rpar: vec![RightParen::new()],
        }
    }

    /// A tuple with no parentheses of its own.
    pub fn bare(elements: Vec<TupleElement>) -> Self {
        Self {
            elements,
            lpar: Vec::new(),
            rpar: Vec::new(),
        }
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tuple({} elements)", self.elements.len())
    }
}

impl ParenthesizedNode for Tuple {
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

impl Validate for Tuple {
    fn validate(&self) -> Result<(), CstError> {
        if self.elements.is_empty() && self.lpar.is_empty() && self.rpar.is_empty() {
            return Err(CstError::Structural(
                "A zero-length tuple must be wrapped in parentheses.".to_string(),
            ));
        }
        self.validate_parens("tuple")?;
        for element in &self.elements {
            element.validate()?;
        }
        Ok(())
    }
}

impl Codegen for Tuple {
    fn codegen(&self, state: &mut CodegenState) {
        state.begin_node(self);
        for lpar in &self.lpar {
            lpar.codegen(state);
        }
        let count = self.elements.len();
        for (index, element) in self.elements.iter().enumerate() {
            let is_last = index + 1 == count;
            element.codegen(state);
            // The element renders its explicit comma itself; only sentinel
            // slots resolve to anything here.
            if let Some(comma) = tokens::resolve_sentinel(element.comma(), is_last, count == 1) {
                comma.codegen(state);
            }
        }
        for rpar in &self.rpar {
            rpar.codegen(state);
        }
        state.end_node(self);
    }
}

impl BoundarySafety for Tuple {
    fn leading_is_safe(&self) -> bool {
        if !self.lpar.is_empty() {
            return true;
        }
        match self.elements.first() {
            Some(element) => element.leading_is_safe(),
            None => false,
        }
    }

    fn trailing_is_safe(&self) -> bool {
        if !self.rpar.is_empty() {
            return true;
        }
        let count = self.elements.len();
        match self.elements.last() {
            Some(element) => element.trailing_is_safe(true, count == 1),
            None => false,
        }
    }
}
