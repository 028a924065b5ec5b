//! Value leaves and the expression sum
//!
//! [`Expression`] is the closed set of value kinds an element can wrap.
//! New kinds extend the enum; the dispatch below stays the same.

use crate::cst::codegen::{Codegen, CodegenState};
use crate::cst::elements::tuple::Tuple;
use crate::cst::error::CstError;
use crate::cst::traits::{BoundarySafety, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier leaf. Renders its text exactly; an identifier character
/// against keyword text would merge into one token, so neither boundary is
/// lexically safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub value: String,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.value)
    }
}

impl Codegen for Name {
    fn codegen(&self, state: &mut CodegenState) {
        state.begin_node(self);
        state.add_token(&self.value);
        state.end_node(self);
    }
}

impl Validate for Name {
    fn validate(&self) -> Result<(), CstError> {
        Ok(())
    }
}

impl BoundarySafety for Name {
    fn leading_is_safe(&self) -> bool {
        false
    }

    fn trailing_is_safe(&self) -> bool {
        false
    }
}

/// The closed sum of value kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    Name(Name),
    Tuple(Tuple),
}

impl From<Name> for Expression {
    fn from(value: Name) -> Self {
        Expression::Name(value)
    }
}

impl From<Tuple> for Expression {
    fn from(value: Tuple) -> Self {
        Expression::Tuple(value)
    }
}

impl Codegen for Expression {
    fn codegen(&self, state: &mut CodegenState) {
        state.begin_node(self);
        match self {
            Expression::Name(name) => name.codegen(state),
            Expression::Tuple(tuple) => tuple.codegen(state),
        }
        state.end_node(self);
    }
}

impl Validate for Expression {
    fn validate(&self) -> Result<(), CstError> {
        match self {
            Expression::Name(name) => name.validate(),
            Expression::Tuple(tuple) => tuple.validate(),
        }
    }
}

impl BoundarySafety for Expression {
    fn leading_is_safe(&self) -> bool {
        match self {
            Expression::Name(name) => name.leading_is_safe(),
            Expression::Tuple(tuple) => tuple.leading_is_safe(),
        }
    }

    fn trailing_is_safe(&self) -> bool {
        match self {
            Expression::Name(name) => name.trailing_is_safe(),
            Expression::Tuple(tuple) => tuple.trailing_is_safe(),
        }
    }
}
