//! Binding clause between fixed keywords
//!
//! `for <target> in <iter>` places an expression flush against literal
//! keyword text on both sides. Dropping the whitespace on a side is only
//! legal when the neighboring boundary is lexically safe, which the binder
//! learns by asking the boundary-safety capability of its child; it never
//! re-derives the child's structure.

use crate::cst::codegen::{Codegen, CodegenState};
use crate::cst::elements::expression::Expression;
use crate::cst::error::CstError;
use crate::cst::traits::{BoundarySafety, Validate};
use crate::cst::whitespace::SimpleWhitespace;
use serde::{Deserialize, Serialize};

/// The binding clause `for <target> in <iter>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForBinding {
    pub target: Expression,
    pub iter: Expression,
    pub whitespace_after_for: SimpleWhitespace,
    pub whitespace_before_in: SimpleWhitespace,
    pub whitespace_after_in: SimpleWhitespace,
}

impl ForBinding {
    /// Single spaces around both keywords.
    pub fn new(target: impl Into<Expression>, iter: impl Into<Expression>) -> Self {
        Self {
            target: target.into(),
            iter: iter.into(),
            whitespace_after_for: SimpleWhitespace::from(" "),
            whitespace_before_in: SimpleWhitespace::from(" "),
            whitespace_after_in: SimpleWhitespace::from(" "),
        }
    }

    pub fn with_whitespace_after_for(mut self, whitespace: impl Into<SimpleWhitespace>) -> Self {
        self.whitespace_after_for = whitespace.into();
        self
    }

    pub fn with_whitespace_before_in(mut self, whitespace: impl Into<SimpleWhitespace>) -> Self {
        self.whitespace_before_in = whitespace.into();
        self
    }

    pub fn with_whitespace_after_in(mut self, whitespace: impl Into<SimpleWhitespace>) -> Self {
        self.whitespace_after_in = whitespace.into();
        self
    }
}

impl Validate for ForBinding {
    fn validate(&self) -> Result<(), CstError> {
        self.target.validate()?;
        self.iter.validate()?;
        if self.whitespace_after_for.is_empty() && !self.target.leading_is_safe() {
            return Err(CstError::Adjacency(
                "Must have at least one space after 'for' keyword.".to_string(),
            ));
        }
        if self.whitespace_before_in.is_empty() && !self.target.trailing_is_safe() {
            return Err(CstError::Adjacency(
                "Must have at least one space before 'in' keyword.".to_string(),
            ));
        }
        if self.whitespace_after_in.is_empty() && !self.iter.leading_is_safe() {
            return Err(CstError::Adjacency(
                "Must have at least one space after 'in' keyword.".to_string(),
            ));
        }
        Ok(())
    }
}

impl Codegen for ForBinding {
    fn codegen(&self, state: &mut CodegenState) {
        state.begin_node(self);
        state.add_token("for");
        self.whitespace_after_for.codegen(state);
        self.target.codegen(state);
        self.whitespace_before_in.codegen(state);
        state.add_token("in");
        self.whitespace_after_in.codegen(state);
        self.iter.codegen(state);
        state.end_node(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::elements::element::{Element, StarredElement};
    use crate::cst::elements::expression::Name;
    use crate::cst::elements::tuple::Tuple;
    use crate::cst::position::render;
    use crate::cst::tokens::{Comma, LeftParen, RightParen};
    use crate::cst::traits::ParenthesizedNode;

    #[test]
    fn test_default_spacing() {
        let binding = ForBinding::new(Name::new("x"), Name::new("xs"));
        assert!(binding.validate().is_ok());
        assert_eq!(render(&binding), "for x in xs");
    }

    #[test]
    fn test_parenthesized_target_needs_no_spaces() {
        let target = Tuple::new(vec![
            Element::new(Name::new("k")).with_comma(Comma::new()).into(),
            Element::new(Name::new("v")).into(),
        ]);
        let binding = ForBinding::new(target, Name::new("abc"))
            .with_whitespace_after_for("")
            .with_whitespace_before_in("");
        assert!(binding.validate().is_ok());
        assert_eq!(render(&binding), "for(k,v)in abc");
    }

    #[test]
    fn test_element_own_parens_make_bare_tuple_safe() {
        let target = Tuple::bare(vec![
            Element::new(Name::new("k"))
                .with_parens(LeftParen::new(), RightParen::new())
                .with_comma(Comma::new())
                .into(),
            Element::new(Name::new("v"))
                .with_parens(LeftParen::new(), RightParen::new())
                .without_comma()
                .into(),
        ]);
        let binding = ForBinding::new(target, Name::new("abc"))
            .with_whitespace_after_for("")
            .with_whitespace_before_in("");
        assert!(binding.validate().is_ok());
        assert_eq!(render(&binding), "for(k),(v)in abc");
    }

    #[test]
    fn test_starred_marker_makes_leading_safe() {
        let target = Tuple::bare(vec![StarredElement::new(Name::new("foo"))
            .with_comma(Comma::new())
            .into()]);
        let binding = ForBinding::new(target, Name::new("bar")).with_whitespace_after_for("");
        assert!(binding.validate().is_ok());
        assert_eq!(render(&binding), "for*foo, in bar");
    }

    #[test]
    fn test_unsafe_leading_boundary_rejected() {
        let target = Tuple::bare(vec![Element::new(Name::new("el")).into()]);
        let binding = ForBinding::new(target, Name::new("it")).with_whitespace_after_for("");
        let err = binding.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Adjacency error: Must have at least one space after 'for' keyword."
        );
    }

    #[test]
    fn test_unsafe_trailing_boundary_rejected() {
        // last of several with a sentinel comma renders no separator, so the
        // trailing boundary is bare identifier text
        let target = Tuple::bare(vec![
            Element::new(Name::new("a")).into(),
            Element::new(Name::new("b")).into(),
        ]);
        let binding = ForBinding::new(target, Name::new("it")).with_whitespace_before_in("");
        let err = binding.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Adjacency error: Must have at least one space before 'in' keyword."
        );
    }

    #[test]
    fn test_starred_trailing_codepath() {
        let target = Tuple::bare(vec![StarredElement::new(Name::new("el"))
            .without_comma()
            .into()]);
        let binding = ForBinding::new(target, Name::new("it")).with_whitespace_before_in("");
        let err = binding.validate().unwrap_err();
        assert!(err.to_string().contains("before 'in' keyword"));
    }

    #[test]
    fn test_unsafe_iter_boundary_rejected() {
        let binding =
            ForBinding::new(Name::new("x"), Name::new("xs")).with_whitespace_after_in("");
        let err = binding.validate().unwrap_err();
        assert!(err.to_string().contains("after 'in' keyword"));
    }

    #[test]
    fn test_nonempty_whitespace_always_passes_regardless_of_safety() {
        let target = Tuple::bare(vec![Element::new(Name::new("el")).into()]);
        let binding = ForBinding::new(target, Name::new("it"));
        assert!(binding.validate().is_ok());
        assert_eq!(render(&binding), "for el, in it");
    }
}
