//! Structural validation rules
//!
//! A zero-length sequence must carry at least one paren pair, and every
//! paren owner must have matching opening/closing counts. The two rules are
//! independent: unbalanced parens fail even when elements are present.

use recst::{
    CstError, Element, LeftParen, Name, RightParen, StarredElement, Tuple, Validate,
};
use rstest::rstest;

#[test]
fn test_zero_length_tuple_without_parens() {
    let err = Tuple::bare(vec![]).validate().unwrap_err();
    assert_eq!(
        err,
        CstError::Structural("A zero-length tuple must be wrapped in parentheses.".to_string())
    );
}

#[rstest]
#[case::more_opening(vec![LeftParen::new(), LeftParen::new()], vec![RightParen::new()])]
#[case::more_closing(vec![LeftParen::new()], vec![RightParen::new(), RightParen::new()])]
#[case::missing_closing(vec![LeftParen::new()], vec![])]
fn test_unbalanced_tuple_parens(#[case] lpar: Vec<LeftParen>, #[case] rpar: Vec<RightParen>) {
    let tuple = Tuple {
        elements: vec![Element::new(Name::new("mismatched")).into()],
        lpar,
        rpar,
    };
    let err = tuple.validate().unwrap_err();
    assert!(matches!(err, CstError::Structural(_)));
    assert!(err.to_string().contains("unbalanced parentheses"));
}

#[test]
fn test_unbalanced_element_parens_detected_through_tuple() {
    let mut element = Element::new(Name::new("x"));
    element.lpar.push(LeftParen::new());
    let tuple = Tuple::new(vec![element.into()]);
    let err = tuple.validate().unwrap_err();
    assert!(err.to_string().contains("element has unbalanced parentheses"));
}

#[test]
fn test_unbalanced_starred_element_parens() {
    let mut element = StarredElement::new(Name::new("x"));
    element.rpar.push(RightParen::new());
    let err = element.validate().unwrap_err();
    assert!(err
        .to_string()
        .contains("starred element has unbalanced parentheses"));
}

#[test]
fn test_validation_is_idempotent() {
    let tuple = Tuple::new(vec![Element::new(Name::new("a")).into()]);
    assert!(tuple.validate().is_ok());
    assert!(tuple.validate().is_ok());

    let invalid = Tuple::bare(vec![]);
    assert_eq!(invalid.validate(), invalid.validate());
}

#[test]
fn test_nested_tuple_validated_recursively() {
    let inner = Tuple::bare(vec![]);
    let outer = Tuple::new(vec![Element::new(inner).into()]);
    let err = outer.validate().unwrap_err();
    assert!(err.to_string().contains("zero-length tuple"));
}
