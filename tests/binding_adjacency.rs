//! Adjacency validation for the keyword binding clause
//!
//! A side with configured whitespace always passes; a side with empty
//! whitespace passes only when the neighboring boundary is lexically safe.

use recst::{
    render, Comma, Element, ForBinding, LeftParen, Name, ParenthesizedNode, RightParen,
    StarredElement, Tuple, Validate,
};
use rstest::rstest;

fn plain(name: &str) -> Element {
    Element::new(Name::new(name))
}

#[rstest]
// parenthesized target is safe on both sides
#[case::parenthesized(
    ForBinding::new(
        Tuple::new(vec![
            plain("k").with_comma(Comma::new()).into(),
            plain("v").into(),
        ]),
        Name::new("abc"),
    )
    .with_whitespace_after_for("")
    .with_whitespace_before_in(""),
    "for(k,v)in abc"
)]
// element-owned parens make a bare tuple safe on both sides
#[case::element_parens(
    ForBinding::new(
        Tuple::bare(vec![
            plain("k")
                .with_parens(LeftParen::new(), RightParen::new())
                .with_comma(Comma::new())
                .into(),
            plain("v")
                .with_parens(LeftParen::new(), RightParen::new())
                .without_comma()
                .into(),
        ]),
        Name::new("abc"),
    )
    .with_whitespace_after_for("")
    .with_whitespace_before_in(""),
    "for(k),(v)in abc"
)]
// the spread marker alone makes the leading boundary safe
#[case::spread_marker(
    ForBinding::new(
        Tuple::bare(vec![StarredElement::new(Name::new("foo"))
            .with_comma(Comma::new())
            .into()]),
        Name::new("bar"),
    )
    .with_whitespace_after_for(""),
    "for*foo, in bar"
)]
// the sole element's sentinel comma renders, making the trailing boundary safe
#[case::sole_sentinel_comma(
    ForBinding::new(
        Tuple::bare(vec![plain("f").into()]),
        Name::new("bar"),
    )
    .with_whitespace_before_in(""),
    "for f,in bar"
)]
fn test_safe_adjacency_validates(#[case] binding: ForBinding, #[case] expected: &str) {
    assert!(binding.validate().is_ok());
    assert_eq!(render(&binding), expected);
}

#[rstest]
#[case::after_for(
    ForBinding::new(Tuple::bare(vec![plain("el").into()]), Name::new("it"))
        .with_whitespace_after_for(""),
    "Must have at least one space after 'for' keyword."
)]
#[case::before_in(
    ForBinding::new(
        Tuple::bare(vec![plain("a").into(), plain("el").into()]),
        Name::new("it"),
    )
    .with_whitespace_before_in(""),
    "Must have at least one space before 'in' keyword."
)]
// starred elements take a separate codepath for the trailing check
#[case::before_in_starred(
    ForBinding::new(
        Tuple::bare(vec![
            plain("a").into(),
            StarredElement::new(Name::new("el")).into(),
        ]),
        Name::new("it"),
    )
    .with_whitespace_before_in(""),
    "Must have at least one space before 'in' keyword."
)]
#[case::after_in(
    ForBinding::new(Name::new("x"), Name::new("xs")).with_whitespace_after_in(""),
    "Must have at least one space after 'in' keyword."
)]
fn test_unsafe_adjacency_rejected(#[case] binding: ForBinding, #[case] message: &str) {
    let err = binding.validate().unwrap_err();
    assert_eq!(err.to_string(), format!("Adjacency error: {}", message));
}

#[test]
fn test_nonempty_whitespace_passes_without_boundary_safety() {
    // the target's boundaries are unsafe on both sides, but the configured
    // whitespace makes the adjacency legal regardless
    let binding = ForBinding::new(
        Tuple::bare(vec![plain("a").into(), plain("b").into()]),
        Name::new("it"),
    );
    assert!(binding.validate().is_ok());
    assert_eq!(render(&binding), "for a, b in it");
}

#[test]
fn test_plain_name_target_needs_spaces() {
    let err = ForBinding::new(Name::new("x"), Name::new("xs"))
        .with_whitespace_after_for("")
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("after 'for' keyword"));
}
