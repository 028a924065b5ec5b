//! Whitespace primitive
//!
//! Every delimiter token owns the whitespace immediately adjacent to it, so
//! regenerating source from the tree reproduces the original byte-for-byte.
//! A [`SimpleWhitespace`] is a fragment of intra-line whitespace: spaces,
//! tabs, and backslash-escaped line continuations. Validating the fragment's
//! own content is the tokenizer's job, not ours; we render it verbatim.

use crate::cst::codegen::{Codegen, CodegenState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An owned fragment of whitespace, rendered exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimpleWhitespace(pub String);

impl SimpleWhitespace {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Empty whitespace renders nothing; adjacency validation cares about
    /// exactly this distinction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SimpleWhitespace {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for SimpleWhitespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Codegen for SimpleWhitespace {
    fn codegen(&self, state: &mut CodegenState) {
        state.add_token(&self.0);
    }
}
