//! Node definitions, one file per element family

pub mod binding;
pub mod element;
pub mod expression;
pub mod tuple;

pub use binding::ForBinding;
pub use element::{Element, StarredElement};
pub use expression::{Expression, Name};
pub use tuple::{Tuple, TupleElement};
