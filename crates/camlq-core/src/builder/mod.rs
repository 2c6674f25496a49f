//! Free-function builders for predicate trees.
pub mod predicate;


pub use predicate::*;
