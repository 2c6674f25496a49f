//! Predicate expression tree and its markup serialization.
mod ast;
mod render;


pub use ast::{
    CheckOp, CheckPredicate, CompareOp, ComparePredicate, InPredicate, LogicalOp,
    LogicalPredicate, Predicate, ValueFlags,
};
pub use render::flatten_logical;
