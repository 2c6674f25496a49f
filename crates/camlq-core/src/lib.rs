//! Core of camlq: the CAML expression algebra and its serializer.
//!
//! Values are formatted and escaped (`value`), fields are referenced by
//! name or identifier (`field`), predicates form a closed tree
//! (`predicate`) built through free functions (`builder`), and a
//! [`query::CamlQuery`] combines a predicate with ordering, projection and
//! executor options.
#![warn(unreachable_pub)]

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod field;
pub mod predicate;
pub mod query;
pub mod value;

pub use camlq_primitives::ValueType;

///
/// Prelude
///
/// Domain vocabulary plus the predicate builders.
///

pub mod prelude {
    pub use crate::{
        builder::*,
        descriptor::{OrderBy, ViewFields},
        error::QueryError,
        field::{FieldRef, IntoFieldRef},
        predicate::{LogicalOp, LogicalPredicate, Predicate},
        query::{CamlQuery, ExecutorOptions, QueryOptions, Scope},
        value::CamlValue,
    };
    pub use camlq_primitives::ValueType;
}
