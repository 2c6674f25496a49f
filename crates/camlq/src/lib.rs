//! ## Crate layout
//! - `core`: predicate tree, builders, descriptors, query assembly and errors.
//! - `primitives`: the `ValueType` vocabulary and its capability registry.
//!
//! The `prelude` module exposes everything needed to build a query:
//!
//! ```ignore
//! use camlq::prelude::*;
//!
//! let query = CamlQuery::new()
//!     .filter(and([eq("Status", "Open")?, gt("Priority", 2)?]))
//!     .order_by(OrderBy::single("Modified", false)?)
//!     .row_limit(100);
//! let options = query.executor_options();
//! ```

pub use camlq_core as core;
pub use camlq_primitives as primitives;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use camlq_core::{error::QueryError, query::CamlQuery};

///
/// Prelude
///

pub mod prelude {
    pub use camlq_core::prelude::*;
}
