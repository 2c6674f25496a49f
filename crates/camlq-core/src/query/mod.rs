//! Query assembly: predicate, ordering, projection and executor options.
mod options;

#[cfg(test)]
mod tests;

pub use options::{ExecutorOptions, QueryOptions, Scope};

use crate::{
    descriptor::{OrderBy, ViewFields},
    predicate::Predicate,
};

///
/// CamlQuery
///
/// Consuming builder over the parts handed to the query executor. Each
/// setter takes the query by value and returns the updated query.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CamlQuery {
    predicate: Option<Predicate>,
    order_by: Option<OrderBy>,
    view_fields: Option<ViewFields>,
    options: QueryOptions,
}

impl CamlQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `<Where>` predicate; a second call ANDs onto the first.
    #[must_use]
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = match self.predicate.take() {
            Some(existing) => Some(Predicate::and([existing, predicate])),
            None => Some(predicate),
        };
        self
    }

    #[must_use]
    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    #[must_use]
    pub fn view_fields(mut self, view_fields: ViewFields) -> Self {
        self.view_fields = Some(view_fields);
        self
    }

    #[must_use]
    pub const fn scope(mut self, scope: Scope) -> Self {
        self.options.scope = Some(scope);
        self
    }

    #[must_use]
    pub const fn view_fields_only(mut self, value: bool) -> Self {
        self.options.view_fields_only = value;
        self
    }

    #[must_use]
    pub const fn row_limit(mut self, limit: u32) -> Self {
        self.options.row_limit = limit;
        self
    }

    /// Replace all scalar options at once.
    #[must_use]
    pub const fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }

    #[must_use]
    pub const fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Render the `Query` text: `<Where>` followed by `<OrderBy>`, either
    /// of which may be absent.
    ///
    /// A predicate that renders empty counts as absent, so an all-vacuous
    /// filter never produces `<Where></Where>`.
    #[must_use]
    pub fn query_fragment(&self) -> String {
        let predicate = self
            .predicate
            .as_ref()
            .map(Predicate::to_markup)
            .filter(|markup| !markup.is_empty());
        let order_by = self.order_by.as_ref().map(OrderBy::to_markup);

        match (predicate, order_by) {
            (Some(predicate), Some(order_by)) => format!("<Where>{predicate}</Where>{order_by}"),
            (Some(predicate), None) => format!("<Where>{predicate}</Where>"),
            (None, Some(order_by)) => order_by,
            (None, None) => {
                tracing::debug!("query has no filter and no ordering; rendering empty fragment");
                String::new()
            }
        }
    }

    /// Produce the full executor contract for this query.
    #[must_use]
    pub fn executor_options(&self) -> ExecutorOptions {
        let query = self.query_fragment();

        tracing::trace!(
            query_len = query.len(),
            row_limit = self.options.row_limit,
            scope = ?self.options.scope,
            view_fields_only = self.options.view_fields_only,
            "assembled executor options"
        );

        ExecutorOptions {
            query,
            view_fields: self.view_fields.as_ref().map(ViewFields::to_markup),
            view_attributes: self.options.view_attributes(),
            view_fields_only: self.options.view_fields_only,
            row_limit: self.options.row_limit,
        }
    }
}
