//! Sort and projection descriptors.
use crate::{
    error::QueryError,
    field::{FieldRef, IntoFieldRef},
};
use derive_more::{Deref, IntoIterator};
use std::fmt;

#[cfg(test)]
mod tests;

///
/// OrderBy
///
/// Sort keys in priority order. Direction lives on each [`FieldRef`].
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
pub struct OrderBy(Vec<FieldRef>);

impl OrderBy {
    #[must_use]
    pub fn new(fields: impl IntoIterator<Item = FieldRef>) -> Self {
        Self(fields.into_iter().collect())
    }

    /// Sort by one field in the given direction.
    pub fn single(field: impl IntoFieldRef, ascending: bool) -> Result<Self, QueryError> {
        let field = field.into_field_ref()?.with_ascending(ascending);

        Ok(Self(vec![field]))
    }

    /// Sort ascending by each field in turn.
    pub fn fields<F: IntoFieldRef>(fields: impl IntoIterator<Item = F>) -> Result<Self, QueryError> {
        collect_fields(fields).map(Self)
    }

    /// Append a lower-priority sort key.
    #[must_use]
    pub fn then(mut self, field: FieldRef) -> Self {
        self.0.push(field);
        self
    }

    /// Render `<OrderBy>...</OrderBy>`, or nothing when there are no keys.
    #[must_use]
    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }

        f.write_str("<OrderBy>")?;
        write_fields(f, &self.0)?;
        f.write_str("</OrderBy>")
    }
}

///
/// ViewFields
///
/// Fields to project into results. Renders as bare `<FieldRef>` elements
/// with no enclosing tag.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
pub struct ViewFields(Vec<FieldRef>);

impl ViewFields {
    #[must_use]
    pub fn new(fields: impl IntoIterator<Item = FieldRef>) -> Self {
        Self(fields.into_iter().collect())
    }

    pub fn fields<F: IntoFieldRef>(fields: impl IntoIterator<Item = F>) -> Result<Self, QueryError> {
        collect_fields(fields).map(Self)
    }

    #[must_use]
    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ViewFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields(f, &self.0)
    }
}

fn collect_fields<F: IntoFieldRef>(
    fields: impl IntoIterator<Item = F>,
) -> Result<Vec<FieldRef>, QueryError> {
    fields
        .into_iter()
        .map(IntoFieldRef::into_field_ref)
        .collect()
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[FieldRef]) -> fmt::Result {
    for field in fields {
        write!(f, "{field}")?;
    }

    Ok(())
}
