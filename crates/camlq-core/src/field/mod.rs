//! Field references: which list field a predicate, sort key or projection
//! points at.
use crate::error::QueryError;
use std::fmt;
use uuid::Uuid;

#[cfg(test)]
mod tests;

///
/// FieldIdent
///
/// Exactly one way of identifying a field. Construction through
/// [`FieldRef`] guarantees a non-empty name or a non-nil identifier.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FieldIdent {
    Name(String),
    Id(Uuid),
}

///
/// FieldRef
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FieldRef {
    ident: FieldIdent,
    ascending: bool,
}

impl FieldRef {
    /// Reference a field by its internal name.
    pub fn name(name: impl Into<String>) -> Result<Self, QueryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(QueryError::MissingFieldReference);
        }

        Ok(Self::from_ident(FieldIdent::Name(name)))
    }

    /// Reference a field by its stable identifier.
    pub fn id(id: Uuid) -> Result<Self, QueryError> {
        if id.is_nil() {
            return Err(QueryError::MissingFieldReference);
        }

        Ok(Self::from_ident(FieldIdent::Id(id)))
    }

    /// Parse an identifier in any common GUID layout (braced, hyphenated,
    /// simple or URN) and reference the field by it.
    pub fn parse_id(text: &str) -> Result<Self, QueryError> {
        let id = Uuid::parse_str(text.trim()).map_err(|err| {
            tracing::debug!(value = text, error = %err, "rejected field identifier");
            QueryError::invalid_identifier(text)
        })?;

        Self::id(id)
    }

    const fn from_ident(ident: FieldIdent) -> Self {
        Self {
            ident,
            ascending: true,
        }
    }

    #[must_use]
    pub const fn ident(&self) -> &FieldIdent {
        &self.ident
    }

    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        self.ascending
    }

    #[must_use]
    pub const fn with_ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    #[must_use]
    pub const fn descending(self) -> Self {
        self.with_ascending(false)
    }

    /// Render the self-closing `<FieldRef .../>` element.
    #[must_use]
    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ident {
            FieldIdent::Name(name) => write!(f, "<FieldRef Name='{name}'")?,
            FieldIdent::Id(id) => write!(f, "<FieldRef ID='{}'", id.braced())?,
        }
        if !self.ascending {
            f.write_str(" Ascending='FALSE'")?;
        }

        f.write_str(" />")
    }
}

///
/// IntoFieldRef
///
/// Anything a builder accepts in field position. Conversions are explicit
/// and fallible; an empty name never becomes a reference.
///

pub trait IntoFieldRef {
    fn into_field_ref(self) -> Result<FieldRef, QueryError>;
}

impl IntoFieldRef for FieldRef {
    fn into_field_ref(self) -> Result<FieldRef, QueryError> {
        Ok(self)
    }
}

impl IntoFieldRef for &FieldRef {
    fn into_field_ref(self) -> Result<FieldRef, QueryError> {
        Ok(self.clone())
    }
}

impl IntoFieldRef for &str {
    fn into_field_ref(self) -> Result<FieldRef, QueryError> {
        FieldRef::name(self)
    }
}

impl IntoFieldRef for String {
    fn into_field_ref(self) -> Result<FieldRef, QueryError> {
        FieldRef::name(self)
    }
}

impl IntoFieldRef for &String {
    fn into_field_ref(self) -> Result<FieldRef, QueryError> {
        FieldRef::name(self.as_str())
    }
}

impl IntoFieldRef for Uuid {
    fn into_field_ref(self) -> Result<FieldRef, QueryError> {
        FieldRef::id(self)
    }
}
