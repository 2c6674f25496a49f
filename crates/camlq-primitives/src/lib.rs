#[macro_use]
mod macros;

use core::fmt;

///
/// ValueType
///
/// Semantic kind of a list field as named in the `Type` attribute of a
/// `<Value>` element. Drives escaping and typed value formatting.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueType {
    Text,
    Integer,
    Choice,
    Boolean,
    Number,
    DateTime,
    User,
    UserMulti,
    Lookup,
    LookupMulti,
    Note,
    Image,
    Counter,
    ModStat,
}

impl ValueType {
    /// Return the full metadata descriptor for one value type.
    #[must_use]
    pub const fn metadata(self) -> ValueTypeMetadata {
        value_type_registry!(metadata_from_registry, self)
    }

    /// Return the markup name written into `Type='...'`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.metadata().name
    }

    /// Return the coarse family of this value type.
    #[must_use]
    pub const fn family(self) -> ValueFamily {
        self.metadata().family
    }

    /// Return how raw values of this type are embedded in markup.
    #[must_use]
    pub const fn escape_policy(self) -> EscapePolicy {
        self.metadata().escape
    }

    /// Return whether values of this type are wrapped in CDATA sections.
    #[must_use]
    pub const fn is_cdata_escaped(self) -> bool {
        matches!(self.metadata().escape, EscapePolicy::Cdata)
    }

    /// Return whether fields of this type hold more than one value.
    #[must_use]
    pub const fn is_multi_value(self) -> bool {
        self.metadata().is_multi_value
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// ValueTypeMetadata
///
/// Capability metadata for one value type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValueTypeMetadata {
    pub name: &'static str,
    pub family: ValueFamily,
    pub escape: EscapePolicy,
    pub is_multi_value: bool,
}

///
/// ValueFamily
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueFamily {
    Textual,
    Numeric,
    Flag,
    Temporal,
    Reference,
    Status,
}

///
/// EscapePolicy
///
/// `Cdata` values are free text and must be wrapped; `Verbatim` values are
/// machine-formatted (numbers, dates, identifiers) and emitted as-is.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EscapePolicy {
    Cdata,
    Verbatim,
}

/// Ordered list of all value types in registry order.
pub const ALL_VALUE_TYPES: [ValueType; 14] = value_type_registry!(all_types_from_registry);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_matches_declaration() {
        assert_eq!(ALL_VALUE_TYPES[0], ValueType::Text);
        assert_eq!(ALL_VALUE_TYPES[5], ValueType::DateTime);
        assert_eq!(ALL_VALUE_TYPES[13], ValueType::ModStat);
    }

    #[test]
    fn only_free_text_kinds_are_cdata_escaped() {
        let cdata: Vec<_> = ALL_VALUE_TYPES
            .into_iter()
            .filter(|kind| kind.is_cdata_escaped())
            .collect();

        assert_eq!(
            cdata,
            vec![ValueType::Text, ValueType::Choice, ValueType::Note]
        );
    }

    #[test]
    fn display_uses_markup_name() {
        assert_eq!(ValueType::UserMulti.to_string(), "UserMulti");
        assert_eq!(ValueType::ModStat.name(), "ModStat");
        assert_eq!(ValueType::Counter.family(), ValueFamily::Numeric);
    }

    #[test]
    fn multi_value_kinds() {
        assert!(ValueType::LookupMulti.is_multi_value());
        assert!(ValueType::UserMulti.is_multi_value());
        assert!(!ValueType::Lookup.is_multi_value());
    }
}
