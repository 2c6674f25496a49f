use std::fmt;
use thiserror::Error as ThisError;

///
/// QueryError
///
/// Caller contract violations detected while building query parts.
/// Serialization itself is total and never produces one of these.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error("invalid field identifier: '{value}'")]
    InvalidIdentifier { value: String },

    #[error("field reference requires a non-empty name or a non-nil identifier")]
    MissingFieldReference,

    #[error("malformed CDATA value: '{value}'")]
    MalformedValue { value: String },
}

impl QueryError {
    pub(crate) fn invalid_identifier(value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
        }
    }

    pub(crate) fn malformed_value(value: impl Into<String>) -> Self {
        Self::MalformedValue {
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidIdentifier { .. } | Self::MissingFieldReference => {
                ErrorClass::InvalidInput
            }
            Self::MalformedValue { .. } => ErrorClass::Malformed,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// ErrorClass
/// Error taxonomy for caller-side classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidInput,
    Malformed,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidInput => "invalid_input",
            Self::Malformed => "malformed",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_class_prefixes_label() {
        let err = QueryError::invalid_identifier("not-a-guid");

        assert_eq!(err.class(), ErrorClass::InvalidInput);
        assert_eq!(
            err.display_with_class(),
            "invalid_input: invalid field identifier: 'not-a-guid'"
        );
    }

    #[test]
    fn malformed_value_is_its_own_class() {
        assert_eq!(
            QueryError::malformed_value("x").class(),
            ErrorClass::Malformed
        );
        assert_eq!(
            QueryError::MissingFieldReference.class(),
            ErrorClass::InvalidInput
        );
    }
}
