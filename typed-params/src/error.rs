//! Error types for typed parameter operations

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`], stable across the C boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller violated the contract of the operation.
    InvalidArg,
    /// A required allocation failed.
    NoMemory,
    /// A bound of the data model was exceeded, or a tag is out of range.
    InternalError,
}

impl ErrorKind {
    /// Numeric error code reported through the last-error slot.
    pub const fn code(self) -> i32 {
        match self {
            Self::InternalError => 1,
            Self::NoMemory => 2,
            Self::InvalidArg => 8,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArg => write!(f, "invalid argument"),
            Self::NoMemory => write!(f, "out of memory"),
            Self::InternalError => write!(f, "internal error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Field name '{0}' too long")]
    NameTooLong(String),

    #[error("Field name '{0}' contains a NUL byte")]
    NameContainsNul(String),

    #[error("unexpected type {kind} for field {field}")]
    UnexpectedType { kind: i32, field: String },

    #[error("NULL value for field '{0}'")]
    NullValue(String),

    #[error("Invalid value for field '{field}': expected {expected}")]
    InvalidValue {
        field: String,
        expected: &'static str,
    },

    #[error("Invalid boolean value for field '{0}'")]
    InvalidBoolean(String),

    #[error(
        "Invalid type '{expected}' requested for parameter '{name}', actual type is '{actual}'"
    )]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Parameter '{0}' is already set")]
    AlreadySet(String),

    #[error("parameter '{0}' not supported")]
    NotSupported(String),

    #[error("invalid type '{actual}' for parameter '{name}', expected '{expected}'")]
    InvalidType {
        name: String,
        actual: &'static str,
        expected: &'static str,
    },

    #[error("parameter '{0}' occurs multiple times")]
    Duplicate(String),

    #[error("out of memory")]
    NoMemory,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NameTooLong(_) | Self::NameContainsNul(_) | Self::UnexpectedType { .. } => {
                ErrorKind::InternalError
            }
            Self::NoMemory => ErrorKind::NoMemory,
            Self::InvalidArgument(_)
            | Self::NullValue(_)
            | Self::InvalidValue { .. }
            | Self::InvalidBoolean(_)
            | Self::TypeMismatch { .. }
            | Self::AlreadySet(_)
            | Self::NotSupported(_)
            | Self::InvalidType { .. }
            | Self::Duplicate(_) => ErrorKind::InvalidArg,
        }
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::NoMemory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        assert_eq!(ErrorKind::InternalError.code(), 1);
        assert_eq!(ErrorKind::NoMemory.code(), 2);
        assert_eq!(ErrorKind::InvalidArg.code(), 8);
    }

    #[test]
    fn test_messages_name_both_types() {
        let err = Error::TypeMismatch {
            name: "n".into(),
            expected: "uint",
            actual: "int",
        };
        assert_eq!(
            err.to_string(),
            "Invalid type 'uint' requested for parameter 'n', actual type is 'int'"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidArg);
    }

    #[test]
    fn test_internal_errors() {
        assert_eq!(
            Error::NameTooLong("x".into()).kind(),
            ErrorKind::InternalError
        );
        let err = Error::UnexpectedType {
            kind: 42,
            field: "f".into(),
        };
        assert_eq!(err.kind(), ErrorKind::InternalError);
        assert_eq!(err.to_string(), "unexpected type 42 for field f");
    }
}
