//! Errors raised while parsing and validating a reading.

use thiserror::Error;

/// A reading whose fields were parsed but break an invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("resource type must not be empty")]
    EmptyResourceType,

    #[error("value must not be negative")]
    NegativeValue,

    #[error("value must be a finite number")]
    NonFiniteValue,
}

/// Why a single input line could not be turned into a reading.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid line format: expected 3 fields, found {fields}")]
    MalformedLine { fields: usize },

    #[error("invalid date format, expected yyyy.MM.dd: '{0}'")]
    InvalidDate(String),

    #[error("invalid value format: '{0}'")]
    InvalidValue(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
