//! Classification errors.
//!
//! Every failure belongs to one of two kinds: a [`ErrorKind::Type`] error when
//! an input has no numeric interpretation, and a [`ErrorKind::Value`] error
//! when a coerced number breaks the positive-and-finite invariant.

use serde::Serialize;
use std::fmt;

/// One of the four classifier inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Width,
    Height,
    Length,
    Mass,
}

impl Field {
    /// All fields in argument order.
    pub const ALL: [Field; 4] = [Field::Width, Field::Height, Field::Length, Field::Mass];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
            Field::Mass => "mass",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-visible error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// An input could not be interpreted as a number
    Type,
    /// A coerced input is zero, negative, NaN or infinite
    Value,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Type => write!(f, "type"),
            ErrorKind::Value => write!(f, "value"),
        }
    }
}

/// Errors returned by [`crate::classify`] and [`crate::Package::new`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SortError {
    #[error("width, height, length, and mass must be numeric (invalid: {})", join(.fields))]
    NotNumeric { fields: Vec<Field> },

    #[error("Dimensions and mass must be positive (invalid: {})", join(.fields))]
    NotPositive { fields: Vec<Field> },

    #[error("Dimensions and mass must be finite (invalid: {})", join(.fields))]
    NotFinite { fields: Vec<Field> },
}

impl SortError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SortError::NotNumeric { .. } => ErrorKind::Type,
            SortError::NotPositive { .. } | SortError::NotFinite { .. } => ErrorKind::Value,
        }
    }

    /// Fields that failed, in argument order.
    pub fn fields(&self) -> &[Field] {
        match self {
            SortError::NotNumeric { fields }
            | SortError::NotPositive { fields }
            | SortError::NotFinite { fields } => fields,
        }
    }

    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    pub fn is_value_error(&self) -> bool {
        self.kind() == ErrorKind::Value
    }
}

fn join(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
