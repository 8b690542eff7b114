//! Error types for schema construction and parsing.
//!
//! Every failure surfaced by this crate is one flat [`Error`] enum so that
//! callers can match on the exact condition, while [`ErrorKind`] groups the
//! variants into the categories a host runtime would map to distinct
//! exception classes (syntax, type, validation, invalid schema, resource).
//!
//! Messages are host-visible and stable; tests assert on them.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type ParseResult<T> = Result<T, Error>;

/// Broad classification of an [`Error`].
///
/// `Syntax`, `Type`, `Validation`, and `InvalidSchema` correspond to the
/// error classes of the embedding surface; `Resource` covers the
/// denial-of-service limits, which are independent of any schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not valid JSON.
    Syntax,
    /// A value does not match the schema's declared type, or a construction
    /// argument had the wrong shape.
    Type,
    /// A value is of an acceptable type but violates a quantitative
    /// constraint (length, range, required, count, uniqueness).
    Validation,
    /// The supplied schema object was structurally rejected.
    InvalidSchema,
    /// A configured resource limit was exceeded.
    Resource,
}

/// All errors reported by schema construction and parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input is not syntactically valid JSON.
    #[error("Invalid JSON format")]
    InvalidJson,

    /// The input is not valid UTF-8.
    #[error("Invalid UTF-8 in input")]
    InvalidUtf8,

    /// A value's JSON type is not in the schema's `type` set.
    #[error("Value does not match schema type")]
    SchemaTypeMismatch,

    /// The schema argument was missing or not an object.
    #[error("The \"schema\" argument must be an object")]
    SchemaArgument,

    /// The schema object failed structural validation.
    #[error("Invalid JSON Schema")]
    InvalidSchema,

    /// String shorter than `minLength` Unicode scalar values.
    #[error("String is shorter than minLength")]
    StringTooShort,

    /// String longer than `maxLength` Unicode scalar values.
    #[error("String is longer than maxLength")]
    StringTooLong,

    /// Number below the inclusive `minimum`.
    #[error("Number is less than minimum")]
    NumberBelowMinimum,

    /// Number above the inclusive `maximum`.
    #[error("Number is greater than maximum")]
    NumberAboveMaximum,

    /// Number not strictly above `exclusiveMinimum`.
    #[error("Number is not greater than exclusiveMinimum")]
    NumberNotAboveExclusiveMinimum,

    /// Number not strictly below `exclusiveMaximum`.
    #[error("Number is not less than exclusiveMaximum")]
    NumberNotBelowExclusiveMaximum,

    /// Number is not an exact multiple of `multipleOf`.
    #[error("Number is not a multiple of multipleOf")]
    NumberNotMultipleOf,

    /// Object has fewer properties than `minProperties`.
    #[error("Object has fewer properties than minProperties")]
    TooFewProperties,

    /// Object has more properties than `maxProperties`.
    #[error("Object has more properties than maxProperties")]
    TooManyProperties,

    /// A property listed in `required` was not present.
    #[error("Required property '{0}' is missing")]
    MissingRequiredProperty(String),

    /// Array has fewer items than `minItems`.
    #[error("Array has fewer items than minItems")]
    TooFewItems,

    /// Array has more items than `maxItems`.
    #[error("Array has more items than maxItems")]
    TooManyItems,

    /// Array with `uniqueItems` contains two equal elements.
    #[error("Array contains duplicate items")]
    DuplicateItems,

    /// Input larger than `Limits::max_input_size` bytes.
    #[error("Input of {0} bytes exceeds the limit of {1} bytes")]
    InputLimitExceeded(u64, u64),

    /// Nesting deeper than `Limits::max_nesting_depth`.
    #[error("Nesting depth {0} exceeds the limit of {1}")]
    DepthLimitExceeded(u64, u64),

    /// A string literal longer than `Limits::max_string_length` bytes.
    #[error("String of {0} bytes exceeds the limit of {1} bytes")]
    StringLimitExceeded(u64, u64),

    /// An object with more fields than `Limits::max_object_fields`.
    #[error("Object field count {0} exceeds the limit of {1}")]
    FieldLimitExceeded(u64, u64),

    /// An array with more elements than `Limits::max_array_length`.
    #[error("Array length {0} exceeds the limit of {1}")]
    ItemLimitExceeded(u64, u64),
}

impl Error {
    /// Classify this error into its [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidJson | Error::InvalidUtf8 => ErrorKind::Syntax,
            Error::SchemaTypeMismatch | Error::SchemaArgument => ErrorKind::Type,
            Error::InvalidSchema => ErrorKind::InvalidSchema,
            Error::StringTooShort
            | Error::StringTooLong
            | Error::NumberBelowMinimum
            | Error::NumberAboveMaximum
            | Error::NumberNotAboveExclusiveMinimum
            | Error::NumberNotBelowExclusiveMaximum
            | Error::NumberNotMultipleOf
            | Error::TooFewProperties
            | Error::TooManyProperties
            | Error::MissingRequiredProperty(_)
            | Error::TooFewItems
            | Error::TooManyItems
            | Error::DuplicateItems => ErrorKind::Validation,
            Error::InputLimitExceeded(_, _)
            | Error::DepthLimitExceeded(_, _)
            | Error::StringLimitExceeded(_, _)
            | Error::FieldLimitExceeded(_, _)
            | Error::ItemLimitExceeded(_, _) => ErrorKind::Resource,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Error::InvalidJson => "InvalidJson",
            Error::InvalidUtf8 => "InvalidUtf8",
            Error::SchemaTypeMismatch => "SchemaTypeMismatch",
            Error::SchemaArgument => "SchemaArgument",
            Error::InvalidSchema => "InvalidSchema",
            Error::StringTooShort => "StringTooShort",
            Error::StringTooLong => "StringTooLong",
            Error::NumberBelowMinimum => "NumberBelowMinimum",
            Error::NumberAboveMaximum => "NumberAboveMaximum",
            Error::NumberNotAboveExclusiveMinimum => "NumberNotAboveExclusiveMinimum",
            Error::NumberNotBelowExclusiveMaximum => "NumberNotBelowExclusiveMaximum",
            Error::NumberNotMultipleOf => "NumberNotMultipleOf",
            Error::TooFewProperties => "TooFewProperties",
            Error::TooManyProperties => "TooManyProperties",
            Error::MissingRequiredProperty(_) => "MissingRequiredProperty",
            Error::TooFewItems => "TooFewItems",
            Error::TooManyItems => "TooManyItems",
            Error::DuplicateItems => "DuplicateItems",
            Error::InputLimitExceeded(_, _) => "InputLimitExceeded",
            Error::DepthLimitExceeded(_, _) => "DepthLimitExceeded",
            Error::StringLimitExceeded(_, _) => "StringLimitExceeded",
            Error::FieldLimitExceeded(_, _) => "FieldLimitExceeded",
            Error::ItemLimitExceeded(_, _) => "ItemLimitExceeded",
        }
    }
}
