//! Resource limits for JSON parsing.
//!
//! The parser enforces these bounds while decoding so that hostile inputs
//! (deep nesting, huge strings, enormous arrays) fail with a distinct
//! `Resource` error instead of exhausting memory or the stack. The limits
//! are independent of any schema constraint: a `maxItems` violation is a
//! validation error, an array-length limit violation is a resource error.

/// Resource limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes.
    pub max_input_size: u64,
    /// Maximum nesting depth for arrays/objects.
    pub max_nesting_depth: u64,
    /// Maximum string literal length in bytes (after unescaping).
    pub max_string_length: u64,
    /// Maximum number of fields in a single object.
    pub max_object_fields: u64,
    /// Maximum number of elements in a single array.
    pub max_array_length: u64,
}

impl Limits {
    /// Default limits, generous enough for ordinary application payloads.
    pub const fn standard() -> Self {
        Self {
            max_input_size: 16 * 1024 * 1024, // 16 MiB
            max_nesting_depth: 128,
            max_string_length: 1024 * 1024, // 1 MiB
            max_object_fields: 10_000,
            max_array_length: 100_000,
        }
    }

    /// Tight limits for untrusted inputs.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024, // 1 MiB
            max_nesting_depth: 32,
            max_string_length: 64 * 1024, // 64 KiB
            max_object_fields: 1024,
            max_array_length: 10_000,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::standard()
    }
}
