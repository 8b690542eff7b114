//! Schema-directed JSON parsing.
//!
//! Compile a JSON Schema (a subset of the 2020-12 vocabulary) once, then
//! parse JSON texts against it: a single streaming traversal of the input
//! drives both decoding and validation, and no intermediate generic JSON
//! tree is materialized before the constraints run.
//!
//! # Architecture
//!
//! The implementation is organized into modules along the pipeline:
//!
//! - [`schema`] - structural schema validation and compilation into the IR
//! - [`json`] - tokenizer, schema-directed parser, output values, rendering
//! - [`parser`] - the public [`SchemaParser`] surface
//! - [`error`] - error kinds shared by every stage
//! - [`conformance`] - corpus-driven conformance harness
//!
//! # Example
//!
//! ```
//! use schema_json::SchemaParser;
//! use serde_json::json;
//!
//! let parser = SchemaParser::new(&json!({
//!     "type": "object",
//!     "properties": {"name": {"type": "string"}},
//!     "required": ["name"]
//! })).unwrap();
//!
//! let value = parser.parse_str(r#"{"name": "ada"}"#).unwrap();
//! assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("ada"));
//!
//! assert!(parser.parse_str(r#"{"name": 42}"#).is_err());
//! ```

// Library code propagates errors instead of panicking; tests are exempt.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod error;
pub mod json;
pub mod parser;
pub mod schema;

// Re-export commonly used types
pub use error::{Error, ErrorKind, ParseResult};
pub use json::{Limits, Value};
pub use parser::{ParseOptions, SchemaParser};
pub use schema::{JsonType, Schema};
