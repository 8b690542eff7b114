//! Schema validation and compilation.
//!
//! A user-supplied schema object passes through two stages before any JSON
//! is parsed:
//!
//! - [`validate`] - structural validation of the loose schema object
//! - [`compile`] - lowering into the immutable [`Schema`] IR
//!
//! The IR is built once at parser construction and shared (immutably) by
//! every subsequent parse.

pub mod compile;
pub mod types;
pub mod validate;

pub use compile::compile_schema;
pub use types::{JsonType, Schema};
pub use validate::validate_schema;
