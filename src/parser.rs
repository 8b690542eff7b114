//! Public parser surface.
//!
//! [`SchemaParser`] is the embedding boundary: construct it once from a
//! loosely-typed schema object, then call [`parse`](SchemaParser::parse) any
//! number of times. Construction validates and compiles the schema; parsing
//! never mutates the compiled IR, so one parser can serve concurrent parse
//! calls from independent contexts.

use serde_json::Value as SchemaObject;

use crate::error::{Error, ParseResult};
use crate::json::limits::Limits;
use crate::json::parser::Parser;
use crate::json::types::Value;
use crate::schema::{compile_schema, validate_schema, Schema};

/// Options controlling a single parse call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// When true, decode without applying any schema constraint. Structural
    /// JSON validity and resource limits still apply.
    pub skip_validation: bool,
    /// Resource limits for this parse.
    pub limits: Limits,
}

impl ParseOptions {
    /// Options with validation skipped and default limits.
    pub fn skipping_validation() -> Self {
        Self {
            skip_validation: true,
            limits: Limits::default(),
        }
    }
}

/// A JSON parser bound to one compiled schema.
///
/// Enforced keywords: `type`, `minLength`/`maxLength`, `minimum`/`maximum`,
/// `exclusiveMinimum`/`exclusiveMaximum`, `multipleOf`, `properties`,
/// `required`, `minProperties`/`maxProperties`, `items`,
/// `minItems`/`maxItems`, `uniqueItems`. The composition keywords (`allOf`,
/// `anyOf`, `oneOf`, `not`, `if`/`then`/`else`) and `pattern`/`format` are
/// accepted and compiled but not enforced during parsing.
#[derive(Debug)]
pub struct SchemaParser {
    schema: Schema,
}

impl SchemaParser {
    /// Build a parser from a schema object.
    ///
    /// Fails with [`Error::SchemaArgument`] if `schema_object` is not an
    /// object, or [`Error::InvalidSchema`] if it is structurally malformed.
    /// No partial schema state survives a failure.
    pub fn new(schema_object: &SchemaObject) -> ParseResult<Self> {
        if !schema_object.is_object() {
            return Err(Error::SchemaArgument);
        }

        validate_schema(schema_object)?;

        Ok(Self {
            schema: compile_schema(schema_object),
        })
    }

    /// The compiled schema this parser enforces.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Parse and validate `json` in strict mode with default limits.
    pub fn parse(&self, json: &[u8]) -> ParseResult<Value> {
        self.parse_with_options(json, &ParseOptions::default())
    }

    /// Convenience wrapper over [`parse`](Self::parse) for string input.
    pub fn parse_str(&self, json: &str) -> ParseResult<Value> {
        self.parse(json.as_bytes())
    }

    /// Parse `json` with explicit options.
    pub fn parse_with_options(&self, json: &[u8], options: &ParseOptions) -> ParseResult<Value> {
        let mut parser = Parser::new(json, options.limits, options.skip_validation)?;
        parser.parse(&self.schema)
    }
}
