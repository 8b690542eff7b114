//! Schema-directed JSON parser.
//!
//! Recursive descent over the token stream, with the compiled schema
//! consulted at every value. Decoding and validation happen in the same
//! pass: each primitive read checks type, range, and length constraints as
//! the output [`Value`] is built, and the first violation aborts the parse.
//! The recursion follows the JSON structure; the schema supplies the node
//! to check against, falling back to the shared permissive node where the
//! schema says nothing.
//!
//! In skip-validation mode every schema constraint is ignored and all
//! children degrade to the permissive node; structural JSON validity and
//! resource limits still apply.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::lexer::{Lexer, Token};
use super::limits::Limits;
use super::render::render;
use super::types::Value;
use crate::error::{Error, ParseResult};
use crate::schema::{JsonType, Schema};

/// JSON parser driven by a compiled schema.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    limits: Limits,
    depth: u64,
    skip_validation: bool,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a [u8], limits: Limits, skip_validation: bool) -> ParseResult<Self> {
        let mut lexer = Lexer::new(input, limits)?;
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            limits,
            depth: 0,
            skip_validation,
        })
    }

    /// Parse the input against `schema` and return the root value.
    ///
    /// Trailing non-whitespace content after the root value is a syntax
    /// error.
    pub fn parse(&mut self, schema: &Schema) -> ParseResult<Value> {
        let value = self.parse_value(schema)?;

        if self.current != Token::Eof {
            return Err(Error::InvalidJson);
        }

        Ok(value)
    }

    /// Advance to the next token.
    fn advance(&mut self) -> ParseResult<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Parse a single value with `schema` as its constraint node.
    fn parse_value(&mut self, schema: &Schema) -> ParseResult<Value> {
        match &self.current {
            Token::Null => {
                if !self.skip_validation && !schema.allows(JsonType::Null) {
                    return Err(Error::SchemaTypeMismatch);
                }
                self.advance()?;
                Ok(Value::Null)
            }
            Token::True => {
                if !self.skip_validation && !schema.allows(JsonType::Boolean) {
                    return Err(Error::SchemaTypeMismatch);
                }
                self.advance()?;
                Ok(Value::Bool(true))
            }
            Token::False => {
                if !self.skip_validation && !schema.allows(JsonType::Boolean) {
                    return Err(Error::SchemaTypeMismatch);
                }
                self.advance()?;
                Ok(Value::Bool(false))
            }
            Token::String(s) => {
                if !self.skip_validation && !schema.allows(JsonType::String) {
                    return Err(Error::SchemaTypeMismatch);
                }
                let s = s.clone();
                if !self.skip_validation {
                    check_string_constraints(schema, &s)?;
                }
                self.advance()?;
                Ok(Value::String(s))
            }
            Token::Number(text) => {
                if !self.skip_validation && !schema.allows_number() {
                    return Err(Error::SchemaTypeMismatch);
                }
                let value = self.read_number(text, schema)?;
                self.advance()?;
                Ok(value)
            }
            Token::LeftBrace => self.parse_object(schema),
            Token::LeftBracket => self.parse_array(schema),
            _ => Err(Error::InvalidJson),
        }
    }

    /// Decode a number token: integer read first, double read otherwise.
    fn read_number(&self, text: &str, schema: &Schema) -> ParseResult<Value> {
        // An i64 read always yields an integral value, so the integer/number
        // distinction only matters on the double path.
        if let Ok(int_val) = text.parse::<i64>() {
            let value = int_val as f64;
            if !self.skip_validation {
                check_number_constraints(schema, value)?;
            }
            return Ok(Value::Number(value));
        }

        let double_val: f64 = text.parse().map_err(|_| Error::InvalidJson)?;

        if !self.skip_validation {
            if schema.integer_only() && double_val.floor() != double_val {
                return Err(Error::SchemaTypeMismatch);
            }
            check_number_constraints(schema, double_val)?;
        }

        Ok(Value::Number(double_val))
    }

    /// Parse a JSON object, consulting `schema.properties` per key.
    fn parse_object(&mut self, schema: &Schema) -> ParseResult<Value> {
        if !self.skip_validation && !schema.allows(JsonType::Object) {
            return Err(Error::SchemaTypeMismatch);
        }

        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(Error::DepthLimitExceeded(
                self.depth,
                self.limits.max_nesting_depth,
            ));
        }

        // Consume opening brace
        self.advance()?;

        let mut map = IndexMap::new();
        let mut field_count: usize = 0;

        if self.current == Token::RightBrace {
            self.advance()?;
        } else {
            loop {
                // Expect string key
                let key = match &self.current {
                    Token::String(s) => s.clone(),
                    _ => return Err(Error::InvalidJson),
                };
                self.advance()?;

                // Expect colon
                if self.current != Token::Colon {
                    return Err(Error::InvalidJson);
                }
                self.advance()?;

                let child_schema = if self.skip_validation {
                    Schema::permissive()
                } else {
                    schema.properties.get(&key).unwrap_or(Schema::permissive())
                };

                let value = self.parse_value(child_schema)?;

                // A duplicate key keeps its first position and takes the
                // last value; every occurrence counts toward the property
                // count.
                map.insert(key, value);
                field_count += 1;

                if field_count as u64 > self.limits.max_object_fields {
                    return Err(Error::FieldLimitExceeded(
                        field_count as u64,
                        self.limits.max_object_fields,
                    ));
                }

                // Expect comma or closing brace
                match &self.current {
                    Token::Comma => {
                        self.advance()?;
                        // Trailing comma is not allowed in JSON
                        if self.current == Token::RightBrace {
                            return Err(Error::InvalidJson);
                        }
                    }
                    Token::RightBrace => {
                        self.advance()?;
                        break;
                    }
                    _ => return Err(Error::InvalidJson),
                }
            }
        }

        self.depth -= 1;

        if !self.skip_validation {
            if field_count < schema.min_properties {
                return Err(Error::TooFewProperties);
            }
            if field_count > schema.max_properties {
                return Err(Error::TooManyProperties);
            }
            for name in &schema.required {
                if !map.contains_key(name) {
                    return Err(Error::MissingRequiredProperty(name.clone()));
                }
            }
        }

        Ok(Value::Object(map))
    }

    /// Parse a JSON array, applying `schema.items` to every element.
    fn parse_array(&mut self, schema: &Schema) -> ParseResult<Value> {
        if !self.skip_validation && !schema.allows(JsonType::Array) {
            return Err(Error::SchemaTypeMismatch);
        }

        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(Error::DepthLimitExceeded(
                self.depth,
                self.limits.max_nesting_depth,
            ));
        }

        // Consume opening bracket
        self.advance()?;

        let items_schema = if self.skip_validation {
            Schema::permissive()
        } else {
            schema.items.as_deref().unwrap_or(Schema::permissive())
        };

        let check_unique = !self.skip_validation && schema.unique_items;
        let mut seen = HashSet::new();
        let mut arr = Vec::new();

        if self.current == Token::RightBracket {
            self.advance()?;
        } else {
            loop {
                let value = self.parse_value(items_schema)?;

                // Elements are keyed by their deterministic rendering, so
                // 1 and 1.0 collide while 1 and "1" do not.
                if check_unique && !seen.insert(render(&value)) {
                    return Err(Error::DuplicateItems);
                }

                arr.push(value);

                if arr.len() as u64 > self.limits.max_array_length {
                    return Err(Error::ItemLimitExceeded(
                        arr.len() as u64,
                        self.limits.max_array_length,
                    ));
                }

                // Expect comma or closing bracket
                match &self.current {
                    Token::Comma => {
                        self.advance()?;
                        // Trailing comma is not allowed in JSON
                        if self.current == Token::RightBracket {
                            return Err(Error::InvalidJson);
                        }
                    }
                    Token::RightBracket => {
                        self.advance()?;
                        break;
                    }
                    _ => return Err(Error::InvalidJson),
                }
            }
        }

        self.depth -= 1;

        if !self.skip_validation {
            if arr.len() < schema.min_items {
                return Err(Error::TooFewItems);
            }
            if arr.len() > schema.max_items {
                return Err(Error::TooManyItems);
            }
        }

        Ok(Value::Array(arr))
    }
}

/// Enforce `minLength`/`maxLength`, counting Unicode scalar values rather
/// than bytes, so an astral character counts as one.
fn check_string_constraints(schema: &Schema, value: &str) -> ParseResult<()> {
    if schema.min_length == 0 && schema.max_length == usize::MAX {
        return Ok(());
    }

    let char_count = value.chars().count();

    if char_count < schema.min_length {
        return Err(Error::StringTooShort);
    }
    if char_count > schema.max_length {
        return Err(Error::StringTooLong);
    }

    Ok(())
}

/// Enforce the numeric range constraints in order, reporting the first
/// failure.
fn check_number_constraints(schema: &Schema, value: f64) -> ParseResult<()> {
    if value < schema.minimum {
        return Err(Error::NumberBelowMinimum);
    }
    if value > schema.maximum {
        return Err(Error::NumberAboveMaximum);
    }
    if value <= schema.exclusive_minimum {
        return Err(Error::NumberNotAboveExclusiveMinimum);
    }
    if value >= schema.exclusive_maximum {
        return Err(Error::NumberNotBelowExclusiveMaximum);
    }

    if schema.multiple_of > 0.0 {
        let quotient = value / schema.multiple_of;
        if quotient.floor() != quotient {
            return Err(Error::NumberNotMultipleOf);
        }
    }

    Ok(())
}

/// Parse `input` against `schema` with default limits, strict mode.
pub fn parse(input: &[u8], schema: &Schema) -> ParseResult<Value> {
    let mut parser = Parser::new(input, Limits::default(), false)?;
    parser.parse(schema)
}
