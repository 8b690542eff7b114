//! Structural validation of schema objects.
//!
//! A schema arrives as a loosely-typed JSON object. Before compilation, this
//! pass rejects any shape the compiler does not understand: a bad `type`
//! name, a non-object property schema, a `required` entry that is not a
//! string. Validation recurses through every position that can hold a nested
//! schema, so a rejected schema produces no partial IR. Unknown keywords are
//! ignored.

use serde_json::Value as SchemaObject;

use crate::error::{Error, ParseResult};

const VALID_TYPES: [&str; 7] = [
    "string", "number", "integer", "boolean", "object", "array", "null",
];

/// Validate that `schema` is a structurally well-formed schema object.
///
/// Returns `Error::InvalidSchema` on the first rule violation.
pub fn validate_schema(schema: &SchemaObject) -> ParseResult<()> {
    let obj = schema.as_object().ok_or(Error::InvalidSchema)?;

    // 'type' is a known type name or a non-empty array of them
    if let Some(type_val) = obj.get("type") {
        validate_type_field(type_val)?;
    }

    // 'properties' maps names to nested schema objects
    if let Some(properties) = obj.get("properties") {
        let map = properties.as_object().ok_or(Error::InvalidSchema)?;
        for prop_schema in map.values() {
            if !prop_schema.is_object() {
                return Err(Error::InvalidSchema);
            }
            validate_schema(prop_schema)?;
        }
    }

    // 'items' is a single nested schema object
    if let Some(items) = obj.get("items") {
        if !items.is_object() {
            return Err(Error::InvalidSchema);
        }
        validate_schema(items)?;
    }

    // 'required' is an array of strings
    if let Some(required) = obj.get("required") {
        let entries = required.as_array().ok_or(Error::InvalidSchema)?;
        if !entries.iter().all(|e| e.is_string()) {
            return Err(Error::InvalidSchema);
        }
    }

    // Logical operators hold arrays of nested schema objects
    for op in ["allOf", "anyOf", "oneOf"] {
        if let Some(val) = obj.get(op) {
            let entries = val.as_array().ok_or(Error::InvalidSchema)?;
            for sub_schema in entries {
                if !sub_schema.is_object() {
                    return Err(Error::InvalidSchema);
                }
                validate_schema(sub_schema)?;
            }
        }
    }

    // 'not' and the conditional keywords each hold one nested schema object
    for op in ["not", "if", "then", "else"] {
        if let Some(val) = obj.get(op) {
            if !val.is_object() {
                return Err(Error::InvalidSchema);
            }
            validate_schema(val)?;
        }
    }

    Ok(())
}

/// Validate the `type` keyword: a recognized type name, or a non-empty
/// array of recognized type names.
fn validate_type_field(type_val: &SchemaObject) -> ParseResult<()> {
    match type_val {
        SchemaObject::String(name) => {
            if VALID_TYPES.contains(&name.as_str()) {
                Ok(())
            } else {
                Err(Error::InvalidSchema)
            }
        }
        SchemaObject::Array(names) => {
            if names.is_empty() {
                return Err(Error::InvalidSchema);
            }
            for name in names {
                let name = name.as_str().ok_or(Error::InvalidSchema)?;
                if !VALID_TYPES.contains(&name) {
                    return Err(Error::InvalidSchema);
                }
            }
            Ok(())
        }
        _ => Err(Error::InvalidSchema),
    }
}
