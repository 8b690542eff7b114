//! Lowering of schema objects into the compiled IR.
//!
//! The compiler is total over any schema the structural validator accepts:
//! every recognized keyword is copied into its [`Schema`] field with the
//! neutral default filled in when absent, children are compiled recursively,
//! and anything unrecognized is ignored. Negative size constraints fall back
//! to their defaults; fractional size constraints truncate toward zero.

use serde_json::Value as SchemaObject;

use super::types::{JsonType, Schema};

/// Compile a validated schema object into its IR.
pub fn compile_schema(schema_obj: &SchemaObject) -> Schema {
    let mut schema = Schema::default();

    let obj = match schema_obj.as_object() {
        Some(obj) => obj,
        None => return schema,
    };

    // type: single name or array of names
    match obj.get("type") {
        Some(SchemaObject::String(name)) => {
            if let Some(t) = JsonType::from_keyword(name) {
                schema.types.insert(t);
            }
        }
        Some(SchemaObject::Array(names)) => {
            for name in names {
                if let Some(t) = name.as_str().and_then(JsonType::from_keyword) {
                    schema.types.insert(t);
                }
            }
        }
        _ => {}
    }

    // String constraints
    schema.min_length = size_constraint(obj.get("minLength"), 0);
    schema.max_length = size_constraint(obj.get("maxLength"), usize::MAX);
    if let Some(pattern) = obj.get("pattern").and_then(SchemaObject::as_str) {
        schema.pattern = pattern.to_string();
    }
    if let Some(format) = obj.get("format").and_then(SchemaObject::as_str) {
        schema.format = format.to_string();
    }

    // Number constraints
    schema.minimum = double_constraint(obj.get("minimum"), f64::NEG_INFINITY);
    schema.maximum = double_constraint(obj.get("maximum"), f64::INFINITY);
    schema.exclusive_minimum = double_constraint(obj.get("exclusiveMinimum"), f64::NEG_INFINITY);
    schema.exclusive_maximum = double_constraint(obj.get("exclusiveMaximum"), f64::INFINITY);
    schema.multiple_of = double_constraint(obj.get("multipleOf"), 0.0);

    // Object constraints
    if let Some(properties) = obj.get("properties").and_then(SchemaObject::as_object) {
        for (name, prop_schema) in properties {
            if prop_schema.is_object() {
                schema
                    .properties
                    .insert(name.clone(), compile_schema(prop_schema));
            }
        }
    }
    if let Some(required) = obj.get("required").and_then(SchemaObject::as_array) {
        for entry in required {
            if let Some(name) = entry.as_str() {
                schema.required.insert(name.to_string());
            }
        }
    }
    schema.min_properties = size_constraint(obj.get("minProperties"), 0);
    schema.max_properties = size_constraint(obj.get("maxProperties"), usize::MAX);

    // Array constraints
    if let Some(items) = obj.get("items") {
        if items.is_object() {
            schema.items = Some(Box::new(compile_schema(items)));
        }
    }
    schema.min_items = size_constraint(obj.get("minItems"), 0);
    schema.max_items = size_constraint(obj.get("maxItems"), usize::MAX);
    if let Some(SchemaObject::Bool(unique)) = obj.get("uniqueItems") {
        schema.unique_items = *unique;
    }

    // Logical operators, compiled for forward compatibility
    schema.all_of = schema_array(obj.get("allOf"));
    schema.any_of = schema_array(obj.get("anyOf"));
    schema.one_of = schema_array(obj.get("oneOf"));
    schema.not_schema = child_schema(obj.get("not"));

    // Conditionals, compiled for forward compatibility
    schema.if_schema = child_schema(obj.get("if"));
    schema.then_schema = child_schema(obj.get("then"));
    schema.else_schema = child_schema(obj.get("else"));

    schema
}

/// Read an unsigned size constraint. Negative values mean "no constraint";
/// fractional values truncate toward zero.
fn size_constraint(value: Option<&SchemaObject>, default: usize) -> usize {
    match value.and_then(SchemaObject::as_f64) {
        Some(n) if n >= 0.0 => n as usize,
        _ => default,
    }
}

/// Read a numeric constraint as a double, with the given default when absent
/// or not a number.
fn double_constraint(value: Option<&SchemaObject>, default: f64) -> f64 {
    value.and_then(SchemaObject::as_f64).unwrap_or(default)
}

/// Compile each object element of a schema array (`allOf` and friends).
fn schema_array(value: Option<&SchemaObject>) -> Vec<Schema> {
    match value.and_then(SchemaObject::as_array) {
        Some(entries) => entries
            .iter()
            .filter(|e| e.is_object())
            .map(compile_schema)
            .collect(),
        None => Vec::new(),
    }
}

/// Compile a single nested schema slot (`not`, `if`, `then`, `else`).
fn child_schema(value: Option<&SchemaObject>) -> Option<Box<Schema>> {
    value
        .filter(|v| v.is_object())
        .map(|v| Box::new(compile_schema(v)))
}
