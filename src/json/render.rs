//! Deterministic JSON rendering.
//!
//! [`Value`]'s `Display` impl writes compact JSON straight into the
//! formatter: no whitespace, object keys in parse order, integral doubles
//! rendered without a fractional part (ECMAScript style, so `1.0` renders
//! as `1`). String content is copied through in bulk runs; only quotes,
//! backslashes, and control characters are escaped.
//!
//! This rendering is the canonical key for the `uniqueItems` check, which
//! means `1` and `1.0` are duplicates of each other while `1` and `"1"`
//! are not.

use std::fmt::{self, Write};

use super::types::Value;

/// Serialize a number the way ECMAScript stringifies it: integral values
/// have no fractional part, everything else uses the shortest decimal form
/// that round-trips.
pub fn render_number(value: f64) -> String {
    // Rust's Display for f64 already omits a trailing ".0" and picks the
    // shortest round-trip representation.
    value.to_string()
}

/// Serialize a [`Value`] to compact JSON, keys in parse order.
pub fn render(value: &Value) -> String {
    value.to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write_quoted(s, f),
            Value::Array(items) => {
                f.write_char('[')?;
                let mut sep = "";
                for item in items {
                    f.write_str(sep)?;
                    write!(f, "{item}")?;
                    sep = ",";
                }
                f.write_char(']')
            }
            Value::Object(entries) => {
                f.write_char('{')?;
                let mut sep = "";
                for (key, value) in entries {
                    f.write_str(sep)?;
                    write_quoted(key, f)?;
                    f.write_char(':')?;
                    write!(f, "{value}")?;
                    sep = ",";
                }
                f.write_char('}')
            }
        }
    }
}

/// True for the characters that cannot appear raw in a JSON string literal.
fn must_escape(c: char) -> bool {
    c == '"' || c == '\\' || c < '\x20'
}

/// Write `s` as a JSON string literal. Clean spans between escapes are
/// copied through in one call each.
fn write_quoted(s: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_char('"')?;
    let mut rest = s;
    while let Some(pos) = rest.find(must_escape) {
        f.write_str(&rest[..pos])?;
        // Everything must_escape matches is a single ASCII byte
        write_escape(rest.as_bytes()[pos], f)?;
        rest = &rest[pos + 1..];
    }
    f.write_str(rest)?;
    f.write_char('"')
}

/// Write the escape sequence for one escaped byte.
fn write_escape(byte: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    const SHORT: &[(u8, &str)] = &[
        (b'"', "\\\""),
        (b'\\', "\\\\"),
        (0x08, "\\b"),
        (0x0C, "\\f"),
        (b'\n', "\\n"),
        (b'\r', "\\r"),
        (b'\t', "\\t"),
    ];

    match SHORT.iter().find(|(b, _)| *b == byte) {
        Some((_, escape)) => f.write_str(escape),
        None => write!(f, "\\u{byte:04x}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_render_number() {
        assert_eq!(render_number(0.0), "0");
        assert_eq!(render_number(42.0), "42");
        assert_eq!(render_number(-123.0), "-123");
        assert_eq!(render_number(3.14), "3.14");
        assert_eq!(render_number(-0.5), "-0.5");
    }

    #[test]
    fn test_integral_double_renders_without_fraction() {
        assert_eq!(render_number(1.0), "1");
        assert_eq!(render_number(5.0), "5");
        assert_eq!(render_number(-2.0), "-2");
    }

    #[test]
    fn test_render_primitives() {
        assert_eq!(render(&Value::Null), "null");
        assert_eq!(render(&Value::Bool(true)), "true");
        assert_eq!(render(&Value::Bool(false)), "false");
        assert_eq!(render(&Value::Number(42.0)), "42");
    }

    #[test]
    fn test_render_string() {
        assert_eq!(render(&Value::String("hello".to_string())), "\"hello\"");
        assert_eq!(render(&Value::String(String::new())), "\"\"");
    }

    #[test]
    fn test_render_string_escapes() {
        assert_eq!(render(&Value::String("a\nb".to_string())), "\"a\\nb\"");
        assert_eq!(render(&Value::String("a\tb".to_string())), "\"a\\tb\"");
        assert_eq!(render(&Value::String("a\"b".to_string())), "\"a\\\"b\"");
        assert_eq!(render(&Value::String("a\\b".to_string())), "\"a\\\\b\"");
        assert_eq!(render(&Value::String("\u{1}".to_string())), "\"\\u0001\"");
        assert_eq!(
            render(&Value::String("\u{8}\u{c}\r".to_string())),
            "\"\\b\\f\\r\""
        );
    }

    #[test]
    fn test_render_string_mixed_runs_and_escapes() {
        assert_eq!(
            render(&Value::String("one\ntwo\nthree".to_string())),
            "\"one\\ntwo\\nthree\""
        );
        assert_eq!(render(&Value::String("\n\n".to_string())), "\"\\n\\n\"");
    }

    #[test]
    fn test_render_multibyte_passes_through_unescaped() {
        assert_eq!(render(&Value::String("café 🌟".to_string())), "\"café 🌟\"");
    }

    #[test]
    fn test_render_array() {
        let arr = Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
        ]);
        assert_eq!(render(&arr), "[1,2,3]");
        assert_eq!(render(&Value::Array(vec![])), "[]");
    }

    #[test]
    fn test_render_object_in_parse_order() {
        let mut obj = IndexMap::new();
        obj.insert("b".to_string(), Value::Number(2.0));
        obj.insert("a".to_string(), Value::Number(1.0));
        let value = Value::Object(obj);

        // Insertion order preserved, not sorted
        assert_eq!(render(&value), "{\"b\":2,\"a\":1}");
    }

    #[test]
    fn test_render_empty_object() {
        assert_eq!(render(&Value::Object(IndexMap::new())), "{}");
    }

    #[test]
    fn test_render_nested() {
        let mut inner = IndexMap::new();
        inner.insert("x".to_string(), Value::Number(1.0));

        let mut outer = IndexMap::new();
        outer.insert("arr".to_string(), Value::Array(vec![Value::Number(1.0)]));
        outer.insert("obj".to_string(), Value::Object(inner));

        let value = Value::Object(outer);
        assert_eq!(render(&value), "{\"arr\":[1],\"obj\":{\"x\":1}}");
    }

    #[test]
    fn test_display_matches_render() {
        let value = Value::Array(vec![Value::Bool(true), Value::Null]);
        assert_eq!(value.to_string(), render(&value));
    }

    #[test]
    fn test_number_and_string_do_not_collide() {
        assert_ne!(
            render(&Value::Number(1.0)),
            render(&Value::String("1".to_string()))
        );
    }
}
