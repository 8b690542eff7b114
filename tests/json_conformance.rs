//! JSON structural conformance tests.
//!
//! These exercise the tokenizer and parser with an empty schema, so every
//! outcome reflects JSON syntax handling rather than schema validation:
//! UTF-8 and escape decoding, number grammar, structural errors, and the
//! resource limits.

use schema_json::{Error, ErrorKind, Limits, ParseOptions, SchemaParser, Value};
use serde_json::json;

fn permissive() -> SchemaParser {
    SchemaParser::new(&json!({})).expect("empty schema is valid")
}

fn parse(input: &str) -> Result<Value, Error> {
    permissive().parse_str(input)
}

fn parse_with_limits(input: &[u8], limits: Limits) -> Result<Value, Error> {
    let options = ParseOptions {
        skip_validation: false,
        limits,
    };
    permissive().parse_with_options(input, &options)
}

// ============================================================================
// UTF-8 and escape handling
// ============================================================================

#[test]
fn valid_utf8_accepted() {
    assert_eq!(
        parse("\"héllo wörld\"").unwrap(),
        Value::String("héllo wörld".to_string())
    );
}

#[test]
fn invalid_utf8_rejected() {
    let invalid = vec![b'"', 0xFF, 0xFE, b'"'];
    let err = permissive().parse(&invalid).unwrap_err();
    assert_eq!(err, Error::InvalidUtf8);
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn overlong_encoding_rejected() {
    // Overlong encoding of '/' (0x2F) as C0 AF
    let overlong = vec![b'"', 0xC0, 0xAF, b'"'];
    assert!(permissive().parse(&overlong).is_err());
}

#[test]
fn escape_sequences_decoded() {
    assert_eq!(
        parse(r#""a\nb\tc\"d\\e\/f""#).unwrap(),
        Value::String("a\nb\tc\"d\\e/f".to_string())
    );
    assert_eq!(
        parse(r#""\b\f\r""#).unwrap(),
        Value::String("\u{8}\u{c}\r".to_string())
    );
}

#[test]
fn unicode_escapes_decoded() {
    assert_eq!(
        parse("\"\\u0041\\u00e9\"").unwrap(),
        Value::String("Aé".to_string())
    );
}

#[test]
fn surrogate_pair_escape_decoded() {
    assert_eq!(
        parse("\"\\uD83D\\uDE00\"").unwrap(),
        Value::String("😀".to_string())
    );
}

#[test]
fn unpaired_surrogates_rejected() {
    assert!(parse("\"\\uD800\"").is_err());
    assert!(parse("\"\\uDC00\"").is_err());
    assert!(parse("\"\\uD800A\"").is_err());
}

#[test]
fn invalid_escape_rejected() {
    assert_eq!(parse(r#""\x41""#).unwrap_err(), Error::InvalidJson);
}

#[test]
fn raw_control_character_rejected() {
    assert_eq!(parse("\"a\u{1}b\"").unwrap_err(), Error::InvalidJson);
}

#[test]
fn unterminated_string_rejected() {
    assert_eq!(parse("\"abc").unwrap_err(), Error::InvalidJson);
}

// ============================================================================
// Number grammar
// ============================================================================

#[test]
fn integer_forms() {
    assert_eq!(parse("0").unwrap(), Value::Number(0.0));
    assert_eq!(parse("-0").unwrap(), Value::Number(-0.0));
    assert_eq!(parse("42").unwrap(), Value::Number(42.0));
    assert_eq!(parse("-123").unwrap(), Value::Number(-123.0));
}

#[test]
fn fractional_and_exponent_forms() {
    assert_eq!(parse("3.14").unwrap(), Value::Number(3.14));
    assert_eq!(parse("-0.5").unwrap(), Value::Number(-0.5));
    assert_eq!(parse("1e3").unwrap(), Value::Number(1000.0));
    assert_eq!(parse("2.5E-1").unwrap(), Value::Number(0.25));
    assert_eq!(parse("1e+2").unwrap(), Value::Number(100.0));
}

#[test]
fn big_integer_falls_back_to_double() {
    // Larger than i64: decoded through the double path
    match parse("123456789012345678901234567890").unwrap() {
        Value::Number(n) => assert!((n - 1.23456789012345678e29).abs() < 1e14),
        other => panic!("expected number, got {other:?}"),
    }
}

#[test]
fn leading_zero_rejected() {
    assert_eq!(parse("01").unwrap_err(), Error::InvalidJson);
    assert_eq!(parse("-01").unwrap_err(), Error::InvalidJson);
}

#[test]
fn malformed_numbers_rejected() {
    for bad in ["1.", ".5", "1e", "1e+", "-", "+1", "1.2.3"] {
        assert!(parse(bad).is_err(), "input: {bad}");
    }
}

#[test]
fn nan_and_infinity_literals_rejected() {
    for bad in ["NaN", "Infinity", "-Infinity", "inf"] {
        assert!(parse(bad).is_err(), "input: {bad}");
    }
}

// ============================================================================
// Structural errors
// ============================================================================

#[test]
fn empty_and_whitespace_input_rejected() {
    assert_eq!(parse("").unwrap_err(), Error::InvalidJson);
    assert_eq!(parse(" \t\n ").unwrap_err(), Error::InvalidJson);
}

#[test]
fn trailing_garbage_rejected() {
    assert_eq!(parse("null x").unwrap_err(), Error::InvalidJson);
    assert_eq!(parse("1 2").unwrap_err(), Error::InvalidJson);
    assert_eq!(parse("{} []").unwrap_err(), Error::InvalidJson);
}

#[test]
fn trailing_commas_rejected() {
    assert_eq!(parse("[1,]").unwrap_err(), Error::InvalidJson);
    assert_eq!(parse(r#"{"a":1,}"#).unwrap_err(), Error::InvalidJson);
}

#[test]
fn unquoted_keys_rejected() {
    assert_eq!(parse("{a: 1}").unwrap_err(), Error::InvalidJson);
}

#[test]
fn comments_rejected() {
    assert!(parse("// c\n1").is_err());
    assert!(parse("/* c */ 1").is_err());
}

#[test]
fn missing_separators_rejected() {
    assert_eq!(parse(r#"{"a" 1}"#).unwrap_err(), Error::InvalidJson);
    assert_eq!(parse("[1 2]").unwrap_err(), Error::InvalidJson);
    assert_eq!(parse(r#"{"a":}"#).unwrap_err(), Error::InvalidJson);
}

#[test]
fn unclosed_containers_rejected() {
    assert_eq!(parse("[1, 2").unwrap_err(), Error::InvalidJson);
    assert_eq!(parse(r#"{"a": 1"#).unwrap_err(), Error::InvalidJson);
}

#[test]
fn single_quotes_rejected() {
    assert!(parse("'hello'").is_err());
}

#[test]
fn whitespace_around_tokens_accepted() {
    let value = parse(" \n\t{ \"a\" :\r[ 1 , 2 ] } ").unwrap();
    assert_eq!(
        value.get("a"),
        Some(&Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]))
    );
}

#[test]
fn deeply_nested_within_limit_accepted() {
    let depth = 50;
    let input = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse(&input).is_ok());
}

#[test]
fn duplicate_keys_last_value_wins() {
    let value = parse(r#"{"k": 1, "k": 2}"#).unwrap();
    assert_eq!(value.get("k"), Some(&Value::Number(2.0)));
    assert_eq!(value.as_object().unwrap().len(), 1);
}

// ============================================================================
// Resource limits
// ============================================================================

#[test]
fn input_size_limit() {
    let mut limits = Limits::default();
    limits.max_input_size = 8;
    let err = parse_with_limits(b"[1,2,3,4,5]", limits).unwrap_err();
    assert_eq!(err, Error::InputLimitExceeded(11, 8));
    assert_eq!(err.kind(), ErrorKind::Resource);
}

#[test]
fn nesting_depth_limit() {
    let mut limits = Limits::default();
    limits.max_nesting_depth = 3;
    assert!(parse_with_limits(b"[[[1]]]", limits).is_ok());
    assert_eq!(
        parse_with_limits(b"[[[[1]]]]", limits).unwrap_err(),
        Error::DepthLimitExceeded(4, 3)
    );
}

#[test]
fn mixed_nesting_counts_both_containers() {
    let mut limits = Limits::default();
    limits.max_nesting_depth = 2;
    assert!(parse_with_limits(br#"{"a": [1]}"#, limits).is_ok());
    assert!(parse_with_limits(br#"{"a": [{}]}"#, limits).is_err());
}

#[test]
fn string_byte_limit() {
    let mut limits = Limits::default();
    limits.max_string_length = 3;
    assert!(parse_with_limits(br#""abc""#, limits).is_ok());
    assert_eq!(
        parse_with_limits(br#""abcd""#, limits).unwrap_err(),
        Error::StringLimitExceeded(4, 3)
    );
}

#[test]
fn object_field_limit() {
    let mut limits = Limits::default();
    limits.max_object_fields = 2;
    assert!(parse_with_limits(br#"{"a":1,"b":2}"#, limits).is_ok());
    assert_eq!(
        parse_with_limits(br#"{"a":1,"b":2,"c":3}"#, limits).unwrap_err(),
        Error::FieldLimitExceeded(3, 2)
    );
}

#[test]
fn array_length_limit() {
    let mut limits = Limits::default();
    limits.max_array_length = 3;
    assert!(parse_with_limits(b"[1,2,3]", limits).is_ok());
    assert_eq!(
        parse_with_limits(b"[1,2,3,4]", limits).unwrap_err(),
        Error::ItemLimitExceeded(4, 3)
    );
}

#[test]
fn limits_apply_in_skip_validation_mode() {
    let mut limits = Limits::default();
    limits.max_nesting_depth = 1;
    let options = ParseOptions {
        skip_validation: true,
        limits,
    };
    let err = permissive()
        .parse_with_options(b"[[1]]", &options)
        .unwrap_err();
    assert_eq!(err, Error::DepthLimitExceeded(2, 1));
}
