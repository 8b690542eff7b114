//! CLI integration tests.
//!
//! Tests the schema-json binary by invoking it as a subprocess.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

fn binary_path() -> std::path::PathBuf {
    // Find the binary in the target directory
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_default();

    // Navigate to the deps directory's sibling (the main binary location)
    if path.ends_with("deps") {
        path.pop();
    }

    if cfg!(windows) {
        path.join("schema-json.exe")
    } else {
        path.join("schema-json")
    }
}

fn schema_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run_parse(schema: &str, input: &str, extra_args: &[&str]) -> (i32, String, String) {
    let schema = schema_file(schema);
    let binary = binary_path();

    let mut child = Command::new(&binary)
        .arg("parse")
        .arg("--schema")
        .arg(schema.path())
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn {:?}: {}", binary, e));

    {
        let stdin = child.stdin.as_mut().unwrap();
        // The child may exit (and close its stdin) before reading input if
        // it rejects the schema up front; that's not a test failure.
        let _ = stdin.write_all(input.as_bytes());
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

fn run_check_schema(schema: &str) -> (i32, String, String) {
    let schema = schema_file(schema);
    let output = Command::new(binary_path())
        .arg("check-schema")
        .arg(schema.path())
        .output()
        .unwrap();
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

// ============================================================================
// Parse command
// ============================================================================

#[test]
fn parse_valid_input_prints_rendered_value() {
    let (code, stdout, _) = run_parse(r#"{"type": "object"}"#, r#"{"a": 1, "b": [true]}"#, &[]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), r#"{"a":1,"b":[true]}"#);
}

#[test]
fn parse_type_mismatch_fails_with_message() {
    let (code, _, stderr) = run_parse(r#"{"type": "string"}"#, "42", &[]);
    assert_ne!(code, 0);
    assert!(stderr.contains("SchemaTypeMismatch"), "stderr: {stderr}");
    assert!(
        stderr.contains("Value does not match schema type"),
        "stderr: {stderr}"
    );
}

#[test]
fn parse_invalid_json_fails_with_syntax_error() {
    let (code, _, stderr) = run_parse("{}", "{broken", &[]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid JSON format"), "stderr: {stderr}");
}

#[test]
fn parse_skip_validation_flag_bypasses_constraints() {
    let (code, stdout, _) = run_parse(r#"{"type": "string"}"#, "42", &["--skip-validation"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "42");
}

#[test]
fn parse_reads_input_file() {
    let schema = schema_file(r#"{"type": "array"}"#);
    let input = schema_file("[1,2,3]");

    let output = Command::new(binary_path())
        .arg("parse")
        .arg("--schema")
        .arg(schema.path())
        .arg(input.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[1,2,3]");
}

#[test]
fn parse_rejects_invalid_schema_file() {
    let (code, _, stderr) = run_parse(r#"{"type": "strung"}"#, "1", &[]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid JSON Schema"), "stderr: {stderr}");
}

#[test]
fn parse_rejects_non_object_schema_file() {
    let (code, _, stderr) = run_parse("[1, 2]", "1", &[]);
    assert_ne!(code, 0);
    assert!(
        stderr.contains("The \"schema\" argument must be an object"),
        "stderr: {stderr}"
    );
}

// ============================================================================
// Check-schema command
// ============================================================================

#[test]
fn check_schema_accepts_valid_schema() {
    let (code, stdout, _) = run_check_schema(
        r#"{"type": "object", "properties": {"x": {"type": "integer"}}}"#,
    );
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");
}

#[test]
fn check_schema_rejects_malformed_schema() {
    let (code, _, stderr) = run_check_schema(r#"{"items": "nope"}"#);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid JSON Schema"), "stderr: {stderr}");
}

#[test]
fn check_schema_rejects_unreadable_file() {
    let output = Command::new(binary_path())
        .arg("check-schema")
        .arg("/definitely/not/a/real/path.json")
        .output()
        .unwrap();
    assert!(!output.status.success());
}

// ============================================================================
// Corpus command
// ============================================================================

#[test]
fn corpus_command_reports_all_passing() {
    let output = Command::new(binary_path()).arg("corpus").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 failed"), "stdout: {stdout}");
}
