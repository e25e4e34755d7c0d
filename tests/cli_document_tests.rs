//! End-to-end tests for loading, showing and exporting documents.

use std::fs;

mod fixtures;
use fixtures::*;

// ============================================================================
// Load Command Tests
// ============================================================================

#[test]
fn test_load_reports_settings() {
    let env = TestEnv::new();
    let stdout = env.load(HERO_TEMPLATE);
    assert!(stdout.contains("Hero"), "stdout: {stdout}");
    assert!(stdout.contains("2 settings"), "stdout: {stdout}");
}

#[test]
fn test_load_without_block_fails_with_validation_code() {
    let env = TestEnv::new();
    let path = env.write_file("plain.liquid", PLAIN_TEMPLATE);

    let output = env.run(&["load", path_str(&path)]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No {% schema %} block"), "stderr: {stderr}");
}

#[test]
fn test_load_malformed_payload_keeps_previous_schema() {
    let env = TestEnv::new();
    env.load(HERO_TEMPLATE);

    let path = env.write_file("broken.liquid", BROKEN_TEMPLATE);
    let output = env.run(&["load", path_str(&path)]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not valid JSON"), "stderr: {stderr}");

    let stdout = env.run_ok(&["show", "--json"]);
    let shown: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(shown["name"], "Hero");
    assert_eq!(shown["count"], 2);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let env = TestEnv::new();
    let output = env.run(&["load", "/nonexistent/section.liquid"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_load_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let env = TestEnv::new();
    let mut child = env
        .command(&["load", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(HERO_TEMPLATE.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(env.exported_schema()["settings"][0]["id"], "heading");
}

// ============================================================================
// Show / Preview Command Tests
// ============================================================================

#[test]
fn test_show_json_lists_settings() {
    let env = TestEnv::new();
    env.load(HERO_TEMPLATE);

    let stdout = env.run_ok(&["show", "--json"]);
    let shown: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(shown["count"], 2);
    assert_eq!(shown["settings"][0]["type"], "text");
    assert_eq!(shown["settings"][1]["id"], "show_button");
    assert_eq!(shown["settings"][1]["collapsed"], false);
}

#[test]
fn test_show_empty_session() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["show"]);
    assert!(stdout.contains("Custom Section"), "stdout: {stdout}");
    assert!(stdout.contains("no settings"), "stdout: {stdout}");
}

#[test]
fn test_preview_prints_payload_only() {
    let env = TestEnv::new();
    env.load(HERO_TEMPLATE);

    let stdout = env.run_ok(&["preview"]);
    assert!(!stdout.contains("{% schema %}"));
    let payload: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(payload["name"], "Hero");
    assert_eq!(payload["presets"][0]["name"], "Hero");
}

// ============================================================================
// Export Command Tests
// ============================================================================

#[test]
fn test_export_preserves_surrounding_text() {
    let env = TestEnv::new();
    env.load(HERO_TEMPLATE);

    let exported = env.export();
    let prefix = &HERO_TEMPLATE[..HERO_TEMPLATE.find("{% schema %}").unwrap()];
    let suffix = &HERO_TEMPLATE[HERO_TEMPLATE.find("{% endschema %}").unwrap()..];

    assert!(exported.starts_with(prefix));
    assert!(exported.ends_with(suffix));
    assert!(exported.contains("{% schema %}\n{\n  \"name\": \"Hero\""));
}

#[test]
fn test_export_keeps_unmanaged_keys() {
    let env = TestEnv::new();
    env.load(HERO_TEMPLATE);

    let schema = env.exported_schema();
    assert_eq!(schema["presets"][0]["name"], "Hero");
    assert_eq!(schema["settings"][1]["default"], true);
}

#[test]
fn test_export_to_file() {
    let env = TestEnv::new();
    env.load(HERO_TEMPLATE);
    env.run_ok(&["rename", "Banner"]);

    let out = env.temp_dir.path().join("out.liquid");
    let output = env.run(&["export", "--output", path_str(&out)]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(schema_payload(&written)["name"], "Banner");
}

#[test]
fn test_export_without_document_fails() {
    let env = TestEnv::new();
    env.run_ok(&["add"]);

    let output = env.run(&["export"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no schema block"), "stderr: {stderr}");
}

#[test]
fn test_indent_config_applies_to_export() {
    let env = TestEnv::new();
    env.run_ok(&["config", "set", "--indent", "4"]);
    env.load(HERO_TEMPLATE);

    let exported = env.export();
    assert!(exported.contains("{\n    \"name\": \"Hero\""), "{exported}");
}

// ============================================================================
// Types Command Tests
// ============================================================================

#[test]
fn test_types_json_lists_registry() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["types", "--json"]);
    let types: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let types = types.as_array().unwrap();

    assert_eq!(types.len(), 22);
    let header = types.iter().find(|t| t["type"] == "header").unwrap();
    assert_eq!(header["fields"], serde_json::json!(["content"]));
}
