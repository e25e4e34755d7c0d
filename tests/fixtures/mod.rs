//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Section template with markup around a two-setting schema block.
pub const HERO_TEMPLATE: &str = r#"<div class="hero">
  <h1>{{ section.settings.heading }}</h1>
</div>

{% schema %}
{
  "name": "Hero",
  "settings": [
    { "type": "text", "id": "heading", "label": "Heading", "default": "Welcome" },
    { "type": "checkbox", "id": "show_button", "label": "Show button", "default": true }
  ],
  "presets": [{ "name": "Hero" }]
}
{% endschema %}

<style>.hero { padding: 2rem; }</style>
"#;

/// Template whose schema payload is not valid JSON.
pub const BROKEN_TEMPLATE: &str = "<p>hi</p>\n{% schema %}{ \"name\": \"Broken\", }{% endschema %}\n";

/// Template without any schema block.
pub const PLAIN_TEMPLATE: &str = "<p>No schema here</p>\n";

/// Path to the schema-editor binary.
pub fn schema_editor_bin() -> &'static str {
    env!("CARGO_BIN_EXE_schema-editor")
}

/// Isolated config and session directories for one test.
pub struct TestEnv {
    /// Keeps the directories alive for the duration of the test
    pub temp_dir: TempDir,
}

impl TestEnv {
    /// Creates fresh, empty config and store directories.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Config directory passed through `SCHEMA_EDITOR_CONFIG_DIR`.
    pub fn config_dir(&self) -> PathBuf {
        self.temp_dir.path().join("config")
    }

    /// Session store directory passed through `--store`.
    pub fn store_dir(&self) -> PathBuf {
        self.temp_dir.path().join("store")
    }

    /// Writes `content` to a file inside the temp dir and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Builds a command with isolated config and store.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(schema_editor_bin());
        cmd.env("SCHEMA_EDITOR_CONFIG_DIR", self.config_dir());
        cmd.env_remove("RUST_LOG");
        cmd.arg("--store").arg(self.store_dir());
        cmd.args(args);
        cmd
    }

    /// Runs a command and returns its output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs a command and asserts it exits with code 0.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert_eq!(
            output.status.code(),
            Some(0),
            "`{}` should succeed. stderr: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Loads `content` as the current document.
    pub fn load(&self, content: &str) -> String {
        let path = self.write_file("section.liquid", content);
        self.run_ok(&["load", path_str(&path)])
    }

    /// Exports the current document to stdout and returns it.
    pub fn export(&self) -> String {
        self.run_ok(&["export"])
    }

    /// Parsed payload of the exported schema block.
    pub fn exported_schema(&self) -> serde_json::Value {
        schema_payload(&self.export())
    }
}

/// Converts a path to `&str` for use as a command argument.
pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("Temp paths are valid UTF-8")
}

/// Parses the JSON between the schema markers of `document`.
pub fn schema_payload(document: &str) -> serde_json::Value {
    let start = document.find("{% schema %}").expect("start marker") + "{% schema %}".len();
    let end = document.find("{% endschema %}").expect("end marker");
    serde_json::from_str(&document[start..end]).expect("payload is valid JSON")
}
