//! The schema model: section name plus ordered settings.

use crate::constants::DEFAULT_SECTION_NAME;
use crate::models::setting::Setting;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parsed content of a schema block.
///
/// Top-level keys the editor does not manage (`blocks`, `presets`, `tag`, ...)
/// are kept in `extra` and written back after `name` and `settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaModel {
    /// Section name shown in the theme editor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Settings in render order
    #[serde(default)]
    pub settings: Vec<Setting>,
    /// Unmanaged top-level keys, in document order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SchemaModel {
    /// Creates an empty model with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            settings: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Name for display, falling back to the default section name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_SECTION_NAME)
    }

    /// JSON object written into the schema block.
    ///
    /// Differs from the serde form only in dropping empty `info` fields.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        let mut map = Map::new();
        if let Some(name) = &self.name {
            map.insert("name".to_string(), Value::String(name.clone()));
        }
        map.insert(
            "settings".to_string(),
            Value::Array(
                self.settings
                    .iter()
                    .map(|setting| Value::Object(setting.to_output()))
                    .collect(),
            ),
        );
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}

impl Default for SchemaModel {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION_NAME)
    }
}
