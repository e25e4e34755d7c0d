//! A single setting definition of the schema.

use crate::models::field::Field;
use crate::models::registry::SettingType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One `{value, label}` entry of a `select` or `radio` setting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectOption {
    /// Value stored when the option is chosen
    pub value: String,
    /// Text shown for the option
    pub label: String,
}

impl SelectOption {
    /// Creates an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Converts to the JSON object stored in the `options` array.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("value".to_string(), Value::String(self.value.clone()));
        map.insert("label".to_string(), Value::String(self.label.clone()));
        Value::Object(map)
    }
}

/// A setting object as found in the `settings` array.
///
/// Settings are kept as insertion-ordered JSON objects rather than a closed
/// struct: extraction tolerates settings that do not match their type, and
/// editing a field must not reorder the others. The registry decides which
/// keys are legal; see [`SettingType::fields`].
///
/// Equality ignores key order and treats an empty `info` as absent, matching
/// what serialization emits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Setting(Map<String, Value>);

impl Setting {
    /// Creates the blank `text` setting appended by "add setting".
    #[must_use]
    pub fn new_text() -> Self {
        let mut map = Map::new();
        map.insert("id".to_string(), Value::String(String::new()));
        map.insert(
            "type".to_string(),
            Value::String(SettingType::Text.as_str().to_string()),
        );
        map.insert("label".to_string(), Value::String(String::new()));
        map.insert("default".to_string(), Value::String(String::new()));
        map.insert("info".to_string(), Value::String(String::new()));
        Self(map)
    }

    /// Wraps a raw JSON object.
    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Borrows the underlying object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the setting, returning the underlying object.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Raw `type` tag, if present and a string.
    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Registry type, `None` for missing or unrecognized tags.
    #[must_use]
    pub fn setting_type(&self) -> Option<SettingType> {
        self.type_tag().and_then(|tag| tag.parse().ok())
    }

    /// Value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.0.get(field.as_str())
    }

    /// Value of a string field.
    #[must_use]
    pub fn get_str(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Setting id, empty when unset.
    #[must_use]
    pub fn id(&self) -> &str {
        self.get_str(Field::Id).unwrap_or_default()
    }

    /// Setting label, empty when unset.
    #[must_use]
    pub fn label(&self) -> &str {
        self.get_str(Field::Label).unwrap_or_default()
    }

    /// The `options` array, if present.
    #[must_use]
    pub fn options(&self) -> Option<&Vec<Value>> {
        self.get(Field::Options).and_then(Value::as_array)
    }

    /// Number of keys, `type` included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the object has no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key names in object order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Sets a field, keeping its position when it already exists.
    pub(crate) fn put(&mut self, field: Field, value: Value) {
        self.0.insert(field.as_str().to_string(), value);
    }

    /// Object written to the payload: empty `info` is dropped.
    #[must_use]
    pub fn to_output(&self) -> Map<String, Value> {
        self.0
            .iter()
            .filter(|(key, value)| !is_empty_info(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

fn is_empty_info(key: &str, value: &Value) -> bool {
    key == Field::Info.as_str() && value.as_str() == Some("")
}

impl PartialEq for Setting {
    fn eq(&self, other: &Self) -> bool {
        let significant = |map: &Map<String, Value>| {
            map.iter().filter(|(k, v)| !is_empty_info(k, v)).count()
        };

        significant(&self.0) == significant(&other.0)
            && self
                .0
                .iter()
                .filter(|(k, v)| !is_empty_info(k, v))
                .all(|(k, v)| other.0.get(k) == Some(v))
    }
}

impl From<Map<String, Value>> for Setting {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
