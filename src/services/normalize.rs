//! Type change normalization.
//!
//! Changing a setting's type rebuilds the object from the registry row of the
//! new type: shared fields whose values still fit are carried over, fields the
//! new type does not permit are dropped, and anything still missing is filled
//! with a deterministic default. The procedure has no per-type branches; the
//! content-only shape of `header` and `paragraph` comes from their table rows.

use crate::models::{Field, SelectOption, Setting, SettingType, ValueKind};
use serde_json::{json, Map, Value};

/// Unit assigned to a new `range` setting.
pub const DEFAULT_RANGE_UNIT: &str = "px";
/// Lower bound assigned to a new `range` setting.
pub const DEFAULT_RANGE_MIN: i64 = 0;
/// Upper bound assigned to a new `range` setting.
pub const DEFAULT_RANGE_MAX: i64 = 100;
/// Step assigned to a new `range` setting.
pub const DEFAULT_RANGE_STEP: i64 = 1;
/// Providers accepted by a new `video_url` setting.
pub const DEFAULT_VIDEO_PROVIDERS: [&str; 2] = ["youtube", "vimeo"];

const MAX_ID_ATTEMPTS: usize = 16;

/// Converts `setting` to `new_type`.
///
/// Never fails: any source setting, including one with an unknown or missing
/// type, yields a setting whose keys are exactly `type` plus the permitted
/// fields of `new_type`. Information that does not fit the new type is lost.
#[must_use]
pub fn change_type(setting: &Setting, new_type: SettingType) -> Setting {
    change_type_among(setting, new_type, &[])
}

/// Like [`change_type`], avoiding `taken` ids when one has to be generated.
#[must_use]
pub fn change_type_among(setting: &Setting, new_type: SettingType, taken: &[&str]) -> Setting {
    let old = setting.as_map();
    let mut out = Map::new();

    if !old.contains_key("type") {
        out.insert("type".to_string(), type_value(new_type));
    }

    for (key, value) in old {
        if key == "type" {
            out.insert(key.clone(), type_value(new_type));
            continue;
        }
        let Ok(field) = key.parse::<Field>() else {
            continue;
        };
        let fits = new_type.permits(field)
            && new_type
                .kind_of(field)
                .is_some_and(|kind| kind.matches(value));
        if fits {
            out.insert(key.clone(), value.clone());
        }
    }

    for &field in new_type.fields() {
        if !out.contains_key(field.as_str()) {
            let value = synthesize(field, new_type, &out, taken);
            out.insert(field.as_str().to_string(), value);
        }
    }

    tracing::debug!(
        from = setting.type_tag().unwrap_or("<none>"),
        to = new_type.as_str(),
        "changed setting type"
    );

    Setting::from_map(out)
}

fn type_value(setting_type: SettingType) -> Value {
    Value::String(setting_type.as_str().to_string())
}

/// Default value for a field absent after carry-over.
///
/// `partial` holds the fields already placed; `default` reads `min` or
/// `options` from it, which precede it in every registry row.
fn synthesize(
    field: Field,
    setting_type: SettingType,
    partial: &Map<String, Value>,
    taken: &[&str],
) -> Value {
    match field {
        Field::Id => Value::String(generate_id(setting_type, |id| taken.contains(&id))),
        Field::Label => Value::String(setting_type.default_label()),
        Field::Info | Field::Placeholder | Field::Content => Value::String(String::new()),
        Field::Unit => Value::String(DEFAULT_RANGE_UNIT.to_string()),
        Field::Min => json!(DEFAULT_RANGE_MIN),
        Field::Max => json!(DEFAULT_RANGE_MAX),
        Field::Step => json!(DEFAULT_RANGE_STEP),
        Field::Options => Value::Array(vec![SelectOption::default().to_value()]),
        Field::Accept => json!(DEFAULT_VIDEO_PROVIDERS),
        Field::Default => default_value(setting_type, partial),
    }
}

fn default_value(setting_type: SettingType, partial: &Map<String, Value>) -> Value {
    match setting_type.default_kind() {
        Some(ValueKind::Bool) => Value::Bool(false),
        Some(ValueKind::Number) => partial
            .get(Field::Min.as_str())
            .filter(|min| min.is_number())
            .cloned()
            .unwrap_or_else(|| json!(DEFAULT_RANGE_MIN)),
        _ if setting_type.has_options() => partial
            .get(Field::Options.as_str())
            .and_then(Value::as_array)
            .and_then(|options| options.first())
            .and_then(|first| first.get("value"))
            .cloned()
            .unwrap_or_else(|| Value::String(String::new())),
        _ => Value::String(String::new()),
    }
}

/// Generates `<type>_<suffix>`, retrying while `is_taken` reports a clash.
///
/// Uniqueness is best effort: after a bounded number of clashes the last
/// candidate is returned anyway.
pub fn generate_id(setting_type: SettingType, is_taken: impl Fn(&str) -> bool) -> String {
    let mut candidate = new_id_candidate(setting_type);
    for _ in 1..MAX_ID_ATTEMPTS {
        if !is_taken(&candidate) {
            break;
        }
        candidate = new_id_candidate(setting_type);
    }
    candidate
}

fn new_id_candidate(setting_type: SettingType) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{}_{}", setting_type.as_str(), &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setting(value: Value) -> Setting {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_text_to_checkbox_worked_example() {
        let text = setting(json!({"id": "a", "type": "text", "label": "A", "default": "", "info": ""}));
        let checkbox = change_type(&text, SettingType::Checkbox);

        assert_eq!(
            Value::Object(checkbox.as_map().clone()),
            json!({"id": "a", "type": "checkbox", "label": "A", "info": "", "default": false})
        );
        assert_eq!(
            checkbox.keys().collect::<Vec<_>>(),
            vec!["id", "type", "label", "info", "default"]
        );
    }

    #[test]
    fn test_to_header_keeps_only_content() {
        let text = setting(json!({"id": "a", "type": "text", "label": "A", "info": "i"}));
        let header = change_type(&text, SettingType::Header);
        assert_eq!(
            Value::Object(header.into_map()),
            json!({"type": "header", "content": ""})
        );
    }

    #[test]
    fn test_paragraph_content_carries_to_header() {
        let paragraph = setting(json!({"type": "paragraph", "content": "Hello"}));
        let header = change_type(&paragraph, SettingType::Header);
        assert_eq!(header.get_str(Field::Content), Some("Hello"));
    }

    #[test]
    fn test_from_header_synthesizes_identity() {
        let header = setting(json!({"type": "header", "content": "Hi"}));
        let color = change_type(&header, SettingType::Color);

        assert!(color.id().starts_with("color_"));
        assert_eq!(color.label(), "Color Setting");
        assert_eq!(color.get(Field::Default), Some(&json!("")));
        assert!(color.get(Field::Content).is_none());
    }

    #[test]
    fn test_to_range_defaults() {
        let text = setting(json!({"id": "size", "type": "text", "label": "Size", "default": "12"}));
        let range = change_type(&text, SettingType::Range);

        assert_eq!(range.id(), "size");
        assert_eq!(range.get(Field::Min), Some(&json!(0)));
        assert_eq!(range.get(Field::Max), Some(&json!(100)));
        assert_eq!(range.get(Field::Step), Some(&json!(1)));
        assert_eq!(range.get_str(Field::Unit), Some("px"));
        assert_eq!(range.get(Field::Default), Some(&json!(0)));
        assert!(range.get(Field::Placeholder).is_none());
    }

    #[test]
    fn test_to_select_seeds_blank_option() {
        let text = setting(json!({"id": "a", "type": "text", "label": "A"}));
        let select = change_type(&text, SettingType::Select);
        assert_eq!(select.get(Field::Options), Some(&json!([{"value": "", "label": ""}])));
        assert_eq!(select.get(Field::Default), Some(&json!("")));
    }

    #[test]
    fn test_radio_to_select_keeps_options() {
        let radio = setting(json!({
            "id": "align", "type": "radio", "label": "Align",
            "options": [{"value": "left", "label": "Left"}], "default": "left"
        }));
        let select = change_type(&radio, SettingType::Select);
        assert_eq!(select.options().map(Vec::len), Some(1));
        assert_eq!(select.get(Field::Default), Some(&json!("left")));
    }

    #[test]
    fn test_select_to_text_drops_options() {
        let select = setting(json!({
            "id": "a", "type": "select", "label": "A",
            "options": [{"value": "x", "label": "X"}], "default": "x"
        }));
        let text = change_type(&select, SettingType::Text);
        assert!(text.options().is_none());
        assert_eq!(text.get(Field::Default), Some(&json!("x")));
    }

    #[test]
    fn test_unknown_fields_and_missing_type() {
        let odd = setting(json!({"label": "L", "bogus": 1}));
        let url = change_type(&odd, SettingType::Url);
        assert_eq!(url.keys().next(), Some("type"));
        assert_eq!(url.label(), "L");
        assert!(!url.keys().any(|k| k == "bogus"));
    }

    #[test]
    fn test_generate_id_avoids_taken() {
        let taken = ["text_00000000"];
        let id = generate_id(SettingType::Text, |id| taken.contains(&id));
        assert!(id.starts_with("text_"));
        assert_eq!(id.len(), "text_".len() + 8);
        assert_ne!(id, taken[0]);
    }
}
