//! Field edits, option list edits and list reordering.
//!
//! All operations take the current value and return a new one; on error the
//! input is left as it was.

use crate::error::{SchemaError, SchemaResult};
use crate::models::{Field, SelectOption, Setting, SettingType};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Sets one field of a setting.
///
/// Existing keys keep their position; a field not yet present is appended.
///
/// # Errors
///
/// Returns [`SchemaError::FieldNotPermitted`] when the setting's type does not
/// permit `field`. A setting whose type is unknown permits nothing.
pub fn edit_field(setting: &Setting, field: Field, value: Value) -> SchemaResult<Setting> {
    let setting_type = permitted_type(setting, field)?;

    let mut updated = setting.clone();
    updated.put(field, value);

    tracing::debug!(setting_type = setting_type.as_str(), field = field.as_str(), "edited field");
    Ok(updated)
}

fn permitted_type(setting: &Setting, field: Field) -> SchemaResult<SettingType> {
    setting
        .setting_type()
        .filter(|ty| ty.permits(field))
        .ok_or_else(|| SchemaError::not_permitted(field.as_str(), setting.type_tag().unwrap_or("")))
}

/// Part of a choice that [`edit_option`] can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    /// Stored value
    Value,
    /// Displayed text
    Label,
}

impl OptionField {
    /// JSON key inside the option object.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Label => "label",
        }
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionField {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(Self::Value),
            "label" => Ok(Self::Label),
            other => Err(SchemaError::UnknownField(other.to_string())),
        }
    }
}

/// Copies the options array of a `select`/`radio` setting.
///
/// A missing or malformed `options` value counts as an empty list.
fn options_of(setting: &Setting) -> SchemaResult<Vec<Value>> {
    permitted_type(setting, Field::Options)?;
    Ok(setting.options().cloned().unwrap_or_default())
}

fn with_options(setting: &Setting, options: Vec<Value>) -> Setting {
    let mut updated = setting.clone();
    updated.put(Field::Options, Value::Array(options));
    updated
}

/// Appends a blank `{value: "", label: ""}` option.
///
/// # Errors
///
/// [`SchemaError::FieldNotPermitted`] unless the setting is a `select` or `radio`.
pub fn add_option(setting: &Setting) -> SchemaResult<Setting> {
    let mut options = options_of(setting)?;
    options.push(SelectOption::default().to_value());
    Ok(with_options(setting, options))
}

/// Removes the option at `index`.
///
/// Removing the last option leaves an empty list.
///
/// # Errors
///
/// - [`SchemaError::FieldNotPermitted`] unless the setting is a `select` or `radio`
/// - [`SchemaError::IndexOutOfRange`] if `index` is not a valid position
pub fn remove_option(setting: &Setting, index: usize) -> SchemaResult<Setting> {
    let options = options_of(setting)?;
    let options = remove_at(&options, index)?;
    Ok(with_options(setting, options))
}

/// Sets the value or label of the option at `index`.
///
/// # Errors
///
/// - [`SchemaError::FieldNotPermitted`] unless the setting is a `select` or `radio`
/// - [`SchemaError::IndexOutOfRange`] if `index` is not a valid position
pub fn edit_option(
    setting: &Setting,
    index: usize,
    field: OptionField,
    value: impl Into<String>,
) -> SchemaResult<Setting> {
    let mut options = options_of(setting)?;
    let len = options.len();
    let option = options
        .get_mut(index)
        .ok_or(SchemaError::out_of_range(index, len))?;

    if !option.is_object() {
        *option = SelectOption::default().to_value();
    }
    if let Some(map) = option.as_object_mut() {
        map.insert(field.as_str().to_string(), Value::String(value.into()));
    }

    Ok(with_options(setting, options))
}

/// Moves the element at `from` to position `to`.
///
/// This is a relocation, not a swap: the element is removed and reinserted,
/// and every other element keeps its relative order.
///
/// # Errors
///
/// Returns [`SchemaError::IndexOutOfRange`] if either index is outside `[0, len)`.
pub fn reorder<T: Clone>(list: &[T], from: usize, to: usize) -> SchemaResult<Vec<T>> {
    let len = list.len();
    for index in [from, to] {
        if index >= len {
            return Err(SchemaError::out_of_range(index, len));
        }
    }

    let mut moved = list.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    Ok(moved)
}

/// Returns `list` without the element at `index`.
///
/// # Errors
///
/// Returns [`SchemaError::IndexOutOfRange`] if `index` is outside `[0, len)`.
pub fn remove_at<T: Clone>(list: &[T], index: usize) -> SchemaResult<Vec<T>> {
    if index >= list.len() {
        return Err(SchemaError::out_of_range(index, list.len()));
    }

    let mut remaining = list.to_vec();
    remaining.remove(index);
    Ok(remaining)
}
