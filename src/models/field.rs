//! Field names a setting can carry and the JSON kinds they hold.

use crate::error::SchemaError;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A named field of a setting object (everything except `type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Identifier used by the template to read the value
    Id,
    /// Label shown in the theme editor
    Label,
    /// Help text shown under the input
    Info,
    /// Initial value
    Default,
    /// Body text of `header` and `paragraph` entries
    Content,
    /// `{value, label}` choices of `select` and `radio`
    Options,
    /// Lower bound of a `range`
    Min,
    /// Upper bound of a `range`
    Max,
    /// Increment of a `range`
    Step,
    /// Unit suffix of a `range`
    Unit,
    /// Input placeholder text
    Placeholder,
    /// Accepted providers of a `video_url`
    Accept,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Id,
        Self::Label,
        Self::Info,
        Self::Default,
        Self::Content,
        Self::Options,
        Self::Min,
        Self::Max,
        Self::Step,
        Self::Unit,
        Self::Placeholder,
        Self::Accept,
    ];

    /// JSON key of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Label => "label",
            Self::Info => "info",
            Self::Default => "default",
            Self::Content => "content",
            Self::Options => "options",
            Self::Min => "min",
            Self::Max => "max",
            Self::Step => "step",
            Self::Unit => "unit",
            Self::Placeholder => "placeholder",
            Self::Accept => "accept",
        }
    }

    /// Kind of value the field holds, independent of the setting type.
    ///
    /// `default` has no fixed kind; ask the registry through
    /// [`SettingType::default_kind`](crate::models::SettingType::default_kind).
    #[must_use]
    pub const fn kind(self) -> Option<ValueKind> {
        match self {
            Self::Id
            | Self::Label
            | Self::Info
            | Self::Content
            | Self::Unit
            | Self::Placeholder => Some(ValueKind::Text),
            Self::Min | Self::Max | Self::Step => Some(ValueKind::Number),
            Self::Options => Some(ValueKind::OptionList),
            Self::Accept => Some(ValueKind::TextList),
            Self::Default => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownField(s.to_string()))
    }
}

/// Shape of a JSON value a field expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// JSON string
    Text,
    /// JSON number
    Number,
    /// JSON boolean
    Bool,
    /// Array of `{value, label}` objects
    OptionList,
    /// Array of strings
    TextList,
}

impl ValueKind {
    /// Checks whether `value` has this kind.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Text => value.is_string(),
            Self::Number => value.is_number(),
            Self::Bool => value.is_boolean(),
            Self::OptionList => value.as_array().is_some_and(|items| {
                items.iter().all(|item| {
                    item.as_object().is_some_and(|option| {
                        option.get("value").is_some_and(Value::is_string)
                            && option.get("label").is_some_and(Value::is_string)
                    })
                })
            }),
            Self::TextList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }

    /// Converts a command-line argument into a value of this kind.
    ///
    /// Text is taken verbatim; the other kinds are parsed.
    pub fn coerce(self, raw: &str) -> Result<Value, String> {
        match self {
            Self::Text => Ok(Value::String(raw.to_string())),
            Self::Bool => raw
                .parse::<bool>()
                .map(Value::Bool)
                .map_err(|_| format!("expected 'true' or 'false', got '{raw}'")),
            Self::Number => {
                let parsed: Value = serde_json::from_str(raw.trim())
                    .map_err(|_| format!("expected a number, got '{raw}'"))?;
                if parsed.is_number() {
                    Ok(parsed)
                } else {
                    Err(format!("expected a number, got '{raw}'"))
                }
            }
            Self::OptionList | Self::TextList => {
                let parsed: Value = serde_json::from_str(raw)
                    .map_err(|e| format!("expected a JSON array: {e}"))?;
                if self.matches(&parsed) {
                    Ok(parsed)
                } else {
                    Err(format!("'{raw}' does not have the expected shape"))
                }
            }
        }
    }
}
