//! Type registry: the permitted field set of every setting type.
//!
//! The table is the single source of truth for which fields a setting may
//! carry. Normalization and field checks are written generically over it, so
//! supporting a new type means adding a variant and one table row.

use crate::error::SchemaError;
use crate::models::field::{Field, ValueKind};
use std::fmt;
use std::str::FromStr;

/// Setting type tags understood by the editor.
///
/// Discriminants index [`REGISTRY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingType {
    /// Blog picker
    Blog = 0,
    /// Boolean toggle
    Checkbox = 1,
    /// Collection picker
    Collection = 2,
    /// Multiple collection picker
    CollectionList = 3,
    /// Color picker
    Color = 4,
    /// Font picker
    FontPicker = 5,
    /// Sidebar heading (content only)
    Header = 6,
    /// Image picker
    ImagePicker = 7,
    /// Navigation menu picker
    LinkList = 8,
    /// Numeric input
    Number = 9,
    /// Page picker
    Page = 10,
    /// Sidebar text block (content only)
    Paragraph = 11,
    /// Product picker
    Product = 12,
    /// Multiple product picker
    ProductList = 13,
    /// Radio buttons
    Radio = 14,
    /// Slider with bounds and unit
    Range = 15,
    /// Rich text editor
    Richtext = 16,
    /// Dropdown
    Select = 17,
    /// Single-line text
    Text = 18,
    /// Multi-line text
    Textarea = 19,
    /// URL input
    Url = 20,
    /// Video URL input
    VideoUrl = 21,
}

/// Registry row for one setting type.
#[derive(Debug)]
pub struct TypeSpec {
    /// The type this row describes
    pub setting_type: SettingType,
    /// JSON tag used in the schema payload
    pub tag: &'static str,
    /// Permitted fields in canonical output order
    pub fields: &'static [Field],
    /// Kind of the `default` value, if the type has one
    pub default_kind: Option<ValueKind>,
}

const CONTENT_ONLY: &[Field] = &[Field::Content];
const RESOURCE: &[Field] = &[Field::Id, Field::Label, Field::Info];
const WITH_DEFAULT: &[Field] = &[Field::Id, Field::Label, Field::Info, Field::Default];
const FREE_TEXT: &[Field] = &[
    Field::Id,
    Field::Label,
    Field::Info,
    Field::Placeholder,
    Field::Default,
];
const CHOICE: &[Field] = &[
    Field::Id,
    Field::Label,
    Field::Info,
    Field::Options,
    Field::Default,
];
const RANGE: &[Field] = &[
    Field::Id,
    Field::Label,
    Field::Min,
    Field::Max,
    Field::Step,
    Field::Unit,
    Field::Info,
    Field::Default,
];
const VIDEO: &[Field] = &[
    Field::Id,
    Field::Label,
    Field::Accept,
    Field::Placeholder,
    Field::Info,
    Field::Default,
];

macro_rules! row {
    ($ty:ident, $tag:literal, $fields:expr, $kind:expr) => {
        TypeSpec {
            setting_type: SettingType::$ty,
            tag: $tag,
            fields: $fields,
            default_kind: $kind,
        }
    };
}

/// The registry table, ordered by [`SettingType`] discriminant.
pub static REGISTRY: [TypeSpec; 22] = [
    row!(Blog, "blog", RESOURCE, None),
    row!(Checkbox, "checkbox", WITH_DEFAULT, Some(ValueKind::Bool)),
    row!(Collection, "collection", RESOURCE, None),
    row!(CollectionList, "collection_list", RESOURCE, None),
    row!(Color, "color", WITH_DEFAULT, Some(ValueKind::Text)),
    row!(FontPicker, "font_picker", WITH_DEFAULT, Some(ValueKind::Text)),
    row!(Header, "header", CONTENT_ONLY, None),
    row!(ImagePicker, "image_picker", RESOURCE, None),
    row!(LinkList, "link_list", RESOURCE, None),
    row!(Number, "number", FREE_TEXT, Some(ValueKind::Text)),
    row!(Page, "page", RESOURCE, None),
    row!(Paragraph, "paragraph", CONTENT_ONLY, None),
    row!(Product, "product", RESOURCE, None),
    row!(ProductList, "product_list", RESOURCE, None),
    row!(Radio, "radio", CHOICE, Some(ValueKind::Text)),
    row!(Range, "range", RANGE, Some(ValueKind::Number)),
    row!(Richtext, "richtext", WITH_DEFAULT, Some(ValueKind::Text)),
    row!(Select, "select", CHOICE, Some(ValueKind::Text)),
    row!(Text, "text", FREE_TEXT, Some(ValueKind::Text)),
    row!(Textarea, "textarea", FREE_TEXT, Some(ValueKind::Text)),
    row!(Url, "url", RESOURCE, None),
    row!(VideoUrl, "video_url", VIDEO, Some(ValueKind::Text)),
];

impl SettingType {
    /// All types, sorted by tag.
    pub fn all() -> impl Iterator<Item = Self> {
        REGISTRY.iter().map(|spec| spec.setting_type)
    }

    /// Registry row of this type.
    #[must_use]
    pub fn spec(self) -> &'static TypeSpec {
        &REGISTRY[self as usize]
    }

    /// JSON tag, e.g. `"collection_list"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.spec().tag
    }

    /// Permitted fields in canonical order.
    #[must_use]
    pub fn fields(self) -> &'static [Field] {
        self.spec().fields
    }

    /// Whether `field` may appear on settings of this type.
    #[must_use]
    pub fn permits(self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    /// Kind of the `default` value, `None` when the type has no default.
    #[must_use]
    pub fn default_kind(self) -> Option<ValueKind> {
        self.spec().default_kind
    }

    /// Kind a value of `field` must have on this type.
    #[must_use]
    pub fn kind_of(self, field: Field) -> Option<ValueKind> {
        match field {
            Field::Default => self.default_kind(),
            other => other.kind(),
        }
    }

    /// Whether settings of this type carry a choice list.
    #[must_use]
    pub fn has_options(self) -> bool {
        self.permits(Field::Options)
    }

    /// Human-readable label, e.g. `"Collection List Setting"`.
    #[must_use]
    pub fn default_label(self) -> String {
        let words: Vec<String> = self
            .as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            })
            .collect();
        format!("{} Setting", words.join(" "))
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .find(|spec| spec.tag == s)
            .map(|spec| spec.setting_type)
            .ok_or_else(|| SchemaError::UnknownType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_rows_match_discriminants() {
        for (idx, spec) in REGISTRY.iter().enumerate() {
            assert_eq!(spec.setting_type as usize, idx, "row {} out of place", spec.tag);
        }
    }

    #[test]
    fn test_registry_is_sorted_and_unique() {
        let tags: Vec<&str> = REGISTRY.iter().map(|spec| spec.tag).collect();
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(tags, sorted);
        assert_eq!(tags.len(), 22);
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!("range".parse::<SettingType>().unwrap(), SettingType::Range);
        assert_eq!(
            "video_url".parse::<SettingType>().unwrap(),
            SettingType::VideoUrl
        );
        assert!(matches!(
            "slider".parse::<SettingType>(),
            Err(SchemaError::UnknownType(_))
        ));
    }

    #[test]
    fn test_content_only_types() {
        assert_eq!(SettingType::Header.fields(), &[Field::Content]);
        assert_eq!(SettingType::Paragraph.fields(), &[Field::Content]);
        assert!(!SettingType::Header.permits(Field::Id));
    }

    #[test]
    fn test_default_kinds() {
        assert_eq!(SettingType::Checkbox.default_kind(), Some(ValueKind::Bool));
        assert_eq!(SettingType::Range.default_kind(), Some(ValueKind::Number));
        assert_eq!(SettingType::Text.default_kind(), Some(ValueKind::Text));
        assert_eq!(SettingType::Product.default_kind(), None);
        // Every type declaring a default kind must permit the field, and vice versa
        for ty in SettingType::all() {
            assert_eq!(ty.default_kind().is_some(), ty.permits(Field::Default), "{ty}");
        }
    }

    #[test]
    fn test_default_label() {
        assert_eq!(SettingType::Color.default_label(), "Color Setting");
        assert_eq!(
            SettingType::CollectionList.default_label(),
            "Collection List Setting"
        );
    }
}
