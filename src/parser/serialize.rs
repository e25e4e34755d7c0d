//! Writing a [`SchemaModel`] back into its template.

use crate::constants::{SCHEMA_END_TAG, SCHEMA_START_TAG};
use crate::error::SchemaResult;
use crate::models::SchemaModel;
use crate::parser::block::find_block;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Default JSON indent width.
pub const DEFAULT_INDENT: usize = 2;

/// Formatting choices for the emitted payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Spaces per nesting level
    pub indent: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

/// Re-embeds `model` into `document` with default formatting.
///
/// See [`serialize_with`].
pub fn serialize(model: &SchemaModel, document: &str) -> SchemaResult<String> {
    serialize_with(model, document, SerializeOptions::default())
}

/// Re-embeds `model` into `document`, replacing only the first schema block.
///
/// The markers are reused exactly as written in `document`, the payload is
/// placed on its own lines between them, and every byte outside the block is
/// copied through unchanged.
///
/// # Errors
///
/// Returns [`SchemaError::NoBlockFound`](crate::error::SchemaError::NoBlockFound)
/// when `document` has no block to replace.
pub fn serialize_with(
    model: &SchemaModel,
    document: &str,
    options: SerializeOptions,
) -> SchemaResult<String> {
    let span = find_block(document)?;
    let payload = render_payload(model, options);

    let mut out = String::with_capacity(document.len() + payload.len());
    out.push_str(span.prefix(document));
    out.push_str(&span.start_tag);
    out.push('\n');
    out.push_str(&payload);
    out.push('\n');
    out.push_str(&span.end_tag);
    out.push_str(span.suffix(document));

    tracing::debug!(
        block_start = span.block.start,
        replaced_bytes = span.block.len(),
        settings = model.settings.len(),
        "serialized schema block"
    );

    Ok(out)
}

/// Renders the payload JSON alone.
#[must_use]
pub fn render_payload(model: &SchemaModel, options: SerializeOptions) -> String {
    to_pretty_json(&model.to_payload(), options.indent)
}

/// Renders a standalone block with canonical markers.
#[must_use]
pub fn render_block(model: &SchemaModel, options: SerializeOptions) -> String {
    format!(
        "{SCHEMA_START_TAG}\n{}\n{SCHEMA_END_TAG}",
        render_payload(model, options)
    )
}

fn to_pretty_json(value: &Value, indent: usize) -> String {
    let indent = vec![b' '; indent];
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));

    // Serializing a Value into memory cannot fail; keep the compact form as a fallback
    let json = if value.serialize(&mut serializer).is_err() {
        value.to_string()
    } else {
        String::from_utf8(out).unwrap_or_else(|_| value.to_string())
    };
    escape_liquid_tags(&json)
}

/// Hides Liquid tag delimiters inside JSON strings.
///
/// JSON punctuation never forms `{%` or `%}`, so every occurrence sits in a
/// string and `\u0025` decodes back to the same `%`.
fn escape_liquid_tags(json: &str) -> String {
    json.replace("{%", "{\\u0025").replace("%}", "\\u0025}")
}
