//! Parsing the schema block payload into a [`SchemaModel`].

use crate::error::{SchemaError, SchemaResult};
use crate::models::SchemaModel;
use crate::parser::block::find_block;

/// Extracts the schema model embedded in `document`.
///
/// Settings are not validated against their types here; a setting with an
/// unknown type or stray fields is kept as-is and only rejected when edited.
///
/// # Errors
///
/// - [`SchemaError::NoBlockFound`] if the document has no schema block
/// - [`SchemaError::MalformedPayload`] if the payload is not a JSON object
///   with an array of setting objects
pub fn extract(document: &str) -> SchemaResult<SchemaModel> {
    let span = find_block(document)?;
    let payload = span.payload(document);

    let model = parse_payload(payload)?;

    tracing::debug!(
        block_start = span.block.start,
        block_end = span.block.end,
        settings = model.settings.len(),
        "extracted schema block"
    );

    Ok(model)
}

/// Parses a bare JSON payload (no markers).
///
/// # Errors
///
/// Returns [`SchemaError::MalformedPayload`] with the payload text preserved.
pub fn parse_payload(payload: &str) -> SchemaResult<SchemaModel> {
    serde_json::from_str(payload).map_err(|e| SchemaError::MalformedPayload {
        payload: payload.to_string(),
        reason: e.to_string(),
    })
}
