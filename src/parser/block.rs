//! Locating the embedded schema block inside a template.

use crate::error::{SchemaError, SchemaResult};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Matches the first `{% schema %}` ... `{% endschema %}` pair, non-greedily.
///
/// Whitespace inside the tags and Liquid's `-` whitespace control are accepted.
const BLOCK_PATTERN: &str =
    r"(?s)(\{%-?\s*schema\s*-?%\})(.*?)(\{%-?\s*endschema\s*-?%\})";

fn block_regex() -> &'static Regex {
    static BLOCK_RE: OnceLock<Regex> = OnceLock::new();
    BLOCK_RE.get_or_init(|| Regex::new(BLOCK_PATTERN).expect("schema block pattern is valid"))
}

/// Byte positions of a schema block within a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpan {
    /// Whole block, markers included
    pub block: Range<usize>,
    /// Text between the markers
    pub payload: Range<usize>,
    /// Start marker as written in the document
    pub start_tag: String,
    /// End marker as written in the document
    pub end_tag: String,
}

impl BlockSpan {
    /// Text between the markers.
    #[must_use]
    pub fn payload<'a>(&self, document: &'a str) -> &'a str {
        &document[self.payload.clone()]
    }

    /// Text before the block.
    #[must_use]
    pub fn prefix<'a>(&self, document: &'a str) -> &'a str {
        &document[..self.block.start]
    }

    /// Text after the block.
    #[must_use]
    pub fn suffix<'a>(&self, document: &'a str) -> &'a str {
        &document[self.block.end..]
    }
}

/// Finds the first schema block of `document`.
///
/// # Errors
///
/// Returns [`SchemaError::NoBlockFound`] when no start/end pair exists.
pub fn find_block(document: &str) -> SchemaResult<BlockSpan> {
    let caps = block_regex()
        .captures(document)
        .ok_or(SchemaError::NoBlockFound)?;

    // Groups 0-3 always participate in a match of BLOCK_PATTERN
    let (Some(whole), Some(start), Some(payload), Some(end)) =
        (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
    else {
        return Err(SchemaError::NoBlockFound);
    };

    Ok(BlockSpan {
        block: whole.range(),
        payload: payload.range(),
        start_tag: start.as_str().to_string(),
        end_tag: end.as_str().to_string(),
    })
}

/// Whether `document` contains a schema block.
#[must_use]
pub fn has_block(document: &str) -> bool {
    block_regex().is_match(document)
}
