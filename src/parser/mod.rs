//! Reading and writing the schema block of a section template.
//!
//! This module locates the `{% schema %}` block in free-form template text,
//! parses its JSON payload, and writes an edited model back in place.

pub mod block;
pub mod extract;
pub mod serialize;

// Re-export commonly used functions
pub use block::{find_block, has_block, BlockSpan};
pub use extract::{extract, parse_payload};
pub use serialize::{render_block, render_payload, serialize, serialize_with, SerializeOptions};
