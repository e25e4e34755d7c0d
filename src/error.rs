//! Error kinds raised by the schema core.
//!
//! Every variant is recoverable by the caller. Operations that fail never
//! leave a half-applied change behind: the input value is returned to the
//! caller untouched.

use thiserror::Error;

/// Result alias for schema core operations.
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// Errors produced by extraction, serialization and editing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The document has no `{% schema %}` ... `{% endschema %}` pair.
    #[error("No {{% schema %}} block found in the document")]
    NoBlockFound,

    /// The block exists but its content is not a usable JSON schema object.
    ///
    /// The raw payload is kept so the user can correct it.
    #[error("Schema block is not valid JSON: {reason}")]
    MalformedPayload {
        /// Text found between the markers
        payload: String,
        /// Parser diagnostic
        reason: String,
    },

    /// The edited field is not part of the setting type's field set.
    #[error("Field '{field}' is not permitted for settings of type '{setting_type}'")]
    FieldNotPermitted {
        /// Field name that was rejected
        field: String,
        /// Type tag of the setting being edited
        setting_type: String,
    },

    /// A list index is outside `[0, len)`.
    #[error("Index {index} is out of range (list has {len} entries)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the list at the time of the request
        len: usize,
    },

    /// A type tag that the registry does not know.
    #[error("Unknown setting type '{0}'")]
    UnknownType(String),

    /// A field name that no setting type uses.
    #[error("Unknown setting field '{0}'")]
    UnknownField(String),
}

impl SchemaError {
    /// Builds an `IndexOutOfRange` error.
    #[must_use]
    pub const fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Builds a `FieldNotPermitted` error.
    pub fn not_permitted(field: impl Into<String>, setting_type: impl Into<String>) -> Self {
        Self::FieldNotPermitted {
            field: field.into(),
            setting_type: setting_type.into(),
        }
    }
}
