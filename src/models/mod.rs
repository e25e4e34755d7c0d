//! Data models for section schemas.
//!
//! This module contains the schema model, the setting record, and the type
//! registry that describes which fields each setting type may carry.

pub mod field;
pub mod registry;
pub mod schema;
pub mod setting;

// Re-export commonly used types
pub use field::{Field, ValueKind};
pub use registry::{SettingType, TypeSpec, REGISTRY};
pub use schema::SchemaModel;
pub use setting::{SelectOption, Setting};
