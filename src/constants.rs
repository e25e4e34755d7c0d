//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the schema block markers.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Section Schema Editor";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "SchemaEditor";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "SCHEMA_EDITOR_CONFIG_DIR";

/// Canonical start marker of the embedded block.
pub const SCHEMA_START_TAG: &str = "{% schema %}";

/// Canonical end marker of the embedded block.
pub const SCHEMA_END_TAG: &str = "{% endschema %}";

/// Section name used when a schema has none.
pub const DEFAULT_SECTION_NAME: &str = "Custom Section";
