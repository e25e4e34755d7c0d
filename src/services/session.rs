//! Editing session state.
//!
//! An [`EditorSession`] owns everything one editing session mutates: the raw
//! template text, the parsed schema model, and the per-setting collapse flags
//! of the front end. Each operation either succeeds and replaces the affected
//! state, or fails and leaves the session as it was.

use crate::error::{SchemaError, SchemaResult};
use crate::models::{Field, SchemaModel, Setting, SettingType};
use crate::parser::{self, SerializeOptions};
use crate::services::{edit, normalize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Collapse flags keyed by setting index.
pub type CollapseMap = BTreeMap<usize, bool>;

/// State of one editing session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorSession {
    /// Template text as last loaded by the user
    pub document: String,
    /// Schema being edited
    pub schema: SchemaModel,
    /// Which settings are collapsed in the front end
    pub collapsed: CollapseMap,
}

impl EditorSession {
    /// Creates a session from its three persisted parts.
    #[must_use]
    pub const fn new(document: String, schema: SchemaModel, collapsed: CollapseMap) -> Self {
        Self {
            document,
            schema,
            collapsed,
        }
    }

    /// Replaces the document and re-parses its schema block.
    ///
    /// The new text is always kept so the user can fix it. The schema is
    /// only replaced when extraction succeeds; on failure the previous
    /// model and collapse flags stay in place.
    ///
    /// # Errors
    ///
    /// Propagates [`SchemaError::NoBlockFound`] and
    /// [`SchemaError::MalformedPayload`] from extraction.
    pub fn load_document(&mut self, document: impl Into<String>) -> SchemaResult<()> {
        self.document = document.into();
        let schema = parser::extract(&self.document)?;

        self.schema = schema;
        self.collapsed.clear();
        Ok(())
    }

    /// Setting at `index`.
    ///
    /// # Errors
    ///
    /// [`SchemaError::IndexOutOfRange`] if there is no such setting.
    pub fn setting(&self, index: usize) -> SchemaResult<&Setting> {
        self.schema
            .settings
            .get(index)
            .ok_or(SchemaError::out_of_range(index, self.schema.settings.len()))
    }

    fn replace_setting(&mut self, index: usize, setting: Setting) {
        if let Some(slot) = self.schema.settings.get_mut(index) {
            *slot = setting;
        }
    }

    /// Appends a blank `text` setting and returns its index.
    pub fn add_setting(&mut self) -> usize {
        self.schema.settings.push(Setting::new_text());
        self.schema.settings.len() - 1
    }

    /// Removes the setting at `index`; later collapse flags shift down.
    ///
    /// # Errors
    ///
    /// [`SchemaError::IndexOutOfRange`] if there is no such setting.
    pub fn remove_setting(&mut self, index: usize) -> SchemaResult<Setting> {
        let removed = self.setting(index)?.clone();
        self.schema.settings = edit::remove_at(&self.schema.settings, index)?;

        let flags = self.collapse_flags(self.schema.settings.len() + 1);
        self.set_collapse_flags(edit::remove_at(&flags, index)?);
        Ok(removed)
    }

    /// Moves a setting; its collapse flag moves with it.
    ///
    /// # Errors
    ///
    /// [`SchemaError::IndexOutOfRange`] if either index is invalid.
    pub fn move_setting(&mut self, from: usize, to: usize) -> SchemaResult<()> {
        let settings = edit::reorder(&self.schema.settings, from, to)?;
        let flags = edit::reorder(&self.collapse_flags(settings.len()), from, to)?;

        self.schema.settings = settings;
        self.set_collapse_flags(flags);
        Ok(())
    }

    /// Changes the type of the setting at `index`.
    ///
    /// A generated id avoids the ids of the other settings.
    ///
    /// # Errors
    ///
    /// [`SchemaError::IndexOutOfRange`] if there is no such setting.
    pub fn change_type(&mut self, index: usize, new_type: SettingType) -> SchemaResult<&Setting> {
        let current = self.setting(index)?;
        let taken: Vec<&str> = self
            .schema
            .settings
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, s)| s.id())
            .filter(|id| !id.is_empty())
            .collect();

        let changed = normalize::change_type_among(current, new_type, &taken);
        self.replace_setting(index, changed);
        self.setting(index)
    }

    /// Sets one field of the setting at `index`.
    ///
    /// # Errors
    ///
    /// [`SchemaError::IndexOutOfRange`] or [`SchemaError::FieldNotPermitted`].
    pub fn edit_field(&mut self, index: usize, field: Field, value: Value) -> SchemaResult<&Setting> {
        let updated = edit::edit_field(self.setting(index)?, field, value)?;
        self.replace_setting(index, updated);
        self.setting(index)
    }

    /// Applies an option list edit to the setting at `index`.
    ///
    /// # Errors
    ///
    /// [`SchemaError::IndexOutOfRange`] for the setting index, then whatever
    /// `op` returns.
    pub fn update_options(
        &mut self,
        index: usize,
        op: impl FnOnce(&Setting) -> SchemaResult<Setting>,
    ) -> SchemaResult<&Setting> {
        let updated = op(self.setting(index)?)?;
        self.replace_setting(index, updated);
        self.setting(index)
    }

    /// Renames the section.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.schema.name = Some(name.into());
    }

    /// Toggles the collapse flag of one setting and returns the new state.
    ///
    /// # Errors
    ///
    /// [`SchemaError::IndexOutOfRange`] if there is no such setting.
    pub fn toggle_collapse(&mut self, index: usize) -> SchemaResult<bool> {
        self.setting(index)?;
        let flag = self.collapsed.entry(index).or_insert(false);
        *flag = !*flag;
        Ok(*flag)
    }

    /// Sets every setting's collapse flag.
    pub fn collapse_all(&mut self, collapsed: bool) {
        self.collapsed = (0..self.schema.settings.len())
            .map(|index| (index, collapsed))
            .collect();
    }

    /// Whether the setting at `index` is collapsed.
    #[must_use]
    pub fn is_collapsed(&self, index: usize) -> bool {
        self.collapsed.get(&index).copied().unwrap_or(false)
    }

    fn collapse_flags(&self, len: usize) -> Vec<bool> {
        (0..len).map(|index| self.is_collapsed(index)).collect()
    }

    fn set_collapse_flags(&mut self, flags: Vec<bool>) {
        self.collapsed = flags
            .into_iter()
            .enumerate()
            .filter(|(_, collapsed)| *collapsed)
            .collect();
    }

    /// Document text with the edited schema written back.
    ///
    /// # Errors
    ///
    /// [`SchemaError::NoBlockFound`] if the current document has no block.
    pub fn export(&self, options: SerializeOptions) -> SchemaResult<String> {
        parser::serialize_with(&self.schema, &self.document, options)
    }

    /// Payload JSON alone, as shown in a live preview.
    #[must_use]
    pub fn preview(&self, options: SerializeOptions) -> String {
        parser::render_payload(&self.schema, options)
    }
}
