//! Per-setting commands: add, remove, move, type change, field edit, collapse.

use crate::cli::common::{CliContext, CliError, CliResult};
use crate::models::{Field, SettingType, ValueKind};
use clap::Args;

/// Append a blank text setting
#[derive(Debug, Clone, Args)]
pub struct AddArgs {}

/// Remove a setting
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// Index of the setting (see `show`)
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

/// Move a setting to another position
#[derive(Debug, Clone, Args)]
pub struct MoveArgs {
    /// Current index
    #[arg(value_name = "FROM")]
    pub from: usize,

    /// Index the setting should end up at
    #[arg(value_name = "TO")]
    pub to: usize,
}

/// Change the type of a setting, normalizing its fields
#[derive(Debug, Clone, Args)]
pub struct SetTypeArgs {
    /// Index of the setting
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// New type (see `types`)
    #[arg(value_name = "TYPE")]
    pub setting_type: String,
}

/// Set one field of a setting
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Index of the setting
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Field name (id, label, info, default, ...)
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// New value; parsed as boolean, number or JSON array when the field requires it
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

/// Toggle whether a setting is collapsed
#[derive(Debug, Clone, Args)]
pub struct CollapseArgs {
    /// Index of the setting
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

/// Collapse (or expand) every setting
#[derive(Debug, Clone, Args)]
pub struct CollapseAllArgs {
    /// Expand instead of collapsing
    #[arg(long)]
    pub expand: bool,
}

impl AddArgs {
    /// Execute the add command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        let index = ctx.mutate(|session| Ok(session.add_setting()))?;
        println!("Setting added at index {index}.");
        Ok(())
    }
}

impl RemoveArgs {
    /// Execute the remove command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        let removed = ctx.mutate(|session| Ok(session.remove_setting(self.index)?))?;
        println!("Setting '{}' removed.", removed.id());
        Ok(())
    }
}

impl MoveArgs {
    /// Execute the move command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        ctx.mutate(|session| Ok(session.move_setting(self.from, self.to)?))?;
        println!("Setting moved from {} to {}.", self.from, self.to);
        Ok(())
    }
}

impl SetTypeArgs {
    /// Execute the set-type command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        let new_type: SettingType = self.setting_type.parse()?;

        let keys = ctx.mutate(|session| {
            let setting = session.change_type(self.index, new_type)?;
            Ok(setting.keys().map(str::to_string).collect::<Vec<_>>())
        })?;

        println!(
            "Setting {} is now '{}' ({}).",
            self.index,
            new_type,
            keys.join(", ")
        );
        Ok(())
    }
}

impl SetArgs {
    /// Execute the set command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        let field: Field = self.field.parse()?;
        if field == Field::Id {
            reject_whitespace("Setting id", &self.value)?;
        }

        ctx.mutate(|session| {
            let kind = session
                .setting(self.index)?
                .setting_type()
                .and_then(|ty| ty.kind_of(field))
                .unwrap_or(ValueKind::Text);
            let value = kind.coerce(&self.value).map_err(|reason| {
                CliError::validation(format!("Invalid value for '{field}': {reason}"))
            })?;

            session.edit_field(self.index, field, value)?;
            Ok(())
        })?;

        println!("Setting {} updated: {} = {}", self.index, field, self.value);
        Ok(())
    }
}

impl CollapseArgs {
    /// Execute the collapse command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        let collapsed = ctx.mutate(|session| Ok(session.toggle_collapse(self.index)?))?;
        let state = if collapsed { "collapsed" } else { "expanded" };
        println!("Setting {} {state}.", self.index);
        Ok(())
    }
}

impl CollapseAllArgs {
    /// Execute the collapse-all command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        let collapsed = !self.expand;
        ctx.mutate(|session| {
            session.collapse_all(collapsed);
            Ok(())
        })?;

        if collapsed {
            println!("All settings collapsed.");
        } else {
            println!("All settings expanded.");
        }
        Ok(())
    }
}

/// Ids and option values are identifiers in Liquid and may not contain spaces.
pub(crate) fn reject_whitespace(what: &str, value: &str) -> CliResult<()> {
    if value.chars().any(char::is_whitespace) {
        return Err(CliError::validation(format!(
            "{what} must not contain whitespace: '{value}'"
        )));
    }
    Ok(())
}
