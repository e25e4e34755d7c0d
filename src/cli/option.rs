//! Option list commands for `select` and `radio` settings.

use crate::cli::common::{CliContext, CliResult};
use crate::cli::setting::reject_whitespace;
use crate::services::{self, OptionField};
use clap::{Args, Subcommand};

/// Edit the options of a select or radio setting
#[derive(Debug, Clone, Args)]
pub struct OptionArgs {
    /// Option subcommand
    #[command(subcommand)]
    pub command: OptionCommand,
}

/// Option list subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum OptionCommand {
    /// Append a blank option
    Add(AddOptionArgs),
    /// Remove an option
    Remove(RemoveOptionArgs),
    /// Set the value or label of an option
    Edit(EditOptionArgs),
}

/// Append a blank option
#[derive(Debug, Clone, Args)]
pub struct AddOptionArgs {
    /// Index of the setting
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

/// Remove an option
#[derive(Debug, Clone, Args)]
pub struct RemoveOptionArgs {
    /// Index of the setting
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Index of the option within the setting
    #[arg(value_name = "OPTION")]
    pub option: usize,
}

/// Set the value or label of an option
#[derive(Debug, Clone, Args)]
pub struct EditOptionArgs {
    /// Index of the setting
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Index of the option within the setting
    #[arg(value_name = "OPTION")]
    pub option: usize,

    /// Which part of the option to set (value or label)
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// New text
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,
}

impl OptionArgs {
    /// Execute option subcommand
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        match &self.command {
            OptionCommand::Add(args) => args.execute(ctx),
            OptionCommand::Remove(args) => args.execute(ctx),
            OptionCommand::Edit(args) => args.execute(ctx),
        }
    }
}

impl AddOptionArgs {
    /// Execute the option add command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        let count = ctx.mutate(|session| {
            let setting = session.update_options(self.index, services::add_option)?;
            Ok(setting.options().map_or(0, Vec::len))
        })?;

        println!(
            "Option added to setting {} at index {}.",
            self.index,
            count.saturating_sub(1)
        );
        Ok(())
    }
}

impl RemoveOptionArgs {
    /// Execute the option remove command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        ctx.mutate(|session| {
            session.update_options(self.index, |setting| {
                services::remove_option(setting, self.option)
            })?;
            Ok(())
        })?;

        println!("Option {} removed from setting {}.", self.option, self.index);
        Ok(())
    }
}

impl EditOptionArgs {
    /// Execute the option edit command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        let field: OptionField = self.field.parse()?;
        if field == OptionField::Value {
            reject_whitespace("Option value", &self.text)?;
        }

        ctx.mutate(|session| {
            session.update_options(self.index, |setting| {
                services::edit_option(setting, self.option, field, self.text.as_str())
            })?;
            Ok(())
        })?;

        println!(
            "Option {} of setting {} updated: {} = {}",
            self.option, self.index, field, self.text
        );
        Ok(())
    }
}
