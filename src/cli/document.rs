//! Document-level commands: load, show, preview, rename and export.

use crate::cli::common::{CliContext, CliError, CliResult};
use crate::services::export::{self, SystemClipboard};
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Load a section template and parse its schema block
#[derive(Debug, Clone, Args)]
pub struct LoadArgs {
    /// Template file to load, or `-` to read stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// List the settings of the current schema
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Print the schema JSON as it will be written into the template
#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {}

/// Rename the section
#[derive(Debug, Clone, Args)]
pub struct RenameArgs {
    /// New section name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Write the template with the edited schema block
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Copy to the system clipboard
    #[arg(long)]
    pub clipboard: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct SettingItem {
    index: usize,
    #[serde(rename = "type")]
    setting_type: String,
    id: String,
    label: String,
    collapsed: bool,
}

#[derive(Debug, Serialize)]
struct ShowResponse {
    name: String,
    settings: Vec<SettingItem>,
    count: usize,
}

impl LoadArgs {
    /// Execute the load command
    ///
    /// The text is stored even when parsing fails so it can be corrected;
    /// the previously parsed schema is kept in that case.
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        let text = read_input(&self.file)?;

        let mut session = ctx.load()?;
        let outcome = session.load_document(text);
        ctx.save(&session)?;

        outcome?;
        println!(
            "Loaded '{}' with {} settings.",
            session.schema.display_name(),
            session.schema.settings.len()
        );
        Ok(())
    }
}

fn read_input(path: &Path) -> CliResult<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CliError::io(format!("Failed to read stdin: {e}")))?;
        return Ok(text);
    }

    std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        let session = ctx.load()?;

        let settings: Vec<SettingItem> = session
            .schema
            .settings
            .iter()
            .enumerate()
            .map(|(index, setting)| SettingItem {
                index,
                setting_type: setting.type_tag().unwrap_or("?").to_string(),
                id: setting.id().to_string(),
                label: setting.label().to_string(),
                collapsed: session.is_collapsed(index),
            })
            .collect();

        let response = ShowResponse {
            name: session.schema.display_name().to_string(),
            count: settings.len(),
            settings,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("{}: no settings defined.", response.name);
        } else {
            println!("{} ({} settings):", response.name, response.count);
            println!();
            for item in response.settings {
                let marker = if item.collapsed { " [collapsed]" } else { "" };
                println!(
                    "  {:>3}  {:<16} {:<24} {}{}",
                    item.index, item.setting_type, item.id, item.label, marker
                );
            }
        }

        Ok(())
    }
}

impl PreviewArgs {
    /// Execute the preview command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        let session = ctx.load()?;
        println!("{}", session.preview(ctx.serialize_options()));
        Ok(())
    }
}

impl RenameArgs {
    /// Execute the rename command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        ctx.mutate(|session| {
            session.rename(self.name.clone());
            Ok(())
        })?;

        println!("Section renamed to '{}'.", self.name);
        Ok(())
    }
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, ctx: &mut CliContext) -> CliResult<()> {
        let session = ctx.load()?;
        let options = ctx.serialize_options();

        let text = export::render(&session, options)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        if let Some(path) = &self.output {
            export::write_to_file(&session, options, path)
                .map_err(|e| CliError::io(format!("{e:#}")))?;
            eprintln!("Updated template written to {}", path.display());
        }

        if self.clipboard {
            export::copy_to_clipboard(&session, options, &mut SystemClipboard)
                .map_err(|e| CliError::io(format!("{e:#}")))?;
            eprintln!("Updated template copied to clipboard!");
        }

        if self.output.is_none() && !self.clipboard {
            print!("{text}");
        }

        Ok(())
    }
}
