//! Listing of the setting type registry.

use crate::cli::common::{CliError, CliResult};
use crate::models::{SettingType, REGISTRY};
use clap::Args;
use serde::Serialize;

/// List setting types and the fields each one permits
#[derive(Debug, Clone, Args)]
pub struct TypesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TypeItem {
    #[serde(rename = "type")]
    setting_type: &'static str,
    fields: Vec<&'static str>,
}

impl TypesArgs {
    /// Execute the types command
    pub fn execute(&self) -> CliResult<()> {
        let items: Vec<TypeItem> = REGISTRY
            .iter()
            .map(|spec| TypeItem {
                setting_type: spec.tag,
                fields: spec.fields.iter().map(|field| field.as_str()).collect(),
            })
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&items)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("Setting types ({}):", SettingType::all().count());
        println!();
        for item in items {
            println!("  {:<16} {}", item.setting_type, item.fields.join(", "));
        }
        Ok(())
    }
}
