//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, MAX_INDENT};
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Spaces per JSON nesting level in exported schema blocks
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Session store directory
    #[arg(long, value_name = "DIR")]
    store_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    output: OutputOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    store_dir: String,
}

#[derive(Serialize, Debug)]
struct OutputOutput {
    indent: usize,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let store_dir = config
            .store_dir()
            .map_err(|e| CliError::io(format!("Failed to locate session store: {e:#}")))?;

        if self.json {
            output_json(&config, &store_dir)?;
        } else {
            output_human_readable(&config, &store_dir);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.indent.is_none() && self.store_dir.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --indent or --store-dir",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(indent) = self.indent {
            if indent > MAX_INDENT {
                return Err(CliError::validation(format!(
                    "Indent width {indent} is too large (maximum is {MAX_INDENT})"
                )));
            }
            config.output.indent = indent;
        }

        if let Some(path) = &self.store_dir {
            if path.is_file() {
                return Err(CliError::validation(format!(
                    "Session store path is a file: {}",
                    path.display()
                )));
            }
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create store directory {}: {e}",
                    path.display()
                ))
            })?;
            config.paths.store_dir = Some(path.clone());
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config, store_dir: &std::path::Path) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            store_dir: store_dir.to_string_lossy().to_string(),
        },
        output: OutputOutput {
            indent: config.output.indent,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, store_dir: &std::path::Path) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    println!("Paths:");
    let marker = if config.paths.store_dir.is_some() {
        ""
    } else {
        " (default)"
    };
    println!("  Session Store: {}{marker}", store_dir.display());
    println!();

    println!("Output:");
    println!("  Indent: {}", config.output.indent);
    println!();
}
