//! Section Schema Editor - edit the settings schema of Shopify section templates
//!
//! Load a template once, edit its settings with one command per change, and
//! export the template with the rewritten `{% schema %}` block.
//!
//! # Usage
//!
//! ```bash
//! schema-editor load sections/hero.liquid
//! schema-editor add
//! schema-editor set-type 0 select
//! schema-editor option add 0
//! schema-editor export --output sections/hero.liquid
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use schema_editor::cli::{
    AddArgs, CliContext, CliResult, CollapseAllArgs, CollapseArgs, ConfigArgs, ExitCode,
    ExportArgs, LoadArgs, MoveArgs, OptionArgs, PreviewArgs, RemoveArgs, RenameArgs, SetArgs,
    SetTypeArgs, ShowArgs, TypesArgs,
};

/// Section Schema Editor - edit `{% schema %}` blocks of section templates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Session store directory (overrides configuration)
    #[arg(long, global = true, value_name = "DIR")]
    store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a section template and parse its schema block
    Load(LoadArgs),
    /// List the settings of the current schema
    Show(ShowArgs),
    /// Print the schema JSON as it will be exported
    Preview(PreviewArgs),
    /// List setting types and their fields
    Types(TypesArgs),
    /// Append a blank text setting
    Add(AddArgs),
    /// Remove a setting
    Remove(RemoveArgs),
    /// Move a setting to another position
    Move(MoveArgs),
    /// Change the type of a setting
    SetType(SetTypeArgs),
    /// Set one field of a setting
    Set(SetArgs),
    /// Edit the options of a select or radio setting
    Option(OptionArgs),
    /// Toggle whether a setting is collapsed
    Collapse(CollapseArgs),
    /// Collapse or expand every setting
    CollapseAll(CollapseAllArgs),
    /// Rename the section
    Rename(RenameArgs),
    /// Write the template with the edited schema block
    Export(ExportArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn run(cli: Cli) -> CliResult<()> {
    let store = cli.store;
    let open = || CliContext::open(store.clone());

    match cli.command {
        Command::Types(args) => args.execute(),
        Command::Config(args) => args.execute(),
        Command::Load(args) => args.execute(&mut open()?),
        Command::Show(args) => args.execute(&mut open()?),
        Command::Preview(args) => args.execute(&mut open()?),
        Command::Add(args) => args.execute(&mut open()?),
        Command::Remove(args) => args.execute(&mut open()?),
        Command::Move(args) => args.execute(&mut open()?),
        Command::SetType(args) => args.execute(&mut open()?),
        Command::Set(args) => args.execute(&mut open()?),
        Command::Option(args) => args.execute(&mut open()?),
        Command::Collapse(args) => args.execute(&mut open()?),
        Command::CollapseAll(args) => args.execute(&mut open()?),
        Command::Rename(args) => args.execute(&mut open()?),
        Command::Export(args) => args.execute(&mut open()?),
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }

    std::process::exit(ExitCode::Success.code());
}
