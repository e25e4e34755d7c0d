//! CLI command handlers for the section schema editor.
//!
//! Every command loads the persisted editing session, applies one operation,
//! and saves the result, so edits can be scripted one invocation at a time.

pub mod common;
pub mod config;
pub mod document;
pub mod option;
pub mod setting;
pub mod types;

// Re-export types used by main.rs and tests
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use document::{ExportArgs, LoadArgs, PreviewArgs, RenameArgs, ShowArgs};
pub use option::OptionArgs;
pub use setting::{
    AddArgs, CollapseAllArgs, CollapseArgs, MoveArgs, RemoveArgs, SetArgs, SetTypeArgs,
};
pub use types::TypesArgs;
