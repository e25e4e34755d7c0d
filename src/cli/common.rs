//! Shared plumbing for CLI commands: errors, exit codes and session access.

use crate::config::Config;
use crate::error::SchemaError;
use crate::parser::SerializeOptions;
use crate::services::{load_session, save_session, EditorSession, FileStore};
use std::fmt;
use std::path::PathBuf;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input or a rejected edit
    Validation = 1,
    /// File system, store or clipboard failure
    Io = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Io,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<SchemaError> for CliError {
    fn from(err: SchemaError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Configuration and session store shared by all commands of one invocation.
#[derive(Debug)]
pub struct CliContext {
    /// Loaded configuration
    pub config: Config,
    /// Session store
    pub store: FileStore,
}

impl CliContext {
    /// Loads configuration and opens the store, `store_override` taking precedence.
    pub fn open(store_override: Option<PathBuf>) -> CliResult<Self> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let store_dir = match store_override {
            Some(dir) => dir,
            None => config
                .store_dir()
                .map_err(|e| CliError::io(format!("Failed to locate session store: {e:#}")))?,
        };

        Ok(Self {
            config,
            store: FileStore::new(store_dir),
        })
    }

    /// Serialization options from configuration.
    #[must_use]
    pub const fn serialize_options(&self) -> SerializeOptions {
        self.config.output.serialize_options()
    }

    /// Loads the current session snapshot.
    pub fn load(&mut self) -> CliResult<EditorSession> {
        load_session(&mut self.store)
            .map_err(|e| CliError::io(format!("Failed to load session: {e:#}")))
    }

    /// Saves a session snapshot.
    pub fn save(&mut self, session: &EditorSession) -> CliResult<()> {
        save_session(&mut self.store, session)
            .map_err(|e| CliError::io(format!("Failed to save session: {e:#}")))
    }

    /// Loads the session, applies `op`, and saves only if `op` succeeds.
    pub fn mutate<T>(
        &mut self,
        op: impl FnOnce(&mut EditorSession) -> CliResult<T>,
    ) -> CliResult<T> {
        let mut session = self.load()?;
        let result = op(&mut session)?;
        self.save(&session)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_errors_are_validation_errors() {
        let err: CliError = SchemaError::NoBlockFound.into();
        assert_eq!(err.exit_code, ExitCode::Validation);
        assert_eq!(err.exit_code.code(), 1);
        assert!(err.to_string().contains("schema"));
    }

    #[test]
    fn test_io_exit_code() {
        assert_eq!(CliError::io("disk full").exit_code.code(), 2);
    }
}
