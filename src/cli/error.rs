//! CLI-level errors (wraps tree, config and parse errors)

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::TreeError;
use crate::parser::ParseError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("config error: {0}")]
    Settings(#[from] SettingsError),

    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("cannot read {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Tree(_) | CliError::Parse { .. } => crate::exitcode::DATAERR,
            CliError::Settings(_) => crate::exitcode::CONFIG,
            CliError::Input { source, .. } => match source.kind() {
                ErrorKind::NotFound => crate::exitcode::NOINPUT,
                _ => crate::exitcode::IOERR,
            },
        }
    }
}
