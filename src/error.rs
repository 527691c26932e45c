// ABOUTME: Application-wide error types for tabkit.
// ABOUTME: Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("login failed: tabcmd exited non-zero")]
    LoginFailed,

    #[error("logout failed: tabcmd exited non-zero")]
    LogoutFailed,

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Runner(#[from] crate::runner::RunnerError),
}

pub type Result<T> = std::result::Result<T, Error>;
