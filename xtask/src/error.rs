//! Errors surfaced by xtask commands.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of an xtask command.
#[derive(Debug, Error)]
pub enum XtaskError {
    /// A config file is missing, malformed or inconsistent.
    #[error("{}: {message}", .path.display())]
    Config {
        /// File the problem was found in.
        path: PathBuf,
        /// What is wrong with it.
        message: String,
    },
    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),
    /// A verify step could not be launched or exited unsuccessfully.
    #[error("`{program}` {detail}")]
    Step {
        /// Program that was run.
        program: String,
        /// Launch failure or exit status.
        detail: String,
    },
    /// Filesystem access failed.
    #[error("{}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A report could not be serialized.
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across xtask.
pub type XtaskResult<T> = Result<T, XtaskError>;

impl XtaskError {
    pub(crate) fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
