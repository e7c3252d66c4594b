use std::path::PathBuf;

use crate::pattern::{CompileError, MatchError};

/// greplite error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pattern failed to compile
    #[error("invalid pattern: {0}")]
    Compile(#[from] CompileError),

    /// Pattern failed while matching a line
    #[error("match error: {0}")]
    Match(#[from] MatchError),

    /// Walker error.
    #[error("walk error: {message}")]
    Walk { message: String },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type using greplite Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes, grep style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// At least one line matched
    Matched = 0,
    /// No line matched
    NoMatch = 1,
    /// Usage, configuration, I/O, or pattern error
    Error = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. }
            | Error::Argument(_)
            | Error::Io { .. }
            | Error::Compile(_)
            | Error::Walk { .. } => ExitCode::Error,
            Error::Match(MatchError::CursorOutOfRange { .. }) => ExitCode::InternalError,
            Error::Match(_) => ExitCode::Error,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
