// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// aimsvim error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Mandatory definition source does not exist
    #[error("source not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// Definition source is malformed or an entry has the wrong shape
    #[error("definition error: {}: {message}", .path.display())]
    Definition { path: PathBuf, message: String },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using aimsvim Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every artifact was written or skipped
    Success = 0,
    /// One or more artifacts failed to generate
    GenerateFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Unexpected error outside the aimsvim error kinds
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::SourceNotFound { .. } | Error::Definition { .. } | Error::Argument(_) => {
                ExitCode::ConfigError
            }
            Error::Io { .. } => ExitCode::GenerateFailed,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
