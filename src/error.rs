//! Error types for sync-mvn-deps.
//!
//! Every variant is fatal: the run stops at the first error and earlier
//! projects keep whatever changes were already made.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Manifest could not be read or written.
    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output stream failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// External program could not be started.
    #[error("Failed to start '{program}' in '{}': {source}", .dir.display())]
    Spawn {
        program: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External program exited unsuccessfully.
    #[error("'{program}' failed in '{}' ({status}): {stderr}", .dir.display())]
    CommandFailed {
        program: String,
        dir: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Invalid dependency pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid project pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read project path: {0}")]
    Glob(#[from] glob::GlobError),
}

pub type Result<T> = std::result::Result<T, SyncError>;
