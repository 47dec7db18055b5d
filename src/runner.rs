//! External process execution.
//!
//! Every tool the syncer drives (git, mvn, the build script) goes through
//! [`CommandRunner`], so tests can swap in a recording implementation.

use crate::error::{Result, SyncError};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

pub trait CommandRunner {
    /// Runs `program` with `args` inside `dir`, blocking until it exits.
    ///
    /// Returns captured stdout. A non-zero exit is an error.
    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<String>;
}

/// Runs real processes via [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// `./build.sh` style programs are looked up in `dir`, not in our own cwd.
    /// The result is absolute so it survives the child's change of directory.
    fn resolve_program(dir: &Path, program: &str) -> std::io::Result<PathBuf> {
        let path = Path::new(program);
        if path.is_relative() && path.components().count() > 1 {
            std::path::absolute(dir.join(path))
        } else {
            Ok(path.to_path_buf())
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<String> {
        debug!("Running {} {:?} in '{}'", program, args, dir.display());

        let spawn_error = |source| SyncError::Spawn {
            program: program.to_string(),
            dir: dir.to_path_buf(),
            source,
        };
        let output = Command::new(Self::resolve_program(dir, program).map_err(spawn_error)?)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(spawn_error)?;

        if !output.status.success() {
            return Err(SyncError::CommandFailed {
                program: program.to_string(),
                dir: dir.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
