use crate::error::Result;
use crate::runner::CommandRunner;
use log::{debug, info};
use std::path::Path;

/// Git operations scoped to one project directory.
pub struct GitTracker<'a, R: CommandRunner> {
    runner: &'a R,
    path: &'a Path,
}

impl<'a, R: CommandRunner> GitTracker<'a, R> {
    pub fn open(runner: &'a R, path: &'a Path) -> Self {
        debug!("Tracking git changes in {:?}", path);
        GitTracker { runner, path }
    }

    /// Returns the unstaged diff of the working tree
    pub fn diff(&self) -> Result<String> {
        debug!("Collecting diff for {:?}", self.path);
        self.runner.run(self.path, "git", &["diff"])
    }

    /// Stages a single file, relative to the project directory
    pub fn add(&self, file: &str) -> Result<String> {
        info!("Staging {} in {:?}", file, self.path);
        self.runner.run(self.path, "git", &["add", file])
    }
}
