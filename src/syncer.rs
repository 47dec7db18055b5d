use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::git::GitTracker;
use crate::maven::Maven;
use crate::parsers::{Parser, pom_parser::PomParser};
use crate::runner::CommandRunner;
use log::{debug, info};
use std::io::Write;
use std::path::Path;

/// Printed ahead of each manifest path so per-project output is easy to tell apart.
pub const BANNER: &str = "=========================================";

/// Applies one [`SyncConfig`] to every selected project, one at a time.
///
/// Stops at the first error. Projects handled before the failure keep their
/// changes.
pub struct VersionSyncer<'a, R: CommandRunner, W: Write> {
    config: &'a SyncConfig,
    runner: &'a R,
    out: W,
}

impl<'a, R: CommandRunner, W: Write> VersionSyncer<'a, R, W> {
    pub fn new(config: &'a SyncConfig, runner: &'a R, out: W) -> Self {
        VersionSyncer { config, runner, out }
    }

    /// Returns the number of projects that had a manifest.
    pub fn run(&mut self) -> Result<usize> {
        let projects = self.config.projects().resolve()?;
        info!("Syncing {} project(s)", projects.len());

        let mut synced = 0;
        for project in &projects {
            if self.sync_project(project)? {
                synced += 1;
            }
        }
        Ok(synced)
    }

    /// Runs the enabled actions for one project. Returns `false` when the
    /// project has no manifest and was skipped.
    pub fn sync_project(&mut self, project: &Path) -> Result<bool> {
        let manifest = PomParser::manifest_path(project);
        let exists = manifest.try_exists().map_err(|source| SyncError::Io {
            path: manifest.clone(),
            source,
        })?;
        if !exists {
            debug!("No manifest at '{}', skipping", manifest.display());
            return Ok(false);
        }
        writeln!(self.out, "{}{}", BANNER, manifest.display()).map_err(SyncError::Output)?;

        let actions = self.config.actions();
        if actions.replace {
            PomParser::update_dependency(&manifest, self.config.dependency(), self.config.version())?;
        }

        let git = GitTracker::open(self.runner, project);
        if actions.show_diff {
            let diff = git.diff()?;
            self.emit(&diff)?;
        }
        if actions.git_add_pom {
            let output = git.add(PomParser::manifest_name())?;
            self.emit(&output)?;
        }

        let maven = Maven::new(self.runner, project);
        if actions.mvn_update {
            let output = maven.clean_install_update()?;
            self.emit(&output)?;
        }
        if actions.build {
            let output = maven.run_build_script()?;
            self.emit(&output)?;
        }

        self.out.flush().map_err(SyncError::Output)?;
        Ok(true)
    }

    fn emit(&mut self, output: &str) -> Result<()> {
        if output.is_empty() {
            return Ok(());
        }
        self.out.write_all(output.as_bytes()).map_err(SyncError::Output)?;
        if !output.ends_with('\n') {
            writeln!(self.out).map_err(SyncError::Output)?;
        }
        Ok(())
    }
}
