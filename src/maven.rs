use crate::error::Result;
use crate::runner::CommandRunner;
use log::info;
use std::path::Path;

pub const BUILD_SCRIPT: &str = "./build.sh";

/// Build steps for one Maven project directory.
pub struct Maven<'a, R: CommandRunner> {
    runner: &'a R,
    path: &'a Path,
}

impl<'a, R: CommandRunner> Maven<'a, R> {
    pub fn new(runner: &'a R, path: &'a Path) -> Self {
        Maven { runner, path }
    }

    /// `mvn -U clean install`, forcing snapshot and release updates
    pub fn clean_install_update(&self) -> Result<String> {
        info!("Running mvn -U clean install in {:?}", self.path);
        self.runner.run(self.path, "mvn", &["-U", "clean", "install"])
    }

    pub fn run_build_script(&self) -> Result<String> {
        info!("Running {} in {:?}", BUILD_SCRIPT, self.path);
        self.runner.run(self.path, BUILD_SCRIPT, &[])
    }
}
