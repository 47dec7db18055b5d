use crate::error::{Result, SyncError};
use log::{debug, info};
use regex::bytes::Regex;
use std::path::{Path, PathBuf};

pub mod pom_parser;

pub trait Parser {
    /// Rewrites the version of `dependency` in `manifest` to `version`.
    ///
    /// Every matching declaration is updated. The manifest is always written
    /// back, even when nothing matched. Returns the number of substitutions.
    fn update_dependency(manifest: impl AsRef<Path>, dependency: &str, version: &str) -> Result<usize> {
        let manifest = manifest.as_ref();
        info!("Updating {} to {} in '{}'", dependency, version, manifest.display());

        let regex = Self::dependency_version_regex(dependency)?;
        let contents = std::fs::read(manifest).map_err(|source| SyncError::Io {
            path: manifest.to_path_buf(),
            source,
        })?;

        let matches = regex.find_iter(&contents).count();
        let replacement = Self::version_line_format(version);
        let new_contents = regex.replace_all(&contents, replacement.as_bytes());

        if matches == 0 {
            debug!("No declaration of {} found in '{}'", dependency, manifest.display());
        }
        std::fs::write(manifest, new_contents.as_ref()).map_err(|source| SyncError::Io {
            path: manifest.to_path_buf(),
            source,
        })?;
        if matches > 0 {
            info!("Replaced {} occurrence(s)", matches);
        }
        Ok(matches)
    }

    fn manifest_path(project: impl AsRef<Path>) -> PathBuf {
        project.as_ref().join(Self::manifest_name())
    }

    fn manifest_name() -> &'static str;
    fn dependency_version_regex(dependency: &str) -> Result<Regex>;
    fn version_line_format(version: &str) -> String;
}
