use crate::arguments::Arguments;
use crate::error::Result;
use log::debug;
use std::path::PathBuf;
use thiserror::Error;

/// Missing or empty required input. Reported with the usage help, before
/// anything on disk is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("--replace requires a dependency name (--dependency)")]
    MissingDependency,
    #[error("--replace requires a target version (--version)")]
    MissingVersion,
    #[error("at least one project (--projects) is required unless --all is set")]
    MissingProjects,
    #[error("--all requires a project pattern (--pattern)")]
    MissingPattern,
}

/// Where the projects to sync come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSelection {
    Explicit(Vec<PathBuf>),
    Pattern(String),
}

impl ProjectSelection {
    /// Expands the selection to project directories, in the order given or
    /// matched. Duplicates are kept.
    pub fn resolve(&self) -> Result<Vec<PathBuf>> {
        match self {
            ProjectSelection::Explicit(projects) => Ok(projects.clone()),
            ProjectSelection::Pattern(pattern) => {
                debug!("Expanding project pattern '{}'", pattern);
                let mut projects = vec![];
                for entry in glob::glob(pattern)? {
                    projects.push(entry?);
                }
                debug!("Matched projects: {:?}", projects);
                Ok(projects)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actions {
    pub replace: bool,
    pub show_diff: bool,
    pub git_add_pom: bool,
    pub mvn_update: bool,
    pub build: bool,
}

/// One validated sync request. Only obtainable through [`SyncConfig::new`]
/// or `TryFrom<Arguments>`, so `replace` always comes with a dependency and
/// a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    dependency: String,
    version: String,
    projects: ProjectSelection,
    actions: Actions,
}

impl SyncConfig {
    pub fn new(
        dependency: impl Into<String>,
        version: impl Into<String>,
        projects: ProjectSelection,
        actions: Actions,
    ) -> std::result::Result<Self, UsageError> {
        let dependency = dependency.into();
        let version = version.into();

        if actions.replace {
            if dependency.is_empty() {
                return Err(UsageError::MissingDependency);
            }
            if version.is_empty() {
                return Err(UsageError::MissingVersion);
            }
        }
        match &projects {
            ProjectSelection::Explicit(list) if list.is_empty() => {
                return Err(UsageError::MissingProjects);
            }
            ProjectSelection::Pattern(pattern) if pattern.is_empty() => {
                return Err(UsageError::MissingPattern);
            }
            _ => {}
        }

        Ok(SyncConfig {
            dependency,
            version,
            projects,
            actions,
        })
    }

    pub fn dependency(&self) -> &str {
        &self.dependency
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn projects(&self) -> &ProjectSelection {
        &self.projects
    }

    pub fn actions(&self) -> Actions {
        self.actions
    }
}

impl TryFrom<Arguments> for SyncConfig {
    type Error = UsageError;

    fn try_from(args: Arguments) -> std::result::Result<Self, Self::Error> {
        let projects = if args.all {
            if !args.projects.is_empty() {
                debug!("--all is set, ignoring explicit projects {:?}", args.projects);
            }
            ProjectSelection::Pattern(args.pattern.unwrap_or_default())
        } else {
            ProjectSelection::Explicit(args.projects.into_iter().map(PathBuf::from).collect())
        };

        let actions = Actions {
            replace: args.replace,
            show_diff: args.show_diff,
            git_add_pom: args.git_add_pom,
            mvn_update: args.mvn_update,
            build: args.build,
        };

        SyncConfig::new(
            args.dependency.unwrap_or_default(),
            args.version.unwrap_or_default(),
            projects,
            actions,
        )
    }
}
