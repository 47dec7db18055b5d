use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    about = "Sync a Maven dependency to the given version across projects",
    bin_name = "sync-mvn-deps",
    disable_version_flag = true
)]
pub struct Arguments {
    /// Glob pattern of target projects, used with --all
    #[arg(long, short)]
    pub pattern: Option<String>,
    /// Project directory to sync (repeatable)
    #[arg(long = "projects", short = 'j')]
    pub projects: Vec<String>,
    /// Artifact id of the dependency to update
    #[arg(long, short)]
    pub dependency: Option<String>,
    /// New version of the dependency
    #[arg(long, short)]
    pub version: Option<String>,
    /// Sync every project matched by --pattern instead of --projects
    #[arg(long, short)]
    pub all: bool,
    /// Replace the dependency version in pom.xml
    #[arg(long, short)]
    pub replace: bool,
    /// Show `git diff` for each project
    #[arg(long = "showdiff", short = 's')]
    pub show_diff: bool,
    /// Stage pom.xml with `git add`
    #[arg(long = "gitaddpom", short = 'g')]
    pub git_add_pom: bool,
    /// Run `mvn -U clean install`
    #[arg(long = "mvnupdate", short = 'u')]
    pub mvn_update: bool,
    /// Run the project's ./build.sh
    #[arg(long, short)]
    pub build: bool,
    #[arg(long)]
    pub verbose: bool,
}
