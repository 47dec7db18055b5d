//! Shared fixtures for the integration tests.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use sync_mvn_deps::error::{Result, SyncError};
use sync_mvn_deps::runner::CommandRunner;

#[allow(unused)]
pub const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
    <groupId>com.example</groupId>
    <artifactId>order-service</artifactId>
    <version>0.0.1</version>

    <dependencies>
        <dependency>
            <groupId>com.example</groupId>
            <artifactId>common-lib</artifactId>
            <version>1.0.0</version>
        </dependency>
        <dependency>
            <groupId>com.example</groupId>
            <artifactId>other-lib</artifactId>
            <version>1.0.0</version>
        </dependency>
    </dependencies>
</project>
"#;

/// `POM` with common-lib moved to `version`.
#[allow(unused)]
pub fn expected_pom(version: &str) -> String {
    POM.replace(
        "<artifactId>common-lib</artifactId>\n            <version>1.0.0</version>",
        &format!("<artifactId>common-lib</artifactId>\n            <version>{version}</version>"),
    )
}

/// Creates `root/name/pom.xml` with `contents` and returns the project directory.
#[allow(unused)]
pub fn create_project(root: &Path, name: &str, contents: &str) -> PathBuf {
    let project = root.join(name);
    fs::create_dir_all(&project).unwrap();
    fs::write(project.join("pom.xml"), contents).unwrap();
    project
}

#[allow(unused)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub dir: PathBuf,
    pub argv: Vec<String>,
}

/// Records every command instead of running it.
#[allow(unused)]
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<Invocation>>,
    fail_on: Option<String>,
}

#[allow(unused)]
impl RecordingRunner {
    /// Fails every invocation of `program` as if it could not be started.
    pub fn failing_on(program: &str) -> Self {
        RecordingRunner {
            calls: RefCell::default(),
            fail_on: Some(program.to_string()),
        }
    }

    pub fn argvs(&self) -> Vec<Vec<String>> {
        self.calls.borrow().iter().map(|call| call.argv.clone()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<String> {
        let mut argv = vec![program.to_string()];
        argv.extend(args.iter().map(|arg| arg.to_string()));
        self.calls.borrow_mut().push(Invocation {
            dir: dir.to_path_buf(),
            argv,
        });

        if self.fail_on.as_deref() == Some(program) {
            return Err(SyncError::Spawn {
                program: program.to_string(),
                dir: dir.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
            });
        }
        Ok(format!("{program} output"))
    }
}

#[allow(unused)]
pub fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}

/// Sets unix permission bits on `path`.
#[cfg(unix)]
#[allow(unused)]
pub fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path).unwrap().permissions();
    permissions.set_mode(mode);
    fs::set_permissions(path, permissions).unwrap();
}

/// Whether a searchable-bit removal on `dir` actually denies access. Privileged
/// users bypass permission bits, in which case permission tests are skipped.
#[cfg(unix)]
#[allow(unused)]
pub fn denies_access(dir: &Path) -> bool {
    fs::metadata(dir.join("pom.xml")).is_err()
}

/// Whether `file` is really not writable for the current user.
#[allow(unused)]
pub fn denies_write(file: &Path) -> bool {
    fs::OpenOptions::new().write(true).open(file).is_err()
}
