//! Git operations for the commit command: read the staged diff and commit.
//!
//! All operations use `std::process::Command` to shell out to the system `git`
//! binary, inheriting the user's existing git config, hooks, and signing setup.

use std::path::PathBuf;
use std::process::{Command, Output};

use tracing::{debug, info};

use crate::error::GitError;

use super::diff::{decode_diff, staged_diff_args};

/// The version-control side of the commit command.
///
/// This abstraction allows substituting git in tests.
#[cfg_attr(test, mockall::automock)]
pub trait GitRunner {
    /// Staged changes as unified diff text, or an empty string when nothing is staged.
    fn staged_diff(&self) -> Result<String, GitError>;

    /// Create a commit from the index with `message`.
    fn commit(&self, message: &str) -> Result<(), GitError>;
}

/// Runs the real `git` binary, optionally inside a fixed working directory.
#[derive(Debug, Clone, Default)]
pub struct SystemGit {
    workdir: Option<PathBuf>,
}

impl SystemGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(workdir.into()),
        }
    }

    /// Run git and return its captured output, or a descriptive error on failure.
    fn run_git(&self, args: &[&str], operation: &'static str) -> Result<Output, GitError> {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .map_err(|source| GitError::SpawnFailed { operation, source })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::NonZeroExit {
                operation,
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(output)
    }

    /// Run `git commit -m <message>`. The message is a single argv element,
    /// so no shell quoting is involved.
    fn commit_output(&self, message: &str) -> Result<Output, GitError> {
        self.run_git(&["commit", "-m", message], "commit")
    }
}

impl GitRunner for SystemGit {
    fn staged_diff(&self) -> Result<String, GitError> {
        let output = self.run_git(&staged_diff_args(), "diff")?;
        let diff = decode_diff(&output.stdout)?;
        debug!("Staged diff: {} bytes", diff.len());
        Ok(diff)
    }

    /// Hook output and warnings git writes to stderr are passed through.
    fn commit(&self, message: &str) -> Result<(), GitError> {
        let output = self.commit_output(message)?;
        let summary = String::from_utf8_lossy(&output.stdout);
        info!("{}", summary.lines().next().unwrap_or("committed"));
        print!("{}", summary);
        eprint!("{}", String::from_utf8_lossy(&output.stderr));
        Ok(())
    }
}

/// Check that `git` is on PATH.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git").map(|_| ()).map_err(|_| GitError::NotInstalled)
}
