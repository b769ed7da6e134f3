//! Staged diff arguments and output decoding.

use crate::error::GitError;

/// Largest staged diff accepted, in bytes.
pub const MAX_DIFF_BYTES: usize = 20 * 1024 * 1024;

/// Pathspecs excluded from the diff sent to the provider.
pub const LOCKFILE_EXCLUDES: &[&str] = &[
    ":(exclude)*lock.json",
    ":(exclude)*lock.yaml",
    ":(exclude)*.lock",
];

/// Arguments for `git diff --cached` over the whole tree minus lock files.
pub fn staged_diff_args() -> Vec<&'static str> {
    let mut args = vec!["diff", "--cached", "--", "."];
    args.extend_from_slice(LOCKFILE_EXCLUDES);
    args
}

/// Turn raw `git diff` stdout into text, enforcing the size limit.
///
/// Invalid UTF-8 is replaced rather than rejected. Whitespace-only output
/// becomes the empty string.
pub fn decode_diff(stdout: &[u8]) -> Result<String, GitError> {
    if stdout.len() > MAX_DIFF_BYTES {
        return Err(GitError::DiffTooLarge {
            size: stdout.len(),
            limit: MAX_DIFF_BYTES,
        });
    }

    let text = String::from_utf8_lossy(stdout);
    if text.trim().is_empty() {
        return Ok(String::new());
    }
    Ok(text.into_owned())
}
