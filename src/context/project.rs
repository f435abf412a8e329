//! Project-derived session names.
//!
//! When `KKS_USE_GITDIR_SESSIONS` is set, a session name is derived from
//! the nearest git repository root above the working directory.

use std::path::{Path, PathBuf};

/// Find the repository root by walking up from `start`.
///
/// A directory counts as a root when it contains a `.git` entry. Both
/// directories and files are accepted so that worktrees and submodules,
/// whose `.git` is a file, resolve to their own root.
///
/// # Returns
///
/// The path to the repository root, or None if not found.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Turn a directory name into a valid Kakoune session name.
///
/// Every character outside `[A-Za-z0-9_-]` becomes `-`.
pub fn sanitize_session_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Derive the session name for the repository containing `cwd`.
///
/// # Example
///
/// ```
/// use kks::context::project::session_name_for;
/// use std::path::Path;
///
/// // Outside any repository there is no derived name.
/// assert_eq!(session_name_for(Path::new("/")), None);
/// ```
pub fn session_name_for(cwd: &Path) -> Option<String> {
    let root = find_repo_root(cwd)?;
    let name = root.file_name()?.to_str()?;
    let session = sanitize_session_name(name);
    tracing::debug!(root = %root.display(), %session, "derived session from git root");
    Some(session)
}
