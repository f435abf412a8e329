//! Relative path computation.

use std::path::{Component, Path, PathBuf};

use crate::error::{KksError, Result};

/// Lexically normalize an absolute path, folding `.` and `..`.
fn normalize(path: &Path) -> Result<Vec<Component<'_>>> {
    if !path.is_absolute() {
        return Err(KksError::InvalidPath {
            path: path.to_path_buf(),
            message: "expected an absolute path".to_string(),
        });
    }

    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                }
            }
            other => parts.push(other),
        }
    }
    Ok(parts)
}

/// Compute the path of `to` relative to `from`.
///
/// Both paths must be absolute. The shared prefix is dropped, one `..` is
/// emitted for every remaining component of `from`, and the rest of `to`
/// follows. Equal paths give an empty path.
///
/// # Example
///
/// ```
/// use kks::output::relative_path;
/// use std::path::{Path, PathBuf};
///
/// let rel = relative_path(Path::new("/home/u/proj/docs"), Path::new("/home/u/proj/src")).unwrap();
/// assert_eq!(rel, PathBuf::from("../src"));
/// ```
pub fn relative_path(from: &Path, to: &Path) -> Result<PathBuf> {
    let from = normalize(from)?;
    let to = normalize(to)?;

    let shared = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in shared..from.len() {
        rel.push("..");
    }
    for component in &to[shared..] {
        rel.push(component.as_os_str());
    }
    Ok(rel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(from: &str, to: &str) -> PathBuf {
        relative_path(Path::new(from), Path::new(to)).unwrap()
    }

    #[test]
    fn child_directory() {
        assert_eq!(rel("/home/u/proj", "/home/u/proj/src"), PathBuf::from("src"));
    }

    #[test]
    fn parent_directory() {
        assert_eq!(rel("/home/u/proj/src", "/home/u/proj"), PathBuf::from(".."));
    }

    #[test]
    fn sibling_directory() {
        assert_eq!(
            rel("/home/u/proj/a/b", "/home/u/proj/c"),
            PathBuf::from("../../c")
        );
    }

    #[test]
    fn same_directory_is_empty() {
        assert_eq!(rel("/home/u/proj", "/home/u/proj/"), PathBuf::new());
    }

    #[test]
    fn from_root() {
        assert_eq!(rel("/", "/etc/kak"), PathBuf::from("etc/kak"));
    }

    #[test]
    fn dots_are_folded() {
        assert_eq!(
            rel("/home/u/./proj/src/..", "/home/u/proj/lib"),
            PathBuf::from("lib")
        );
    }

    #[test]
    fn relative_input_is_rejected() {
        let err = relative_path(Path::new("proj"), Path::new("/tmp")).unwrap_err();
        assert!(matches!(err, KksError::InvalidPath { .. }));
    }
}
