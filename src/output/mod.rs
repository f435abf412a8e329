//! Rendering of query results.
//!
//! Values come back from the session one per line. Buffer lists get one
//! extra step: buffer names are relative to the session's working
//! directory, so they are re-rooted onto the caller's directory.

pub mod relative;

use std::path::Path;

pub use relative::relative_path;

/// Join values with newlines, unmodified. No values give an empty string.
pub fn render_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Whether `query` asks for the buffer list.
///
/// Accepts every Kakoune expansion delimiter, e.g. `%val{buflist}` or
/// `%val(buflist)`.
pub fn is_buflist_query(query: &str) -> bool {
    ["{", "(", "[", "<", "|"]
        .iter()
        .zip(["}", ")", "]", ">", "|"])
        .any(|(open, close)| query.contains(&format!("%val{}buflist{}", open, close)))
}

/// Whether a buffer name is a path relative to the session directory.
///
/// Scratch buffers such as `*debug*`, absolute paths and `~` paths are
/// left alone.
pub fn is_relative_buffer(name: &str) -> bool {
    !(name.is_empty()
        || name.starts_with('/')
        || name.starts_with('~')
        || (name.starts_with('*') && name.ends_with('*')))
}

/// Prefix every relative buffer name with `prefix`, keeping order.
///
/// # Example
///
/// ```
/// use kks::output::prefix_buffers;
/// use std::path::Path;
///
/// let lines = vec!["buf1.txt".to_string(), "*debug*".to_string()];
/// assert_eq!(
///     prefix_buffers(&lines, Path::new("src")),
///     vec!["src/buf1.txt", "*debug*"]
/// );
/// ```
pub fn prefix_buffers(lines: &[String], prefix: &Path) -> Vec<String> {
    lines
        .iter()
        .map(|name| {
            if is_relative_buffer(name) && !prefix.as_os_str().is_empty() {
                prefix.join(name).to_string_lossy().into_owned()
            } else {
                name.clone()
            }
        })
        .collect()
}
