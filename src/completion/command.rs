//! Executable-name suggestions from the search path.

use std::collections::HashSet;
use std::ffi::OsStr;

use super::fs::FileSystem;

/// Executables on `search_path` whose name starts with `prefix`.
///
/// Directories are scanned in search-path order and the first occurrence of a
/// name wins. Unreadable directories are skipped.
pub fn command_suggestions<F: FileSystem + ?Sized>(
    fs: &F,
    search_path: &OsStr,
    prefix: &str,
) -> Vec<String> {
    let mut suggestions = Vec::new();
    let mut seen = HashSet::new();

    for dir in std::env::split_paths(search_path) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        let entries = match fs.read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::trace!("skipping search path entry {}: {}", dir.display(), e);
                continue;
            }
        };

        for entry in entries {
            if entry.name.starts_with(prefix)
                && entry.is_executable()
                && !seen.contains(&entry.name)
            {
                seen.insert(entry.name.clone());
                suggestions.push(entry.name);
            }
        }
    }

    suggestions
}
