//! File and directory suggestions for argument words.

use std::path::{is_separator, PathBuf, MAIN_SEPARATOR};

use super::fs::FileSystem;

/// Suggestions for a path-like `prefix`.
///
/// The directory part of the prefix (everything up to the last separator) is
/// kept as written, so suggestions come back in the same shape: bare names for
/// an empty prefix, `~/...` for home-relative, `/...` for absolute and
/// `dir/...` for relative prefixes. Directories are listed before files and
/// carry a trailing separator. Hidden entries appear only when the name part of
/// the prefix is non-empty.
pub fn path_suggestions<F: FileSystem + ?Sized>(fs: &F, prefix: &str) -> Vec<String> {
    let (written_dir, name_prefix) = split_prefix(prefix);

    let Some(lookup_dir) = resolve_dir(fs, written_dir) else {
        tracing::debug!("cannot resolve home directory for {:?}", prefix);
        return Vec::new();
    };

    let entries = match fs.read_dir(&lookup_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::trace!("no path suggestions in {}: {}", lookup_dir.display(), e);
            return Vec::new();
        }
    };

    let (dirs, files): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .filter(|entry| entry.name.starts_with(name_prefix))
        .filter(|entry| !(name_prefix.is_empty() && entry.is_hidden()))
        .partition(|entry| entry.is_dir);

    dirs.into_iter()
        .map(|entry| format!("{}{}{}", written_dir, entry.name, MAIN_SEPARATOR))
        .chain(
            files
                .into_iter()
                .map(|entry| format!("{}{}", written_dir, entry.name)),
        )
        .collect()
}

/// Split into the directory part as written (including its trailing
/// separator) and the name prefix. A lone `~` means the home directory itself.
fn split_prefix(prefix: &str) -> (&str, &str) {
    if prefix == "~" {
        return ("~/", "");
    }
    match prefix.rfind(is_separator) {
        Some(i) => {
            let sep_len = prefix[i..].chars().next().map_or(1, char::len_utf8);
            (&prefix[..i + sep_len], &prefix[i + sep_len..])
        }
        None => ("", prefix),
    }
}

/// Directory to list for the written directory part
fn resolve_dir<F: FileSystem + ?Sized>(fs: &F, written_dir: &str) -> Option<PathBuf> {
    if written_dir.is_empty() {
        return Some(PathBuf::from("."));
    }

    let mut chars = written_dir.chars();
    if chars.next() == Some('~') && chars.next().is_some_and(is_separator) {
        let rest = &written_dir[2..];
        let home = fs.home_dir()?;
        return Some(if rest.is_empty() { home } else { home.join(rest) });
    }

    Some(PathBuf::from(written_dir))
}
