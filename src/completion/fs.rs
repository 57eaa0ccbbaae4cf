//! Filesystem access used by completion.
//!
//! The engine only needs to list a directory and find the home directory, so
//! it talks to a [`FileSystem`] rather than `std::fs`. Tests substitute an
//! in-memory tree.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Metadata for one directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub is_dir: bool,
    pub is_file: bool,
    /// Unix permission bits (`0o755` etc.)
    pub mode: u32,
}

impl EntryInfo {
    pub fn file(name: &str, mode: u32) -> Self {
        Self {
            name: name.to_string(),
            is_dir: false,
            is_file: true,
            mode,
        }
    }

    pub fn dir(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_dir: true,
            is_file: false,
            mode: 0o755,
        }
    }

    /// Regular file with at least one execute bit set
    pub fn is_executable(&self) -> bool {
        self.is_file && self.mode & 0o111 != 0
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Directory listing and home lookup
pub trait FileSystem {
    /// List the entries of `dir`, in a stable order
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<EntryInfo>>;

    /// The user's home directory, if it can be resolved
    fn home_dir(&self) -> Option<PathBuf>;
}

/// The real filesystem.
///
/// Entries are sorted by name so suggestion order does not depend on the
/// platform's directory iteration order. Symlinks are followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFileSystem;

impl FileSystem for HostFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<EntryInfo>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir)? {
            let Ok(entry) = entry else { continue };
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };

            // Follow symlinks, falling back to the link itself when dangling
            let metadata = match fs::metadata(entry.path()) {
                Ok(m) => m,
                Err(_) => match entry.metadata() {
                    Ok(m) => m,
                    Err(_) => continue,
                },
            };

            entries.push(EntryInfo {
                name,
                is_dir: metadata.is_dir(),
                is_file: metadata.is_file(),
                mode: permission_bits(&metadata),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// In-memory tree keyed by directory path. Trailing separators are ignored
/// when matching.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    dirs: HashMap<PathBuf, Vec<EntryInfo>>,
    home: Option<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `dir` with the given entries (kept in the order given)
    pub fn with_dir(mut self, dir: impl Into<PathBuf>, entries: Vec<EntryInfo>) -> Self {
        self.dirs.insert(dir.into(), entries);
        self
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<EntryInfo>> {
        let key = normalize(dir);
        self.dirs
            .iter()
            .find(|(path, _)| normalize(path) == key)
            .map(|(_, entries)| entries.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, dir.display().to_string()))
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}

/// Drop trailing separators so `/home/u/` and `/home/u` compare equal
fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

#[cfg(unix)]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o555
    } else {
        0o755
    }
}
