//! Content storage seam.
//!
//! The aggregation pipeline only needs two operations from wherever content
//! lives: list the file names in a directory, and read one file as text.
//! [`ContentStore`] captures exactly that, so the pipeline is independent of
//! the storage technology.
//!
//! - [`FsStore`] reads from the local filesystem. This is what the CLI uses.
//! - [`MemoryStore`] keeps everything in memory. It can also model missing
//!   directories and unreadable files, which makes degraded paths testable.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Read-only access to a flat directory of content files.
///
/// `Sync` because listing reads files in parallel.
pub trait ContentStore: Sync {
    /// File names directly inside `dir`. Subdirectories are not included.
    fn list(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Full text of `dir/name`.
    fn read(&self, dir: &Path, name: &str) -> io::Result<String>;
}

/// Filesystem-backed store.
///
/// Symlinks are followed, so a linked content file lists the same way it
/// reads. A dangling link is left out of the listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl ContentStore for FsStore {
    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        let walker = WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true);
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() > 0 => {
                    debug!(error = %e, "skipping unresolvable directory entry");
                    continue;
                }
                Err(e) => return Err(io::Error::from(e)),
            };
            if entry.file_type().is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        Ok(names)
    }

    fn read(&self, dir: &Path, name: &str) -> io::Result<String> {
        fs::read_to_string(dir.join(name))
    }
}

#[derive(Debug, Clone)]
enum StoredFile {
    Text(String),
    Unreadable,
}

/// In-memory store keyed by directory path and file name.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    dirs: BTreeMap<PathBuf, BTreeMap<String, StoredFile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file. Creates the directory if needed.
    pub fn insert(&mut self, dir: impl Into<PathBuf>, name: &str, text: impl Into<String>) {
        self.dirs
            .entry(dir.into())
            .or_default()
            .insert(name.to_string(), StoredFile::Text(text.into()));
    }

    /// Add a file that is listed but fails every read.
    pub fn insert_unreadable(&mut self, dir: impl Into<PathBuf>, name: &str) {
        self.dirs
            .entry(dir.into())
            .or_default()
            .insert(name.to_string(), StoredFile::Unreadable);
    }

    /// Create an empty directory.
    pub fn create_dir(&mut self, dir: impl Into<PathBuf>) {
        self.dirs.entry(dir.into()).or_default();
    }

    fn dir(&self, dir: &Path) -> io::Result<&BTreeMap<String, StoredFile>> {
        self.dirs.get(dir).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", dir.display()),
            )
        })
    }
}

impl ContentStore for MemoryStore {
    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        Ok(self.dir(dir)?.keys().cloned().collect())
    }

    fn read(&self, dir: &Path, name: &str) -> io::Result<String> {
        match self.dir(dir)?.get(name) {
            Some(StoredFile::Text(text)) => Ok(text.clone()),
            Some(StoredFile::Unreadable) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("unreadable: {}", dir.join(name).display()),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", dir.join(name).display()),
            )),
        }
    }
}
