//! Uniform traversal over directory and archive roots.
//!
//! Both walkers produce the same [`RawEntry`] stream so the engine can treat
//! a directory tree and a jar identically. The failure contracts differ on
//! purpose: see [`directory_entries`] and [`archive_entries`].

mod archive;
mod directory;

pub use archive::{ArchiveEntries, archive_entries};
pub use directory::directory_entries;

use std::path::{Path, PathBuf};

/// One discovered entry: the raw path kept for bookkeeping plus the
/// root-relative name fed to normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub path: PathBuf,
    pub name: String,
}

/// How a root will be traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    Directory,
    Archive,
    Unsupported,
}

/// Classify a root by what is actually on disk at scan time.
pub fn root_kind(path: &Path) -> RootKind {
    if path.is_dir() {
        RootKind::Directory
    } else if path.is_file() && is_archive_name(path) {
        RootKind::Archive
    } else {
        RootKind::Unsupported
    }
}

fn is_archive_name(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let lower = name.to_ascii_lowercase();
    lower.ends_with(".jar") || lower.ends_with(".zip")
}
