//! Archive (jar/zip) traversal.

use super::RawEntry;
use std::fs::File;
use std::path::{Path, PathBuf};
use zip::ZipArchive;
use zip::result::ZipError;

/// Open an archive root for traversal.
///
/// Open failures surface to the caller, which records them as diagnostics
/// and moves on to the next root; this is deliberately softer than the
/// directory walker's fatal contract.
pub fn archive_entries(path: &Path) -> Result<ArchiveEntries, ZipError> {
    let file = File::open(path)?;
    let archive = ZipArchive::new(file)?;
    Ok(ArchiveEntries {
        archive,
        archive_path: path.to_path_buf(),
        index: 0,
    })
}

/// Streaming iterator over the file entries of one archive.
///
/// The archive handle lives exactly as long as the iterator. Directory
/// entries and entries that fail to decode are skipped. Entry names have a
/// leading separator stripped; raw paths use the `<archive>!/<entry>` form.
pub struct ArchiveEntries {
    archive: ZipArchive<File>,
    archive_path: PathBuf,
    index: usize,
}

impl Iterator for ArchiveEntries {
    type Item = RawEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.archive.len() {
            let current = self.index;
            self.index += 1;

            let Ok(entry) = self.archive.by_index(current) else {
                continue;
            };
            if entry.is_dir() {
                continue;
            }

            let name = entry.name().trim_start_matches('/').to_string();
            let path = PathBuf::from(format!("{}!/{name}", self.archive_path.display()));
            return Some(RawEntry { path, name });
        }
        None
    }
}
