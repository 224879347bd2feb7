//! Recursive directory traversal.

use super::RawEntry;
use crate::error::ScanError;
use std::path::Path;
use walkdir::WalkDir;

/// Lazily walk a directory root, yielding one entry per regular file with a
/// root-relative name.
///
/// The root is canonicalized first so relative names never carry `.` or `..`
/// segments. Failing to resolve the root, or a walk error on the root
/// itself, is fatal to the scan call; failures below the root are skipped.
pub fn directory_entries(
    root: &Path,
) -> Result<Box<dyn Iterator<Item = Result<RawEntry, ScanError>> + Send>, ScanError> {
    let base = root.canonicalize().map_err(|source| ScanError::Directory {
        root: root.to_path_buf(),
        source,
    })?;

    let walk_root = base.clone();
    Ok(Box::new(WalkDir::new(walk_root).into_iter().filter_map(
        move |entry| match entry {
            Ok(entry) if entry.file_type().is_file() => {
                let path = entry.into_path();
                let name = path.strip_prefix(&base).ok()?.to_string_lossy().into_owned();
                Some(Ok(RawEntry { path, name }))
            }
            Ok(_) => None,
            Err(err) if err.depth() == 0 => Some(Err(ScanError::Directory {
                root: base.clone(),
                source: err.into(),
            })),
            // Unreadable children are skipped, the traversal continues.
            Err(_) => None,
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn touch(path: &PathBuf) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn yields_regular_files_with_relative_names() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a/B.class"));
        touch(&dir.path().join("a/readme.txt"));
        fs::create_dir_all(dir.path().join("a/empty")).unwrap();

        let mut names: Vec<String> = directory_entries(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().name)
            .collect();
        names.sort();

        assert_eq!(names, ["a/B.class", "a/readme.txt"]);
    }

    #[test]
    fn entry_paths_are_absolute_and_canonical() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("file.bin"));

        let entries: Vec<RawEntry> = directory_entries(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap())
            .collect();

        assert_eq!(entries.len(), 1);
        assert!(entries[0].path.is_absolute());
        assert!(entries[0].path.ends_with("file.bin"));
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone");

        let err = directory_entries(&gone).err().expect("root must not resolve");
        assert!(matches!(err, ScanError::Directory { .. }));
        assert!(err.to_string().contains("gone"));
    }
}
