//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tally_core::{
    application::{ApplicationError, ports::Filesystem},
    error::TallyResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same state, so a test can hand one clone to a service
/// and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Seed a directory and its ancestors (testing helper).
    pub fn with_directory(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            insert_ancestors(&mut inner.directories, path.as_ref());
        }
        self
    }

    /// Make writes to `path` fail (testing helper).
    pub fn with_read_only(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.as_ref().to_path_buf());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn not_found(path: &Path) -> tally_core::error::TallyError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "No such file or directory".into(),
    }
    .into()
}

/// `path` with its `from` prefix swapped for `to`.
fn rebase(path: &Path, from: &Path, to: &Path) -> PathBuf {
    match path.strip_prefix(from) {
        Ok(rest) if rest.as_os_str().is_empty() => to.to_path_buf(),
        Ok(rest) => to.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> TallyResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.files.get(path).cloned().ok_or_else(|| not_found(path))
    }

    fn write_file(&self, path: &Path, content: &str) -> TallyResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.read_only.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> TallyResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if let Some(content) = inner.files.remove(from) {
            inner.files.insert(to.to_path_buf(), content);
            return Ok(());
        }
        if !inner.directories.contains(from) {
            return Err(not_found(from));
        }

        let directories = std::mem::take(&mut inner.directories);
        inner.directories = directories
            .into_iter()
            .map(|d| rebase(&d, from, to))
            .collect();

        let files = std::mem::take(&mut inner.files);
        inner.files = files
            .into_iter()
            .map(|(p, c)| (rebase(&p, from, to), c))
            .collect();

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_file_creates_parents() {
        let fs = MemoryFilesystem::new().with_file("/p/.github/workflows/ci.yml", "x");
        assert!(fs.is_file(Path::new("/p/.github/workflows/ci.yml")));
        assert!(fs.is_dir(Path::new("/p/.github/workflows")));
        assert!(fs.is_dir(Path::new("/p")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/nowhere/a.txt"), "x").is_err());
    }

    #[test]
    fn read_only_rejects_writes() {
        let fs = MemoryFilesystem::new()
            .with_file("/p/README.md", "old")
            .with_read_only("/p/README.md");
        assert!(fs.write_file(Path::new("/p/README.md"), "new").is_err());
        assert_eq!(fs.read_file(Path::new("/p/README.md")).as_deref(), Some("old"));
    }

    #[test]
    fn rename_directory_moves_children() {
        let fs = MemoryFilesystem::new()
            .with_file("/p/crates/old-name/src/lib.rs", "lib")
            .with_file("/p/crates/old-name-extra/keep.rs", "keep");

        fs.rename(Path::new("/p/crates/old-name"), Path::new("/p/crates/new-name"))
            .unwrap();

        assert!(fs.is_dir(Path::new("/p/crates/new-name/src")));
        assert!(!fs.exists(Path::new("/p/crates/old-name")));
        assert_eq!(
            fs.read_file(Path::new("/p/crates/new-name/src/lib.rs")).as_deref(),
            Some("lib")
        );
        // Sibling sharing a name prefix is untouched.
        assert!(fs.is_file(Path::new("/p/crates/old-name-extra/keep.rs")));
    }

    #[test]
    fn rename_missing_is_error() {
        let fs = MemoryFilesystem::new();
        assert!(fs.rename(Path::new("/a"), Path::new("/b")).is_err());
    }
}
