//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tally-adapters` crate provides implementations.

use crate::error::TallyResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tally_adapters::filesystem::LocalFilesystem` (production)
/// - `tally_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a UTF-8 file into a string.
    fn read_to_string(&self, path: &Path) -> TallyResult<String>;

    /// Write content to a file, replacing what was there.
    fn write_file(&self, path: &Path, content: &str) -> TallyResult<()>;

    /// Rename a file or directory.
    fn rename(&self, from: &Path, to: &Path) -> TallyResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
