//! Rename Service - rewrites a template project's name.
//!
//! Workflow:
//! 1. Validate the new name
//! 2. Build the ordered replacement rules
//! 3. Rewrite each target file that exists
//! 4. Rename the package directory
//!
//! A failure on one file is logged and counted as zero replacements; it never
//! aborts the run. Dry runs never touch the filesystem.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{ProjectName, Replacement, apply_replacements, hyphenate, replacements},
    error::TallyResult,
};

/// Files rewritten by a rename, relative to the project root.
pub const TARGET_FILES: [&str; 3] = ["Cargo.toml", "README.md", ".github/workflows/ci.yml"];

/// Directory holding the package directory that gets renamed.
pub const PACKAGE_PARENT: &str = "crates";

/// Template name replaced when none is given.
pub const DEFAULT_OLD_NAME: &str = "project_name";

/// Input for [`RenameService::rename_project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    pub root: PathBuf,
    pub old_name: String,
    pub new_name: String,
    pub dry_run: bool,
}

/// Replacements made in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReplacements {
    pub path: PathBuf,
    pub replacements_made: usize,
}

/// Outcome of a rename run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameReport {
    pub files: Vec<FileReplacements>,
    pub directory_renamed: bool,
    pub dry_run: bool,
}

impl RenameReport {
    pub fn files_processed(&self) -> usize {
        self.files.len()
    }

    pub fn files_modified(&self) -> usize {
        self.files.iter().filter(|f| f.replacements_made > 0).count()
    }

    pub fn total_replacements(&self) -> usize {
        self.files.iter().map(|f| f.replacements_made).sum()
    }
}

/// Renames a template project through the [`Filesystem`] port.
pub struct RenameService {
    filesystem: Box<dyn Filesystem>,
}

impl RenameService {
    /// Create a new rename service over the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Rename the project described by `request`.
    ///
    /// # Errors
    ///
    /// Only when `request.new_name` is not a valid project name. Per-file
    /// failures are reported in the returned [`RenameReport`].
    #[instrument(
        skip_all,
        fields(
            root = %request.root.display(),
            old = %request.old_name,
            new = %request.new_name,
            dry_run = request.dry_run
        )
    )]
    pub fn rename_project(&self, request: &RenameRequest) -> TallyResult<RenameReport> {
        let new_name = ProjectName::parse(request.new_name.as_str())?;
        info!("Starting project name update");

        let rules = replacements(&request.old_name, new_name.as_str());
        debug!(count = rules.len(), "Generated replacement patterns");

        let mut report = RenameReport {
            dry_run: request.dry_run,
            ..RenameReport::default()
        };

        let targets = self.find_target_files(&request.root);
        if targets.is_empty() {
            warn!("No target files found to process");
            return Ok(report);
        }

        report.files = targets
            .iter()
            .map(|path| self.update_file_contents(path, &rules, request.dry_run))
            .collect();

        let package_dir = request
            .root
            .join(PACKAGE_PARENT)
            .join(hyphenate(&request.old_name));
        report.directory_renamed = self.rename_directory(
            &package_dir,
            &hyphenate(&request.old_name),
            &new_name.hyphenated(),
            request.dry_run,
        );

        info!(
            files_processed = report.files_processed(),
            files_modified = report.files_modified(),
            total_replacements = report.total_replacements(),
            directory_renamed = report.directory_renamed,
            "Project name update finished"
        );
        Ok(report)
    }

    /// The [`TARGET_FILES`] under `root` that exist and are regular files.
    pub fn find_target_files(&self, root: &Path) -> Vec<PathBuf> {
        let targets: Vec<PathBuf> = TARGET_FILES
            .iter()
            .map(|relative| root.join(relative))
            .filter(|candidate| {
                let keep = self.filesystem.is_file(candidate);
                if keep {
                    debug!(path = %candidate.display(), "Added target file");
                } else {
                    debug!(path = %candidate.display(), "Skipping non-existent file");
                }
                keep
            })
            .collect();

        info!(count = targets.len(), "Found files to process");
        targets
    }

    /// Apply `rules` to one file, writing it back unless `dry_run`.
    pub fn update_file_contents(
        &self,
        path: &Path,
        rules: &[Replacement],
        dry_run: bool,
    ) -> FileReplacements {
        match self.rewrite(path, rules, dry_run) {
            Ok(replacements_made) => FileReplacements {
                path: path.to_path_buf(),
                replacements_made,
            },
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to process file");
                FileReplacements {
                    path: path.to_path_buf(),
                    replacements_made: 0,
                }
            }
        }
    }

    fn rewrite(&self, path: &Path, rules: &[Replacement], dry_run: bool) -> TallyResult<usize> {
        let content = self.filesystem.read_to_string(path)?;
        let (updated, total) = apply_replacements(&content, rules);

        if total == 0 {
            debug!(path = %path.display(), "No replacements needed");
        } else if dry_run {
            info!(path = %path.display(), occurrences = total, "[dry-run] Would replace");
        } else {
            self.filesystem.write_file(path, &updated)?;
            info!(path = %path.display(), occurrences = total, "Replaced occurrences");
        }

        Ok(total)
    }

    /// Rename `path` to a sibling called `new_name` when its last component
    /// is exactly `old_name`.
    ///
    /// Returns `true` when the directory was renamed, or would be in a dry
    /// run.
    pub fn rename_directory(
        &self,
        path: &Path,
        old_name: &str,
        new_name: &str,
        dry_run: bool,
    ) -> bool {
        if !self.filesystem.is_dir(path) {
            debug!(path = %path.display(), "Directory does not exist or is not a directory");
            return false;
        }

        if path.file_name().and_then(|n| n.to_str()) != Some(old_name) {
            debug!(path = %path.display(), pattern = old_name, "Directory does not match pattern");
            return false;
        }

        let new_path = path.with_file_name(new_name);
        if new_path != path && self.filesystem.exists(&new_path) {
            error!(to = %new_path.display(), "Rename target already exists");
            return false;
        }

        if dry_run {
            info!(from = %path.display(), to = %new_path.display(), "[dry-run] Would rename directory");
            return true;
        }

        match self.filesystem.rename(path, &new_path) {
            Ok(()) => {
                info!(from = %path.display(), to = %new_path.display(), "Renamed directory");
                true
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to rename directory");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::output::MockFilesystem};
    use mockall::predicate::eq;

    fn fs_error(path: &str) -> crate::error::TallyError {
        ApplicationError::FilesystemError {
            path: PathBuf::from(path),
            reason: "denied".into(),
        }
        .into()
    }

    #[test]
    fn report_totals() {
        let report = RenameReport {
            files: vec![
                FileReplacements {
                    path: "a".into(),
                    replacements_made: 3,
                },
                FileReplacements {
                    path: "b".into(),
                    replacements_made: 0,
                },
            ],
            directory_renamed: true,
            dry_run: false,
        };
        assert_eq!(report.files_processed(), 2);
        assert_eq!(report.files_modified(), 1);
        assert_eq!(report.total_replacements(), 3);
    }

    #[test]
    fn unreadable_file_counts_zero() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Err(fs_error("Cargo.toml")));
        fs.expect_write_file().never();

        let service = RenameService::new(Box::new(fs));
        let rules = replacements("project_name", "app");
        let stats = service.update_file_contents(Path::new("Cargo.toml"), &rules, false);

        assert_eq!(stats.replacements_made, 0);
    }

    #[test]
    fn dry_run_never_writes() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Ok("name = \"project_name\"".into()));
        fs.expect_write_file().never();

        let service = RenameService::new(Box::new(fs));
        let rules = replacements("project_name", "app");
        let stats = service.update_file_contents(Path::new("Cargo.toml"), &rules, true);

        assert_eq!(stats.replacements_made, 1);
    }

    #[test]
    fn unchanged_file_is_not_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Ok("nothing here".into()));
        fs.expect_write_file().never();

        let service = RenameService::new(Box::new(fs));
        let rules = replacements("project_name", "app");
        let stats = service.update_file_contents(Path::new("README.md"), &rules, false);

        assert_eq!(stats.replacements_made, 0);
    }

    #[test]
    fn write_failure_counts_zero() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Ok("project_name".into()));
        fs.expect_write_file()
            .times(1)
            .returning(|_, _| Err(fs_error("README.md")));

        let service = RenameService::new(Box::new(fs));
        let rules = replacements("project_name", "app");
        let stats = service.update_file_contents(Path::new("README.md"), &rules, false);

        assert_eq!(stats.replacements_made, 0);
    }

    #[test]
    fn failed_directory_rename_returns_false() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_exists().returning(|_| false);
        fs.expect_rename()
            .with(eq(Path::new("crates/old")), eq(Path::new("crates/new")))
            .times(1)
            .returning(|_, _| Err(fs_error("crates/old")));

        let service = RenameService::new(Box::new(fs));
        assert!(!service.rename_directory(Path::new("crates/old"), "old", "new", false));
    }

    #[test]
    fn existing_target_directory_is_not_overwritten() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_exists()
            .with(eq(Path::new("crates/new")))
            .returning(|_| true);
        fs.expect_rename().never();

        let service = RenameService::new(Box::new(fs));
        assert!(!service.rename_directory(Path::new("crates/old"), "old", "new", false));
        assert!(!service.rename_directory(Path::new("crates/old"), "old", "new", true));
    }

    #[test]
    fn directory_with_other_name_is_left_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_rename().never();

        let service = RenameService::new(Box::new(fs));
        assert!(!service.rename_directory(Path::new("crates/other"), "old", "new", false));
    }

    #[test]
    fn invalid_new_name_is_rejected_before_any_io() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file().never();

        let service = RenameService::new(Box::new(fs));
        let request = RenameRequest {
            root: PathBuf::from("."),
            old_name: DEFAULT_OLD_NAME.into(),
            new_name: "my-app".into(),
            dry_run: false,
        };
        assert!(service.rename_project(&request).is_err());
    }
}
