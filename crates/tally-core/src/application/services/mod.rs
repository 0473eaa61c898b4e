//! Application services - orchestrate use cases.

pub mod rename_service;

pub use rename_service::{
    DEFAULT_OLD_NAME, FileReplacements, PACKAGE_PARENT, RenameReport, RenameRequest,
    RenameService, TARGET_FILES,
};
