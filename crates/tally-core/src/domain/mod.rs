//! Core domain layer for Tally.
//!
//! Pure logic with no I/O:
//!
//! - [`TextProcessor`]: normalization, tokenization, word statistics
//! - [`ProjectName`] and the replacement rules used to rename a template
//!
//! Filesystem access is expressed through ports in the application layer.

pub mod error;
pub mod project_name;
pub mod text_processor;

pub use error::{DomainError, ErrorCategory};
pub use project_name::{ProjectName, Replacement, apply_replacements, hyphenate, replacements};
pub use text_processor::{TextProcessor, is_space};
