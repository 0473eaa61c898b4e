//! Tally Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Tally: a small
//! text processor (normalize, tokenize, count, frequency) and the service
//! that renames a template project.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            tally-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Application Services (RenameService)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Ports (Filesystem)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     tally-adapters (Infrastructure)     │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (TextProcessor, ProjectName, rules)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tally_core::domain::TextProcessor;
//!
//! let processor = TextProcessor::new("spam spam\teggs");
//! assert_eq!(processor.normalize(), "spam spam eggs");
//! assert_eq!(processor.count_words(), 3);
//! assert_eq!(processor.word_frequency("spam"), 2);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FileReplacements, RenameReport, RenameRequest, RenameService, ports::Filesystem,
    };
    pub use crate::domain::{ProjectName, Replacement, TextProcessor};
    pub use crate::error::{TallyError, TallyResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
