//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and render the
//! results.  No business logic lives here.

pub mod completions;
pub mod config;
pub mod count;
pub mod freq;
pub mod input;
pub mod rename;
