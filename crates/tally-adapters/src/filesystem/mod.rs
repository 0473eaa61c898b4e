//! Filesystem adapters for the `tally_core` `Filesystem` port.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
