//! [`Filesystem`](goscaff_core::application::Filesystem) implementations.
//!
//! [`LocalFilesystem`] writes to disk. [`MemoryFilesystem`] records writes
//! in a map and backs dry runs and renderer tests.

mod local;
mod memory;

pub use self::{local::LocalFilesystem, memory::MemoryFilesystem};
