//! Concrete ports for `goscaff-core`.
//!
//! * [`GoServiceRenderer`] turns a `ProjectConfig` into the Go service tree.
//! * [`LocalFilesystem`] and [`MemoryFilesystem`] persist it.

pub mod filesystem;
pub mod renderer;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::GoServiceRenderer;
