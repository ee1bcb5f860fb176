//! Traits the generation service depends on.
//!
//! Only driven ports exist: the CLI calls [`GeneratorService`] directly.
//!
//! [`GeneratorService`]: crate::application::GeneratorService

pub mod output;

pub use output::{Filesystem, ProjectRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockProjectRenderer};
