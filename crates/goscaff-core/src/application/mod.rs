//! Generation use case.
//!
//! [`GeneratorService`] asks a [`ProjectRenderer`] for the planned tree and
//! hands each entry to a [`Filesystem`]. Neither port knows about the
//! other, so dry runs swap in an in-memory filesystem and tests swap in
//! mocks.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{Filesystem, ProjectRenderer};
pub use services::{GenerationReport, GeneratorService};
