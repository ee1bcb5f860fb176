//! What a goscaff project is, independent of how it gets written.
//!
//! Everything here is pure: validated choices ([`value_objects`]), the
//! immutable [`ProjectConfig`], the planned [`ProjectStructure`] and the
//! [`field_ref`] resolver that turns a logical setting into the Go
//! expression reading it. No module in this tree touches the filesystem.

pub mod entities;
pub mod error;
pub mod field_ref;
pub mod value_objects;

mod validation;

pub use entities::{
    DirectoryToCreate, FileToWrite, FsEntry, ProjectConfig, ProjectConfigBuilder,
    ProjectStructure, RenderContext, placeholder_for,
};

pub use error::{DomainError, ErrorCategory};

pub use field_ref::{CONFIG_RECEIVER, ConfigField, FieldResolver, resolve};

pub use value_objects::{CiProvider, ConfigFormat, Database, Framework, GoVersion, Logger};

pub use validation::DomainValidator;
