pub mod project_config;
pub mod project_structure;
pub mod render_context;

pub use crate::domain::DomainError;
pub use project_config::{ProjectConfig, ProjectConfigBuilder};
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use render_context::{RenderContext, placeholder_for};
