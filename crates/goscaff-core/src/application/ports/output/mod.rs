use std::path::Path;

use crate::domain::{ProjectConfig, ProjectStructure};
use crate::error::GoscaffResult;

/// Where generated entries end up.
///
/// Paths handed to these methods are absolute. `goscaff-adapters` ships
/// `LocalFilesystem` for real runs and `MemoryFilesystem` for dry runs.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Creates `path` and any missing parents. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> GoscaffResult<()>;

    /// Writes `content` to `path`, replacing an existing file. The parent
    /// must already exist.
    fn write_file(&self, path: &Path, content: &str) -> GoscaffResult<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Used only to roll back a project root created by the failed run.
    fn remove_dir_all(&self, path: &Path) -> GoscaffResult<()>;
}

/// Produces the complete file tree for one project.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectRenderer: Send + Sync {
    /// Entries in the returned structure are relative to `root`; the
    /// service joins them before touching the [`Filesystem`].
    fn render(&self, config: &ProjectConfig, root: &Path) -> GoscaffResult<ProjectStructure>;
}
