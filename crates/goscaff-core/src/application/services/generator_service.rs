//! Generator Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Render the project tree for a configuration
//! 2. Validate the tree
//! 3. Write it to the filesystem, rolling back on failure
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProjectRenderer},
    },
    domain::{DomainValidator as validator, FsEntry, ProjectConfig, ProjectStructure},
    error::GoscaffResult,
};

/// What a successful generation wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub root: PathBuf,
    /// Relative to `root`, in write order.
    pub directories: Vec<PathBuf>,
    /// Relative to `root`, in write order.
    pub files: Vec<PathBuf>,
}

impl GenerationReport {
    fn from_structure(structure: &ProjectStructure) -> Self {
        Self {
            root: structure.root().to_path_buf(),
            directories: structure.directories().map(|d| d.path.clone()).collect(),
            files: structure.files().map(|f| f.path.clone()).collect(),
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }
}

/// Main generation service.
pub struct GeneratorService {
    renderer: Box<dyn ProjectRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GeneratorService {
    /// Create a new generator service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use goscaff_core::application::GeneratorService;
    ///
    /// let service = GeneratorService::new(
    ///     Box::new(renderer),   // impl ProjectRenderer
    ///     Box::new(filesystem), // impl Filesystem
    /// );
    /// ```
    pub fn new(renderer: Box<dyn ProjectRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Directory the project is generated into.
    pub fn project_root(config: &ProjectConfig, output_dir: &Path) -> PathBuf {
        output_dir.join(config.project_name())
    }

    /// Render and validate the project tree without touching the filesystem.
    #[instrument(
        skip_all,
        fields(
            project = %config.project_name(),
            format = %config.config_format()
        )
    )]
    pub fn plan(&self, config: &ProjectConfig, output_dir: &Path) -> GoscaffResult<ProjectStructure> {
        let root = Self::project_root(config, output_dir);
        let structure = self.renderer.render(config, &root)?;

        validator::validate_project_structure(&structure)?;

        debug!(
            files = structure.files().count(),
            directories = structure.directories().count(),
            "Project planned"
        );
        Ok(structure)
    }

    /// Generate a project into `output_dir/<project_name>`.
    ///
    /// Fails with `ProjectExists` when the root is already present, unless
    /// `overwrite` is set.
    #[instrument(
        skip_all,
        fields(
            project = %config.project_name(),
            output_path = %output_dir.display(),
            overwrite = overwrite
        )
    )]
    pub fn generate(
        &self,
        config: &ProjectConfig,
        output_dir: &Path,
        overwrite: bool,
    ) -> GoscaffResult<GenerationReport> {
        info!(
            framework = %config.framework(),
            logger = %config.logger(),
            format = %config.config_format(),
            "Generating Go service"
        );

        let structure = self.plan(config, output_dir)?;
        self.write_structure(&structure, overwrite)?;

        let report = GenerationReport::from_structure(&structure);
        info!(
            files = report.file_count(),
            directories = report.directory_count(),
            "Generation completed successfully"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write project structure to filesystem with rollback on failure.
    fn write_structure(&self, structure: &ProjectStructure, overwrite: bool) -> GoscaffResult<()> {
        let root = structure.root();
        let root_existed = self.filesystem.exists(root);

        if root_existed && !overwrite {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        match self.write_all(structure) {
            Ok(()) => {
                info!("Successfully wrote all files");
                Ok(())
            }
            Err(e) if root_existed => {
                warn!(
                    path = %root.display(),
                    "Write failed inside a pre-existing directory, leaving it in place"
                );
                Err(e)
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(root);
                Err(e)
            }
        }
    }

    /// Write all entries in the structure.
    fn write_all(&self, structure: &ProjectStructure) -> GoscaffResult<()> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %file.path.display(), bytes = file.size(), "Wrote file");
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
