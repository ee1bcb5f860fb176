//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use goscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GoscaffError, GoscaffResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GoscaffResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GoscaffResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> GoscaffResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GoscaffError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_removes_nested_trees() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = tmp.path().join("svc");

        fs.create_dir_all(&root.join("internal/config")).unwrap();
        fs.write_file(&root.join("internal/config/config.go"), "package config\n")
            .unwrap();

        assert!(fs.exists(&root.join("internal/config/config.go")));
        assert_eq!(
            std::fs::read_to_string(root.join("internal/config/config.go")).unwrap(),
            "package config\n"
        );

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }

    #[test]
    fn write_without_parent_reports_path() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("missing/dir/file.go");

        let err = LocalFilesystem::new()
            .write_file(&target, "x")
            .unwrap_err();

        match err {
            GoscaffError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, target);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
