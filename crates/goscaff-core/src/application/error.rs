use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Failures while rendering or writing a project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    #[error("Project rendering failed: {reason}")]
    RenderingFailed { reason: String },

    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Another thread panicked while holding the in-memory tree.
    #[error("Filesystem state lock poisoned")]
    FilesystemLock,

    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Cleanup after a failed write also failed; the root is left behind.
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("{} is already there", path.display()),
                "Use --force to write into it anyway".into(),
                "Or pick another name or --output directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Check write permission for {}", path.display()),
                "Make sure the output directory is on a writable volume".into(),
            ],
            Self::RollbackFailed { path, .. } => {
                vec![format!("Delete {} by hand before retrying", path.display())]
            }
            Self::FilesystemLock => vec!["Re-run the command".into()],
            Self::RenderingFailed { .. } => {
                vec!["Re-run with -vv to see which file failed to render".into()]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::FilesystemLock
            | Self::RollbackFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_project_is_a_user_error() {
        let err = ApplicationError::ProjectExists {
            path: PathBuf::from("orders"),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn rollback_failure_names_the_leftover_root() {
        let err = ApplicationError::RollbackFailed {
            path: PathBuf::from("/tmp/orders"),
            reason: "busy".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.suggestions(), ["Delete /tmp/orders by hand before retrying"]);
    }
}
