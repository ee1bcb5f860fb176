//! Crate-wide error type.
//!
//! [`GoscaffError`] is what every public operation in this crate returns.
//! It folds domain rule violations and generation failures into one enum so
//! front ends only match on a single type.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

#[derive(Debug, Error, Clone)]
pub enum GoscaffError {
    /// The requested project violates a domain rule.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Rendering or writing the project failed.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A broken invariant inside goscaff itself.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GoscaffError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { .. } => {
                vec!["Run `goscaff config list` to inspect the effective settings".into()]
            }
            Self::Internal { .. } => vec![
                "Re-run with -vv and include the log output when reporting the problem".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category().into(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Coarse classification used to pick exit codes and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Configuration,
    Internal,
}

impl From<domain::ErrorCategory> for ErrorCategory {
    fn from(category: domain::ErrorCategory) -> Self {
        match category {
            domain::ErrorCategory::Validation => Self::Validation,
            domain::ErrorCategory::Compatibility => Self::Compatibility,
            domain::ErrorCategory::NotFound => Self::NotFound,
            domain::ErrorCategory::Internal => Self::Internal,
        }
    }
}

pub type GoscaffResult<T> = Result<T, GoscaffError>;
