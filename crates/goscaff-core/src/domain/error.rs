// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through the CLI error chain)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Project configuration
    // ========================================================================
    #[error("project name is required")]
    ProjectNameRequired,

    #[error(
        "project name must start with lowercase letter and contain only lowercase letters, numbers, hyphens, and underscores (got '{name}')"
    )]
    InvalidProjectName { name: String },

    #[error("module path is required")]
    ModulePathRequired,

    #[error("module path must be a valid Go module path (got '{path}')")]
    InvalidModulePath { path: String },

    #[error("Go version is required")]
    GoVersionRequired,

    /// Raised for any closed-set choice (framework, logger, database, ...).
    #[error("{kind} must be one of: {} (got '{value}')", .allowed.join(", "))]
    UnsupportedChoice {
        kind: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    // ========================================================================
    // Field resolution (strict callers only)
    // ========================================================================
    #[error("'{field}' is not a known configuration field")]
    UnknownConfigField { field: String },

    // ========================================================================
    // Project structure
    // ========================================================================
    #[error("Project structure is empty")]
    EmptyStructure,

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },
}

impl DomainError {
    pub(crate) fn unsupported(
        kind: &'static str,
        value: impl Into<String>,
        allowed: &[&'static str],
    ) -> Self {
        Self::UnsupportedChoice {
            kind,
            value: value.into(),
            allowed: allowed.to_vec(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectNameRequired => vec![
                "Pass a project name: goscaff new my-service".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Use lowercase letters, digits, '-' or '_'".into(),
                "Start the name with a letter, e.g. 'order-api'".into(),
            ],
            Self::ModulePathRequired | Self::InvalidModulePath { .. } => vec![
                "Module paths look like: github.com/acme/order-api".into(),
                "Set one explicitly with --module".into(),
            ],
            Self::GoVersionRequired => vec!["Pass --go-version, e.g. 1.23".into()],
            Self::UnsupportedChoice { kind, allowed, .. } => vec![
                format!("Supported {kind} values: {}", allowed.join(", ")),
                "Run: goscaff version to list every supported choice".into(),
            ],
            Self::UnknownConfigField { .. } => vec![
                "Known fields: Port, Environment, LogLevel, PostgresURL, MySQLURL, MongoURL, RedisURL, OTLPEndpoint, ServiceName".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectNameRequired
            | Self::InvalidProjectName { .. }
            | Self::ModulePathRequired
            | Self::InvalidModulePath { .. }
            | Self::GoVersionRequired => ErrorCategory::Validation,
            Self::UnsupportedChoice { .. } => ErrorCategory::Compatibility,
            Self::UnknownConfigField { .. } => ErrorCategory::NotFound,
            Self::EmptyStructure
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}
