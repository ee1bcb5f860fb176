use crate::domain::{entities::ProjectStructure, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// `^[a-z][a-z0-9_-]*$`
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Err(DomainError::ProjectNameRequired);
        };

        let valid = first.is_ascii_lowercase()
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidProjectName { name: name.into() })
        }
    }

    /// A Go module path needs at least two elements, and the first one is a
    /// host (it contains a dot), e.g. `github.com/acme/svc`.
    pub fn validate_module_path(path: &str) -> Result<(), DomainError> {
        if path.trim().is_empty() {
            return Err(DomainError::ModulePathRequired);
        }

        let invalid = || DomainError::InvalidModulePath { path: path.into() };

        let mut elements = path.split('/');
        let host = elements.next().ok_or_else(invalid)?;
        let rest: Vec<&str> = elements.collect();

        if !host.contains('.') || host.starts_with('.') || host.ends_with('.') {
            return Err(invalid());
        }

        if rest.is_empty() || rest.iter().any(|e| e.is_empty()) {
            return Err(invalid());
        }

        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~');
        if !path.split('/').all(|e| e.chars().all(allowed)) {
            return Err(invalid());
        }

        Ok(())
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
