//! [`CliError`] and how it reaches the terminal.
//!
//! Core errors are wrapped, never re-worded: the message a user sees for a
//! bad `--framework` is the one `goscaff-core` produced, followed by the
//! suggestions attached to it.

use std::error::Error as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use goscaff_core::domain::{DomainError, ErrorCategory as DomainCategory};
use goscaff_core::error::{ErrorCategory as CoreCategory, GoscaffError};

use crate::config::{AppConfig, LOCAL_CONFIG_FILE};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that the core never saw (paths, flag combinations).
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The requested project does not validate.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] DomainError),

    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// A config file could not be read, parsed or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Generation failed: {0}")]
    Core(#[from] GoscaffError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user answered no at a prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// A capability compiled out of this build.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfiguration(err) => err.suggestions(),
            Self::Core(err) => err.suggestions(),
            Self::InvalidInput { .. } => vec!["Run `goscaff new --help` for the accepted flags".into()],
            Self::ProjectExists { path } => vec![
                format!("'{}' is already there", path.display()),
                "Use --force to write into it anyway".into(),
                "Or pick another name or --output directory".into(),
            ],
            Self::ConfigError { .. } => vec![
                format!("Inspect {} or the local {LOCAL_CONFIG_FILE}", AppConfig::config_path().display()),
                "`goscaff init --force` rewrites the defaults".into(),
                "GOSCAFF_* environment variables also override the file".into(),
            ],
            Self::IoError { .. } => vec!["Check permissions and free disk space".into()],
            Self::Cancelled => vec!["Nothing was written".into()],
            Self::FeatureNotAvailable { feature } => vec![
                format!("Rebuild with `--features {feature}`"),
                "Or pass --force to write without asking".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfiguration(err) => err.category().into(),
            Self::Core(err) => err.category().into(),
            Self::InvalidInput { .. } | Self::ProjectExists { .. } | Self::Cancelled => {
                ErrorCategory::UserError
            }
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Process exit status: 2 user error, 3 not found, 4 configuration,
    /// 1 anything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Multi-line report for stderr. `verbose` adds the source chain and
    /// drops the hint pointing at `--verbose`.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| -> String {
            if !color {
                return text.to_owned();
            }
            match style {
                Style::Error => text.red().bold().to_string(),
                Style::Heading => text.yellow().bold().to_string(),
                Style::Dim => text.dimmed().to_string(),
            }
        };

        let mut out = format!("\n{} {self}\n", paint("Error:", Style::Error));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&paint(&format!("  Caused by: {err}"), Style::Dim));
                out.push('\n');
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", paint("Suggestions:", Style::Heading)));
            for line in suggestions {
                out.push_str(&format!("  {line}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", Style::Dim)
            ));
        }
        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(category = ?self.category(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(category = ?self.category(), "{self}")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "caused by");
        }
    }
}

#[derive(Clone, Copy)]
enum Style {
    Error,
    Heading,
    Dim,
}

/// Buckets that decide the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl From<DomainCategory> for ErrorCategory {
    fn from(category: DomainCategory) -> Self {
        match category {
            DomainCategory::Validation | DomainCategory::Compatibility => Self::UserError,
            DomainCategory::NotFound => Self::NotFound,
            DomainCategory::Internal => Self::Internal,
        }
    }
}

impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Validation | CoreCategory::Compatibility => Self::UserError,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::Configuration => Self::Configuration,
            CoreCategory::Internal => Self::Internal,
        }
    }
}

/// Attaches a message to foreign errors at the call site.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: f().into(),
            source: Some(Box::new(e)),
        })
    }
}
