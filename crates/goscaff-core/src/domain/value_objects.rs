//! Domain value objects: the closed sets of choices a generated service is
//! built from.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each one knows its canonical string (`as_str`), a human label
//! (`display_name`) used in summaries and the generated README, and how to
//! parse itself from user input.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant and its entry in `ALL`
//! 2. Add the `as_str`, `display_name` and `FromStr` arms
//! 3. Teach the Go renderer what to emit for it

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn names<T: Copy>(all: &[T], as_str: fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(as_str).collect()
}

// ── ConfigFormat ──────────────────────────────────────────────────────────────

/// On-disk representation of the generated service's runtime configuration.
///
/// `Env` is a flat struct filled from environment variables. The three
/// structured formats share one nested document shape and differ only in
/// their serialization tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    #[default]
    Env,
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    pub const ALL: [ConfigFormat; 4] = [Self::Env, Self::Yaml, Self::Json, Self::Toml];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Env => "Environment variables",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }

    /// Whether configuration lives in a nested document read through
    /// generated accessor methods.
    pub const fn is_structured(self) -> bool {
        !matches!(self, Self::Env)
    }

    /// File extension of the config document, `None` for `Env`.
    pub const fn extension(self) -> Option<&'static str> {
        match self {
            Self::Env => None,
            Self::Yaml => Some("yaml"),
            Self::Json => Some("json"),
            Self::Toml => Some("toml"),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // Unset behaves exactly like env.
            "" | "env" | "dotenv" => Ok(Self::Env),
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(DomainError::unsupported(
                "config format",
                other,
                &names(&Self::ALL, Self::as_str),
            )),
        }
    }
}

// ── Framework ─────────────────────────────────────────────────────────────────

/// HTTP framework the generated server is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    Stdlib,
    Chi,
    Gin,
    Echo,
    Fiber,
}

impl Framework {
    pub const ALL: [Framework; 5] = [Self::Stdlib, Self::Chi, Self::Gin, Self::Echo, Self::Fiber];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stdlib => "stdlib",
            Self::Chi => "chi",
            Self::Gin => "gin",
            Self::Echo => "echo",
            Self::Fiber => "fiber",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Stdlib => "net/http (standard library)",
            Self::Chi => "Chi",
            Self::Gin => "Gin",
            Self::Echo => "Echo",
            Self::Fiber => "Fiber",
        }
    }

    /// Frameworks whose handlers take a framework context instead of
    /// `http.ResponseWriter, *http.Request`.
    pub const fn has_native_context(self) -> bool {
        matches!(self, Self::Gin | Self::Echo | Self::Fiber)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "stdlib" | "net/http" | "nethttp" => Ok(Self::Stdlib),
            "chi" => Ok(Self::Chi),
            "gin" => Ok(Self::Gin),
            "echo" => Ok(Self::Echo),
            "fiber" => Ok(Self::Fiber),
            other => Err(DomainError::unsupported(
                "framework",
                other,
                &names(&Self::ALL, Self::as_str),
            )),
        }
    }
}

// ── Logger ────────────────────────────────────────────────────────────────────

/// Structured logging library used by the generated service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Logger {
    #[default]
    Slog,
    Zap,
    Zerolog,
}

impl Logger {
    pub const ALL: [Logger; 3] = [Self::Slog, Self::Zap, Self::Zerolog];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Slog => "slog",
            Self::Zap => "zap",
            Self::Zerolog => "zerolog",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Slog => "slog (standard library)",
            Self::Zap => "Zap",
            Self::Zerolog => "Zerolog",
        }
    }

    /// Go type of the logger value passed around the generated code.
    pub const fn go_type(&self) -> &'static str {
        match self {
            Self::Slog => "*slog.Logger",
            Self::Zap => "*zap.Logger",
            Self::Zerolog => "*zerolog.Logger",
        }
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Logger {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "slog" => Ok(Self::Slog),
            "zap" => Ok(Self::Zap),
            "zerolog" => Ok(Self::Zerolog),
            other => Err(DomainError::unsupported(
                "logger",
                other,
                &names(&Self::ALL, Self::as_str),
            )),
        }
    }
}

// ── Database ──────────────────────────────────────────────────────────────────

/// A backing store the generated service connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Postgres,
    #[serde(rename = "mysql")]
    MySql,
    #[serde(rename = "mongodb")]
    MongoDb,
    Redis,
}

impl Database {
    pub const ALL: [Database; 4] = [Self::Postgres, Self::MySql, Self::MongoDb, Self::Redis];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
            Self::MongoDb => "mongodb",
            Self::Redis => "redis",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Postgres => "PostgreSQL",
            Self::MySql => "MySQL",
            Self::MongoDb => "MongoDB",
            Self::Redis => "Redis",
        }
    }

    pub const fn is_sql(self) -> bool {
        matches!(self, Self::Postgres | Self::MySql)
    }

    pub const fn is_cache(self) -> bool {
        matches!(self, Self::Redis)
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Database {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" => Ok(Self::MySql),
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "redis" => Ok(Self::Redis),
            other => Err(DomainError::unsupported(
                "database",
                other,
                &names(&Self::ALL, Self::as_str),
            )),
        }
    }
}

// ── CiProvider ────────────────────────────────────────────────────────────────

/// Hosted CI system the generated pipeline targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CiProvider {
    GitHub,
    GitLab,
}

impl CiProvider {
    pub const ALL: [CiProvider; 2] = [Self::GitHub, Self::GitLab];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::GitHub => "GitHub Actions",
            Self::GitLab => "GitLab CI",
        }
    }
}

impl fmt::Display for CiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CiProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "github" | "gh" | "github-actions" => Ok(Self::GitHub),
            "gitlab" | "gl" | "gitlab-ci" => Ok(Self::GitLab),
            other => Err(DomainError::unsupported(
                "CI provider",
                other,
                &names(&Self::ALL, Self::as_str),
            )),
        }
    }
}

// ── GoVersion ─────────────────────────────────────────────────────────────────

/// Go toolchain version written to `go.mod` and the Docker builder image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum GoVersion {
    #[serde(rename = "1.21")]
    V1_21,
    #[serde(rename = "1.22")]
    V1_22,
    #[default]
    #[serde(rename = "1.23")]
    V1_23,
    #[serde(rename = "1.24")]
    V1_24,
}

impl GoVersion {
    pub const ALL: [GoVersion; 4] = [Self::V1_21, Self::V1_22, Self::V1_23, Self::V1_24];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1_21 => "1.21",
            Self::V1_22 => "1.22",
            Self::V1_23 => "1.23",
            Self::V1_24 => "1.24",
        }
    }
}

impl fmt::Display for GoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("go").unwrap_or(s);
        match s {
            "" => Err(DomainError::GoVersionRequired),
            "1.21" => Ok(Self::V1_21),
            "1.22" => Ok(Self::V1_22),
            "1.23" => Ok(Self::V1_23),
            "1.24" => Ok(Self::V1_24),
            other => Err(DomainError::unsupported(
                "Go version",
                other,
                &names(&Self::ALL, Self::as_str),
            )),
        }
    }
}
