//! Field Reference Resolver.
//!
//! Every generator that needs a configuration value in emitted Go code asks
//! this module for the access expression instead of hard-coding one. The
//! expression depends only on the [`ConfigFormat`] chosen for the run:
//!
//! | Format              | `Port`            | `PostgresURL`             |
//! |---------------------|-------------------|---------------------------|
//! | `env` (or empty)    | `cfg.Port`        | `cfg.PostgresURL`         |
//! | `yaml`/`json`/`toml`| `cfg.GetPort()`   | `cfg.GetPostgresURL()`    |
//!
//! Structured formats read through accessor methods generated onto the
//! nested `Config` type, so all three resolve identically.
//!
//! [`resolve`] is total: a name outside the catalog degrades to the flat
//! `cfg.<name>` form. Callers must not special-case unknown fields. Use
//! [`FieldResolver::strict`] during development to catch typos with a debug
//! assertion, or [`FieldResolver::try_resolve`] to get an explicit error.

use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::value_objects::ConfigFormat;

/// Receiver name used for the config value in every generated file.
pub const CONFIG_RECEIVER: &str = "cfg";

// ── ConfigField ───────────────────────────────────────────────────────────────

/// The closed catalog of configuration fields generated code may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Port,
    Environment,
    LogLevel,
    PostgresUrl,
    MySqlUrl,
    MongoUrl,
    RedisUrl,
    OtlpEndpoint,
    ServiceName,
}

impl ConfigField {
    pub const ALL: [ConfigField; 9] = [
        Self::Port,
        Self::Environment,
        Self::LogLevel,
        Self::PostgresUrl,
        Self::MySqlUrl,
        Self::MongoUrl,
        Self::RedisUrl,
        Self::OtlpEndpoint,
        Self::ServiceName,
    ];

    /// Logical name, identical to the flat Go struct field.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Port => "Port",
            Self::Environment => "Environment",
            Self::LogLevel => "LogLevel",
            Self::PostgresUrl => "PostgresURL",
            Self::MySqlUrl => "MySQLURL",
            Self::MongoUrl => "MongoURL",
            Self::RedisUrl => "RedisURL",
            Self::OtlpEndpoint => "OTLPEndpoint",
            Self::ServiceName => "ServiceName",
        }
    }

    /// Accessor method generated for structured formats.
    pub const fn accessor(&self) -> &'static str {
        match self {
            Self::Port => "GetPort",
            Self::Environment => "GetEnvironment",
            Self::LogLevel => "GetLogLevel",
            Self::PostgresUrl => "GetPostgresURL",
            Self::MySqlUrl => "GetMySQLURL",
            Self::MongoUrl => "GetMongoURL",
            Self::RedisUrl => "GetRedisURL",
            Self::OtlpEndpoint => "GetOTLPEndpoint",
            Self::ServiceName => "GetServiceName",
        }
    }

    /// Exact, case-sensitive lookup. Go identifiers are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── resolve ───────────────────────────────────────────────────────────────────

/// Returns the Go expression that reads `field` from `cfg` under `format`.
///
/// Never fails. Unknown names fall back to `cfg.<field>` for every format.
pub fn resolve(field: &str, format: ConfigFormat) -> String {
    match (format.is_structured(), ConfigField::from_name(field)) {
        (true, Some(known)) => format!("{CONFIG_RECEIVER}.{}()", known.accessor()),
        _ => format!("{CONFIG_RECEIVER}.{field}"),
    }
}

// ── FieldResolver ─────────────────────────────────────────────────────────────

/// Resolver bound to one generation run's format.
///
/// Stateless apart from its two settings; clone or copy freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldResolver {
    format: ConfigFormat,
    strict: bool,
}

impl FieldResolver {
    pub const fn new(format: ConfigFormat) -> Self {
        Self {
            format,
            strict: false,
        }
    }

    /// Same output as [`FieldResolver::new`], but debug builds panic when a
    /// name outside the catalog is resolved.
    pub const fn strict(format: ConfigFormat) -> Self {
        Self {
            format,
            strict: true,
        }
    }

    pub const fn format(&self) -> ConfigFormat {
        self.format
    }

    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Permissive lookup by name.
    pub fn resolve(&self, field: &str) -> String {
        if self.strict {
            debug_assert!(
                ConfigField::from_name(field).is_some(),
                "unknown configuration field '{field}'"
            );
        }
        resolve(field, self.format)
    }

    /// Typed lookup. Generators use this so a typo is a compile error.
    pub fn field(&self, field: ConfigField) -> String {
        resolve(field.name(), self.format)
    }

    /// Lookup that reports names outside the catalog instead of degrading.
    pub fn try_resolve(&self, field: &str) -> Result<String, DomainError> {
        ConfigField::from_name(field)
            .map(|known| self.field(known))
            .ok_or_else(|| DomainError::UnknownConfigField {
                field: field.to_owned(),
            })
    }
}
