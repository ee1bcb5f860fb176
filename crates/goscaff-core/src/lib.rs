//! Core of goscaff, a generator for Go HTTP services.
//!
//! The crate is split in two layers:
//!
//! * [`domain`] validates a [`ProjectConfig`](domain::ProjectConfig) and
//!   owns the field reference resolver, the single place that decides how
//!   generated Go code reads a configuration value (`cfg.Port` for `.env`
//!   projects, the `cfg.GetPort()` accessor for YAML, TOML and JSON ones).
//! * [`application`] drives generation through two ports, a
//!   [`ProjectRenderer`](application::ProjectRenderer) producing the file
//!   tree and a [`Filesystem`](application::Filesystem) writing it.
//!
//! Renderers and filesystems live in `goscaff-adapters`; the `goscaff`
//! binary wires them together.
//!
//! ```rust,ignore
//! use goscaff_core::prelude::*;
//!
//! let config = ProjectConfig::builder("order-api")
//!     .framework(Framework::Chi)
//!     .config_format(ConfigFormat::Yaml)
//!     .build()?;
//! assert_eq!(resolve("Port", config.config_format()), "cfg.GetPort()");
//!
//! let service = GeneratorService::new(Box::new(renderer), Box::new(filesystem));
//! let report = service.generate(&config, "./out".as_ref(), false)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Everything a front end needs to configure and generate a project.
pub mod prelude {
    pub use crate::application::{Filesystem, GenerationReport, GeneratorService, ProjectRenderer};
    pub use crate::domain::{
        CiProvider, ConfigField, ConfigFormat, Database, FieldResolver, Framework, GoVersion,
        Logger, ProjectConfig, ProjectStructure, RenderContext, resolve,
    };
    pub use crate::error::{GoscaffError, GoscaffResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
