//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `GOSCAFF_*` environment variables, `__` between sections
//!    (`GOSCAFF_DEFAULTS__FRAMEWORK=chi`)
//! 3. Config file: `--config`, else `.goscaff.toml` in the current
//!    directory, else the user config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".goscaff.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Selections used when `goscaff new` omits a flag.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Where and how projects are written.
    pub generation: GenerationConfig,
}

/// Choices are kept as strings and parsed by the core value objects when a
/// project is configured, so a typo reports the accepted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub framework: String,
    pub logger: String,
    pub config_format: String,
    pub go_version: String,
    /// Module paths become `<module_prefix>/<name>`.
    pub module_prefix: String,
    pub databases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci: Option<String>,
    pub tracing: bool,
    pub metrics: bool,
    pub docker: bool,
    pub env_sample: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub output_dir: PathBuf,
    /// Ask before writing into an existing project directory.
    pub overwrite_prompt: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            framework: "stdlib".into(),
            logger: "slog".into(),
            config_format: "env".into(),
            go_version: "1.23".into(),
            module_prefix: "github.com/user".into(),
            databases: Vec::new(),
            ci: None,
            tracing: true,
            metrics: true,
            docker: true,
            env_sample: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            overwrite_prompt: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
            }
            None => {
                builder = builder
                    .add_source(
                        File::from(Self::config_path().as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    )
                    .add_source(
                        File::from(Path::new(LOCAL_CONFIG_FILE))
                            .format(FileFormat::Toml)
                            .required(false),
                    );
            }
        }

        builder
            .add_source(
                Environment::with_prefix("GOSCAFF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("defaults.databases"),
            )
            .build()?
            .try_deserialize()
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.goscaff.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "goscaff", "goscaff")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Look up a dotted key, as printed by `goscaff config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let d = &self.defaults;
        let value = match key {
            "defaults.framework" => d.framework.clone(),
            "defaults.logger" => d.logger.clone(),
            "defaults.config_format" => d.config_format.clone(),
            "defaults.go_version" => d.go_version.clone(),
            "defaults.module_prefix" => d.module_prefix.clone(),
            "defaults.databases" => d.databases.join(","),
            "defaults.ci" => d.ci.clone().unwrap_or_else(|| "none".into()),
            "defaults.tracing" => d.tracing.to_string(),
            "defaults.metrics" => d.metrics.to_string(),
            "defaults.docker" => d.docker.to_string(),
            "defaults.env_sample" => d.env_sample.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "generation.output_dir" => self.generation.output_dir.display().to_string(),
            "generation.overwrite_prompt" => self.generation.overwrite_prompt.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key understood by [`AppConfig::get`].
    pub const KEYS: [&'static str; 15] = [
        "defaults.framework",
        "defaults.logger",
        "defaults.config_format",
        "defaults.go_version",
        "defaults.module_prefix",
        "defaults.databases",
        "defaults.ci",
        "defaults.tracing",
        "defaults.metrics",
        "defaults.docker",
        "defaults.env_sample",
        "output.no_color",
        "output.format",
        "generation.output_dir",
        "generation.overwrite_prompt",
    ];
}
