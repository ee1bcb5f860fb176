//! `go.mod` generation.

use goscaff_core::domain::{ConfigFormat, Database, Framework, Logger, ProjectConfig};

/// A direct module requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GoDependency {
    pub path: &'static str,
    pub version: &'static str,
}

const fn dep(path: &'static str, version: &'static str) -> GoDependency {
    GoDependency { path, version }
}

/// Direct requirements in `go.mod` order: framework, logger, stores,
/// observability, config format, then test tooling.
pub(crate) fn dependencies(config: &ProjectConfig) -> Vec<GoDependency> {
    let mut deps = Vec::new();

    match config.framework() {
        Framework::Stdlib => {}
        Framework::Chi => deps.push(dep("github.com/go-chi/chi/v5", "v5.0.11")),
        Framework::Gin => deps.push(dep("github.com/gin-gonic/gin", "v1.10.0")),
        Framework::Echo => deps.push(dep("github.com/labstack/echo/v4", "v4.11.4")),
        Framework::Fiber => deps.push(dep("github.com/gofiber/fiber/v2", "v2.52.0")),
    }

    match config.logger() {
        Logger::Slog => {}
        Logger::Zap => deps.push(dep("go.uber.org/zap", "v1.26.0")),
        Logger::Zerolog => deps.push(dep("github.com/rs/zerolog", "v1.32.0")),
    }

    for db in Database::ALL {
        if !config.has_database(db) {
            continue;
        }
        deps.push(match db {
            Database::Postgres => dep("github.com/jackc/pgx/v5", "v5.5.1"),
            Database::MySql => dep("github.com/go-sql-driver/mysql", "v1.7.1"),
            Database::MongoDb => dep("go.mongodb.org/mongo-driver", "v1.13.1"),
            Database::Redis => dep("github.com/redis/go-redis/v9", "v9.4.0"),
        });
    }

    if config.tracing_enabled() {
        deps.extend([
            dep("go.opentelemetry.io/otel", "v1.22.0"),
            dep("go.opentelemetry.io/otel/sdk", "v1.22.0"),
            dep(
                "go.opentelemetry.io/otel/exporters/otlp/otlptrace/otlptracegrpc",
                "v1.22.0",
            ),
        ]);
    }

    if config.metrics_enabled() {
        deps.push(dep("github.com/prometheus/client_golang", "v1.18.0"));
    }

    // encoding/json needs nothing.
    match config.config_format() {
        ConfigFormat::Env => deps.push(dep("github.com/joho/godotenv", "v1.5.1")),
        ConfigFormat::Yaml => deps.push(dep("gopkg.in/yaml.v3", "v3.0.1")),
        ConfigFormat::Toml => deps.push(dep("github.com/BurntSushi/toml", "v1.3.2")),
        ConfigFormat::Json => {}
    }

    deps.extend([
        dep("github.com/google/uuid", "v1.6.0"),
        dep("github.com/stretchr/testify", "v1.8.4"),
        dep("go.uber.org/mock", "v0.4.0"),
    ]);

    deps
}

pub(crate) fn render(config: &ProjectConfig) -> String {
    let requires: String = dependencies(config)
        .iter()
        .map(|d| format!("\t{} {}\n", d.path, d.version))
        .collect();

    format!(
        "module {}\n\ngo {}\n\nrequire (\n{requires})\n",
        config.module_path(),
        config.go_version()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(config: &ProjectConfig) -> Vec<&'static str> {
        dependencies(config).into_iter().map(|d| d.path).collect()
    }

    #[test]
    fn minimal_project() {
        let config = ProjectConfig::builder("svc")
            .tracing(false)
            .metrics(false)
            .build()
            .unwrap();

        assert_eq!(
            paths(&config),
            vec![
                "github.com/joho/godotenv",
                "github.com/google/uuid",
                "github.com/stretchr/testify",
                "go.uber.org/mock",
            ]
        );
    }

    #[test]
    fn header_and_block() {
        let config = ProjectConfig::builder("svc")
            .module_path("github.com/acme/svc")
            .framework(Framework::Chi)
            .build()
            .unwrap();
        let go_mod = render(&config);

        assert!(go_mod.starts_with("module github.com/acme/svc\n\ngo 1.23\n\nrequire (\n"));
        assert!(go_mod.contains("\tgithub.com/go-chi/chi/v5 v5.0.11\n"));
        assert!(go_mod.ends_with(")\n"));
    }

    #[test]
    fn full_stack_order() {
        let config = ProjectConfig::builder("svc")
            .framework(Framework::Gin)
            .logger(Logger::Zap)
            .databases([Database::Redis, Database::Postgres])
            .config_format(ConfigFormat::Yaml)
            .build()
            .unwrap();
        let deps = paths(&config);

        let pos = |p: &str| deps.iter().position(|d| *d == p).unwrap();
        assert!(pos("github.com/gin-gonic/gin") < pos("go.uber.org/zap"));
        assert!(pos("github.com/jackc/pgx/v5") < pos("github.com/redis/go-redis/v9"));
        assert!(pos("github.com/prometheus/client_golang") < pos("gopkg.in/yaml.v3"));
        assert!(!deps.contains(&"github.com/joho/godotenv"));
    }

    #[test]
    fn json_adds_no_format_dependency() {
        let config = ProjectConfig::builder("svc")
            .config_format(ConfigFormat::Json)
            .build()
            .unwrap();
        let deps = paths(&config);

        assert!(!deps.contains(&"github.com/joho/godotenv"));
        assert!(!deps.contains(&"gopkg.in/yaml.v3"));
        assert!(!deps.contains(&"github.com/BurntSushi/toml"));
    }
}
