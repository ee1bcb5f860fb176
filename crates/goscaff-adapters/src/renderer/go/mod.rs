//! Go service renderer.
//!
//! Turns a [`ProjectConfig`] into the full tree of a runnable Go service.
//! Every file that reads configuration goes through the `CFG_*` variables
//! of the [`RenderContext`], so the choice between `cfg.Port` and
//! `cfg.GetPort()` is made in exactly one place.

mod ci;
mod config;
mod config_example;
mod docker;
mod entrypoint;
mod golog;
mod gomod;
mod handlers;
mod imports;
mod middleware;
mod observability;
mod project_files;
mod server;
mod storage;

use std::path::Path;

use goscaff_core::{
    application::ports::ProjectRenderer,
    domain::{CiProvider, ProjectConfig, ProjectStructure, RenderContext},
    error::GoscaffResult,
};
use tracing::{debug, instrument};

/// Renders Go services from a project configuration.
#[derive(Debug, Clone, Copy)]
pub struct GoServiceRenderer;

impl GoServiceRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoServiceRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectRenderer for GoServiceRenderer {
    #[instrument(
        skip_all,
        fields(
            project = %config.project_name(),
            framework = %config.framework(),
            format = %config.config_format()
        )
    )]
    fn render(&self, config: &ProjectConfig, root: &Path) -> GoscaffResult<ProjectStructure> {
        let ctx = RenderContext::for_project(config);
        let name = config.project_name();
        let mut structure = ProjectStructure::new(root);

        for dir in directories(config) {
            structure.add_directory(dir);
        }

        structure.add_file("go.mod", gomod::render(config));
        structure.add_file(format!("cmd/{name}/main.go"), entrypoint::render(config, &ctx));
        structure.add_file("internal/config/config.go", config::render(config));
        structure.add_file("internal/server/server.go", server::render(config, &ctx));
        structure.add_file("internal/handlers/handlers.go", handlers::render(config, &ctx));
        structure.add_file("internal/middleware/middleware.go", middleware::render(config));
        structure.add_file(
            "internal/observability/observability.go",
            observability::render(config, &ctx),
        );
        structure.add_file(
            "internal/observability/logger.go",
            observability::render_logger(config, &ctx),
        );

        for db in config.databases() {
            let (path, content) = storage::render(*db, &ctx);
            structure.add_file(path, content);
        }

        structure.add_file("Makefile", project_files::makefile(config, &ctx));
        structure.add_file(".env.example", project_files::env_example(config));

        if let Some((filename, content)) = config_example::render(config)? {
            structure.add_file(filename, content);
        }

        structure.add_file("README.md", project_files::readme(config));

        if config.docker_included() {
            structure.add_file("Dockerfile", docker::dockerfile(config, &ctx));
            structure.add_file("docker-compose.yml", docker::compose(config));
            structure.add_file(".dockerignore", docker::DOCKERIGNORE);
        }

        if let Some((path, content)) = ci::render(config, &ctx) {
            structure.add_file(path, content);
        }

        structure.add_file(".gitignore", project_files::GITIGNORE);

        structure.add_file(
            "internal/handlers/handlers_test.go",
            go_tests::handler_tests(config, &ctx),
        );
        if let Some(content) = go_tests::mock_interfaces(config) {
            structure.add_file("internal/mocks/interfaces.go", content);
        }
        if let Some(content) = go_tests::database_tests(config) {
            structure.add_file("internal/database/database_test.go", content);
        }
        structure.add_file("docs/TESTING.md", go_tests::TESTING_GUIDE);

        debug!(entries = structure.entry_count(), "Rendered Go service");
        Ok(structure)
    }
}

fn directories(config: &ProjectConfig) -> Vec<String> {
    let mut dirs = vec![
        format!("cmd/{}", config.project_name()),
        "internal/config".to_string(),
        "internal/server".to_string(),
        "internal/handlers".to_string(),
        "internal/middleware".to_string(),
        "internal/observability".to_string(),
        "pkg".to_string(),
    ];
    if config.needs_database_package() {
        dirs.push("internal/database".to_string());
    }
    if config.needs_cache() {
        dirs.push("internal/cache".to_string());
    }
    dirs.push("internal/mocks".to_string());
    dirs.push("docs".to_string());
    if config.ci() == Some(CiProvider::GitHub) {
        dirs.push(".github/workflows".to_string());
    }
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use goscaff_core::domain::{ConfigField, ConfigFormat, Database, Framework, Logger};

    fn render(config: &ProjectConfig) -> ProjectStructure {
        GoServiceRenderer::new()
            .render(config, Path::new("/tmp/out/svc"))
            .unwrap()
    }

    fn content<'a>(structure: &'a ProjectStructure, path: &str) -> &'a str {
        &structure
            .file(path)
            .unwrap_or_else(|| panic!("missing {path}"))
            .content
    }

    fn all_go(structure: &ProjectStructure) -> String {
        structure
            .files()
            .filter(|f| f.path.extension().is_some_and(|e| e == "go"))
            .map(|f| f.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn minimal_project_layout() {
        let config = ProjectConfig::builder("svc")
            .tracing(false)
            .metrics(false)
            .docker(false)
            .build()
            .unwrap();
        let structure = render(&config);
        structure.validate().unwrap();

        let files: Vec<_> = structure
            .files()
            .map(|f| f.path.display().to_string())
            .collect();
        assert_eq!(
            files,
            [
                "go.mod",
                "cmd/svc/main.go",
                "internal/config/config.go",
                "internal/server/server.go",
                "internal/handlers/handlers.go",
                "internal/middleware/middleware.go",
                "internal/observability/observability.go",
                "internal/observability/logger.go",
                "Makefile",
                ".env.example",
                "README.md",
                ".gitignore",
                "internal/handlers/handlers_test.go",
                "docs/TESTING.md",
            ]
        );

        let dirs: Vec<_> = structure
            .directories()
            .map(|d| d.path.display().to_string())
            .collect();
        assert_eq!(
            dirs,
            [
                "cmd/svc",
                "internal/config",
                "internal/server",
                "internal/handlers",
                "internal/middleware",
                "internal/observability",
                "pkg",
                "internal/mocks",
                "docs",
            ]
        );
    }

    #[test]
    fn full_selection_adds_optional_files() {
        let config = ProjectConfig::builder("svc")
            .databases(Database::ALL)
            .ci(Some(CiProvider::GitHub))
            .config_format(ConfigFormat::Yaml)
            .build()
            .unwrap();
        let structure = render(&config);
        structure.validate().unwrap();

        for path in [
            "internal/database/postgres.go",
            "internal/database/mysql.go",
            "internal/database/mongodb.go",
            "internal/cache/redis.go",
            "config.yaml.example",
            "Dockerfile",
            "docker-compose.yml",
            ".dockerignore",
            ".github/workflows/ci.yml",
            "internal/mocks/interfaces.go",
            "internal/database/database_test.go",
        ] {
            assert!(structure.contains_file(path), "{path}");
        }
        assert!(structure
            .directories()
            .any(|d| d.path == Path::new(".github/workflows")));
    }

    #[test]
    fn gitlab_needs_no_workflow_directory() {
        let config = ProjectConfig::builder("svc")
            .ci(Some(CiProvider::GitLab))
            .build()
            .unwrap();
        let structure = render(&config);

        assert!(structure.contains_file(".gitlab-ci.yml"));
        assert!(!structure.directories().any(|d| d.path.starts_with(".github")));
    }

    #[test]
    fn no_placeholder_survives_rendering() {
        for format in ConfigFormat::ALL {
            for framework in Framework::ALL {
                let config = ProjectConfig::builder("svc")
                    .framework(framework)
                    .config_format(format)
                    .databases(Database::ALL)
                    .ci(Some(CiProvider::GitHub))
                    .build()
                    .unwrap();
                let structure = render(&config);

                for file in structure.files() {
                    assert!(
                        !file.content.contains("{{CFG_")
                            && !file.content.contains("{{MODULE_PATH}}")
                            && !file.content.contains("{{PROJECT_NAME}}"),
                        "{} ({format}, {framework})",
                        file.path.display()
                    );
                }
            }
        }
    }

    #[test]
    fn env_format_never_calls_accessors() {
        let config = ProjectConfig::builder("svc")
            .databases(Database::ALL)
            .build()
            .unwrap();
        let go = all_go(&render(&config));

        for field in ConfigField::ALL {
            assert!(!go.contains(&format!("cfg.{}()", field.accessor())), "{field}");
        }
        assert!(go.contains("cfg.PostgresURL"));
        assert!(go.contains("cfg.Port"));
    }

    #[test]
    fn every_referenced_accessor_is_defined() {
        for format in [ConfigFormat::Yaml, ConfigFormat::Json, ConfigFormat::Toml] {
            for dbs in [&[][..], &[Database::Postgres, Database::Redis][..], &Database::ALL[..]] {
                let config = ProjectConfig::builder("svc")
                    .config_format(format)
                    .databases(dbs.iter().copied())
                    .logger(Logger::Zap)
                    .build()
                    .unwrap();
                let structure = render(&config);
                let config_go = content(&structure, "internal/config/config.go");
                let defined = config::accessor_names(&config);
                let go = all_go(&structure);

                for field in ConfigField::ALL {
                    let call = format!("cfg.{}()", field.accessor());
                    if go.contains(&call) {
                        assert!(defined.contains(&field.accessor()), "{call} ({format})");
                        assert!(
                            config_go.contains(&format!("func (c *Config) {}()", field.accessor())),
                            "{call} ({format})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn json_with_postgres_and_redis() {
        let config = ProjectConfig::builder("svc")
            .config_format(ConfigFormat::Json)
            .databases([Database::Postgres, Database::Redis])
            .build()
            .unwrap();
        let structure = render(&config);

        assert!(content(&structure, "internal/database/postgres.go")
            .contains("pgxpool.New(ctx, cfg.GetPostgresURL())"));
        assert!(content(&structure, "internal/cache/redis.go")
            .contains("redis.ParseURL(cfg.GetRedisURL())"));
        assert!(!content(&structure, "go.mod").contains("godotenv"));
    }
}
