use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::field_ref::FieldResolver;
use crate::domain::validation::DomainValidator;
use crate::domain::value_objects::{CiProvider, ConfigFormat, Database, Framework, GoVersion, Logger};

/// Every choice that shapes one generated Go service.
///
/// Only constructible through [`ProjectConfig::builder`], so a value in
/// hand has a valid project name and module path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    project_name: String,
    module_path: String,
    go_version: GoVersion,
    framework: Framework,
    databases: Vec<Database>,
    logger: Logger,
    enable_tracing: bool,
    enable_metrics: bool,
    include_docker: bool,
    ci: Option<CiProvider>,
    config_format: ConfigFormat,
    env_sample: bool,
}

impl ProjectConfig {
    pub fn builder(project_name: impl Into<String>) -> ProjectConfigBuilder {
        ProjectConfigBuilder::new(project_name)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    pub fn go_version(&self) -> GoVersion {
        self.go_version
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    /// Selected databases in selection order, without duplicates.
    pub fn databases(&self) -> &[Database] {
        &self.databases
    }

    pub fn logger(&self) -> Logger {
        self.logger
    }

    pub fn tracing_enabled(&self) -> bool {
        self.enable_tracing
    }

    pub fn metrics_enabled(&self) -> bool {
        self.enable_metrics
    }

    pub fn docker_included(&self) -> bool {
        self.include_docker
    }

    pub fn ci(&self) -> Option<CiProvider> {
        self.ci
    }

    pub fn config_format(&self) -> ConfigFormat {
        self.config_format
    }

    pub fn env_sample(&self) -> bool {
        self.env_sample
    }

    pub fn has_database(&self, db: Database) -> bool {
        self.databases.contains(&db)
    }

    pub fn needs_cache(&self) -> bool {
        self.databases.iter().any(|d| d.is_cache())
    }

    pub fn needs_sql(&self) -> bool {
        self.databases.iter().any(|d| d.is_sql())
    }

    pub fn needs_nosql(&self) -> bool {
        self.has_database(Database::MongoDb)
    }

    /// Whether `internal/database` is generated.
    pub fn needs_database_package(&self) -> bool {
        self.needs_sql() || self.needs_nosql()
    }

    /// Resolver for this run's configuration format.
    pub fn resolver(&self) -> FieldResolver {
        FieldResolver::new(self.config_format)
    }
}

/// Builder for [`ProjectConfig`]. Defaults mirror the CLI defaults.
#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    project_name: String,
    module_path: Option<String>,
    go_version: GoVersion,
    framework: Framework,
    databases: Vec<Database>,
    logger: Logger,
    enable_tracing: bool,
    enable_metrics: bool,
    include_docker: bool,
    ci: Option<CiProvider>,
    config_format: ConfigFormat,
    env_sample: bool,
}

impl ProjectConfigBuilder {
    fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            module_path: None,
            go_version: GoVersion::default(),
            framework: Framework::default(),
            databases: Vec::new(),
            logger: Logger::default(),
            enable_tracing: true,
            enable_metrics: true,
            include_docker: true,
            ci: None,
            config_format: ConfigFormat::default(),
            env_sample: true,
        }
    }

    /// Defaults to `github.com/user/<project_name>` when never called.
    pub fn module_path(mut self, path: impl Into<String>) -> Self {
        self.module_path = Some(path.into());
        self
    }

    pub fn go_version(mut self, version: GoVersion) -> Self {
        self.go_version = version;
        self
    }

    pub fn framework(mut self, framework: Framework) -> Self {
        self.framework = framework;
        self
    }

    pub fn database(mut self, db: Database) -> Self {
        if !self.databases.contains(&db) {
            self.databases.push(db);
        }
        self
    }

    pub fn databases(self, dbs: impl IntoIterator<Item = Database>) -> Self {
        dbs.into_iter().fold(self, Self::database)
    }

    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }

    pub fn metrics(mut self, enabled: bool) -> Self {
        self.enable_metrics = enabled;
        self
    }

    pub fn docker(mut self, enabled: bool) -> Self {
        self.include_docker = enabled;
        self
    }

    pub fn ci(mut self, provider: Option<CiProvider>) -> Self {
        self.ci = provider;
        self
    }

    pub fn config_format(mut self, format: ConfigFormat) -> Self {
        self.config_format = format;
        self
    }

    pub fn env_sample(mut self, enabled: bool) -> Self {
        self.env_sample = enabled;
        self
    }

    /// Validates and returns the first failure.
    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        DomainValidator::validate_project_name(&self.project_name)?;

        let module_path = self
            .module_path
            .unwrap_or_else(|| format!("github.com/user/{}", self.project_name));
        DomainValidator::validate_module_path(&module_path)?;

        Ok(ProjectConfig {
            project_name: self.project_name,
            module_path,
            go_version: self.go_version,
            framework: self.framework,
            databases: self.databases,
            logger: self.logger,
            enable_tracing: self.enable_tracing,
            enable_metrics: self.enable_metrics,
            include_docker: self.include_docker,
            ci: self.ci,
            config_format: self.config_format,
            env_sample: self.env_sample,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ProjectConfig::builder("my-service").build().unwrap();

        assert_eq!(config.module_path(), "github.com/user/my-service");
        assert_eq!(config.go_version(), GoVersion::V1_23);
        assert_eq!(config.framework(), Framework::Stdlib);
        assert_eq!(config.logger(), Logger::Slog);
        assert_eq!(config.config_format(), ConfigFormat::Env);
        assert!(config.tracing_enabled());
        assert!(config.metrics_enabled());
        assert!(config.docker_included());
        assert!(config.env_sample());
        assert_eq!(config.ci(), None);
        assert!(config.databases().is_empty());
    }

    #[test]
    fn database_helpers() {
        let config = ProjectConfig::builder("svc")
            .databases([Database::Postgres, Database::Redis])
            .build()
            .unwrap();

        assert!(config.has_database(Database::Postgres));
        assert!(!config.has_database(Database::MySql));
        assert!(config.needs_cache());
        assert!(config.needs_sql());
        assert!(!config.needs_nosql());
        assert!(config.needs_database_package());
    }

    #[test]
    fn cache_only_needs_no_database_package() {
        let config = ProjectConfig::builder("svc")
            .database(Database::Redis)
            .build()
            .unwrap();

        assert!(config.needs_cache());
        assert!(!config.needs_database_package());
    }

    #[test]
    fn databases_are_deduplicated_in_order() {
        let config = ProjectConfig::builder("svc")
            .databases([Database::Redis, Database::Postgres, Database::Redis])
            .build()
            .unwrap();

        assert_eq!(config.databases(), &[Database::Redis, Database::Postgres]);
    }

    #[test]
    fn invalid_name_fails_first() {
        let err = ProjectConfig::builder("Bad")
            .module_path("")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidProjectName { .. }));
    }

    #[test]
    fn explicit_empty_module_path_is_rejected() {
        let err = ProjectConfig::builder("svc").module_path("").build().unwrap_err();
        assert_eq!(err, DomainError::ModulePathRequired);
    }

    #[test]
    fn resolver_follows_format() {
        let config = ProjectConfig::builder("svc")
            .config_format(ConfigFormat::Json)
            .build()
            .unwrap();

        assert_eq!(config.resolver().resolve("Port"), "cfg.GetPort()");
    }
}
