use std::collections::HashMap;

use crate::domain::entities::project_config::ProjectConfig;
use crate::domain::field_ref::{ConfigField, FieldResolver};

/// Context for rendering file templates.
///
/// A **Value Object** holding every `{{VARIABLE}}` a Go file template may use.
/// Immutable after creation; transformations create new instances (see
/// `with_variable`).
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "order-api" | User input |
/// | `PROJECT_NAME_PASCAL` | "OrderApi" | Computed |
/// | `MODULE_PATH` | "github.com/acme/order-api" | User input |
/// | `GO_VERSION` | "1.23" | User input |
/// | `CFG_<FIELD>` | "cfg.GetPort()" | Field Reference Resolver |
///
/// One `CFG_*` variable exists per catalog field, e.g. `{{CFG_PORT}}` or
/// `{{CFG_POSTGRES_URL}}`. Templates never spell a config access by hand.
#[derive(Debug, Clone)]
pub struct RenderContext {
    project_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut vars = HashMap::new();

        vars.insert("PROJECT_NAME".to_string(), name.clone());
        vars.insert("PROJECT_NAME_PASCAL".to_string(), to_pascal_case(&name));

        Self {
            project_name: name,
            variables: vars,
        }
    }

    /// Standard context for a generation run: project identity plus one
    /// resolved reference per catalog field.
    pub fn for_project(config: &ProjectConfig) -> Self {
        let resolver = config.resolver();
        let ctx = Self::new(config.project_name())
            .with_variable("MODULE_PATH", config.module_path())
            .with_variable("GO_VERSION", config.go_version().as_str());

        ConfigField::ALL
            .into_iter()
            .fold(ctx, |ctx, field| ctx.with_field(&resolver, field))
    }

    fn with_field(self, resolver: &FieldResolver, field: ConfigField) -> Self {
        self.with_variable(placeholder_for(field), resolver.field(field))
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Replace `{{VARIABLE}}` placeholders.
    ///
    /// - `{{UNKNOWN}}` remains as literal `{{UNKNOWN}}` (no error)
    /// - `${{ runner.os }}` and Go template actions pass through untouched
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}

/// `CFG_` + SCREAMING_SNAKE form of the field name.
pub fn placeholder_for(field: ConfigField) -> &'static str {
    match field {
        ConfigField::Port => "CFG_PORT",
        ConfigField::Environment => "CFG_ENVIRONMENT",
        ConfigField::LogLevel => "CFG_LOG_LEVEL",
        ConfigField::PostgresUrl => "CFG_POSTGRES_URL",
        ConfigField::MySqlUrl => "CFG_MYSQL_URL",
        ConfigField::MongoUrl => "CFG_MONGO_URL",
        ConfigField::RedisUrl => "CFG_REDIS_URL",
        ConfigField::OtlpEndpoint => "CFG_OTLP_ENDPOINT",
        ConfigField::ServiceName => "CFG_SERVICE_NAME",
    }
}

/// "order-api" -> "OrderApi"
fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
