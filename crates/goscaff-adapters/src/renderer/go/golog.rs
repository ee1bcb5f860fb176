//! Log statements in the dialect of the selected Go logging library.

use goscaff_core::domain::Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Str,
    Int,
    Dur,
    Err,
}

/// One structured field of a log statement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field<'a> {
    kind: Kind,
    key: &'a str,
    expr: &'a str,
}

impl<'a> Field<'a> {
    pub(crate) fn str(key: &'a str, expr: &'a str) -> Self {
        Self { kind: Kind::Str, key, expr }
    }

    pub(crate) fn int(key: &'a str, expr: &'a str) -> Self {
        Self { kind: Kind::Int, key, expr }
    }

    pub(crate) fn dur(key: &'a str, expr: &'a str) -> Self {
        Self { kind: Kind::Dur, key, expr }
    }

    /// Always logged under the `error` key.
    pub(crate) fn err(expr: &'a str) -> Self {
        Self { kind: Kind::Err, key: "error", expr }
    }
}

/// Writes `logger.<Level>(...)` calls for a `*slog.Logger`, `*zap.Logger`
/// or `*zerolog.Logger` bound to `receiver`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GoLog<'a> {
    logger: Logger,
    receiver: &'a str,
}

impl<'a> GoLog<'a> {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            logger,
            receiver: "logger",
        }
    }

    pub(crate) fn with_receiver(mut self, receiver: &'a str) -> Self {
        self.receiver = receiver;
        self
    }

    /// Package the field constructors come from, if any.
    pub(crate) fn field_import(&self) -> Option<&'static str> {
        match self.logger {
            Logger::Slog => Some("log/slog"),
            Logger::Zap => Some("go.uber.org/zap"),
            Logger::Zerolog => None,
        }
    }

    /// Package that names the logger type.
    pub(crate) fn type_import(&self) -> &'static str {
        match self.logger {
            Logger::Slog => "log/slog",
            Logger::Zap => "go.uber.org/zap",
            Logger::Zerolog => "github.com/rs/zerolog",
        }
    }

    pub(crate) fn info(&self, msg: &str, fields: &[Field<'_>], indent: &str) -> String {
        self.call(Level::Info, msg, fields, indent)
    }

    pub(crate) fn error(&self, msg: &str, fields: &[Field<'_>], indent: &str) -> String {
        self.call(Level::Error, msg, fields, indent)
    }

    /// A complete statement starting at `indent`, without a trailing newline.
    pub(crate) fn call(&self, level: Level, msg: &str, fields: &[Field<'_>], indent: &str) -> String {
        let method = match level {
            Level::Info => "Info",
            Level::Error => "Error",
        };
        let recv = self.receiver;

        match self.logger {
            Logger::Zerolog => {
                let mut out = format!("{indent}{recv}.{method}().");
                for field in fields {
                    out.push_str(&format!("\n{indent}\t{}.", zerolog_field(field)));
                }
                if fields.is_empty() {
                    out.push_str(&format!("Msg(\"{msg}\")"));
                } else {
                    out.push_str(&format!("\n{indent}\tMsg(\"{msg}\")"));
                }
                out
            }
            Logger::Slog | Logger::Zap => {
                if fields.is_empty() {
                    return format!("{indent}{recv}.{method}(\"{msg}\")");
                }
                let pkg = if self.logger == Logger::Slog { "slog" } else { "zap" };
                let mut out = format!("{indent}{recv}.{method}(\"{msg}\",");
                for field in fields {
                    out.push_str(&format!("\n{indent}\t{},", typed_field(pkg, field)));
                }
                out.push_str(&format!("\n{indent})"));
                out
            }
        }
    }
}

fn typed_field(pkg: &str, field: &Field<'_>) -> String {
    let Field { kind, key, expr } = *field;
    match (pkg, kind) {
        (_, Kind::Str) => format!("{pkg}.String(\"{key}\", {expr})"),
        (_, Kind::Int) => format!("{pkg}.Int(\"{key}\", {expr})"),
        (_, Kind::Dur) => format!("{pkg}.Duration(\"{key}\", {expr})"),
        ("zap", Kind::Err) => format!("zap.Error({expr})"),
        (_, Kind::Err) => format!("{pkg}.Any(\"{key}\", {expr})"),
    }
}

fn zerolog_field(field: &Field<'_>) -> String {
    let Field { kind, key, expr } = *field;
    match kind {
        Kind::Str => format!("Str(\"{key}\", {expr})"),
        Kind::Int => format!("Int(\"{key}\", {expr})"),
        Kind::Dur => format!("Dur(\"{key}\", {expr})"),
        Kind::Err => format!("Err({expr})"),
    }
}
