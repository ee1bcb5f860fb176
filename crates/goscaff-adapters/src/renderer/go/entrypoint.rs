//! `cmd/<name>/main.go`.

use goscaff_core::domain::{ConfigField, Logger, ProjectConfig, RenderContext};

use super::golog::{Field, GoLog};
use super::imports::ImportSet;

const MAIN_TEMPLATE: &str = r#"package main

{{IMPORTS}}
func main() {
	cfg, err := config.Load()
	if err != nil {
		fmt.Fprintf(os.Stderr, "Failed to load config: %v\n", err)
		os.Exit(1)
	}

{{LOGGER_INIT}}

	ctx, cancel := context.WithCancel(context.Background())
	defer cancel()

	obs, err := observability.New(ctx, cfg)
	if err != nil {
{{LOG_OBS_ERROR}}
		os.Exit(1)
	}
	defer obs.Shutdown(ctx)

	srv, err := server.New(cfg, obs)
	if err != nil {
{{LOG_SERVER_ERROR}}
		os.Exit(1)
	}

	go func() {
{{LOG_STARTING}}
		if err := srv.Start(); err != nil {
{{LOG_RUN_ERROR}}
			cancel()
		}
	}()

	quit := make(chan os.Signal, 1)
	signal.Notify(quit, syscall.SIGINT, syscall.SIGTERM)

	select {
	case <-quit:
{{LOG_SHUTTING_DOWN}}
	case <-ctx.Done():
{{LOG_CANCELLED}}
	}

	shutdownCtx, shutdownCancel := context.WithTimeout(context.Background(), 30*time.Second)
	defer shutdownCancel()

	if err := srv.Shutdown(shutdownCtx); err != nil {
{{LOG_SHUTDOWN_ERROR}}
	}

{{LOG_STOPPED}}
}
"#;

fn logger_init(logger: Logger) -> &'static str {
    match logger {
        Logger::Slog => {
            "\tlogger := observability.NewLogger(cfg)\n\tobservability.SetDefaultLogger(logger)"
        }
        Logger::Zap => {
            "\tlogger, err := observability.NewZapLogger(cfg)\n\tif err != nil {\n\t\tfmt.Fprintf(os.Stderr, \"Failed to create logger: %v\\n\", err)\n\t\tos.Exit(1)\n\t}\n\tdefer logger.Sync()"
        }
        Logger::Zerolog => "\tlogger := observability.NewZerologLogger(cfg)",
    }
}

pub(crate) fn render(config: &ProjectConfig, ctx: &RenderContext) -> String {
    let module = config.module_path();
    let log = GoLog::new(config.logger());
    let port = config.resolver().field(ConfigField::Port);

    let mut imports = ImportSet::new();
    imports
        .add_all(["context", "fmt", "os", "os/signal", "syscall", "time"])
        .add(format!("{module}/internal/config"))
        .add(format!("{module}/internal/observability"))
        .add(format!("{module}/internal/server"));
    if let Some(pkg) = log.field_import() {
        imports.add(pkg);
    }

    let err = [Field::err("err")];
    ctx.clone()
        .with_variable("IMPORTS", imports.render())
        .with_variable("LOGGER_INIT", logger_init(config.logger()))
        .with_variable(
            "LOG_OBS_ERROR",
            log.error("Failed to initialize observability", &err, "\t\t"),
        )
        .with_variable(
            "LOG_SERVER_ERROR",
            log.error("Failed to create server", &err, "\t\t"),
        )
        .with_variable(
            "LOG_STARTING",
            log.info("Starting server", &[Field::str("port", &port)], "\t\t"),
        )
        .with_variable("LOG_RUN_ERROR", log.error("Server error", &err, "\t\t\t"))
        .with_variable(
            "LOG_SHUTTING_DOWN",
            log.info("Shutting down server...", &[], "\t\t"),
        )
        .with_variable(
            "LOG_CANCELLED",
            log.info("Context cancelled, shutting down...", &[], "\t\t"),
        )
        .with_variable(
            "LOG_SHUTDOWN_ERROR",
            log.error("Server shutdown error", &err, "\t\t"),
        )
        .with_variable("LOG_STOPPED", log.info("Server stopped gracefully", &[], "\t"))
        .render(MAIN_TEMPLATE)
}
