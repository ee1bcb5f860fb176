//! `internal/observability/observability.go` and `logger.go`.

use goscaff_core::domain::{Logger, ProjectConfig, RenderContext};

use super::imports::ImportSet;

const TRACER_INIT: &str = r#"
	tp, err := initTracer(ctx, cfg)
	if err != nil {
		return nil, err
	}
	otel.SetTracerProvider(tp)
	obs.TracerProvider = tp
	obs.tracerShutdown = tp.Shutdown
"#;

const METRICS_INIT: &str = r#"
	obs.httpRequestsTotal = promauto.NewCounterVec(
		prometheus.CounterOpts{
			Name: "http_requests_total",
			Help: "Total number of HTTP requests",
		},
		[]string{"method", "endpoint", "status"},
	)

	obs.httpRequestDuration = promauto.NewHistogramVec(
		prometheus.HistogramOpts{
			Name:    "http_request_duration_seconds",
			Help:    "HTTP request duration in seconds",
			Buckets: prometheus.DefBuckets,
		},
		[]string{"method", "endpoint"},
	)
"#;

const METRICS_METHODS: &str = r#"
func (o *Observability) MetricsHandler() http.Handler {
	return promhttp.Handler()
}

func (o *Observability) RecordRequest(method, endpoint, status string, duration time.Duration) {
	o.httpRequestsTotal.WithLabelValues(method, endpoint, status).Inc()
	o.httpRequestDuration.WithLabelValues(method, endpoint).Observe(duration.Seconds())
}
"#;

const INIT_TRACER: &str = r#"
func initTracer(ctx context.Context, cfg *config.Config) (*sdktrace.TracerProvider, error) {
	exporter, err := otlptracegrpc.New(ctx,
		otlptracegrpc.WithEndpoint({{CFG_OTLP_ENDPOINT}}),
		otlptracegrpc.WithInsecure(),
	)
	if err != nil {
		return nil, err
	}

	res, err := resource.New(ctx,
		resource.WithAttributes(
			semconv.ServiceName({{CFG_SERVICE_NAME}}),
		),
	)
	if err != nil {
		return nil, err
	}

	return sdktrace.NewTracerProvider(
		sdktrace.WithBatcher(exporter),
		sdktrace.WithResource(res),
	), nil
}
"#;

fn logger_init(logger: Logger) -> &'static str {
    match logger {
        Logger::Slog => "\tobs.Logger = NewLogger(cfg)\n",
        Logger::Zap => {
            "\tlogger, err := NewZapLogger(cfg)\n\tif err != nil {\n\t\treturn nil, err\n\t}\n\tobs.Logger = logger\n"
        }
        Logger::Zerolog => "\tobs.Logger = NewZerologLogger(cfg)\n",
    }
}

pub(crate) fn render(config: &ProjectConfig, ctx: &RenderContext) -> String {
    let module = config.module_path();
    let logger = config.logger();
    let tracing = config.tracing_enabled();
    let metrics = config.metrics_enabled();

    let mut imports = ImportSet::new();
    imports
        .add("context")
        .add(format!("{module}/internal/config"))
        .add(match logger {
            Logger::Slog => "log/slog",
            Logger::Zap => "go.uber.org/zap",
            Logger::Zerolog => "github.com/rs/zerolog",
        });
    if tracing {
        imports.add_all([
            "go.opentelemetry.io/otel",
            "go.opentelemetry.io/otel/exporters/otlp/otlptrace/otlptracegrpc",
            "go.opentelemetry.io/otel/sdk/resource",
            r#"sdktrace "go.opentelemetry.io/otel/sdk/trace""#,
            r#"semconv "go.opentelemetry.io/otel/semconv/v1.21.0""#,
            "go.opentelemetry.io/otel/trace",
        ]);
    }
    if metrics {
        imports.add_all([
            "net/http",
            "time",
            "github.com/prometheus/client_golang/prometheus",
            "github.com/prometheus/client_golang/prometheus/promauto",
            "github.com/prometheus/client_golang/prometheus/promhttp",
        ]);
    }

    let mut fields = vec![("Logger", logger.go_type())];
    if tracing {
        fields.push(("TracerProvider", "trace.TracerProvider"));
        fields.push(("tracerShutdown", "func(context.Context) error"));
    }
    if metrics {
        fields.push(("httpRequestsTotal", "*prometheus.CounterVec"));
        fields.push(("httpRequestDuration", "*prometheus.HistogramVec"));
    }
    let width = fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut out = String::from("package observability\n\n");
    out.push_str(&imports.render());
    out.push_str("\ntype Observability struct {\n");
    for (name, ty) in &fields {
        out.push_str(&format!("\t{name:width$} {ty}\n"));
    }
    out.push_str("}\n\n");
    out.push_str(
        "func New(ctx context.Context, cfg *config.Config) (*Observability, error) {\n\tobs := &Observability{}\n\n",
    );
    out.push_str(logger_init(logger));
    if tracing {
        out.push_str(TRACER_INIT);
    }
    if metrics {
        out.push_str(METRICS_INIT);
    }
    out.push_str("\n\treturn obs, nil\n}\n\n");
    out.push_str("func (o *Observability) Shutdown(ctx context.Context) error {\n");
    if tracing {
        out.push_str("\tif o.tracerShutdown != nil {\n\t\treturn o.tracerShutdown(ctx)\n\t}\n");
    }
    out.push_str("\treturn nil\n}\n");
    if metrics {
        out.push_str(METRICS_METHODS);
    }
    if tracing {
        out.push_str(INIT_TRACER);
    }

    ctx.render(&out)
}

const SLOG_LOGGER: &str = r#"package observability

import (
	"log/slog"
	"os"

	"{{MODULE_PATH}}/internal/config"
)

func NewLogger(cfg *config.Config) *slog.Logger {
	var level slog.Level
	if err := level.UnmarshalText([]byte({{CFG_LOG_LEVEL}})); err != nil {
		level = slog.LevelInfo
	}

	opts := &slog.HandlerOptions{Level: level}
	if {{CFG_ENVIRONMENT}} == "production" {
		return slog.New(slog.NewJSONHandler(os.Stdout, opts))
	}
	return slog.New(slog.NewTextHandler(os.Stdout, opts))
}

func SetDefaultLogger(logger *slog.Logger) {
	slog.SetDefault(logger)
}
"#;

const ZAP_LOGGER: &str = r#"package observability

import (
	"go.uber.org/zap"
	"go.uber.org/zap/zapcore"

	"{{MODULE_PATH}}/internal/config"
)

func NewZapLogger(cfg *config.Config) (*zap.Logger, error) {
	var zapConfig zap.Config

	if {{CFG_ENVIRONMENT}} == "production" {
		zapConfig = zap.NewProductionConfig()
	} else {
		zapConfig = zap.NewDevelopmentConfig()
		zapConfig.EncoderConfig.EncodeLevel = zapcore.CapitalColorLevelEncoder
	}

	if level, err := zapcore.ParseLevel({{CFG_LOG_LEVEL}}); err == nil {
		zapConfig.Level = zap.NewAtomicLevelAt(level)
	}

	return zapConfig.Build()
}
"#;

const ZEROLOG_LOGGER: &str = r#"package observability

import (
	"io"
	"os"
	"time"

	"github.com/rs/zerolog"

	"{{MODULE_PATH}}/internal/config"
)

func NewZerologLogger(cfg *config.Config) *zerolog.Logger {
	zerolog.TimeFieldFormat = time.RFC3339

	level, err := zerolog.ParseLevel({{CFG_LOG_LEVEL}})
	if err != nil || level == zerolog.NoLevel {
		level = zerolog.InfoLevel
	}

	var out io.Writer = os.Stdout
	if {{CFG_ENVIRONMENT}} != "production" {
		out = zerolog.ConsoleWriter{Out: os.Stdout, TimeFormat: time.RFC3339}
	}

	logger := zerolog.New(out).
		Level(level).
		With().
		Timestamp().
		Logger()

	return &logger
}
"#;

/// `logger.go`: the constructor for the selected library.
pub(crate) fn render_logger(config: &ProjectConfig, ctx: &RenderContext) -> String {
    let template = match config.logger() {
        Logger::Slog => SLOG_LOGGER,
        Logger::Zap => ZAP_LOGGER,
        Logger::Zerolog => ZEROLOG_LOGGER,
    };
    ctx.render(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use goscaff_core::domain::ConfigFormat;

    fn config(format: ConfigFormat, logger: Logger, tracing: bool, metrics: bool) -> ProjectConfig {
        ProjectConfig::builder("svc")
            .config_format(format)
            .logger(logger)
            .tracing(tracing)
            .metrics(metrics)
            .build()
            .unwrap()
    }

    #[test]
    fn tracer_reads_endpoint_and_service_name_through_the_resolver() {
        let c = config(ConfigFormat::Env, Logger::Slog, true, false);
        let env = render(&c, &RenderContext::for_project(&c));
        assert!(env.contains("otlptracegrpc.WithEndpoint(cfg.OTLPEndpoint)"));
        assert!(env.contains("semconv.ServiceName(cfg.ServiceName)"));

        let c = config(ConfigFormat::Yaml, Logger::Slog, true, false);
        let yaml = render(&c, &RenderContext::for_project(&c));
        assert!(yaml.contains("otlptracegrpc.WithEndpoint(cfg.GetOTLPEndpoint())"));
        assert!(yaml.contains("semconv.ServiceName(cfg.GetServiceName())"));
    }

    #[test]
    fn metrics_section() {
        let c = config(ConfigFormat::Env, Logger::Zap, false, true);
        let src = render(&c, &RenderContext::for_project(&c));

        assert!(src.contains("Name: \"http_requests_total\","));
        assert!(src.contains("func (o *Observability) MetricsHandler() http.Handler {"));
        assert!(src.contains("\tLogger              *zap.Logger\n"));
        assert!(!src.contains("initTracer"));
    }

    #[test]
    fn bare_observability_imports_only_what_it_uses() {
        let c = config(ConfigFormat::Env, Logger::Zerolog, false, false);
        let src = render(&c, &RenderContext::for_project(&c));

        assert!(!src.contains("\"net/http\""));
        assert!(!src.contains("prometheus"));
        assert!(src.contains("Logger *zerolog.Logger"));
    }

    #[test]
    fn logger_constructors() {
        for (logger, ctor) in [
            (Logger::Slog, "func NewLogger(cfg *config.Config) *slog.Logger {"),
            (Logger::Zap, "func NewZapLogger(cfg *config.Config) (*zap.Logger, error) {"),
            (Logger::Zerolog, "func NewZerologLogger(cfg *config.Config) *zerolog.Logger {"),
        ] {
            let c = config(ConfigFormat::Json, logger, true, true);
            let src = render_logger(&c, &RenderContext::for_project(&c));
            assert!(src.contains(ctor), "{logger}");
            assert!(src.contains("cfg.GetEnvironment() == \"production\"") || src.contains("cfg.GetEnvironment() != \"production\""));
            assert!(src.contains("cfg.GetLogLevel()"));
            assert!(src.contains("\"github.com/user/svc/internal/config\""));
        }
    }
}
