//! `internal/middleware/middleware.go`.

use goscaff_core::domain::{Framework, ProjectConfig};

use super::golog::{Field, GoLog};
use super::imports::ImportSet;

/// How a framework exposes the request facts the access log records.
struct RequestFacts {
    method: &'static str,
    path: &'static str,
    status: &'static str,
}

fn access_log(log: &GoLog<'_>, facts: &RequestFacts, remote: Option<&str>, indent: &str) -> String {
    let mut fields = vec![Field::str("method", facts.method), Field::str("path", facts.path)];
    if let Some(remote) = remote {
        fields.push(Field::str("remote_addr", remote));
    }
    fields.push(Field::dur("duration", "duration"));
    fields.push(Field::int("status", facts.status));
    log.info("HTTP request", &fields, indent)
}

fn standard(log: &GoLog<'_>, logger_type: &str) -> String {
    let request_log = access_log(
        log,
        &RequestFacts {
            method: "r.Method",
            path: "r.URL.Path",
            status: "rr.status",
        },
        Some("r.RemoteAddr"),
        "\t\t",
    );
    let panic_log = log.error(
        "Recovered from panic",
        &[Field::str("panic", "fmt.Sprint(rec)"), Field::str("path", "r.URL.Path")],
        "\t\t\t\t",
    );

    format!(
        r#"type contextKey string

const RequestIDKey contextKey = "requestID"

func RequestID(next http.Handler) http.Handler {{
	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {{
		requestID := r.Header.Get("X-Request-ID")
		if requestID == "" {{
			requestID = uuid.New().String()
		}}
		w.Header().Set("X-Request-ID", requestID)
		ctx := context.WithValue(r.Context(), RequestIDKey, requestID)
		next.ServeHTTP(w, r.WithContext(ctx))
	}})
}}

func Logger(next http.Handler, logger {logger_type}) http.Handler {{
	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {{
		start := time.Now()
		rr := &responseRecorder{{ResponseWriter: w, status: http.StatusOK}}
		next.ServeHTTP(rr, r)
		duration := time.Since(start)

{request_log}
	}})
}}

func Recoverer(next http.Handler, logger {logger_type}) http.Handler {{
	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {{
		defer func() {{
			if rec := recover(); rec != nil {{
{panic_log}
				w.WriteHeader(http.StatusInternalServerError)
			}}
		}}()
		next.ServeHTTP(w, r)
	}})
}}

type responseRecorder struct {{
	http.ResponseWriter
	status int
}}

func (r *responseRecorder) WriteHeader(status int) {{
	r.status = status
	r.ResponseWriter.WriteHeader(status)
}}
"#
    )
}

fn framework_logger(framework: Framework, log: &GoLog<'_>, logger_type: &str) -> String {
    match framework {
        Framework::Stdlib => String::new(),
        Framework::Chi => {
            let line = access_log(
                log,
                &RequestFacts {
                    method: "r.Method",
                    path: "r.URL.Path",
                    status: "ww.Status()",
                },
                None,
                "\t\t\t",
            );
            format!(
                r#"
func ChiLogger(logger {logger_type}) func(next http.Handler) http.Handler {{
	return func(next http.Handler) http.Handler {{
		return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {{
			start := time.Now()
			ww := chimw.NewWrapResponseWriter(w, r.ProtoMajor)
			next.ServeHTTP(ww, r)
			duration := time.Since(start)

{line}
		}})
	}}
}}
"#
            )
        }
        Framework::Gin => {
            let line = access_log(
                log,
                &RequestFacts {
                    method: "c.Request.Method",
                    path: "c.Request.URL.Path",
                    status: "c.Writer.Status()",
                },
                None,
                "\t\t",
            );
            format!(
                r#"
func GinLogger(logger {logger_type}) gin.HandlerFunc {{
	return func(c *gin.Context) {{
		start := time.Now()
		c.Next()
		duration := time.Since(start)

{line}
	}}
}}
"#
            )
        }
        Framework::Echo => {
            let line = access_log(
                log,
                &RequestFacts {
                    method: "c.Request().Method",
                    path: "c.Request().URL.Path",
                    status: "c.Response().Status",
                },
                None,
                "\t\t\t",
            );
            format!(
                r#"
func EchoLogger(logger {logger_type}) echo.MiddlewareFunc {{
	return func(next echo.HandlerFunc) echo.HandlerFunc {{
		return func(c echo.Context) error {{
			start := time.Now()
			err := next(c)
			duration := time.Since(start)

{line}
			return err
		}}
	}}
}}
"#
            )
        }
        Framework::Fiber => {
            let line = access_log(
                log,
                &RequestFacts {
                    method: "c.Method()",
                    path: "c.Path()",
                    status: "c.Response().StatusCode()",
                },
                None,
                "\t\t",
            );
            format!(
                r#"
func FiberLogger(logger {logger_type}) fiber.Handler {{
	return func(c *fiber.Ctx) error {{
		start := time.Now()
		err := c.Next()
		duration := time.Since(start)

{line}
		return err
	}}
}}
"#
            )
        }
    }
}

fn tracing_middleware(framework: Framework) -> &'static str {
    match framework {
        Framework::Stdlib => {
            r#"
func Tracing(next http.Handler, tp trace.TracerProvider) http.Handler {
	tracer := tp.Tracer("http-server")
	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {
		ctx, span := tracer.Start(r.Context(), r.Method+" "+r.URL.Path)
		defer span.End()
		next.ServeHTTP(w, r.WithContext(ctx))
	})
}
"#
        }
        Framework::Chi => {
            r#"
func Tracing(tp trace.TracerProvider) func(next http.Handler) http.Handler {
	tracer := tp.Tracer("http-server")
	return func(next http.Handler) http.Handler {
		return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {
			ctx, span := tracer.Start(r.Context(), r.Method+" "+r.URL.Path)
			defer span.End()
			next.ServeHTTP(w, r.WithContext(ctx))
		})
	}
}
"#
        }
        Framework::Gin => {
            r#"
func GinTracing(tp trace.TracerProvider) gin.HandlerFunc {
	tracer := tp.Tracer("http-server")
	return func(c *gin.Context) {
		ctx, span := tracer.Start(c.Request.Context(), c.Request.Method+" "+c.Request.URL.Path)
		defer span.End()
		c.Request = c.Request.WithContext(ctx)
		c.Next()
	}
}
"#
        }
        Framework::Echo => {
            r#"
func EchoTracing(tp trace.TracerProvider) echo.MiddlewareFunc {
	tracer := tp.Tracer("http-server")
	return func(next echo.HandlerFunc) echo.HandlerFunc {
		return func(c echo.Context) error {
			ctx, span := tracer.Start(c.Request().Context(), c.Request().Method+" "+c.Request().URL.Path)
			defer span.End()
			c.SetRequest(c.Request().WithContext(ctx))
			return next(c)
		}
	}
}
"#
        }
        Framework::Fiber => {
            r#"
func FiberTracing(tp trace.TracerProvider) fiber.Handler {
	tracer := tp.Tracer("http-server")
	return func(c *fiber.Ctx) error {
		ctx, span := tracer.Start(c.UserContext(), c.Method()+" "+c.Path())
		defer span.End()
		c.SetUserContext(ctx)
		return c.Next()
	}
}
"#
        }
    }
}

pub(crate) fn render(config: &ProjectConfig) -> String {
    let framework = config.framework();
    let log = GoLog::new(config.logger());
    let logger_type = config.logger().go_type();

    let mut imports = ImportSet::new();
    imports
        .add_all(["context", "fmt", "net/http", "time", "github.com/google/uuid"])
        .add(log.type_import());
    if let Some(pkg) = log.field_import() {
        imports.add(pkg);
    }
    match framework {
        Framework::Stdlib => {}
        Framework::Chi => {
            imports.add(r#"chimw "github.com/go-chi/chi/v5/middleware""#);
        }
        Framework::Gin => {
            imports.add("github.com/gin-gonic/gin");
        }
        Framework::Echo => {
            imports.add("github.com/labstack/echo/v4");
        }
        Framework::Fiber => {
            imports.add("github.com/gofiber/fiber/v2");
        }
    }
    if config.tracing_enabled() {
        imports.add("go.opentelemetry.io/otel/trace");
    }

    let mut out = String::from("package middleware\n\n");
    out.push_str(&imports.render());
    out.push('\n');
    out.push_str(&standard(&log, logger_type));
    out.push_str(&framework_logger(framework, &log, logger_type));
    if config.tracing_enabled() {
        out.push_str(tracing_middleware(framework));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use goscaff_core::domain::Logger;

    fn middleware_go(framework: Framework, logger: Logger, tracing: bool) -> String {
        let config = ProjectConfig::builder("svc")
            .framework(framework)
            .logger(logger)
            .tracing(tracing)
            .build()
            .unwrap();
        render(&config)
    }

    #[test]
    fn request_id_uses_uuid() {
        let src = middleware_go(Framework::Stdlib, Logger::Slog, false);
        assert!(src.contains("r.Header.Get(\"X-Request-ID\")"));
        assert!(src.contains("uuid.New().String()"));
        assert!(src.contains("\"github.com/google/uuid\""));
    }

    #[test]
    fn logger_type_follows_library() {
        assert!(middleware_go(Framework::Stdlib, Logger::Zap, false)
            .contains("func Logger(next http.Handler, logger *zap.Logger) http.Handler {"));
        let zerolog = middleware_go(Framework::Stdlib, Logger::Zerolog, false);
        assert!(zerolog.contains("logger *zerolog.Logger"));
        assert!(zerolog.contains("Dur(\"duration\", duration)."));
    }

    #[test]
    fn chi_logger_does_not_clash_with_the_standard_one() {
        let src = middleware_go(Framework::Chi, Logger::Slog, true);
        assert!(src.contains("func ChiLogger(logger *slog.Logger)"));
        assert!(src.contains("chimw.NewWrapResponseWriter"));
        assert_eq!(src.matches("func Logger(").count(), 1);
        assert_eq!(src.matches("import ").count(), 1);
        assert!(src.contains("func Tracing(tp trace.TracerProvider)"));
    }

    #[test]
    fn tracing_is_optional() {
        let src = middleware_go(Framework::Gin, Logger::Slog, false);
        assert!(src.contains("func GinLogger("));
        assert!(!src.contains("GinTracing"));
        assert!(!src.contains("otel"));
    }
}
