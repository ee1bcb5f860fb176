//! `internal/server/server.go`, one flavour per framework.

use goscaff_core::domain::{Framework, ProjectConfig, RenderContext};

use super::imports::ImportSet;

const NET_HTTP_LIFECYCLE: &str = r#"
func (s *Server) Start() error {
	if err := s.httpServer.ListenAndServe(); err != nil && !errors.Is(err, http.ErrServerClosed) {
		return err
	}
	return nil
}

func (s *Server) Shutdown(ctx context.Context) error {
	return s.httpServer.Shutdown(ctx)
}
"#;

const NET_HTTP_SERVER: &str = r#"	return &Server{
		httpServer: &http.Server{
			Addr:         ":" + {{CFG_PORT}},
			Handler:      {{HANDLER}},
			ReadTimeout:  15 * time.Second,
			WriteTimeout: 15 * time.Second,
			IdleTimeout:  60 * time.Second,
		},
	}, nil
}
"#;

const ECHO_LIFECYCLE: &str = r#"
func (s *Server) Start() error {
	if err := s.echo.Start(s.addr); err != nil && !errors.Is(err, http.ErrServerClosed) {
		return err
	}
	return nil
}

func (s *Server) Shutdown(ctx context.Context) error {
	return s.echo.Shutdown(ctx)
}
"#;

const FIBER_LIFECYCLE: &str = r#"
func (s *Server) Start() error {
	return s.app.Listen(s.addr)
}

func (s *Server) Shutdown(ctx context.Context) error {
	return s.app.ShutdownWithContext(ctx)
}
"#;

pub(crate) fn render(config: &ProjectConfig, ctx: &RenderContext) -> String {
    let module = config.module_path();
    let mut imports = ImportSet::new();
    imports
        .add("context")
        .add(format!("{module}/internal/config"))
        .add(format!("{module}/internal/handlers"))
        .add(format!("{module}/internal/middleware"))
        .add(format!("{module}/internal/observability"));

    let tracing = config.tracing_enabled();
    let metrics = config.metrics_enabled();
    let mut body = String::new();

    let (fields, lifecycle) = match config.framework() {
        Framework::Stdlib => {
            imports.add_all(["errors", "net/http", "time"]);
            body.push_str("\tmux := http.NewServeMux()\n");
            body.push_str("\tmux.HandleFunc(\"/\", h.Index)\n");
            body.push_str("\tmux.HandleFunc(\"/health\", h.Health)\n");
            body.push_str("\tmux.HandleFunc(\"/ready\", h.Ready)\n");
            if metrics {
                body.push_str("\tmux.Handle(\"/metrics\", obs.MetricsHandler())\n");
            }
            body.push_str("\n\tvar handler http.Handler = mux\n");
            body.push_str("\thandler = middleware.Logger(handler, obs.Logger)\n");
            body.push_str("\thandler = middleware.Recoverer(handler, obs.Logger)\n");
            if tracing {
                body.push_str("\thandler = middleware.Tracing(handler, obs.TracerProvider)\n");
            }
            body.push_str("\thandler = middleware.RequestID(handler)\n\n");
            body.push_str(&NET_HTTP_SERVER.replace("{{HANDLER}}", "handler"));
            ("\thttpServer *http.Server\n", NET_HTTP_LIFECYCLE)
        }
        Framework::Chi => {
            imports
                .add_all(["errors", "net/http", "time", "github.com/go-chi/chi/v5"])
                .add(r#"chimw "github.com/go-chi/chi/v5/middleware""#);
            body.push_str("\tr := chi.NewRouter()\n");
            body.push_str("\tr.Use(middleware.RequestID)\n");
            body.push_str("\tr.Use(chimw.RealIP)\n");
            body.push_str("\tr.Use(middleware.ChiLogger(obs.Logger))\n");
            body.push_str("\tr.Use(chimw.Recoverer)\n");
            if tracing {
                body.push_str("\tr.Use(middleware.Tracing(obs.TracerProvider))\n");
            }
            body.push_str("\n\tr.Get(\"/\", h.Index)\n");
            body.push_str("\tr.Get(\"/health\", h.Health)\n");
            body.push_str("\tr.Get(\"/ready\", h.Ready)\n");
            if metrics {
                body.push_str("\tr.Handle(\"/metrics\", obs.MetricsHandler())\n");
            }
            body.push('\n');
            body.push_str(&NET_HTTP_SERVER.replace("{{HANDLER}}", "r"));
            ("\thttpServer *http.Server\n", NET_HTTP_LIFECYCLE)
        }
        Framework::Gin => {
            imports.add_all(["errors", "net/http", "time", "github.com/gin-gonic/gin"]);
            body.push_str("\tif {{CFG_ENVIRONMENT}} == \"production\" {\n");
            body.push_str("\t\tgin.SetMode(gin.ReleaseMode)\n\t}\n\n");
            body.push_str("\tr := gin.New()\n");
            body.push_str("\tr.Use(gin.Recovery())\n");
            body.push_str("\tr.Use(middleware.GinLogger(obs.Logger))\n");
            if tracing {
                body.push_str("\tr.Use(middleware.GinTracing(obs.TracerProvider))\n");
            }
            body.push_str("\n\tr.GET(\"/\", h.IndexGin)\n");
            body.push_str("\tr.GET(\"/health\", h.HealthGin)\n");
            body.push_str("\tr.GET(\"/ready\", h.ReadyGin)\n");
            if metrics {
                body.push_str("\tr.GET(\"/metrics\", h.MetricsGin)\n");
            }
            body.push('\n');
            body.push_str(&NET_HTTP_SERVER.replace("{{HANDLER}}", "r"));
            ("\thttpServer *http.Server\n", NET_HTTP_LIFECYCLE)
        }
        Framework::Echo => {
            imports
                .add_all(["errors", "net/http", "github.com/labstack/echo/v4"])
                .add(r#"echomw "github.com/labstack/echo/v4/middleware""#);
            body.push_str("\te := echo.New()\n");
            body.push_str("\te.HideBanner = true\n");
            body.push_str("\te.Use(echomw.Recover())\n");
            body.push_str("\te.Use(middleware.EchoLogger(obs.Logger))\n");
            if tracing {
                body.push_str("\te.Use(middleware.EchoTracing(obs.TracerProvider))\n");
            }
            body.push_str("\n\te.GET(\"/\", h.IndexEcho)\n");
            body.push_str("\te.GET(\"/health\", h.HealthEcho)\n");
            body.push_str("\te.GET(\"/ready\", h.ReadyEcho)\n");
            if metrics {
                body.push_str("\te.GET(\"/metrics\", h.MetricsEcho)\n");
            }
            body.push_str("\n\treturn &Server{echo: e, addr: \":\" + {{CFG_PORT}}}, nil\n}\n");
            ("\techo *echo.Echo\n\taddr string\n", ECHO_LIFECYCLE)
        }
        Framework::Fiber => {
            imports
                .add("github.com/gofiber/fiber/v2")
                .add(r#"fiberrecover "github.com/gofiber/fiber/v2/middleware/recover""#);
            body.push_str("\tapp := fiber.New(fiber.Config{DisableStartupMessage: true})\n");
            body.push_str("\tapp.Use(fiberrecover.New())\n");
            body.push_str("\tapp.Use(middleware.FiberLogger(obs.Logger))\n");
            if tracing {
                body.push_str("\tapp.Use(middleware.FiberTracing(obs.TracerProvider))\n");
            }
            body.push_str("\n\tapp.Get(\"/\", h.IndexFiber)\n");
            body.push_str("\tapp.Get(\"/health\", h.HealthFiber)\n");
            body.push_str("\tapp.Get(\"/ready\", h.ReadyFiber)\n");
            if metrics {
                body.push_str("\tapp.Get(\"/metrics\", h.MetricsFiber)\n");
            }
            body.push_str("\n\treturn &Server{app: app, addr: \":\" + {{CFG_PORT}}}, nil\n}\n");
            ("\tapp  *fiber.App\n\taddr string\n", FIBER_LIFECYCLE)
        }
    };

    let mut out = String::from("package server\n\n");
    out.push_str(&imports.render());
    out.push_str(&format!("\ntype Server struct {{\n{fields}}}\n\n"));
    out.push_str(
        "func New(cfg *config.Config, obs *observability.Observability) (*Server, error) {\n",
    );
    out.push_str("\th := handlers.NewHandler(cfg, obs)\n\n");
    out.push_str(&body);
    out.push_str(lifecycle);

    ctx.render(&out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use goscaff_core::domain::ConfigFormat;

    fn server_go(framework: Framework, format: ConfigFormat) -> String {
        let config = ProjectConfig::builder("svc")
            .framework(framework)
            .config_format(format)
            .build()
            .unwrap();
        render(&config, &RenderContext::for_project(&config))
    }

    #[test]
    fn chi_router_and_routes() {
        let src = server_go(Framework::Chi, ConfigFormat::Env);

        assert!(src.contains("r := chi.NewRouter()"));
        assert!(src.contains("r.Get(\"/health\", h.Health)"));
        assert!(src.contains("r.Get(\"/ready\", h.Ready)"));
        assert!(src.contains("r.Handle(\"/metrics\", obs.MetricsHandler())"));
        assert!(src.contains("Addr:         \":\" + cfg.Port,"));
    }

    #[test]
    fn gin_uses_resolved_environment() {
        let src = server_go(Framework::Gin, ConfigFormat::Yaml);

        assert!(src.contains("r := gin.New()"));
        assert!(src.contains("if cfg.GetEnvironment() == \"production\" {"));
        assert!(src.contains("\":\" + cfg.GetPort()"));
    }

    #[test]
    fn every_framework_serves_the_probe_routes() {
        for framework in Framework::ALL {
            let src = server_go(framework, ConfigFormat::Json);
            assert!(src.contains("\"/health\""), "{framework}");
            assert!(src.contains("\"/ready\""), "{framework}");
            assert!(src.contains("\"/metrics\""), "{framework}");
            assert!(src.contains("func (s *Server) Shutdown(ctx context.Context) error {"));
            assert!(src.contains("cfg.GetPort()"), "{framework}");
            assert!(!src.contains("{{"), "{framework}");
        }
    }

    #[test]
    fn metrics_route_is_optional() {
        let config = ProjectConfig::builder("svc")
            .metrics(false)
            .tracing(false)
            .build()
            .unwrap();
        let src = render(&config, &RenderContext::for_project(&config));

        assert!(!src.contains("/metrics"));
        assert!(!src.contains("Tracing"));
    }
}
