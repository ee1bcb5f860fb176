//! `internal/handlers/handlers.go`.

use goscaff_core::domain::{Framework, ProjectConfig, RenderContext};

use super::imports::ImportSet;

const BASE: &str = r#"type Handler struct {
	config *config.Config
	obs    *observability.Observability
}

func NewHandler(cfg *config.Config, obs *observability.Observability) *Handler {
	return &Handler{
		config: cfg,
		obs:    obs,
	}
}

type Response struct {
	Status  string                 `json:"status"`
	Message string                 `json:"message,omitempty"`
	Data    map[string]interface{} `json:"data,omitempty"`
}

func (h *Handler) Health(w http.ResponseWriter, r *http.Request) {
	writeJSON(w, http.StatusOK, Response{
		Status:  "ok",
		Message: "Service is healthy",
	})
}

func (h *Handler) Ready(w http.ResponseWriter, r *http.Request) {
	writeJSON(w, http.StatusOK, Response{
		Status:  "ready",
		Message: "Service is ready to accept traffic",
	})
}

func (h *Handler) Index(w http.ResponseWriter, r *http.Request) {
	writeJSON(w, http.StatusOK, h.welcome())
}

func (h *Handler) welcome() Response {
	cfg := h.config
	return Response{
		Status:  "ok",
		Message: "Welcome to {{PROJECT_NAME}}",
		Data: map[string]interface{}{
			"version":     "1.0.0",
			"environment": {{CFG_ENVIRONMENT}},
		},
	}
}

func writeJSON(w http.ResponseWriter, status int, body Response) {
	w.Header().Set("Content-Type", "application/json")
	w.WriteHeader(status)
	_ = json.NewEncoder(w).Encode(body)
}
"#;

const GIN: &str = r#"
func (h *Handler) HealthGin(c *gin.Context) {
	c.JSON(http.StatusOK, Response{
		Status:  "ok",
		Message: "Service is healthy",
	})
}

func (h *Handler) ReadyGin(c *gin.Context) {
	c.JSON(http.StatusOK, Response{
		Status:  "ready",
		Message: "Service is ready to accept traffic",
	})
}

func (h *Handler) IndexGin(c *gin.Context) {
	c.JSON(http.StatusOK, h.welcome())
}
"#;

const GIN_METRICS: &str = r#"
func (h *Handler) MetricsGin(c *gin.Context) {
	promhttp.Handler().ServeHTTP(c.Writer, c.Request)
}
"#;

const ECHO: &str = r#"
func (h *Handler) HealthEcho(c echo.Context) error {
	return c.JSON(http.StatusOK, Response{
		Status:  "ok",
		Message: "Service is healthy",
	})
}

func (h *Handler) ReadyEcho(c echo.Context) error {
	return c.JSON(http.StatusOK, Response{
		Status:  "ready",
		Message: "Service is ready to accept traffic",
	})
}

func (h *Handler) IndexEcho(c echo.Context) error {
	return c.JSON(http.StatusOK, h.welcome())
}
"#;

const ECHO_METRICS: &str = r#"
func (h *Handler) MetricsEcho(c echo.Context) error {
	promhttp.Handler().ServeHTTP(c.Response(), c.Request())
	return nil
}
"#;

const FIBER: &str = r#"
func (h *Handler) HealthFiber(c *fiber.Ctx) error {
	return c.JSON(Response{
		Status:  "ok",
		Message: "Service is healthy",
	})
}

func (h *Handler) ReadyFiber(c *fiber.Ctx) error {
	return c.JSON(Response{
		Status:  "ready",
		Message: "Service is ready to accept traffic",
	})
}

func (h *Handler) IndexFiber(c *fiber.Ctx) error {
	return c.JSON(h.welcome())
}
"#;

const FIBER_METRICS: &str = r#"
func (h *Handler) MetricsFiber(c *fiber.Ctx) error {
	return adaptor.HTTPHandler(promhttp.Handler())(c)
}
"#;

pub(crate) fn render(config: &ProjectConfig, ctx: &RenderContext) -> String {
    let module = config.module_path();
    let metrics = config.metrics_enabled();

    let mut imports = ImportSet::new();
    imports
        .add_all(["encoding/json", "net/http"])
        .add(format!("{module}/internal/config"))
        .add(format!("{module}/internal/observability"));

    // net/http frameworks are served through obs.MetricsHandler().
    let (framework_handlers, metrics_handler) = match config.framework() {
        Framework::Stdlib | Framework::Chi => ("", ""),
        Framework::Gin => {
            imports.add("github.com/gin-gonic/gin");
            (GIN, GIN_METRICS)
        }
        Framework::Echo => {
            imports.add("github.com/labstack/echo/v4");
            (ECHO, ECHO_METRICS)
        }
        Framework::Fiber => {
            imports.add("github.com/gofiber/fiber/v2");
            if metrics {
                imports.add("github.com/gofiber/fiber/v2/middleware/adaptor");
            }
            (FIBER, FIBER_METRICS)
        }
    };
    if metrics && !metrics_handler.is_empty() {
        imports.add("github.com/prometheus/client_golang/prometheus/promhttp");
    }

    let mut out = String::from("package handlers\n\n");
    out.push_str(&imports.render());
    out.push('\n');
    out.push_str(BASE);
    out.push_str(framework_handlers);
    if metrics {
        out.push_str(metrics_handler);
    }

    ctx.render(&out)
}
