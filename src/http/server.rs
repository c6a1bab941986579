//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the navigation handler and admin endpoints
//! - Wire up middleware (tracing, timeout, request ID)
//! - Strip the deployment base and dispatch to the route table
//! - Answer with a rendered view, a redirect or a 404

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::admin::setup_admin_router;
use crate::config::RouterConfig;
use crate::http::request::UuidRequestId;
use crate::http::response::{error_response, redirect, JsonRenderer, ViewRenderer};
use crate::observability::metrics;
use crate::routing::{Resolution, RouteTable, WebHistory};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub history: Arc<WebHistory>,
    pub renderer: Arc<dyn ViewRenderer>,
}

/// HTTP front for the route table.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server rendering views as JSON.
    pub fn new(config: &RouterConfig, table: RouteTable) -> Self {
        Self::with_renderer(config, table, Arc::new(JsonRenderer))
    }

    pub fn with_renderer(
        config: &RouterConfig,
        table: RouteTable,
        renderer: Arc<dyn ViewRenderer>,
    ) -> Self {
        let state = AppState {
            table: Arc::new(table),
            history: Arc::new(WebHistory::new(&config.history.base)),
            renderer,
        };

        Self {
            router: Self::build_router(config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RouterConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(navigate_handler))
            .route("/{*path}", get(navigate_handler));

        if config.admin.enabled {
            router = router.merge(setup_admin_router());
        }

        router
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router, e.g. for driving with `tower::ServiceExt`.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await
    }
}

async fn navigate_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let Some(location) = state.history.location(uri.path()) else {
        metrics::record_resolution("outside_base");
        return error_response(
            StatusCode::NOT_FOUND,
            format!("`{}` is outside base `{}`", uri.path(), state.history.base()),
        );
    };

    let resolution = state.table.resolve(location);
    metrics::record_resolution(resolution.outcome());
    tracing::debug!(path = location, outcome = resolution.outcome(), "Navigation resolved");

    match resolution {
        Resolution::Render { name, view } => state.renderer.render(location, name, view),
        Resolution::Redirect(to) => redirect(&state.history.href(to)),
        Resolution::NotFound => {
            error_response(StatusCode::NOT_FOUND, format!("no route matches `{}`", location))
        }
    }
}
