//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the request router as its only handler
//! - Wire up middleware (access control, tracing, request ID, timeout)
//! - Serve on a listener until shutdown is signalled

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::TimeoutConfig;
use crate::http::handler::serve_request;
use crate::http::middleware::access_control_middleware;
use crate::lifecycle::startup::ServeContext;
use crate::security::AccessFilter;
use crate::serve::FileCatalog;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FileCatalog>,
    pub access: Arc<AccessFilter>,
    pub root_dir: Arc<PathBuf>,
}

/// HTTP server for the file catalog.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from a prepared startup context.
    pub fn new(context: ServeContext) -> Self {
        let ServeContext {
            config,
            root_dir,
            catalog,
            access,
        } = context;

        let state = AppState {
            catalog: Arc::new(catalog),
            access: Arc::new(access),
            root_dir: Arc::new(root_dir),
        };

        let router = Self::build_router(&config.timeouts, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(timeouts: &TimeoutConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(serve_request))
            .route("/{*path}", any(serve_request))
            .fallback(serve_request)
            .layer(middleware::from_fn_with_state(
                state.clone(),
                access_control_middleware,
            ))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        timeouts.request_secs,
                    ))),
            )
    }

    /// The configured router, without a listener. Used to drive requests in-process.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
