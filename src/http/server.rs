//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeouts, request ID, CORS, body limit)
//! - Dispatch submissions to the relay
//! - Serve the static tree for everything else
//! - Bind server to listener with graceful shutdown

use axum::{
    body::{Body, Bytes},
    extract::{rejection::BytesRejection, State},
    http::{Method, Request},
    middleware,
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::http::request::{self, MakeRequestUuid};
use crate::http::response;
use crate::http::static_files::static_service;
use crate::relay::{self, RelayResponse, TelegramClient, UpstreamError};
use crate::security::{deny_listed, headers, limits, DenyList};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub telegram: TelegramClient,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: Arc<RelayConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, UpstreamError> {
        let telegram = TelegramClient::from_config(&config.telegram, &config.timeouts)?;
        let config = Arc::new(config);

        let state = AppState {
            config: config.clone(),
            telegram,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        let api = Router::new()
            .route("/api/health", any(health_handler))
            .route(
                "/api/submit",
                any(submit_handler).layer(limits::body_limit(&config.limits)),
            )
            .with_state(state);

        let mut router = if config.static_files.enabled {
            api.fallback_service(static_service(&config.static_files))
        } else {
            api.fallback(|| async { response::not_found() })
        };

        router = router.layer(middleware::from_fn_with_state(
            DenyList::new(config.static_files.deny.iter().cloned()),
            deny_listed,
        ));

        if config.cors.enabled {
            router = router.layer(CorsLayer::permissive());
        }
        if config.security.enable_headers {
            router = headers::with_security_headers(router);
        }

        // Layers wrap outward: the request id is set before the trace span opens.
        router
            .layer(CatchPanicLayer::custom(response::internal_fault))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %req.method(),
                    path = %req.uri().path(),
                    request_id = %request::request_id(req),
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            configured = self.config.telegram.is_configured(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

async fn health_handler(method: Method) -> RelayResponse {
    response::health(method == Method::GET)
}

async fn submit_handler(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> RelayResponse {
    let payload = if method == Method::POST {
        match body {
            Ok(bytes) => request::parse_json_body(&bytes),
            Err(rejection) => return limits::reject_body(rejection),
        }
    } else {
        serde_json::Value::Null
    };

    relay::handle(&method, &payload, &state.config.telegram, &state.telegram).await
}
