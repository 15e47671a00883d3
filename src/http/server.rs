//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router around the redirect chain
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Serve until the shutdown signal fires

use std::time::Duration;

use axum::{body::Body, http::Request, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ShortenerConfig;
use crate::http::fallback::default_mux;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::lifecycle::shutdown::triggered;
use crate::lifecycle::startup::{build_redirects, RedirectChain, StartupError};

/// HTTP server for the URL shortener.
pub struct HttpServer {
    router: Router,
    config: ShortenerConfig,
}

impl HttpServer {
    /// Create a server whose unmatched requests go to [`default_mux`].
    pub fn new(config: ShortenerConfig) -> Result<Self, StartupError> {
        Self::with_fallback(config, default_mux())
    }

    /// Create a server whose unmatched requests go to `fallback`.
    pub fn with_fallback(config: ShortenerConfig, fallback: Router) -> Result<Self, StartupError> {
        let chain = build_redirects(&config.redirects, fallback)?;
        let router = Self::build_router(&config, chain);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ShortenerConfig, chain: RedirectChain<Router>) -> Router {
        Router::new()
            .fallback_service(chain)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    request_id = %request_id(req),
                    method = %req.method(),
                    path = %req.uri().path(),
                )
            }))
            .layer(set_request_id_layer())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(triggered(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ShortenerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use std::collections::HashMap;
    use tower::ServiceExt;

    fn config_with(paths: &[(&str, &str)]) -> ShortenerConfig {
        let mut config = ShortenerConfig::default();
        config.redirects.paths = paths
            .iter()
            .map(|(p, u)| (p.to_string(), u.to_string()))
            .collect::<HashMap<_, _>>();
        config
    }

    fn get_req(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_router_redirects_then_falls_back() {
        let server = HttpServer::new(config_with(&[("/yaml", "https://yaml.org")])).unwrap();

        let res = server.router().oneshot(get_req("/yaml")).await.unwrap();
        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(res.headers()[header::LOCATION], "https://yaml.org");
        assert!(res.headers().contains_key("x-request-id"));

        let res = server.router().oneshot(get_req("/")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let res = server.router().oneshot(get_req("/missing")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_redirect_shadows_fallback_route() {
        let server = HttpServer::new(config_with(&[("/", "https://root.example")])).unwrap();

        let res = server.router().oneshot(get_req("/")).await.unwrap();
        assert_eq!(res.headers()[header::LOCATION], "https://root.example");
    }

    #[tokio::test]
    async fn test_custom_fallback_and_request_id_passthrough() {
        let fallback = Router::new().fallback(|| async { "custom" });
        let server = HttpServer::with_fallback(config_with(&[]), fallback).unwrap();

        let req = Request::builder()
            .uri("/anything")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        let res = server.router().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["x-request-id"], "abc-123");
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"custom");
    }
}
