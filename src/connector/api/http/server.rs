use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::MatchedPath;
use axum::http::Request;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Span};

use crate::connector::api::Container;

use super::handlers;

/// Build the HTTP application over a shared container.
pub fn build_router(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/recommendation", post(handlers::recommendation))
        .route("/api/chat", post(handlers::chat))
        .with_state(container)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_request(|_request: &Request<_>, _span: &Span| {})
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                ),
        )
}

/// Serve until Ctrl-C.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let app = build_router(container.clone());
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", listener.local_addr()?);
    info!(
        "Generation service: {}, static dir: {}",
        container.generation_service_name(),
        container.static_dir().display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
