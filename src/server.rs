//! HTTP layer
//!
//! Every method and every path reaches the same handler, which runs the
//! request pipeline against the configured dataset.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, ServerConfig};
use crate::pipeline;

pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Build the application router around a shared configuration.
pub fn router(config: Arc<ServerConfig>) -> Router {
    Router::new().fallback(handle).with_state(config)
}

async fn handle(
    State(config): State<Arc<ServerConfig>>,
    method: Method,
    uri: Uri,
    RawQuery(query): RawQuery,
) -> Response {
    match pipeline::render(&config, query.as_deref()).await {
        Ok(body) => {
            debug!(%method, %uri, "served document");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, XML_CONTENT_TYPE)],
                body,
            )
                .into_response()
        }
        Err(err) => {
            warn!(%method, %uri, kind = ?err.kind(), error = %err, "request failed");
            err.into_response()
        }
    }
}

/// Bind the configured address.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ConfigError> {
    let address = config.bind_address();
    TcpListener::bind(&address)
        .await
        .map_err(|source| ConfigError::Bind { address, source })
}

/// Serve until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    config: Arc<ServerConfig>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    info!(
        "Server running at http://{}:{}/",
        config.host, config.port
    );

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await
}
