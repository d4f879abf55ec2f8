//! Inbound HTTP surface.
//!
//! Two routes, both accepting any method so the handlers can answer with
//! the gateway's own JSON errors:
//!
//! ```text
//! POST /huelights/changecolour  -> PUT  https://<bridge>/clip/v2/resource/grouped_light/<id>
//! *    /huelights/code          -> POST https://<bridge>/api
//! ```

pub mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::Bridge;
use crate::error::AppError;
use crate::models::AuthRequest;

pub const CHANGE_COLOUR_PATH: &str = "/huelights/changecolour";
pub const CLIENT_KEY_PATH: &str = "/huelights/code";

/// Read-only state shared by every request.
pub struct AppState<B> {
    pub bridge: B,
    pub auth_request: AuthRequest,
}

impl<B: Bridge> AppState<B> {
    pub fn new(bridge: B, auth_request: AuthRequest) -> Self {
        Self {
            bridge,
            auth_request,
        }
    }
}

pub fn router<B: Bridge>(state: Arc<AppState<B>>) -> Router {
    Router::new()
        .route(CHANGE_COLOUR_PATH, any(handlers::change_colour::<B>))
        .route(CLIENT_KEY_PATH, any(handlers::request_client_key::<B>))
        .layer(middleware::from_fn(request_span))
        .with_state(state)
}

async fn request_span(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
    );
    next.run(request).instrument(span).await
}

/// Serve until Ctrl+C.
pub async fn serve<B: Bridge>(listener: TcpListener, state: AppState<B>) -> Result<(), AppError> {
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

pub async fn serve_with_shutdown<B, F>(
    listener: TcpListener,
    state: AppState<B>,
    shutdown: F,
) -> Result<(), AppError>
where
    B: Bridge,
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "hue gateway listening");
    }
    axum::serve(listener, router(Arc::new(state)))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl+C, shutting down"),
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            // Without a signal handler, keep serving.
            std::future::pending::<()>().await;
        }
    }
}
