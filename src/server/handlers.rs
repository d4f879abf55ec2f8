use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::response::{IntoResponse, Response};

use super::AppState;
use crate::api::Bridge;
use crate::error::AppError;
use crate::models::InboundLightCommand;

fn relay(body: Vec<u8>) -> Response {
    ([(CONTENT_TYPE, "application/json")], body).into_response()
}

/// Translate a simplified light command and PUT it to the grouped light.
pub async fn change_colour<B: Bridge>(
    State(state): State<Arc<AppState<B>>>,
    method: Method,
    body: Bytes,
) -> Result<Response, AppError> {
    if method != Method::POST {
        tracing::info!(%method, "method not allowed");
        return Err(AppError::MethodNotAllowed(method.to_string()));
    }

    let command = InboundLightCommand::from_slice(&body).inspect_err(|_| {
        tracing::warn!(body = %String::from_utf8_lossy(&body), "cannot unmarshal light command");
    })?;

    tracing::info!(
        light = %command.light,
        x = command.x,
        y = command.y,
        brightness = command.brightness,
        mirek = command.mirek,
        "light command"
    );

    let payload = command.into_payload()?;
    let response = state.bridge.set_grouped_light(&payload).await?;
    Ok(relay(response))
}

/// Ask the bridge for a new application key. Accepts any method.
pub async fn request_client_key<B: Bridge>(
    State(state): State<Arc<AppState<B>>>,
) -> Result<Response, AppError> {
    let response = state.bridge.request_app_key(&state.auth_request).await?;
    Ok(relay(response))
}
