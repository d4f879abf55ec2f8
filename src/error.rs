use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Config load error ({path}): {message}")]
    Config { path: String, message: String },

    #[error("Cannot unmarshal light command: {0}")]
    MalformedCommand(#[source] serde_json::Error),

    #[error("Cannot determine light data type, should be \"white\" or \"colour\" (received {0:?})")]
    UnknownLightMode(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Bridge request failed: {0}")]
    Bridge(#[from] reqwest::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config { .. } | AppError::Logging(_) => 2,
            _ => 1,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedCommand(_) | AppError::UnknownLightMode(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Config { .. } => "config",
            AppError::MalformedCommand(_) => "malformed_command",
            AppError::UnknownLightMode(_) => "unknown_light_mode",
            AppError::MethodNotAllowed(_) => "method_not_allowed",
            AppError::Bridge(_) => "bridge",
            AppError::Logging(_) => "logging",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, Json(self.to_json())).into_response()
    }
}
