use std::future::Future;

use crate::error::AppError;
use crate::models::{AuthRequest, LightPayload};

/// Outbound operations the HTTP handlers need from a Hue bridge.
///
/// Both calls return the bridge's raw response body whatever its status.
pub trait Bridge: Send + Sync + 'static {
    /// PUT the payload to the configured grouped_light resource.
    fn set_grouped_light(
        &self,
        payload: &LightPayload,
    ) -> impl Future<Output = Result<Vec<u8>, AppError>> + Send;

    /// POST a pairing request to `/api`.
    fn request_app_key(
        &self,
        auth: &AuthRequest,
    ) -> impl Future<Output = Result<Vec<u8>, AppError>> + Send;
}
