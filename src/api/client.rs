use reqwest::header::CONTENT_TYPE;
use reqwest::Method;

use super::bridge::Bridge;
use crate::config::BridgeSettings;
use crate::error::AppError;
use crate::models::{AuthRequest, LightPayload};

const PATH_GROUPED_LIGHT: &str = "/clip/v2/resource/grouped_light";
const PATH_API: &str = "/api";
const APP_KEY_HEADER: &str = "hue-application-key";

pub struct HueBridgeClient {
    client: reqwest::Client,
    base_url: String,
    app_key: String,
    grouped_light: String,
}

fn build_http_client(settings: &BridgeSettings) -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .danger_accept_invalid_certs(!settings.verify_tls)
        .timeout(settings.timeout)
        .build()?)
}

impl HueBridgeClient {
    pub fn new(settings: &BridgeSettings) -> Result<Self, AppError> {
        Self::with_base_url(settings, format!("https://{}", settings.hue_ip))
    }

    pub(crate) fn with_base_url(
        settings: &BridgeSettings,
        base_url: impl Into<String>,
    ) -> Result<Self, AppError> {
        let client = build_http_client(settings)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            app_key: settings.app_key.clone(),
            grouped_light: settings.grouped_light.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn grouped_light_path(&self) -> String {
        format!("{}/{}", PATH_GROUPED_LIGHT, self.grouped_light)
    }

    /// Make a single request against the bridge and return the body verbatim.
    ///
    /// The bridge's HTTP status is not inspected; only transport failures
    /// and unreadable bodies are errors.
    pub async fn send(
        &self,
        method: Method,
        url_path: &str,
        body: Vec<u8>,
        with_app_key: bool,
    ) -> Result<Vec<u8>, AppError> {
        let url = format!("{}{}", self.base_url, url_path);
        tracing::debug!(%method, %url, body = %String::from_utf8_lossy(&body), "bridge request");

        let mut request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if with_app_key {
            request = request.header(APP_KEY_HEADER, &self.app_key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(%url, error = %e, "error sending bridge request");
            AppError::Bridge(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(%url, error = %e, "error reading bridge response");
            AppError::Bridge(e)
        })?;

        tracing::info!(
            %url,
            status = status.as_u16(),
            body = %String::from_utf8_lossy(&bytes),
            "response from bridge"
        );
        Ok(bytes.to_vec())
    }
}

impl Bridge for HueBridgeClient {
    async fn set_grouped_light(&self, payload: &LightPayload) -> Result<Vec<u8>, AppError> {
        let body = payload.to_json_bytes()?;
        self.send(Method::PUT, &self.grouped_light_path(), body, true)
            .await
    }

    async fn request_app_key(&self, auth: &AuthRequest) -> Result<Vec<u8>, AppError> {
        let body = serde_json::to_vec(auth)?;
        self.send(Method::POST, PATH_API, body, false).await
    }
}
