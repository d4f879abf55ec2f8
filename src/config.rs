use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::error::AppError;
use crate::models::AuthRequest;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_DEVICE_TYPE: &str = "app_name#instance_name";

/// Gateway settings loaded once at startup from the JSON config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    #[serde(rename = "hueIP", default)]
    pub hue_ip: String,
    #[serde(default)]
    pub app_key: String,
    #[serde(default)]
    pub grouped_light: String,
    #[serde(default = "default_port", deserialize_with = "port_from_string_or_number")]
    pub port: u16,
    /// Bridges ship a self-signed certificate, so verification is opt-in.
    #[serde(default)]
    pub verify_tls: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_device_type")]
    pub device_type: String,
}

/// The part of the config the bridge client needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeSettings {
    pub hue_ip: String,
    pub app_key: String,
    pub grouped_light: String,
    pub verify_tls: bool,
    pub timeout: Duration,
    pub device_type: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_device_type() -> String {
    DEFAULT_DEVICE_TYPE.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPort {
    Number(u16),
    Text(String),
}

// Older config files carry the port as a string; "" means the default.
fn port_from_string_or_number<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    match RawPort::deserialize(deserializer)? {
        RawPort::Number(port) => Ok(port),
        RawPort::Text(text) if text.trim().is_empty() => Ok(DEFAULT_PORT),
        RawPort::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid port {:?}", text))),
    }
}

impl BridgeSettings {
    pub fn auth_request(&self) -> AuthRequest {
        AuthRequest::new(self.device_type.as_str())
    }
}

impl GatewayConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let config_error = |message: String| AppError::Config {
            path: path.display().to_string(),
            message,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        Self::from_json(&raw).map_err(|e| config_error(e.to_string()))
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn bridge_settings(&self) -> BridgeSettings {
        BridgeSettings {
            hue_ip: self.hue_ip.clone(),
            app_key: self.app_key.clone(),
            grouped_light: self.grouped_light.clone(),
            verify_tls: self.verify_tls,
            timeout: Duration::from_secs(self.timeout_secs),
            device_type: self.device_type.clone(),
        }
    }
}
