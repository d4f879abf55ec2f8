use serde::{Deserialize, Deserializer};

use crate::error::AppError;
use crate::models::light_payload::{ColorPayload, LightPayload, TemperaturePayload};

/// Simplified light command posted by callers.
///
/// Missing or `null` fields take their zero value; only the fields relevant
/// to the selected mode end up in the bridge payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InboundLightCommand {
    #[serde(deserialize_with = "null_as_default")]
    pub light: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mirek: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub x: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub y: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub brightness: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightMode {
    White,
    Colour,
}

impl LightMode {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "white" => Ok(LightMode::White),
            "colour" => Ok(LightMode::Colour),
            other => Err(AppError::UnknownLightMode(other.to_string())),
        }
    }
}

impl InboundLightCommand {
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body).map_err(AppError::MalformedCommand)
    }

    pub fn mode(&self) -> Result<LightMode, AppError> {
        LightMode::parse(&self.light)
    }

    /// Picks the bridge payload shape from `light`.
    pub fn into_payload(self) -> Result<LightPayload, AppError> {
        let payload = match self.mode()? {
            LightMode::White => TemperaturePayload::new(self.mirek, self.brightness).into(),
            LightMode::Colour => ColorPayload::new(self.x, self.y, self.brightness).into(),
        };
        Ok(payload)
    }
}
