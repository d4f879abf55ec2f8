use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimming {
    pub brightness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTemperature {
    pub mirek: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub xy: Xy,
}

/// White-light body for a grouped_light PUT.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperaturePayload {
    pub color_temperature: ColorTemperature,
    pub dimming: Dimming,
}

/// Colour body for a grouped_light PUT, in CIE xy space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorPayload {
    pub color: Color,
    pub dimming: Dimming,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LightPayload {
    Temperature(TemperaturePayload),
    Color(ColorPayload),
}

impl TemperaturePayload {
    pub fn new(mirek: i32, brightness: f64) -> Self {
        Self {
            color_temperature: ColorTemperature { mirek },
            dimming: Dimming { brightness },
        }
    }
}

impl ColorPayload {
    pub fn new(x: f64, y: f64, brightness: f64) -> Self {
        Self {
            color: Color { xy: Xy { x, y } },
            dimming: Dimming { brightness },
        }
    }
}

impl LightPayload {
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, AppError> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl From<TemperaturePayload> for LightPayload {
    fn from(payload: TemperaturePayload) -> Self {
        LightPayload::Temperature(payload)
    }
}

impl From<ColorPayload> for LightPayload {
    fn from(payload: ColorPayload) -> Self {
        LightPayload::Color(payload)
    }
}
