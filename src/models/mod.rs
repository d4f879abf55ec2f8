pub mod auth;
pub mod light_command;
pub mod light_payload;

pub use auth::AuthRequest;
pub use light_command::{InboundLightCommand, LightMode};
pub use light_payload::{ColorPayload, LightPayload, TemperaturePayload};
