pub mod bridge;
pub mod client;

pub use bridge::Bridge;
pub use client::HueBridgeClient;
