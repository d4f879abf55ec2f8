use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use hue_gateway::api::{Bridge, HueBridgeClient};
use hue_gateway::config::GatewayConfig;
use hue_gateway::error::AppError;
use hue_gateway::models::{AuthRequest, LightPayload};
use hue_gateway::server::{serve_with_shutdown, AppState};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct RecordingBridge {
    bodies: Arc<Mutex<Vec<String>>>,
}

impl Bridge for RecordingBridge {
    async fn set_grouped_light(&self, payload: &LightPayload) -> Result<Vec<u8>, AppError> {
        let body = String::from_utf8(payload.to_json_bytes()?).unwrap_or_default();
        self.bodies.lock().unwrap().push(body);
        Ok(br#"{"data":[{"rid":"group-1","rtype":"grouped_light"}],"errors":[]}"#.to_vec())
    }

    async fn request_app_key(&self, auth: &AuthRequest) -> Result<Vec<u8>, AppError> {
        self.bodies
            .lock()
            .unwrap()
            .push(serde_json::to_string(auth)?);
        Ok(br#"[{"error":{"type":101,"description":"link button not pressed"}}]"#.to_vec())
    }
}

async fn spawn_gateway<B: Bridge>(bridge: B) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::new(bridge, AuthRequest::new("hue-gateway#test"));
    tokio::spawn(serve_with_shutdown(listener, state, std::future::pending()));
    addr
}

fn http() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap()
}

#[tokio::test]
async fn white_and_colour_commands_are_translated() {
    let bridge = RecordingBridge::default();
    let addr = spawn_gateway(bridge.clone()).await;
    let url = format!("http://{}/huelights/changecolour", addr);

    let response = http()
        .post(&url)
        .body(r#"{"light":"white","mirek":366,"brightness":0.8}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("grouped_light"));

    let response = http()
        .post(&url)
        .body(r#"{"light":"colour","x":0.31,"y":0.32,"brightness":1.0}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let bodies = bridge.bodies.lock().unwrap().clone();
    assert_eq!(
        bodies,
        vec![
            r#"{"color_temperature":{"mirek":366},"dimming":{"brightness":0.8}}"#.to_string(),
            r#"{"color":{"xy":{"x":0.31,"y":0.32}},"dimming":{"brightness":1.0}}"#.to_string(),
        ]
    );
}

#[tokio::test]
async fn get_on_change_colour_is_rejected() {
    let bridge = RecordingBridge::default();
    let addr = spawn_gateway(bridge.clone()).await;

    let response = http()
        .get(format!("http://{}/huelights/changecolour", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 405);
    assert!(bridge.bodies.lock().unwrap().is_empty());
}

#[tokio::test]
async fn pairing_accepts_any_method() {
    let bridge = RecordingBridge::default();
    let addr = spawn_gateway(bridge.clone()).await;
    let url = format!("http://{}/huelights/code", addr);

    let response = http().get(&url).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        r#"[{"error":{"type":101,"description":"link button not pressed"}}]"#
    );

    let response = http().post(&url).send().await.unwrap();
    assert_eq!(response.status(), 200);

    let bodies = bridge.bodies.lock().unwrap().clone();
    assert_eq!(bodies.len(), 2);
    assert_eq!(
        bodies[0],
        r#"{"devicetype":"hue-gateway#test","generateclientkey":true}"#
    );
}

#[tokio::test]
async fn unreachable_bridge_returns_500_and_keeps_serving() {
    let config = GatewayConfig::from_json(
        r#"{"hueIP": "127.0.0.1:1", "appKey": "k", "groupedLight": "g", "timeoutSecs": 2}"#,
    )
    .unwrap();
    let bridge = HueBridgeClient::new(&config.bridge_settings()).unwrap();
    let addr = spawn_gateway(bridge).await;
    let url = format!("http://{}/huelights/changecolour", addr);

    for _ in 0..2 {
        let response = http()
            .post(&url)
            .body(r#"{"light":"white","mirek":250,"brightness":0.5}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "bridge");
    }

    let response = http()
        .get(format!("http://{}/huelights/code", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
}
