use serde::Serialize;

/// Body of the bridge's `POST /api` pairing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthRequest {
    #[serde(rename = "devicetype")]
    pub device_type: String,
    #[serde(rename = "generateclientkey")]
    pub generate_client_key: bool,
}

impl AuthRequest {
    pub fn new(device_type: impl Into<String>) -> Self {
        Self {
            device_type: device_type.into(),
            generate_client_key: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let body = serde_json::to_string(&AuthRequest::new("app_name#instance_name")).unwrap();
        assert_eq!(
            body,
            r#"{"devicetype":"app_name#instance_name","generateclientkey":true}"#
        );
    }
}
