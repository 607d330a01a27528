#![allow(dead_code)]

use advml_gateway::{
    config::UpstreamConfig,
    gateway::Gateway,
    server::{self, handlers::AppState},
};
use axum::{Router, body::Body, http::Request, response::Response};
use serde_json::Value;
use std::sync::Arc;

/// Boundary used by the hand-rolled multipart bodies below.
pub const BOUNDARY: &str = "gateway-test-boundary";

/// Build a router backed by the given upstream settings
pub fn app_with_upstream(config: UpstreamConfig) -> Router {
    let gateway = Gateway::new(config).unwrap();
    server::router(AppState {
        gateway: Arc::new(gateway),
    })
}

/// Build a router with no upstream configured, so every request degrades
/// into a simulated response
pub fn simulation_app() -> Router {
    app_with_upstream(UpstreamConfig::default())
}

/// Read and parse a JSON response body
pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "response body was not JSON ({}): {}",
            e,
            String::from_utf8_lossy(&bytes)
        )
    })
}

/// Assembles a raw multipart/form-data request body, part by part
pub struct MultipartBody {
    bytes: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                BOUNDARY, name, file_name, content_type
            )
            .as_bytes(),
        );
        self.bytes.extend_from_slice(data);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    /// Close the body and wrap it in a POST request to `uri`
    pub fn into_request(self, uri: &str) -> Request<Body> {
        let mut bytes = self.bytes;
        bytes.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(bytes))
            .unwrap()
    }
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}
