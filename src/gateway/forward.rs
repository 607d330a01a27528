use super::kind::InferenceRequest;
use crate::{Result, config::UpstreamConfig};
use axum::body::Bytes;
use axum::http::StatusCode;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

/// What a single forwarding attempt produced. Connectivity problems never
/// surface as errors from the client; they come back as `Unavailable` so the
/// caller can degrade into simulation.
#[derive(Debug, Clone)]
pub enum UpstreamOutcome {
    /// The upstream answered with an HTTP response of any status class.
    Answered {
        status: StatusCode,
        content_type: Option<String>,
        body: Bytes,
    },
    /// No HTTP response exists: the endpoint is unconfigured, simulation is
    /// forced by policy, or the attempt failed at the transport level
    /// (connection, DNS, timeout).
    Unavailable { reason: String },
}

/// Thin client for the inference service. One instance is shared by all
/// request kinds; the per-kind path suffix is the only thing that varies.
pub struct UpstreamClient {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Issues the single outbound attempt for this request: one multipart
    /// POST, bearer header only when a token is configured, no retries.
    pub async fn forward(&self, request: &InferenceRequest) -> UpstreamOutcome {
        if self.config.force_simulation {
            return UpstreamOutcome::Unavailable {
                reason: "simulation forced by configuration".to_string(),
            };
        }

        let Some(base_url) = self.config.base_url.as_deref() else {
            return UpstreamOutcome::Unavailable {
                reason: "upstream endpoint not configured".to_string(),
            };
        };

        let url = format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            request.kind().path_suffix()
        );

        debug!("Forwarding {} request to {}", request.kind(), url);

        let mut builder = self.client.post(&url).multipart(request.to_multipart_form());
        if let Some(token) = &self.config.token {
            builder = builder.bearer_auth(token);
        }

        match builder.send().await {
            Ok(response) => {
                let status = response.status();
                let content_type = response
                    .headers()
                    .get(CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string);
                match response.bytes().await {
                    Ok(body) => UpstreamOutcome::Answered {
                        status,
                        content_type,
                        body,
                    },
                    Err(e) => UpstreamOutcome::Unavailable {
                        reason: format!("failed to read upstream body: {}", e),
                    },
                }
            }
            Err(e) => UpstreamOutcome::Unavailable {
                reason: e.to_string(),
            },
        }
    }
}
