mod forward;
mod kind;
mod normalize;
mod types;

pub use forward::{UpstreamClient, UpstreamOutcome};
pub use kind::{GatewayKind, InferenceRequest};
pub use normalize::normalize;
pub use types::{ClassifyResult, DefendResult, VisualizeResult};

use crate::{Result, config::UpstreamConfig};
use serde_json::Value;

/// The forward-or-simulate pipeline shared by all three request kinds. The
/// handlers only differ in how they validate their multipart fields; from
/// here on the flow is identical.
pub struct Gateway {
    upstream: UpstreamClient,
}

impl Gateway {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        Ok(Self {
            upstream: UpstreamClient::new(config)?,
        })
    }

    /// Issues the single upstream attempt and collapses whatever came back
    /// (or didn't) into the response contract.
    pub async fn handle(&self, request: InferenceRequest) -> Result<Value> {
        let outcome = self.upstream.forward(&request).await;
        normalize(outcome, &request)
    }
}
