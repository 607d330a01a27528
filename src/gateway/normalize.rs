use super::forward::UpstreamOutcome;
use super::kind::InferenceRequest;
use crate::{Error, Result, simulate};
use axum::http::StatusCode;
use serde_json::Value;
use tracing::{error, warn};

/// Longest slice of an unexpected upstream body that gets echoed back in an
/// error message.
const ERROR_BODY_PREVIEW_LIMIT: usize = 2048;

/// Collapses whatever the forwarding attempt produced into the gateway's
/// single response contract, in strict order: no response at all engages the
/// simulator, an upstream error is surfaced with its status, a mislabeled
/// success is a protocol violation, and a JSON success passes through
/// untouched.
pub fn normalize(outcome: UpstreamOutcome, request: &InferenceRequest) -> Result<Value> {
    match outcome {
        UpstreamOutcome::Unavailable { reason } => {
            warn!(
                "Upstream unavailable for {} request, serving simulated response: {}",
                request.kind(),
                reason
            );
            simulate::response_for(request)
        }
        UpstreamOutcome::Answered {
            status,
            content_type,
            body,
        } => {
            let is_json = content_type
                .as_deref()
                .map(|value| value.contains("application/json"))
                .unwrap_or(false);

            if !status.is_success() {
                let message = extract_error_message(status, is_json, &body);
                error!(
                    "Upstream returned {} for {} request: {}",
                    status,
                    request.kind(),
                    message
                );
                return Err(Error::upstream(status, message));
            }

            if !is_json {
                let preview = body_preview(&body);
                error!("Expected JSON from upstream but got: {}", preview);
                return Err(Error::protocol_violation(preview));
            }

            match serde_json::from_slice::<Value>(&body) {
                Ok(data) => Ok(data),
                // The content type promised JSON; a body that fails to parse
                // is the same contract breach as a non-JSON label.
                Err(e) => {
                    let preview = body_preview(&body);
                    error!("Upstream sent unparseable JSON ({}): {}", e, preview);
                    Err(Error::protocol_violation(preview))
                }
            }
        }
    }
}

/// Pulls the most useful human-readable message out of an upstream error
/// response: the `error` field of a JSON body, then a non-empty text body,
/// then a generic status line.
fn extract_error_message(status: StatusCode, is_json: bool, body: &[u8]) -> String {
    if is_json {
        if let Ok(value) = serde_json::from_slice::<Value>(body) {
            if let Some(message) = value.get("error").and_then(Value::as_str) {
                return message.to_string();
            }
        }
    } else {
        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        if !text.is_empty() {
            return text.to_string();
        }
    }

    format!(
        "API error: {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Error")
    )
}

fn body_preview(body: &[u8]) -> String {
    let end = body.len().min(ERROR_BODY_PREVIEW_LIMIT);
    String::from_utf8_lossy(&body[..end]).into_owned()
}
