use super::types::{ErrorResponse, HealthResponse};
use crate::{
    Error,
    gateway::{Gateway, GatewayKind, InferenceRequest},
};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<Gateway>,
}

pub async fn classify(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    dispatch(GatewayKind::Classify, state, multipart).await
}

pub async fn defend(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    dispatch(GatewayKind::Defend, state, multipart).await
}

pub async fn visualize(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    dispatch(GatewayKind::Visualize, state, multipart).await
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// The shared handler body: validate the kind's fields, then run the
/// forward-or-simulate pipeline.
async fn dispatch(
    kind: GatewayKind,
    state: AppState,
    multipart: Multipart,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();
    info!("Received {} request ({})", kind, request_id);

    let request = match InferenceRequest::from_multipart(kind, multipart).await {
        Ok(request) => request,
        Err(e) => {
            error!("Rejected {} request ({}): {}", kind, request_id, e);
            return Err(reject(e));
        }
    };

    match state.gateway.handle(request).await {
        Ok(body) => {
            info!("Completed {} request ({})", kind, request_id);
            Ok(Json(body))
        }
        Err(e) => {
            error!("Failed {} request ({}): {}", kind, request_id, e);
            Err(reject(e))
        }
    }
}

fn reject(error: Error) -> (StatusCode, Json<ErrorResponse>) {
    (
        error.status_code(),
        Json(ErrorResponse {
            error: error.public_message(),
        }),
    )
}
