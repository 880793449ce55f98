use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use log::debug;
use reqwest::header::{CONTENT_TYPE, REFERER};
use serde::de::IgnoredAny;
use uuid::Uuid;

use crate::config::Config;
use crate::error::AppError;
use crate::types::{ErrorResponse, HealthResponse};

const JSON_UTF8: &str = "application/json; charset=utf-8";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, http: reqwest::Client) -> Arc<Self> {
        Arc::new(Self { config, http })
    }
}

/// Forwards the caller's body to the LeetCode GraphQL endpoint and hands back
/// whatever it answered, status included. The body is never inspected on the
/// way out; on the way back it only has to parse as JSON.
pub async fn relay_leetcode(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let relay_id = Uuid::new_v4();
    debug!(
        "Relay {} forwarding {} bytes to {}",
        relay_id,
        body.len(),
        state.config.upstream_url
    );

    let response = state
        .http
        .post(&state.config.upstream_url)
        .header(CONTENT_TYPE, "application/json")
        .header(REFERER, &state.config.referer)
        .body(body)
        .send()
        .await
        .with_context(|| format!("relay {} could not reach upstream", relay_id))?;

    let status = response.status();
    let mut payload = response
        .bytes()
        .await
        .with_context(|| format!("relay {} failed reading upstream body", relay_id))?;

    if payload.starts_with(UTF8_BOM) {
        payload = payload.slice(UTF8_BOM.len()..);
    }
    serde_json::from_slice::<IgnoredAny>(&payload)
        .with_context(|| format!("relay {} got non-JSON body ({})", relay_id, status))?;

    debug!("Relay {} upstream answered {}", relay_id, status);

    Ok((status, [(header::CONTENT_TYPE, JSON_UTF8)], payload))
}

pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}
