use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Body returned whenever the proxy answers on its own behalf instead of
/// relaying upstream.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
