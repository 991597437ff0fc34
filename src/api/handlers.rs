//! HTTP API handlers.

use std::time::Instant;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use tracing::{debug, warn};

use crate::metrics;
use crate::store::StoreHandle;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Handle to the key-value store probed by the health endpoint.
    pub store: StoreHandle,
}

impl AppState {
    /// Create new app state.
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }
}

/// Root response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Human-readable liveness message.
    pub message: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
    /// Store connectivity as observed by this request's probe.
    pub redis: RedisStatus,
}

/// Store connectivity observed by a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RedisStatus {
    /// The probe round-trip succeeded.
    Connected,
    /// The probe failed or timed out.
    Disconnected,
}

/// Root handler - always returns 200 with the running banner.
pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        message: "ML Service is running",
    })
}

/// Health check handler - always returns 200.
///
/// Probes the store on every request; a failed probe degrades the
/// `redis` field instead of the status code.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let redis = match state.store.ping().await {
        Ok(()) => {
            debug!("Store probe succeeded");
            RedisStatus::Connected
        }
        Err(e) => {
            warn!(error = %e, "Store probe failed, reporting disconnected");
            RedisStatus::Disconnected
        }
    };

    metrics::record_probe_latency(start);
    metrics::inc_probe_result(&redis.to_string());

    Json(HealthResponse {
        status: "ok",
        redis,
    })
}
