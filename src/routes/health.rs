use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

// Root endpoint - smoke-test message for manual checks
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Pfadfinder backend is running" }))
}

// Health check endpoint - lightweight, no DB access
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Readiness probe: checks DB connectivity with timeout protection
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let query = sqlx::query("SELECT 1").fetch_one(&state.db);
    match tokio::time::timeout(std::time::Duration::from_secs(5), query).await {
        Ok(Ok(_)) => (StatusCode::OK, "ready").into_response(),
        Ok(Err(e)) => (StatusCode::SERVICE_UNAVAILABLE, format!("not ready: {}", e)).into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "not ready: timeout").into_response(),
    }
}

// Metrics endpoint: returns JSON snapshot
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.metrics.get_snapshot();
    Json(snapshot)
}

// Prometheus-compatible text exposition format
pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let m = state.metrics.get_snapshot();
    let body = format!(
        "# HELP pfadfinder_runs_started Total indexing runs started\n# TYPE pfadfinder_runs_started counter\npfadfinder_runs_started {}\n\
# HELP pfadfinder_runs_completed Total indexing runs completed\n# TYPE pfadfinder_runs_completed counter\npfadfinder_runs_completed {}\n\
# HELP pfadfinder_runs_failed Total indexing runs failed\n# TYPE pfadfinder_runs_failed counter\npfadfinder_runs_failed {}\n\
# HELP pfadfinder_sources_indexed Sources indexed\n# TYPE pfadfinder_sources_indexed counter\npfadfinder_sources_indexed {}\n\
# HELP pfadfinder_directories_indexed Directories indexed\n# TYPE pfadfinder_directories_indexed counter\npfadfinder_directories_indexed {}\n\
# HELP pfadfinder_uptime_seconds Uptime seconds\n# TYPE pfadfinder_uptime_seconds gauge\npfadfinder_uptime_seconds {}\n",
        m.runs_started,
        m.runs_completed,
        m.runs_failed,
        m.sources_indexed,
        m.directories_indexed,
        m.uptime_seconds,
    );
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

// Version/Build info endpoint (JSON)
pub async fn version() -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "package": {
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "authors": env!("CARGO_PKG_AUTHORS"),
            "license": env!("CARGO_PKG_LICENSE"),
        },
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
