use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;

use crate::{api::app_state::AppState, observability::HealthStatus};

/// 健康状态；意图文档缺失不算不健康，服务仍可用
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let intents = state.front_desk.intents().await;

    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: (Utc::now() - state.started_at).num_seconds() as f64,
        intents_loaded: intents.intents.len(),
    })
}
