//! API 模块
//!
//! 提供站点页面和 JSON 接口。

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod views;

use crate::api::app_state::AppState;
use crate::observability::track_requests;
use crate::security::middleware::security_headers_middleware;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub fn create_router(app_state: AppState) -> Router {
    let metrics = app_state.metrics.clone();

    Router::new()
        .merge(routes::page_routes::create_page_router())
        .merge(routes::chat_routes::create_chat_router())
        .merge(routes::backup_routes::create_backup_router())
        .merge(routes::intent_routes::create_intent_router())
        .merge(routes::account_routes::create_account_router())
        .route("/health", get(handlers::health))
        .layer(axum::middleware::from_fn_with_state(metrics, track_requests))
        // Add security headers middleware to all routes
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
