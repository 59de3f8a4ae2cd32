//! Intent Routes

use crate::api::app_state::AppState;
use crate::api::handlers::intent_handler::*;
use axum::{Router, routing::post};

/// 创建意图路由器
pub fn create_intent_router() -> Router<AppState> {
    Router::new()
        .route("/add_intent", post(add_intent))
        .route("/reload_intents", post(reload_intents))
}
