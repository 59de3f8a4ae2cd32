//! Chat Routes

use crate::api::app_state::AppState;
use crate::api::handlers::chat_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建聊天路由器
pub fn create_chat_router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat))
        .route("/intents.json", get(get_intents))
}
