//! Account Routes

use crate::api::app_state::AppState;
use crate::api::handlers::account_handler::*;
use axum::{Router, routing::post};

/// 创建账户路由器
pub fn create_account_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/users/:user_id/appointments", post(add_user_appointment))
}
