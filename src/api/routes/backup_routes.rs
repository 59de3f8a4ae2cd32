//! Backup Routes

use crate::api::app_state::AppState;
use crate::api::handlers::backup_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建备份路由器
pub fn create_backup_router() -> Router<AppState> {
    Router::new()
        .route("/export_backup", get(export_backup))
        .route("/restore_backup", post(restore_backup))
}
