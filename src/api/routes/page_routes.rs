//! Page Routes
//!
//! 首页、预约表单和备份查看页。

use crate::api::app_state::AppState;
use crate::api::handlers::page_handler::*;
use axum::{Router, routing::get};

/// 创建页面路由器
pub fn create_page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/appointment", get(appointment_form).post(submit_appointment))
        .route("/backup", get(backup_view))
}
