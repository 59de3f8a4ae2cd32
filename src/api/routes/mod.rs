//! Routes 模块
//!
//! 定义 HTTP 路由，路径与站点原有地址保持一致。

pub mod account_routes;
pub mod backup_routes;
pub mod chat_routes;
pub mod intent_routes;
pub mod page_routes;
