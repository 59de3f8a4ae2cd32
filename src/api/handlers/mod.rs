//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod account_handler;
pub mod backup_handler;
pub mod chat_handler;
pub mod health_handler;
pub mod intent_handler;
pub mod page_handler;

pub use account_handler::*;
pub use backup_handler::*;
pub use chat_handler::*;
pub use health_handler::*;
pub use intent_handler::*;
pub use page_handler::*;
