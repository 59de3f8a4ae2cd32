//! DTO 模块
//!
//! 数据传输对象，用于 API 请求和响应的序列化。

pub mod account_dto;
pub mod backup_dto;
pub mod chat_dto;
pub mod intent_dto;

pub use account_dto::*;
pub use backup_dto::*;
pub use chat_dto::*;
pub use intent_dto::*;

use serde::{Deserialize, Serialize};

/// 通用消息响应
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
