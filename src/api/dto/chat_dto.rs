//! 聊天 DTO

use serde::{Deserialize, Serialize};

/// 聊天请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ChatRequest {
    /// 用户输入
    pub message: String,
}

/// 聊天响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// 机器人回复
    pub response: String,
}
