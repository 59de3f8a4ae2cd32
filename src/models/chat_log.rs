//! 聊天记录模型

use serde::{Deserialize, Serialize};

/// 一次聊天交互
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLogEntry {
    /// 分钟精度时间戳
    #[serde(default)]
    pub timestamp: String,
    /// 归一化后的用户输入
    #[serde(default)]
    pub user: String,
    /// 机器人回复
    #[serde(default)]
    pub bot: String,
}

impl ChatLogEntry {
    /// 以当前时间创建记录
    pub fn now(user: impl Into<String>, bot: impl Into<String>) -> Self {
        Self {
            timestamp: super::minute_timestamp(),
            user: user.into(),
            bot: bot.into(),
        }
    }
}
