//! 备份文档模型

use serde::{Deserialize, Serialize};

use super::{appointment::AppointmentRecord, chat_log::ChatLogEntry};

/// 会话日志快照，缺失的键按空序列处理
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BackupDocument {
    pub appointments: Vec<AppointmentRecord>,
    pub chat_logs: Vec<ChatLogEntry>,
}

impl BackupDocument {
    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty() && self.chat_logs.is_empty()
    }
}
