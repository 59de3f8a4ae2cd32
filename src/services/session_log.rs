//! 会话日志
//!
//! 进程内只追加的预约记录和聊天记录。只有恢复备份会整体替换。

use crate::models::{AppointmentRecord, BackupDocument, ChatLogEntry};

#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    appointments: Vec<AppointmentRecord>,
    chat_logs: Vec<ChatLogEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_chat(&mut self, entry: ChatLogEntry) {
        self.chat_logs.push(entry);
    }

    pub fn append_appointment(&mut self, record: AppointmentRecord) {
        self.appointments.push(record);
    }

    /// 两个序列的只读拷贝
    pub fn snapshot(&self) -> BackupDocument {
        BackupDocument {
            appointments: self.appointments.clone(),
            chat_logs: self.chat_logs.clone(),
        }
    }

    /// 丢弃当前内容并装入给定文档
    pub fn replace(&mut self, doc: BackupDocument) {
        self.appointments = doc.appointments;
        self.chat_logs = doc.chat_logs;
    }

    pub fn appointments(&self) -> &[AppointmentRecord] {
        &self.appointments
    }

    pub fn chat_logs(&self) -> &[ChatLogEntry] {
        &self.chat_logs
    }
}
