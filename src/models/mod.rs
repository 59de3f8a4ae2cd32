//! 数据模型模块
//!
//! 定义意图、聊天记录、预约记录和备份文档。

pub mod appointment;
pub mod backup;
pub mod chat_log;
pub mod intent;

pub use appointment::AppointmentRecord;
pub use backup::BackupDocument;
pub use chat_log::ChatLogEntry;
pub use intent::{Intent, IntentDocument};

/// 记录使用的时间戳格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// 当前本地时间，分钟精度
pub fn minute_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
