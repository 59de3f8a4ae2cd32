//! 备份编解码
//!
//! 把会话日志快照写成 JSON 文件，或者从 JSON 文件整体恢复。
//! 恢复是完整替换，不合并。

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::BackupDocument;
use crate::storage::json_file::{self, JsonFileError};

/// 导出成功提示
pub const EXPORT_MESSAGE: &str = "Backup exported successfully!";

/// 恢复成功提示
pub const RESTORE_MESSAGE: &str = "Backup restored successfully!";

/// 备份错误
#[derive(Debug, Error)]
pub enum BackupError {
    /// 调用方没有给出路径
    #[error("No file path provided for restore.")]
    NoPath,

    #[error("{0}")]
    Read(String),

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Encode(String),

    #[error("{0}")]
    Write(String),
}

impl From<JsonFileError> for BackupError {
    fn from(e: JsonFileError) -> Self {
        let message = e.to_string();
        match e {
            JsonFileError::Read { .. } => BackupError::Read(message),
            JsonFileError::Parse { .. } => BackupError::Parse(message),
            JsonFileError::Encode(_) => BackupError::Encode(message),
            JsonFileError::Write { .. } => BackupError::Write(message),
        }
    }
}

/// 导出回执
#[derive(Debug, Clone, Serialize)]
pub struct ExportReceipt {
    pub message: String,
    pub file_path: PathBuf,
}

/// 把快照写到指定路径，覆盖已有文件
pub async fn export(snapshot: &BackupDocument, path: &Path) -> Result<ExportReceipt, BackupError> {
    json_file::write_json(path, snapshot).await?;
    Ok(ExportReceipt {
        message: EXPORT_MESSAGE.to_string(),
        file_path: path.to_path_buf(),
    })
}

/// 读取备份文档
///
/// 空字符串路径视同未提供。
pub async fn import(path: Option<&Path>) -> Result<BackupDocument, BackupError> {
    let path = path
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(BackupError::NoPath)?;
    Ok(json_file::read_json(path).await?)
}
