//! 备份 DTO

use serde::{Deserialize, Serialize};

/// 导出备份响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportBackupResponse {
    pub message: String,
    pub file_path: String,
}

/// 恢复备份请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RestoreBackupRequest {
    /// 备份文件路径
    pub file_path: Option<String>,
}

/// 恢复备份失败响应
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupErrorResponse {
    pub error: String,
}
