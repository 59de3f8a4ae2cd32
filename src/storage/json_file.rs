//! JSON 文件读写
//!
//! 意图文档和备份文档共用的落盘方式：UTF-8、4 空格缩进、整文件覆盖。

use serde::{Serialize, de::DeserializeOwned};
use std::io;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

/// JSON 文件操作错误
#[derive(Debug, Error)]
pub enum JsonFileError {
    #[error("无法读取 {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("无法解析 {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("无法编码 JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("无法写入 {path}: {source}")]
    Write { path: String, source: io::Error },
}

impl JsonFileError {
    /// 文件不存在
    pub fn is_not_found(&self) -> bool {
        matches!(self, JsonFileError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// 编码为 4 空格缩进的 JSON，非 ASCII 字符原样输出
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// 读取并解析 JSON 文件
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, JsonFileError> {
    let bytes = fs::read(path).await.map_err(|source| JsonFileError::Read {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| JsonFileError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// 覆盖写入 JSON 文件，必要时创建父目录
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), JsonFileError> {
    let bytes = to_pretty_json(value).map_err(JsonFileError::Encode)?;

    let write_err = |source| JsonFileError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(write_err)?;
    }

    fs::write(path, bytes).await.map_err(write_err)
}
