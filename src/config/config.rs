use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
        }
    }
}

/// 文件存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// 意图文档路径
    pub intents_path: PathBuf,
    /// 备份导出路径
    pub backup_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            intents_path: PathBuf::from("intents.json"),
            backup_path: PathBuf::from("static/backup.json"),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
    /// 日志文件目录
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            structured: false,
            log_dir: None,
        }
    }
}

/// 账户服务后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountBackend {
    /// 进程内存储，仅用于开发和测试
    #[default]
    Memory,
    /// Firebase Authentication + Firestore
    Firebase,
}

/// 账户服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountsConfig {
    /// 后端类型
    pub backend: AccountBackend,
    /// Firebase 项目 ID
    pub project_id: String,
    /// Web API key
    pub api_key: String,
    /// Identity Toolkit 地址
    pub auth_url: String,
    /// Firestore REST 地址
    pub firestore_url: String,
    /// 注册时生成邮箱使用的域名
    pub email_domain: String,
    /// 请求超时（秒）
    pub timeout_secs: u64,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            backend: AccountBackend::Memory,
            project_id: String::new(),
            api_key: String::new(),
            auth_url: "https://identitytoolkit.googleapis.com".into(),
            firestore_url: "https://firestore.googleapis.com".into(),
            email_domain: "example.com".into(),
            timeout_secs: 10,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 文件存储配置
    pub storage: StorageConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 账户服务配置
    pub accounts: AccountsConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig {
                level: "debug".into(),
                ..LoggingConfig::default()
            },
            accounts: AccountsConfig::default(),
            app_name: "chatdesk".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config.accounts.backend = AccountBackend::Firebase;
        config
    }

    /// 监听地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_defaults() {
        let config = AppConfig::development();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.storage.intents_path, PathBuf::from("intents.json"));
        assert_eq!(config.accounts.backend, AccountBackend::Memory);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_production_overrides() {
        let config = AppConfig::production();
        assert_eq!(config.environment, "production");
        assert!(config.logging.structured);
        assert_eq!(config.accounts.backend, AccountBackend::Firebase);
    }
}
