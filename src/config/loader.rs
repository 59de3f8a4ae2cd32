use crate::config::config::{AccountBackend, AppConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 合并顺序：
    /// 1. 内置默认值
    /// 2. `CHATDESK_CONFIG` 指定的文件，否则 ./chatdesk.toml
    /// 3. `CHATDESK_` 前缀的环境变量（`__` 表示嵌套）
    pub fn load() -> Result<AppConfig, figment::Error> {
        let path = std::env::var("CHATDESK_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path());
        Self::load_from(&path)
    }

    /// 从指定路径加载配置
    pub fn load_from(path: &Path) -> Result<AppConfig, figment::Error> {
        Self::figment(path).extract()
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("CHATDESK_").ignore(&["config"]).split("__"))
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.storage.intents_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::InvalidPath("storage.intents_path".into()));
        }

        if config.storage.backup_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::InvalidPath("storage.backup_path".into()));
        }

        if config.accounts.backend == AccountBackend::Firebase
            && (config.accounts.project_id.is_empty() || config.accounts.api_key.is_empty())
        {
            return Err(ConfigValidationError::MissingFirebaseCredentials);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("配置路径无效: {0}")]
    InvalidPath(String),

    #[error("Firebase 后端需要 project_id 和 api_key")]
    MissingFirebaseCredentials,
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("chatdesk.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = ConfigLoader::load_from(Path::new("absent.toml"))?;
            assert_eq!(config.server.port, 5000);
            assert_eq!(config.app_name, "chatdesk");
            Ok(())
        });
    }

    #[test]
    fn test_file_and_env_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "chatdesk.toml",
                r#"
                [server]
                port = 8081

                [storage]
                intents_path = "data/intents.json"
                "#,
            )?;
            jail.set_env("CHATDESK_SERVER__HOST", "127.0.0.1");

            let config = ConfigLoader::load_from(Path::new("chatdesk.toml"))?;
            assert_eq!(config.server.port, 8081);
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(
                config.storage.intents_path,
                PathBuf::from("data/intents.json")
            );
            assert_eq!(
                config.storage.backup_path,
                PathBuf::from("static/backup.json")
            );
            Ok(())
        });
    }

    #[test]
    fn test_validate_rejects_firebase_without_credentials() {
        let mut config = AppConfig::development();
        config.accounts.backend = AccountBackend::Firebase;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::MissingFirebaseCredentials)
        ));

        config.accounts.project_id = "demo".into();
        config.accounts.api_key = "key".into();
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = AppConfig::development();
        config.server.port = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidPort)
        ));
    }
}
