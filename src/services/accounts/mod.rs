//! 账户服务
//!
//! 用户注册、登录和按用户保存预约，委托给外部认证/文档数据库服务。
//! 所有失败都折叠成 `success: false` 的结果，不会作为错误抛给调用方。

pub mod firebase;
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use firebase::FirebaseAccountService;
pub use memory::InMemoryAccountService;

use crate::config::config::{AccountBackend, AccountsConfig};

/// 账户服务内部错误
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Rejected(String),
}

/// 外部服务调用结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AccountOutcome {
    pub fn registered(user_id: impl Into<String>, username: &str) -> Self {
        Self {
            success: true,
            user_id: Some(user_id.into()),
            username: None,
            message: Some(format!("User {} registered successfully!", username)),
            error: None,
        }
    }

    pub fn logged_in(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            success: true,
            user_id: Some(user_id.into()),
            username: Some(username.into()),
            message: None,
            error: None,
        }
    }

    pub fn appointment_saved() -> Self {
        Self {
            success: true,
            user_id: None,
            username: None,
            message: Some("Appointment saved to Firebase.".to_string()),
            error: None,
        }
    }

    pub fn failure(error: impl ToString) -> Self {
        Self {
            success: false,
            user_id: None,
            username: None,
            message: None,
            error: Some(error.to_string()),
        }
    }

    /// 把内部结果折叠成对外结果
    pub fn from_result(result: Result<Self, AccountError>) -> Self {
        result.unwrap_or_else(|e| {
            tracing::warn!("Account service call failed: {}", e);
            Self::failure(e)
        })
    }
}

/// 登录时找不到用户
pub const USER_NOT_FOUND: &str = "User not found.";

/// 账户服务 trait
#[async_trait]
pub trait AccountService: Send + Sync {
    /// 注册用户
    async fn register(&self, username: &str, password: &str) -> AccountOutcome;

    /// 按用户名登录，不校验密码
    async fn login(&self, username: &str, password: &str) -> AccountOutcome;

    /// 为用户保存一条预约
    async fn add_appointment(
        &self,
        user_id: &str,
        details: &serde_json::Map<String, serde_json::Value>,
    ) -> AccountOutcome;
}

/// 按配置创建账户服务
pub fn create_account_service(
    config: &AccountsConfig,
) -> Result<Box<dyn AccountService>, AccountError> {
    match config.backend {
        AccountBackend::Memory => Ok(Box::new(InMemoryAccountService::new(
            config.email_domain.clone(),
        ))),
        AccountBackend::Firebase => Ok(Box::new(FirebaseAccountService::new(config)?)),
    }
}
