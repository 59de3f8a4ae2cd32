//! 账户 DTO

use serde::Deserialize;

/// 注册 / 登录请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}
