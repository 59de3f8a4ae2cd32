//! Firebase 账户服务
//!
//! 通过 REST 调用 Identity Toolkit（创建认证用户）和 Firestore（用户资料、预约文档）。
//! Firebase 认证必须有邮箱，注册时用 `<username>@<email_domain>` 代替。

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::time::Duration;
use tracing::{debug, info};

use super::{AccountError, AccountOutcome, AccountService, USER_NOT_FOUND};
use crate::config::config::AccountsConfig;

pub struct FirebaseAccountService {
    client: Client,
    api_key: String,
    auth_url: String,
    documents_url: String,
    email_domain: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    local_id: String,
}

#[derive(Debug, Deserialize)]
struct QueryRow {
    document: Option<QueryDocument>,
}

#[derive(Debug, Deserialize)]
struct QueryDocument {
    name: String,
}

impl FirebaseAccountService {
    pub fn new(config: &AccountsConfig) -> Result<Self, AccountError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            auth_url: config.auth_url.trim_end_matches('/').to_string(),
            documents_url: format!(
                "{}/v1/projects/{}/databases/(default)/documents",
                config.firestore_url.trim_end_matches('/'),
                config.project_id
            ),
            email_domain: config.email_domain.clone(),
        })
    }

    async fn create_auth_user(&self, email: &str, password: &str) -> Result<String, AccountError> {
        let response = self
            .client
            .post(format!("{}/v1/accounts:signUp", self.auth_url))
            .query(&[("key", &self.api_key)])
            .json(&json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await?;

        let body: SignUpResponse = ensure_success(response).await?.json().await?;
        Ok(body.local_id)
    }

    async fn write_profile(&self, user_id: &str, username: &str) -> Result<(), AccountError> {
        let response = self
            .client
            .patch(format!("{}/users/{}", self.documents_url, user_id))
            .query(&[("key", &self.api_key)])
            .json(&json!({
                "fields": {
                    "username": {"stringValue": username},
                    "createdAt": {"timestampValue": Utc::now().to_rfc3339()},
                }
            }))
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    async fn try_register(&self, username: &str, password: &str) -> Result<AccountOutcome, AccountError> {
        let email = format!("{}@{}", username, self.email_domain);
        let user_id = self.create_auth_user(&email, password).await?;
        self.write_profile(&user_id, username).await?;

        info!("Registered user {} ({})", username, user_id);
        Ok(AccountOutcome::registered(user_id, username))
    }

    async fn try_login(&self, username: &str) -> Result<AccountOutcome, AccountError> {
        let response = self
            .client
            .post(format!("{}:runQuery", self.documents_url))
            .query(&[("key", &self.api_key)])
            .json(&json!({
                "structuredQuery": {
                    "from": [{"collectionId": "users"}],
                    "where": {
                        "fieldFilter": {
                            "field": {"fieldPath": "username"},
                            "op": "EQUAL",
                            "value": {"stringValue": username},
                        }
                    },
                    "limit": 1,
                }
            }))
            .send()
            .await?;

        let rows: Vec<QueryRow> = ensure_success(response).await?.json().await?;
        let outcome = rows
            .into_iter()
            .find_map(|row| row.document)
            .map(|doc| AccountOutcome::logged_in(document_id(&doc.name), username))
            .unwrap_or_else(|| AccountOutcome::failure(USER_NOT_FOUND));

        debug!("Login for {}: success={}", username, outcome.success);
        Ok(outcome)
    }

    async fn try_add_appointment(
        &self,
        user_id: &str,
        details: &Map<String, Value>,
    ) -> Result<AccountOutcome, AccountError> {
        let response = self
            .client
            .post(format!(
                "{}/appointments/{}/userAppointments",
                self.documents_url, user_id
            ))
            .query(&[("key", &self.api_key)])
            .json(&json!({ "fields": to_firestore_fields(details) }))
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(AccountOutcome::appointment_saved())
    }
}

#[async_trait]
impl AccountService for FirebaseAccountService {
    async fn register(&self, username: &str, password: &str) -> AccountOutcome {
        AccountOutcome::from_result(self.try_register(username, password).await)
    }

    async fn login(&self, username: &str, _password: &str) -> AccountOutcome {
        AccountOutcome::from_result(self.try_login(username).await)
    }

    async fn add_appointment(&self, user_id: &str, details: &Map<String, Value>) -> AccountOutcome {
        AccountOutcome::from_result(self.try_add_appointment(user_id, details).await)
    }
}

/// 非 2xx 响应转成错误，优先取 Google API 错误体里的 message
async fn ensure_success(response: Response) -> Result<Response, AccountError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or(text);

    Err(AccountError::Status {
        status: status.as_u16(),
        message,
    })
}

/// 文档资源名的最后一段
fn document_id(name: &str) -> String {
    name.rsplit('/').next().unwrap_or(name).to_string()
}

fn to_firestore_fields(map: &Map<String, Value>) -> Value {
    Value::Object(
        map.iter()
            .map(|(k, v)| (k.clone(), to_firestore_value(v)))
            .collect(),
    )
}

/// JSON 值转 Firestore 的类型化值
fn to_firestore_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({"nullValue": null}),
        Value::Bool(b) => json!({"booleanValue": b}),
        Value::Number(n) if n.is_i64() || n.is_u64() => json!({"integerValue": n.to_string()}),
        Value::Number(n) => json!({"doubleValue": n.as_f64()}),
        Value::String(s) => json!({"stringValue": s}),
        Value::Array(items) => json!({
            "arrayValue": {"values": items.iter().map(to_firestore_value).collect::<Vec<_>>()}
        }),
        Value::Object(map) => json!({"mapValue": {"fields": to_firestore_fields(map)}}),
    }
}
