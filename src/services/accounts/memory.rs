//! 进程内账户服务，用于开发环境和测试

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::collections::HashMap;
use uuid::Uuid;

use super::{AccountError, AccountOutcome, AccountService, USER_NOT_FOUND};

#[derive(Debug, Clone)]
struct UserRecord {
    username: String,
    email: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct InMemoryAccountService {
    email_domain: String,
    users: RwLock<HashMap<String, UserRecord>>,
    appointments: RwLock<HashMap<String, Vec<Map<String, Value>>>>,
}

impl InMemoryAccountService {
    pub fn new(email_domain: impl Into<String>) -> Self {
        Self {
            email_domain: email_domain.into(),
            ..Self::default()
        }
    }

    /// 某个用户保存的预约
    pub fn appointments_for(&self, user_id: &str) -> Vec<Map<String, Value>> {
        self.appointments
            .read()
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }

    fn try_register(&self, username: &str) -> Result<String, AccountError> {
        if username.trim().is_empty() {
            return Err(AccountError::Rejected("Username must not be empty.".into()));
        }

        let email = format!("{}@{}", username, self.email_domain);
        let mut users = self.users.write();
        if users.values().any(|u| u.email == email) {
            return Err(AccountError::Rejected(
                "The email address is already in use by another account.".into(),
            ));
        }

        let user_id = Uuid::new_v4().simple().to_string();
        users.insert(
            user_id.clone(),
            UserRecord {
                username: username.to_string(),
                email,
                created_at: Utc::now(),
            },
        );
        tracing::debug!("Registered in-memory user {}", user_id);
        Ok(user_id)
    }
}

#[async_trait]
impl AccountService for InMemoryAccountService {
    async fn register(&self, username: &str, _password: &str) -> AccountOutcome {
        AccountOutcome::from_result(
            self.try_register(username)
                .map(|user_id| AccountOutcome::registered(user_id, username)),
        )
    }

    async fn login(&self, username: &str, _password: &str) -> AccountOutcome {
        // earliest registration wins, like a query that returns the first match
        let users = self.users.read();
        users
            .iter()
            .filter(|(_, u)| u.username == username)
            .min_by_key(|(_, u)| u.created_at)
            .map(|(id, u)| AccountOutcome::logged_in(id.clone(), u.username.clone()))
            .unwrap_or_else(|| AccountOutcome::failure(USER_NOT_FOUND))
    }

    async fn add_appointment(&self, user_id: &str, details: &Map<String, Value>) -> AccountOutcome {
        self.appointments
            .write()
            .entry(user_id.to_string())
            .or_default()
            .push(details.clone());
        AccountOutcome::appointment_saved()
    }
}
