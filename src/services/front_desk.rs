//! 前台服务
//!
//! 持有意图存储和会话日志的唯一上下文对象。所有读写都经过同一把异步锁，
//! 编辑意图和恢复备份的读-改-写因此不会互相覆盖。

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::config::StorageConfig;
use crate::error::{AppError, Result};
use crate::models::{AppointmentRecord, BackupDocument, ChatLogEntry, Intent, IntentDocument};
use crate::services::backup::{self, BackupError, ExportReceipt};
use crate::services::intent_editor;
use crate::services::intent_store::{IntentLoad, IntentStore};
use crate::services::matcher::{self, Reply};
use crate::services::session_log::SessionLog;

/// 恢复结果统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreSummary {
    pub appointments: usize,
    pub chat_logs: usize,
}

/// 前台服务 trait
#[async_trait]
pub trait FrontDeskService: Send + Sync {
    /// 匹配用户输入并记录聊天
    async fn chat(&self, message: &str) -> Reply;

    /// 记录预约
    async fn submit_appointment(&self, fields: BTreeMap<String, String>) -> AppointmentRecord;

    /// 会话日志快照
    async fn snapshot(&self) -> BackupDocument;

    /// 导出备份到配置的路径
    async fn export_backup(&self) -> std::result::Result<ExportReceipt, BackupError>;

    /// 从指定文件恢复备份
    async fn restore_backup(
        &self,
        path: Option<&Path>,
    ) -> std::result::Result<RestoreSummary, BackupError>;

    /// 追加意图并写回文档
    async fn add_intent(&self, intent: Intent) -> Result<()>;

    /// 当前意图文档
    async fn intents(&self) -> IntentDocument;

    /// 从文档重新加载意图
    async fn reload_intents(&self) -> IntentLoad;
}

struct DeskState {
    intents: IntentStore,
    log: SessionLog,
}

/// 前台服务实现
pub struct FrontDesk {
    state: Mutex<DeskState>,
    intents_path: PathBuf,
    backup_path: PathBuf,
}

impl FrontDesk {
    pub fn new(intents: IntentStore, storage: &StorageConfig) -> Self {
        Self {
            state: Mutex::new(DeskState {
                intents,
                log: SessionLog::new(),
            }),
            intents_path: storage.intents_path.clone(),
            backup_path: storage.backup_path.clone(),
        }
    }

    /// 加载意图文档后创建服务，加载失败只记录日志
    pub async fn open(storage: &StorageConfig) -> Self {
        let intents = IntentStore::load(&storage.intents_path)
            .await
            .log_and_unwrap();
        Self::new(intents, storage)
    }
}

#[async_trait]
impl FrontDeskService for FrontDesk {
    async fn chat(&self, message: &str) -> Reply {
        let normalized = matcher::normalize(message);
        let mut state = self.state.lock().await;
        let reply = matcher::match_normalized(&state.intents, &normalized);
        if reply == Reply::Prompt {
            return reply;
        }
        debug!("Chat '{}' -> {:?}", normalized, reply);

        state
            .log
            .append_chat(ChatLogEntry::now(normalized, reply.text()));
        reply
    }

    async fn submit_appointment(&self, fields: BTreeMap<String, String>) -> AppointmentRecord {
        let record = AppointmentRecord::now(fields);
        self.state
            .lock()
            .await
            .log
            .append_appointment(record.clone());
        info!("Appointment saved: {:?}", record);
        record
    }

    async fn snapshot(&self) -> BackupDocument {
        self.state.lock().await.log.snapshot()
    }

    async fn export_backup(&self) -> std::result::Result<ExportReceipt, BackupError> {
        let state = self.state.lock().await;
        let snapshot = state.log.snapshot();
        let receipt = backup::export(&snapshot, &self.backup_path).await?;
        info!(
            "Exported {} appointments and {} chat logs to {}",
            snapshot.appointments.len(),
            snapshot.chat_logs.len(),
            self.backup_path.display()
        );
        Ok(receipt)
    }

    async fn restore_backup(
        &self,
        path: Option<&Path>,
    ) -> std::result::Result<RestoreSummary, BackupError> {
        let mut state = self.state.lock().await;
        let doc = backup::import(path).await?;
        let summary = RestoreSummary {
            appointments: doc.appointments.len(),
            chat_logs: doc.chat_logs.len(),
        };
        state.log.replace(doc);
        info!("Restored backup: {:?}", summary);
        Ok(summary)
    }

    async fn add_intent(&self, intent: Intent) -> Result<()> {
        let mut state = self.state.lock().await;
        intent_editor::add_intent(&mut state.intents, &self.intents_path, intent)
            .await
            .map_err(AppError::from)
    }

    async fn intents(&self) -> IntentDocument {
        self.state.lock().await.intents.to_document()
    }

    async fn reload_intents(&self) -> IntentLoad {
        let mut state = self.state.lock().await;
        let load = IntentStore::load(&self.intents_path).await;
        if let Some(issue) = load.issue() {
            tracing::warn!("Reloading intents degraded: {}", issue);
        }
        let store = match &load {
            IntentLoad::Loaded(store) | IntentLoad::Degraded { store, .. } => store.clone(),
        };
        state.intents = store;
        load
    }
}

/// 创建前台服务
pub async fn create_front_desk_service(storage: &StorageConfig) -> Box<dyn FrontDeskService> {
    Box::new(FrontDesk::open(storage).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> StorageConfig {
        let dir = std::env::temp_dir().join(format!("chatdesk-desk-{}", uuid::Uuid::new_v4()));
        StorageConfig {
            intents_path: dir.join("intents.json"),
            backup_path: dir.join("static/backup.json"),
        }
    }

    fn desk(storage: &StorageConfig) -> FrontDesk {
        FrontDesk::new(
            IntentStore::new(vec![Intent::new("greeting", ["hello", "hi"], ["Hi there!"])]),
            storage,
        )
    }

    #[tokio::test]
    async fn test_chat_logs_normalized_exchange() {
        let desk = desk(&storage());

        let reply = desk.chat("  Hi, how are you?  ").await;
        assert_eq!(reply.text(), "Hi there!");

        let snapshot = desk.snapshot().await;
        assert_eq!(snapshot.chat_logs.len(), 1);
        assert_eq!(snapshot.chat_logs[0].user, "hi, how are you?");
        assert_eq!(snapshot.chat_logs[0].bot, "Hi there!");
    }

    #[tokio::test]
    async fn test_empty_chat_is_not_logged() {
        let desk = desk(&storage());
        assert_eq!(desk.chat("   ").await, Reply::Prompt);
        assert!(desk.snapshot().await.chat_logs.is_empty());
    }

    #[tokio::test]
    async fn test_export_then_restore_round_trip() {
        let storage = storage();
        let desk = desk(&storage);

        desk.chat("hello").await;
        desk.chat("unknown words").await;
        desk.submit_appointment(BTreeMap::from([
            ("name".to_string(), "A".to_string()),
            ("date".to_string(), "2024-01-01".to_string()),
        ]))
        .await;
        let before = desk.snapshot().await;

        let receipt = desk.export_backup().await.unwrap();
        assert_eq!(receipt.file_path, storage.backup_path);

        desk.chat("more").await;
        let summary = desk
            .restore_backup(Some(storage.backup_path.as_path()))
            .await
            .unwrap();

        assert_eq!(
            summary,
            RestoreSummary {
                appointments: 1,
                chat_logs: 2
            }
        );
        assert_eq!(desk.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_failed_restore_keeps_state() {
        let desk = desk(&storage());
        desk.chat("hello").await;

        let err = desk.restore_backup(None).await.unwrap_err();
        assert!(matches!(err, BackupError::NoPath));
        assert_eq!(desk.snapshot().await.chat_logs.len(), 1);
    }

    #[tokio::test]
    async fn test_added_intent_is_matched_and_persisted() {
        let storage = storage();
        let desk = desk(&storage);

        desk.add_intent(Intent::new("thanks", ["thank"], ["You're welcome!"]))
            .await
            .unwrap();

        assert_eq!(desk.chat("Thank you").await.text(), "You're welcome!");

        let load = desk.reload_intents().await;
        assert!(load.issue().is_none());
        assert_eq!(desk.intents().await.intents.len(), 2);
    }

    #[tokio::test]
    async fn test_open_with_missing_document_is_usable() {
        let desk = FrontDesk::open(&storage()).await;
        assert!(desk.intents().await.intents.is_empty());
        assert!(desk.chat("hello").await.is_fallback());
    }

    #[tokio::test]
    async fn test_failed_intent_save_is_io_error() {
        let storage = storage();
        // a directory where the document should be makes the write fail
        std::fs::create_dir_all(&storage.intents_path).unwrap();
        let desk = desk(&storage);

        let err = desk
            .add_intent(Intent::new("thanks", ["thank"], ["You're welcome!"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(desk.intents().await.intents.len(), 1);
        assert!(desk.chat("thank you").await.is_fallback());
    }
}
