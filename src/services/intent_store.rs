//! 意图存储
//!
//! 启动时从 JSON 文档加载意图。加载失败不会向上抛出：返回空存储并附带诊断，
//! 由调用方记录日志后继续运行。

use std::path::Path;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::models::{Intent, IntentDocument};
use crate::storage::json_file::{self, JsonFileError};

/// 加载诊断
#[derive(Debug, Error)]
pub enum LoadIssue {
    /// 文档不存在
    #[error("intents document not found: {0}")]
    Missing(String),

    /// 文档存在但无法读取
    #[error("failed to read intents document: {0}")]
    Unreadable(String),

    /// 文档不是合法 JSON
    #[error("failed to decode intents document: {0}")]
    Malformed(String),
}

/// 加载结果
///
/// 软失败仍然给出一个可用的（空）存储。
#[derive(Debug)]
pub enum IntentLoad {
    Loaded(IntentStore),
    Degraded { store: IntentStore, issue: LoadIssue },
}

impl IntentLoad {
    /// 取出存储，丢弃诊断
    pub fn into_store(self) -> IntentStore {
        match self {
            IntentLoad::Loaded(store) | IntentLoad::Degraded { store, .. } => store,
        }
    }

    pub fn issue(&self) -> Option<&LoadIssue> {
        match self {
            IntentLoad::Loaded(_) => None,
            IntentLoad::Degraded { issue, .. } => Some(issue),
        }
    }

    /// 记录诊断日志并取出存储
    pub fn log_and_unwrap(self) -> IntentStore {
        if let IntentLoad::Degraded { issue, .. } = &self {
            match issue {
                LoadIssue::Missing(_) => warn!("{}", issue),
                _ => error!("{}", issue),
            }
        }
        self.into_store()
    }
}

/// 有序的意图集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentStore {
    intents: Vec<Intent>,
}

impl IntentStore {
    pub fn new(intents: Vec<Intent>) -> Self {
        Self { intents }
    }

    /// 从文档加载，永不失败
    pub async fn load(path: &Path) -> IntentLoad {
        match json_file::read_json::<IntentDocument>(path).await {
            Ok(doc) => {
                info!(
                    "Loaded {} intents from {}",
                    doc.intents.len(),
                    path.display()
                );
                IntentLoad::Loaded(Self::new(doc.intents))
            }
            Err(e) => {
                let issue = if e.is_not_found() {
                    LoadIssue::Missing(path.display().to_string())
                } else if let JsonFileError::Parse { .. } = e {
                    LoadIssue::Malformed(e.to_string())
                } else {
                    LoadIssue::Unreadable(e.to_string())
                };
                IntentLoad::Degraded {
                    store: Self::default(),
                    issue,
                }
            }
        }
    }

    /// 整体覆盖写回文档
    pub async fn save(&self, path: &Path) -> Result<(), JsonFileError> {
        json_file::write_json(path, &self.to_document()).await
    }

    pub fn to_document(&self) -> IntentDocument {
        IntentDocument {
            intents: self.intents.clone(),
        }
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    pub fn find(&self, tag: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.tag == tag)
    }

    pub(crate) fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub(crate) fn pop(&mut self) -> Option<Intent> {
        self.intents.pop()
    }
}
