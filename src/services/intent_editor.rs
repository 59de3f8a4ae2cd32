//! 意图编辑
//!
//! 追加一个意图后立即把整个存储写回文档。不校验标签唯一或列表非空，
//! 只记录警告。写回失败时撤销内存中的追加。

use std::path::Path;
use tracing::{info, warn};

use crate::models::Intent;
use crate::services::intent_store::IntentStore;
use crate::storage::json_file::JsonFileError;

/// 新增意图成功提示
pub const ADD_INTENT_MESSAGE: &str = "New intent added successfully!";

pub async fn add_intent(
    store: &mut IntentStore,
    path: &Path,
    intent: Intent,
) -> Result<(), JsonFileError> {
    if store.find(&intent.tag).is_some() {
        warn!("Intent tag '{}' already exists, appending duplicate", intent.tag);
    }
    if intent.patterns.is_empty() || intent.responses.is_empty() {
        warn!(
            "Intent '{}' has {} patterns and {} responses",
            intent.tag,
            intent.patterns.len(),
            intent.responses.len()
        );
    }

    let tag = intent.tag.clone();
    store.push(intent);

    if let Err(e) = store.save(path).await {
        store.pop();
        return Err(e);
    }

    info!("Added intent '{}' ({} total)", tag, store.len());
    Ok(())
}
