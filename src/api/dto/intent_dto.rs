//! 意图 DTO

use serde::{Deserialize, Serialize};

use crate::models::Intent;

/// 新增意图请求，缺失字段按空值处理
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AddIntentRequest {
    pub tag: String,
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
}

impl From<AddIntentRequest> for Intent {
    fn from(req: AddIntentRequest) -> Self {
        Intent {
            tag: req.tag,
            patterns: req.patterns,
            responses: req.responses,
        }
    }
}

/// 重新加载意图响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadIntentsResponse {
    pub intents: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
