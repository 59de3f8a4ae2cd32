//! 意图模型
//!
//! 聊天机器人的意图定义：触发模式和候选回复。

use serde::{Deserialize, Serialize};

/// 意图
///
/// `patterns` 按声明顺序做大小写不敏感的子串匹配，命中后只返回 `responses[0]`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Intent {
    /// 意图标签
    pub tag: String,
    /// 触发模式
    pub patterns: Vec<String>,
    /// 候选回复
    pub responses: Vec<String>,
}

impl Intent {
    /// 创建新意图
    pub fn new<T, P, R>(tag: T, patterns: P, responses: R) -> Self
    where
        T: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            tag: tag.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    /// 第一个候选回复
    pub fn primary_response(&self) -> Option<&str> {
        self.responses.first().map(String::as_str)
    }
}

/// 意图文档，磁盘上的 `{ "intents": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IntentDocument {
    pub intents: Vec<Intent>,
}
