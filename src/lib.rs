//! Chatdesk - FAQ 聊天机器人与预约前台服务
//!
//! 关键词匹配的问答机器人、预约表单、JSON 文件备份/恢复，
//! 以及可选的外部认证/文档数据库账户服务。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod security;
pub mod services;
pub mod storage;
