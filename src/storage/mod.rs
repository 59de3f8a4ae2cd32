//! 存储层模块
//!
//! 提供 JSON 文件持久化，意图文档和备份文档都通过这里落盘。

pub mod json_file;
