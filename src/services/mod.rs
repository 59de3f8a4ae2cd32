//! 服务模块

pub mod accounts;
pub mod backup;
pub mod front_desk;
pub mod intent_editor;
pub mod intent_store;
pub mod matcher;
pub mod session_log;

pub use accounts::{AccountOutcome, AccountService, create_account_service};
pub use backup::{BackupError, ExportReceipt};
pub use front_desk::{FrontDesk, FrontDeskService, RestoreSummary, create_front_desk_service};
pub use intent_store::{IntentLoad, IntentStore, LoadIssue};
pub use matcher::{EMPTY_INPUT_PROMPT, FALLBACK_RESPONSE, Reply};
pub use session_log::SessionLog;
