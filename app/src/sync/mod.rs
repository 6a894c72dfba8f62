//! 同步模块 - 调用外部同步工具（rsync）完成目录同步

mod command;
mod folder_sync;
mod options;
mod status;


pub use command::{shell_quote, SyncCommand, BASE_FLAGS, DELETE_FLAGS, EXCLUDE_FLAG};
pub use folder_sync::{FolderSync, DEFAULT_TOOL, FAILURE_MESSAGE};
pub use options::SyncOptions;
pub use status::{ParseStatusKindError, Status, StatusKind};
