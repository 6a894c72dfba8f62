pub mod reporter;
pub mod sync;

/// 公共API的prelude模块
/// 用户可以通过 `use app::prelude::*` 来导入最常用的类型
pub mod prelude {
    pub use crate::reporter::CollectingReporter;
    pub use crate::reporter::ConsoleReporter;
    pub use crate::reporter::LogReporter;
    pub use crate::reporter::ReporterManager;
    pub use crate::reporter::StatusReporter;
    pub use crate::sync::{FolderSync, Status, StatusKind, SyncCommand, SyncOptions};
}
