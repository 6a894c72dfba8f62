use crate::reporter::StatusReporter;
use crate::sync::{Status, StatusKind};

/// 日志接收者 - 将状态按类型写入对应级别的日志
pub struct LogReporter;

impl StatusReporter for LogReporter {
    fn report(&mut self, status: Status) {
        match status.kind() {
            StatusKind::Notice => log::info!("[LogReporter] {}", status.message()),
            StatusKind::Warning => log::warn!("[LogReporter] {}", status.message()),
            StatusKind::Error => log::error!("[LogReporter] {}", status.message()),
            StatusKind::RawOutput => {
                for line in status.message().lines() {
                    log::debug!("[LogReporter] output: {}", line);
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "log_reporter"
    }
}
