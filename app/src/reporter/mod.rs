use crate::sync::Status;

mod console;
mod log;
mod manager;

pub use console::ConsoleReporter;
pub use log::LogReporter;
pub use manager::ReporterManager;

/// 状态接收者 trait - 同步过程中按顺序、同步地接收每条状态
pub trait StatusReporter {
    /// 接收一条状态，状态的所有权交给接收者
    fn report(&mut self, status: Status);

    /// 获取接收者名称
    fn name(&self) -> &'static str {
        "callback"
    }
}

impl<F> StatusReporter for F
where
    F: FnMut(Status),
{
    fn report(&mut self, status: Status) {
        self(status)
    }
}

/// 收集接收者 - 按到达顺序保存全部状态
#[derive(Debug, Default)]
pub struct CollectingReporter {
    statuses: Vec<Status>,
}

impl CollectingReporter {
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    pub fn into_statuses(self) -> Vec<Status> {
        self.statuses
    }
}

impl StatusReporter for CollectingReporter {
    fn report(&mut self, status: Status) {
        self.statuses.push(status);
    }

    fn name(&self) -> &'static str {
        "collecting_reporter"
    }
}
