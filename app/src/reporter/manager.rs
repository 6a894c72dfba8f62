use crate::reporter::{ConsoleReporter, LogReporter, StatusReporter};
use crate::sync::Status;
use utils::app_config::ReporterConfig;

/// 接收者管理器 - 将每条状态分发给多个接收者
pub struct ReporterManager {
    /// 接收者列表
    reporters: Vec<Box<dyn StatusReporter + Send>>,
}

impl ReporterManager {
    /// 创建空的管理器
    pub fn new() -> Self {
        Self {
            reporters: Vec::new(),
        }
    }

    /// 根据配置创建接收者管理器
    pub fn with_config(config: &ReporterConfig) -> Self {
        let mut manager = Self::new();

        if config.console {
            manager.add_reporter(Box::new(ConsoleReporter::new(config.format)));
        }
        if config.log {
            manager.add_reporter(Box::new(LogReporter));
        }

        manager
    }

    /// 添加接收者
    pub fn add_reporter(&mut self, reporter: Box<dyn StatusReporter + Send>) {
        self.reporters.push(reporter);
    }

    /// 获取接收者数量
    pub fn get_reporter_count(&self) -> usize {
        self.reporters.len()
    }

    /// 获取接收者名称，按添加顺序
    pub fn names(&self) -> Vec<&'static str> {
        self.reporters.iter().map(|r| r.name()).collect()
    }
}

impl Default for ReporterManager {
    fn default() -> Self {
        Self::with_config(&ReporterConfig::default())
    }
}

impl StatusReporter for ReporterManager {
    fn report(&mut self, status: Status) {
        let Some((last, rest)) = self.reporters.split_last_mut() else {
            return;
        };

        for reporter in rest {
            reporter.report(status.clone());
        }
        last.report(status);
    }

    fn name(&self) -> &'static str {
        "reporter_manager"
    }
}
