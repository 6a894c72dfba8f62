use crate::reporter::StatusReporter;
use crate::sync::{Status, StatusKind};
use std::io::Write;
use utils::app_config::OutputFormat;

/// 控制台接收者 - 将状态输出到终端。
///
/// Text mode prints the tool output verbatim and other statuses with their
/// timestamp, errors going to stderr. Json mode prints one object per line.
pub struct ConsoleReporter {
    format: OutputFormat,
}

impl ConsoleReporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// 将一条状态渲染为输出文本，纯文本模式下空的原始输出不打印
    pub fn render(&self, status: &Status) -> Option<String> {
        match self.format {
            OutputFormat::Json => match serde_json::to_string(status) {
                Ok(line) => Some(line),
                Err(e) => {
                    log::warn!("[ConsoleReporter] Failed to serialize status: {}", e);
                    None
                }
            },
            OutputFormat::Text => match status.kind() {
                StatusKind::RawOutput if status.message().is_empty() => None,
                StatusKind::RawOutput => Some(status.message().to_string()),
                _ => Some(status.to_string()),
            },
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(OutputFormat::Text)
    }
}

impl StatusReporter for ConsoleReporter {
    fn report(&mut self, status: Status) {
        let Some(line) = self.render(&status) else {
            return;
        };

        if status.is_error() && self.format == OutputFormat::Text {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
            let _ = std::io::stdout().flush();
        }
    }

    fn name(&self) -> &'static str {
        "console_reporter"
    }
}
