use serde_json::Value;
use std::path::PathBuf;
use std::process::Command;
use utils::error::{Error, Result};

use super::command::SyncCommand;
use super::options::SyncOptions;
use super::status::Status;
use crate::reporter::StatusReporter;

pub const DEFAULT_TOOL: &str = "rsync";

pub const FAILURE_MESSAGE: &str = "Something went wrong. Sync did not complete successfully.";

/// 目录同步器 - 校验源/目标路径，构建并执行同步命令，通过回调上报状态。
///
/// `source` and `dest` take anything the tool accepts (`path/to/dir/`,
/// `user@host:path/`), but both must end with a path separator.
#[derive(Debug, Clone)]
pub struct FolderSync {
    source: String,
    dest: String,
    options: SyncOptions,
    tool: String,
}

impl FolderSync {
    pub fn new(source: impl Into<String>, dest: impl Into<String>, options: SyncOptions) -> Result<Self> {
        let source = source.into();
        let dest = dest.into();

        validate_path("source", &source)?;
        validate_path("dest", &dest)?;

        Ok(Self {
            source,
            dest,
            options,
            tool: DEFAULT_TOOL.to_string(),
        })
    }

    /// 使用松散类型的选项映射创建同步器
    pub fn from_value(source: impl Into<String>, dest: impl Into<String>, options: &Value) -> Result<Self> {
        Self::new(source, dest, SyncOptions::from_value(options))
    }

    /// 指定同步工具（命令名或可执行文件路径）
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn dest(&self) -> &str {
        &self.dest
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn command(&self) -> SyncCommand {
        SyncCommand::build(&self.tool, &self.source, &self.dest, &self.options)
    }

    /// 执行同步，阻塞直到同步工具退出。
    ///
    /// Returns `Err` only when the sync could not be attempted (tool missing,
    /// tool failed to start). A sync that ran and failed returns `Ok(false)`
    /// after reporting an error status.
    pub fn sync(&self, mut reporter: Option<&mut dyn StatusReporter>) -> Result<bool> {
        let tool_path = self.ensure_tool()?;

        emit(
            &mut reporter,
            Status::notice(format!(
                "Syncing source ({}) to destination ({})",
                self.source, self.dest
            )),
        );

        let command = self.command();
        log::debug!("Running sync command: {} (resolved to {})", command, tool_path.display());

        let output = Command::new(&tool_path).args(command.args()).output()?;
        let success = output.status.success();

        emit(
            &mut reporter,
            Status::raw_output(join_output(&output.stdout, &output.stderr)),
        );

        if success {
            log::info!("Synced {} to {}", self.source, self.dest);
        } else {
            log::warn!(
                "Sync of {} to {} failed with {}",
                self.source,
                self.dest,
                output.status
            );
            emit(&mut reporter, Status::error(FAILURE_MESSAGE));
        }

        Ok(success)
    }

    fn ensure_tool(&self) -> Result<PathBuf> {
        which::which(&self.tool).map_err(|_| {
            Error::ToolNotFound(format!(
                "Could not find the '{}' command on your system.",
                self.tool
            ))
        })
    }
}

fn validate_path(name: &str, path: &str) -> Result<()> {
    match path.chars().last() {
        Some(c) if std::path::is_separator(c) => Ok(()),
        _ => Err(Error::InvalidArgument(format!(
            "'{}' must end with a path separator, got '{}'",
            name, path
        ))),
    }
}

fn emit(reporter: &mut Option<&mut dyn StatusReporter>, status: Status) {
    if let Some(reporter) = reporter.as_mut() {
        reporter.report(status);
    }
}

/// stdout lines then stderr lines, trailing whitespace trimmed per line
pub(super) fn join_output(stdout: &[u8], stderr: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let stderr = String::from_utf8_lossy(stderr);

    stdout
        .lines()
        .chain(stderr.lines())
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
