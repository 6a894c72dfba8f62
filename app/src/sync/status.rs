use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 状态消息类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    Notice,
    Warning,
    Error,
    /// 同步工具的原始输出
    #[serde(rename = "output")]
    RawOutput,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Notice => "notice",
            StatusKind::Warning => "warning",
            StatusKind::Error => "error",
            StatusKind::RawOutput => "output",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusKindError(String);

impl fmt::Display for ParseStatusKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status kind '{}'", self.0)
    }
}

impl std::error::Error for ParseStatusKindError {}

impl FromStr for StatusKind {
    type Err = ParseStatusKindError;

    /// An empty kind is a notice.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "notice" => Ok(StatusKind::Notice),
            "warning" => Ok(StatusKind::Warning),
            "error" => Ok(StatusKind::Error),
            "output" => Ok(StatusKind::RawOutput),
            other => Err(ParseStatusKindError(other.to_string())),
        }
    }
}

/// 同步过程中上报的一条状态消息，创建后不可变
#[derive(Debug, Clone, Serialize)]
pub struct Status {
    message: String,
    timestamp: DateTime<Local>,
    kind: StatusKind,
}

impl Status {
    pub fn new(message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now(),
            kind,
        }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Notice)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Error)
    }

    pub fn raw_output(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::RawOutput)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn is_notice(&self) -> bool {
        self.kind == StatusKind::Notice
    }

    pub fn is_warning(&self) -> bool {
        self.kind == StatusKind::Warning
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }

    pub fn is_raw_output(&self) -> bool {
        self.kind == StatusKind::RawOutput
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind.as_str().to_uppercase(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_kind_is_notice() {
        assert_eq!(StatusKind::default(), StatusKind::Notice);
        let status = Status::new("hello", StatusKind::default());
        assert!(status.is_notice());
        assert!(!status.is_warning());
        assert!(!status.is_error());
        assert!(!status.is_raw_output());
    }

    #[test]
    fn predicates_match_kind() {
        assert!(Status::warning("w").is_warning());
        assert!(Status::error("e").is_error());
        assert!(Status::raw_output("o").is_raw_output());
        assert!(!Status::raw_output("o").is_notice());
        assert!(!Status::error("e").is_notice());
    }

    #[test]
    fn empty_kind_parses_as_notice() {
        assert_eq!("".parse::<StatusKind>().unwrap(), StatusKind::Notice);
        assert_eq!("notice".parse::<StatusKind>().unwrap(), StatusKind::Notice);
        assert_eq!("output".parse::<StatusKind>().unwrap(), StatusKind::RawOutput);
        assert!("raw".parse::<StatusKind>().is_err());
    }

    #[test]
    fn timestamp_is_capture_time() {
        let before = Local::now();
        let status = Status::notice("x");
        let after = Local::now();
        assert!(status.timestamp() >= before && status.timestamp() <= after);
    }

    #[test]
    fn display_includes_kind_and_message() {
        let rendered = Status::error("boom").to_string();
        assert!(rendered.ends_with("] ERROR: boom"), "{rendered}");
    }

    #[test]
    fn serializes_kind_in_lowercase() {
        let value = serde_json::to_value(Status::raw_output("line")).unwrap();
        assert_eq!(value["kind"], "output");
        assert_eq!(value["message"], "line");
        assert!(value["timestamp"].is_string());
    }
}
