use std::sync::PoisonError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A path or option failed validation before anything was run.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The external sync tool is not on the search path.
    #[error("{0}")]
    ToolNotFound(String),

    /// The sync ran but reported failure. Only raised at the CLI boundary.
    #[error("Sync failed: {0}")]
    SyncFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Configuration lock poisoned: {0}")]
    Poisoned(String),

    #[error("{msg}: {source}")]
    Other {
        msg: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub fn with_source(msg: &str, source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Error::Other {
            msg: msg.to_string(),
            source,
        }
    }
}

impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Self {
        Error::Poisoned(err.to_string())
    }
}
