use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::path::Path;
use std::sync::RwLock;

use super::error::Result;

// CONFIG static variable. It's actually an AppConfig
// inside an RwLock.
lazy_static! {
    pub static ref BUILDER: RwLock<ConfigBuilder<DefaultState>> = RwLock::new(Config::builder());
}

/// 环境变量前缀，例如 FOLDER_SYNC__SYNC__TOOL=/usr/local/bin/rsync
pub const ENV_PREFIX: &str = "FOLDER_SYNC";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// 日志文件目录，未设置时使用可执行文件旁的 logs/
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

/// Defaults applied to every sync unless the command line overrides them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_tool")]
    pub tool: String,
    #[serde(default = "default_delete")]
    pub delete: bool,
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_tool() -> String {
    "rsync".to_string()
}

fn default_delete() -> bool {
    true
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            delete: default_delete(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 状态输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// 是否输出到控制台
    pub console: bool,
    /// 是否写入日志
    pub log: bool,
    pub format: OutputFormat,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            console: true,
            log: true,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub reporter: ReporterConfig,
}

impl AppConfig {
    /// Initialize AppConfig.
    pub fn init(default_config: Option<&str>) -> Result<()> {
        let mut builder = Config::builder();

        // Embed file into executable
        // This macro will embed the configuration file into the
        // executable. Check include_str! for more info.
        if let Some(config_contents) = default_config {
            builder = builder.add_source(config::File::from_str(
                config_contents,
                config::FileFormat::Toml,
            ));
        }

        // Merge settings with env variables
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("sync.exclude")
                .try_parsing(true),
        );

        // Save Config to RwLoc
        {
            let mut w = BUILDER.write()?;
            *w = builder;
        }

        Ok(())
    }

    pub fn merge_config(config_file: Option<&Path>) -> Result<()> {
        // Merge settings with config file if there is one
        if let Some(config_file_path) = config_file {
            {
                let mut builder = BUILDER.write()?;
                *builder = builder
                    .clone()
                    .add_source(config::File::from(config_file_path));
            }
        }
        Ok(())
    }

    // Set CONFIG
    pub fn set(key: &str, value: &str) -> Result<()> {
        {
            let mut builder = BUILDER.write()?;
            *builder = builder.clone().set_override(key, value)?;
        }

        Ok(())
    }

    // Get a single value
    pub fn get<'de, T>(key: &'de str) -> Result<T>
    where
        T: serde::Deserialize<'de>,
    {
        Ok(BUILDER.read()?.deref().clone().build()?.get::<T>(key)?)
    }

    // Get CONFIG
    // This clones Config (from RwLock<Config>) into a new AppConfig object.
    // This means you have to fetch this again if you changed the configuration.
    pub fn fetch() -> Result<AppConfig> {
        let app_config: AppConfig = BUILDER
            .read()?
            .deref()
            .clone()
            .build()?
            .try_deserialize()?;

        Ok(app_config)
    }
}
