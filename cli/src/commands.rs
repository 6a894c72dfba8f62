use app::reporter::ReporterManager;
use app::sync::{FolderSync, SyncOptions};
use utils::app_config::{AppConfig, OutputFormat};
use utils::error::{Error, Result};

use crate::SyncArgs;

/// 配置中的默认值与命令行参数合并：排除模式追加，--no-delete 与 --tool 覆盖
fn build_folder_sync(config: &AppConfig, args: SyncArgs) -> Result<FolderSync> {
    let mut exclude = config.sync.exclude.clone();
    exclude.extend(args.exclude);

    let delete = config.sync.delete && !args.no_delete;
    let tool = args.tool.unwrap_or_else(|| config.sync.tool.clone());

    Ok(FolderSync::new(args.source, args.dest, SyncOptions::new(delete, exclude))?.with_tool(tool))
}

pub async fn sync_cmd(args: SyncArgs, json: bool) -> Result<()> {
    let config = AppConfig::fetch()?;
    let folder_sync = build_folder_sync(&config, args)?;

    let mut reporter_config = config.reporter.clone();
    if json {
        reporter_config.console = true;
        reporter_config.format = OutputFormat::Json;
    }
    let mut reporters = ReporterManager::with_config(&reporter_config);

    log::info!("Starting sync operation...");
    log::debug!("Reporters: {:?}", reporters.names());

    // sync blocks until the tool exits
    let (folder_sync, outcome) = tokio::task::spawn_blocking(move || {
        let outcome = folder_sync.sync(Some(&mut reporters));
        (folder_sync, outcome)
    })
    .await
    .map_err(|e| Error::with_source("Sync task failed", Box::new(e)))?;

    if outcome? {
        log::info!("Sync operation completed");
        Ok(())
    } else {
        Err(Error::SyncFailed(format!(
            "{} -> {}",
            folder_sync.source(),
            folder_sync.dest()
        )))
    }
}

pub fn command_cmd(args: SyncArgs) -> Result<()> {
    let config = AppConfig::fetch()?;
    let folder_sync = build_folder_sync(&config, args)?;

    println!("{}", folder_sync.command());
    Ok(())
}

pub fn config_cmd() -> Result<()> {
    let config = AppConfig::fetch()?;

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
