use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use utils::app_config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folder-sync", version)]
#[command(about = "Mirror a source directory to a destination with rsync", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set the logging level (debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// 源、目标与同步选项
#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    /// Source path, local or user@host:path, ending with '/'
    pub source: String,

    /// Destination path, local or user@host:path, ending with '/'
    pub dest: String,

    /// Keep files that exist only at the destination
    #[arg(long)]
    pub no_delete: bool,

    /// Pattern to exclude from the sync, may be repeated
    /// Examples: '*.log', '.git/'
    #[arg(short, long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Sync tool to run instead of the configured one
    #[arg(long, value_name = "TOOL")]
    pub tool: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the sync operation
    Sync {
        #[command(flatten)]
        args: SyncArgs,

        /// Print statuses as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Print the command a sync would run, without running it
    Command {
        #[command(flatten)]
        args: SyncArgs,
    },

    /// Print the effective configuration
    Config,
}

pub async fn cli_match() -> utils::error::Result<()> {
    let cli = Cli::parse();

    // 命令行参数优先于配置文件
    AppConfig::merge_config(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        AppConfig::set("log.level", level)?;
    }

    let _guard = utils::logger::setup_logging()?;

    // Execute the subcommand
    match cli.command {
        Commands::Sync { args, json } => commands::sync_cmd(args, json).await?,
        Commands::Command { args } => commands::command_cmd(args)?,
        Commands::Config => commands::config_cmd()?,
    }

    Ok(())
}
