use std::io::Write;
use std::sync::Mutex;

use utils::app_config::*;

// AppConfig is process-global, the tests below must not interleave.
static LOCK: Mutex<()> = Mutex::new(());

pub fn initialize() {
    // Reset to original test configuration
    let config_contents = include_str!("resources/test_config.toml");
    AppConfig::init(Some(config_contents)).unwrap();
}

#[test]
fn fetch_config() {
    let _lock = LOCK.lock().unwrap_or_else(|e| e.into_inner());
    initialize();

    // Fetch an instance of Config
    let config = AppConfig::fetch().unwrap();

    assert_eq!(config.log.level, "info");
    assert_eq!(config.log.dir.as_deref(), Some("/tmp/folder-sync-test-logs"));

    assert_eq!(config.sync.tool, "rsync");
    assert!(config.sync.delete);
    assert_eq!(config.sync.exclude, vec![".git", "*.tmp"]);

    assert!(!config.reporter.console);
    assert!(config.reporter.log);
    assert_eq!(config.reporter.format, OutputFormat::Json);
}

#[test]
fn verify_get() {
    let _lock = LOCK.lock().unwrap_or_else(|e| e.into_inner());
    initialize();

    assert_eq!(AppConfig::get::<String>("log.level").unwrap(), "info");
    assert_eq!(AppConfig::get::<String>("sync.tool").unwrap(), "rsync");
    assert!(AppConfig::get::<bool>("sync.delete").unwrap());
    assert_eq!(
        AppConfig::get::<Vec<String>>("sync.exclude").unwrap(),
        vec![".git".to_string(), "*.tmp".to_string()]
    );
    assert!(!AppConfig::get::<bool>("reporter.console").unwrap());
}

#[test]
fn verify_set() {
    let _lock = LOCK.lock().unwrap_or_else(|e| e.into_inner());
    initialize();

    AppConfig::set("log.level", "debug").unwrap();
    AppConfig::set("sync.tool", "/usr/local/bin/rsync").unwrap();
    AppConfig::set("sync.delete", "false").unwrap();
    AppConfig::set("reporter.format", "text").unwrap();

    // Fetch a new instance of Config
    let config = AppConfig::fetch().unwrap();

    assert_eq!(config.log.level, "debug");
    assert_eq!(config.sync.tool, "/usr/local/bin/rsync");
    assert!(!config.sync.delete);
    assert_eq!(config.reporter.format, OutputFormat::Text);
}

#[test]
fn test_nested_configuration_access() {
    let _lock = LOCK.lock().unwrap_or_else(|e| e.into_inner());
    initialize();

    let log_config = AppConfig::get::<LogConfig>("log").unwrap();
    assert_eq!(log_config.level, "info");

    let sync_config = AppConfig::get::<SyncConfig>("sync").unwrap();
    assert_eq!(sync_config.tool, "rsync");
    assert_eq!(sync_config.exclude.len(), 2);

    let reporter_config = AppConfig::get::<ReporterConfig>("reporter").unwrap();
    assert_eq!(reporter_config.format, OutputFormat::Json);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let _lock = LOCK.lock().unwrap_or_else(|e| e.into_inner());
    AppConfig::init(Some("[log]\nlevel = \"warn\"\n")).unwrap();

    let config = AppConfig::fetch().unwrap();
    assert_eq!(config.log.level, "warn");
    assert_eq!(config.log.dir, None);
    assert_eq!(config.sync.tool, "rsync");
    assert!(config.sync.delete);
    assert!(config.sync.exclude.is_empty());
    assert!(config.reporter.console);
    assert_eq!(config.reporter.format, OutputFormat::Text);
}

#[test]
fn merge_config_file_overrides_defaults() {
    let _lock = LOCK.lock().unwrap_or_else(|e| e.into_inner());
    initialize();

    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[sync]\ndelete = false\nexclude = [\"cache/\"]").unwrap();

    AppConfig::merge_config(Some(file.path())).unwrap();

    let config = AppConfig::fetch().unwrap();
    assert!(!config.sync.delete);
    assert_eq!(config.sync.exclude, vec!["cache/"]);
    // untouched keys keep the earlier layer's value
    assert_eq!(config.sync.tool, "rsync");
    assert_eq!(config.reporter.format, OutputFormat::Json);
}

#[test]
fn merge_config_without_file_is_noop() {
    let _lock = LOCK.lock().unwrap_or_else(|e| e.into_inner());
    initialize();

    AppConfig::merge_config(None).unwrap();
    assert_eq!(AppConfig::fetch().unwrap().sync.exclude.len(), 2);
}
