//! Logging using simplelog
//!
//! Logs go to stderr so stdout stays reserved for the state output. With
//! `log_dir` configured they go to a timestamped file in that directory
//! instead.

use simplelog::{
    ColorChoice, Config, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::error::{Error, Result};

/// Map a level name to a filter, None for unknown names
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// RUST_LOG wins over the configured level; unknown names fall back to info
fn resolve_level(rust_log: Option<&str>, config: &AppConfig) -> LevelFilter {
    rust_log
        .and_then(parse_level)
        .or_else(|| parse_level(&config.log_level))
        .unwrap_or(LevelFilter::Info)
}

/// Timestamped log file path inside `dir`
fn log_file_path(dir: &Path) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    dir.join(format!("todo-goals-{}.log", timestamp))
}

fn logger_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build()
}

/// Initialize logging
///
/// Returns the log file path when logging to a file.
pub fn init(config: &AppConfig) -> Result<Option<PathBuf>> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = resolve_level(rust_log.as_deref(), config);

    match &config.log_dir {
        Some(dir) => {
            let log_file = log_file_path(dir);
            let file = File::create(&log_file).map_err(|source| Error::Io {
                path: log_file.clone(),
                source,
            })?;
            WriteLogger::init(level, logger_config(), file)?;
            Ok(Some(log_file))
        }
        None => {
            TermLogger::init(
                level,
                logger_config(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_is_case_insensitive() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("warn"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_rust_log_overrides_config() {
        let config = AppConfig {
            log_level: "error".to_string(),
            ..AppConfig::default()
        };

        assert_eq!(resolve_level(Some("trace"), &config), LevelFilter::Trace);
        assert_eq!(resolve_level(None, &config), LevelFilter::Error);
        assert_eq!(resolve_level(Some("nonsense"), &config), LevelFilter::Error);
    }

    #[test]
    fn test_unknown_config_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(resolve_level(None, &config), LevelFilter::Info);
    }

    #[test]
    fn test_log_file_path_is_timestamped() {
        let path = log_file_path(Path::new("/tmp/logs"));
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(path.starts_with("/tmp/logs"));
        assert!(name.starts_with("todo-goals-"));
        assert!(name.ends_with(".log"));
    }
}
