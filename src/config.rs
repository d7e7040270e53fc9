//! Configuration handling for the TUI

use crate::state::ValidationMode;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};

const LOG_FILE_NAME: &str = "hookform-tui.log";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TuiConfig {
    /// Fail on updates to undeclared fields instead of ignoring them
    pub strict_fields: Option<bool>,
    /// Validation mode used for every form instead of each form's own
    pub mode_override: Option<ValidationMode>,
    /// Directory for the log file
    pub log_dir: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "hookform", "hookform-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn strict_fields(&self) -> bool {
        self.strict_fields.unwrap_or(false)
    }

    /// Directory the log file is written to
    ///
    /// Falls back to the platform data dir, then the working directory.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn log_file_name() -> &'static str {
        LOG_FILE_NAME
    }

    /// Non-blocking writer for the log file, creating the log dir if needed
    ///
    /// Buffered lines are only flushed when the returned guard is dropped.
    pub fn log_writer(&self) -> Result<(NonBlocking, WorkerGuard)> {
        let log_dir = self.log_dir();
        fs::create_dir_all(&log_dir)?;
        let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
        Ok(tracing_appender::non_blocking(file_appender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.strict_fields.is_none());
        assert!(config.mode_override.is_none());
        assert!(config.log_dir.is_none());
        assert!(!config.strict_fields());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            strict_fields: Some(true),
            mode_override: Some(ValidationMode::OnTouched),
            log_dir: Some(PathBuf::from("/tmp/hookform")),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"on_touched\""));
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"mode_override": "on_blur", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.mode_override, Some(ValidationMode::OnBlur));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let json = r#"{"mode_override": "sometimes"}"#;
        assert!(serde_json::from_str::<TuiConfig>(json).is_err());
    }

    #[test]
    fn test_log_dir_prefers_configured_path() {
        let config = TuiConfig {
            log_dir: Some(PathBuf::from("/var/log/hookform")),
            ..Default::default()
        };
        assert_eq!(config.log_dir(), PathBuf::from("/var/log/hookform"));
    }

    #[test]
    fn test_log_writer_flushes_on_guard_drop() {
        use std::io::Write;

        let dir = std::env::temp_dir().join(format!("hookform-tui-log-{}", std::process::id()));
        let config = TuiConfig {
            log_dir: Some(dir.join("nested")),
            ..Default::default()
        };

        let (mut writer, guard) = config.log_writer().unwrap();
        writer.write_all(b"last words\n").unwrap();
        drop(guard);

        let path = dir.join("nested").join(TuiConfig::log_file_name());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("last words"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_returns_ok() {
        // Either the user's file or the defaults
        assert!(TuiConfig::load().is_ok());
    }
}
