//! 应用配置加载
//!
//! 配置文件可选，位于 `~/.tasklist/config.toml`。任务本身从不落盘。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TaskListError};
use crate::theme::Theme;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeConfig {
    /// 启动时的主题："Light" / "Dark"
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: Theme::default().label().to_string(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    #[serde(default = "default_log_enabled")]
    pub enabled: bool,
    /// EnvFilter 语法，如 "info"、"tasklist_tui=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 日志文件路径，缺省为 ~/.tasklist/tasklist.log
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: default_log_enabled(),
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// 解析启动主题
    pub fn initial_theme(&self) -> Result<Theme> {
        Theme::from_name(&self.theme.name)
            .ok_or_else(|| TaskListError::config(format!("unknown theme '{}'", self.theme.name)))
    }
}

/// 获取 ~/.tasklist/ 目录路径
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tasklist"))
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join("config.toml"))
}

/// 默认日志文件路径
pub fn default_log_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join("tasklist.log"))
}

/// 加载配置（文件不存在则返回默认值）
///
/// 主题名在这里不校验：写错的主题只回退主题本身，其余配置照常生效。
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.initial_theme().unwrap(), Theme::Light);
        assert!(config.log.enabled);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_dark_theme() {
        let (_dir, path) = write_config("[theme]\nname = \"Dark\"\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.initial_theme().unwrap(), Theme::Dark);
        // 未出现的 section 使用默认值
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_partial_log_section() {
        let (_dir, path) = write_config("[log]\nlevel = \"debug\"\n");
        let config = load_config(&path).unwrap();
        assert!(config.log.enabled);
        assert_eq!(config.log.level, "debug");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_unknown_theme_keeps_rest_of_config() {
        let (_dir, path) = write_config(
            "[theme]\nname = \"Nord\"\n\n[log]\nenabled = false\nlevel = \"warn\"\n",
        );
        let config = load_config(&path).unwrap();
        assert!(!config.log.enabled);
        assert_eq!(config.log.level, "warn");

        let err = config.initial_theme().unwrap_err();
        assert!(matches!(err, TaskListError::Config(_)));
        assert!(err.to_string().contains("Nord"));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let (_dir, path) = write_config("[theme\nname = ");
        assert!(matches!(
            load_config(&path),
            Err(TaskListError::TomlParse(_))
        ));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
