//! CLI 参数

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::error::TaskListError;
use crate::theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(version)]
#[command(about = "A single-screen terminal task list")]
pub struct Cli {
    /// Config file (defaults to ~/.tasklist/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with this theme, overriding the config file
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Log filter, e.g. "debug" (overrides [log] level)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// 命令行与配置文件合并后的启动参数
#[derive(Debug)]
pub struct Startup {
    pub theme: Theme,
    pub log_level: String,
    /// 配置里的主题名无效时的错误（此时主题已回退为默认值）
    pub theme_error: Option<TaskListError>,
}

impl Cli {
    /// 合并启动参数：命令行优先于配置文件
    pub fn resolve(&self, config: &Config) -> Startup {
        let (theme, theme_error) = match self.theme {
            Some(arg) => (Theme::from(arg), None),
            None => match config.initial_theme() {
                Ok(theme) => (theme, None),
                Err(e) => (Theme::default(), Some(e)),
            },
        };
        let log_level = self
            .log_level
            .clone()
            .unwrap_or_else(|| config.log.level.clone());

        Startup {
            theme,
            log_level,
            theme_error,
        }
    }
}
