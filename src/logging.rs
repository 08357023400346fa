//! 日志初始化
//!
//! 终端被 TUI 占用，日志只写入文件。

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, TaskListError};

/// 安装全局 tracing subscriber，输出追加到 `path`
pub fn init(path: &Path, level: &str) -> Result<()> {
    let filter = build_filter(level)?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TaskListError::logging(e.to_string()))
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| TaskListError::logging(format!("invalid log level '{}': {}", level, e)))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
