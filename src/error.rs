//! 统一错误类型定义
//!
//! - `TaskListError`：应用层错误（配置、日志、I/O）
//! - `Rejection`：Controller 拒绝执行的命令，状态保持不变，界面上静默处理

use std::io;
use thiserror::Error;

/// 应用层错误类型
#[derive(Debug, Error)]
pub enum TaskListError {
    /// I/O 错误（配置文件、日志文件等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// 日志初始化错误
    #[error("Logging error: {0}")]
    Logging(String),
}

/// 应用层 Result 类型别名
pub type Result<T> = std::result::Result<T, TaskListError>;

impl TaskListError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 创建 Logging 错误
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

/// Controller 拒绝命令的原因
///
/// 所有拒绝都不修改状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// 文本为空或只有空白
    #[error("text is empty")]
    EmptyInput,

    /// 索引越界，或任务已被删除
    #[error("task no longer exists")]
    UnknownTask,

    /// 当前没有编辑会话
    #[error("no edit session is open")]
    NotEditing,

    /// 当前没有待确认的删除请求
    #[error("no delete request is pending")]
    NoPendingDelete,
}
