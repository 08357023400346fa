//! 单屏终端待办清单
//!
//! [`controller::TaskListController`] 持有全部任务状态，
//! `app`/`event`/`ui` 把它接到 ratatui 终端界面上。

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod logging;
pub mod model;
pub mod theme;
pub mod ui;
