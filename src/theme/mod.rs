mod colors;

use ratatui::style::Color;

pub use colors::*;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// 切换后的主题
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// 从名称解析主题（配置文件和命令行使用，不区分大小写）
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Header 上显示的切换图标：当前是浅色则提示切到深色
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 卡片/输入框背景
    pub surface: Color,
    /// 选中行背景
    pub bg_selected: Color,
    /// 标题颜色
    pub title: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（占位符、提示）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 强调色（Add 按钮、焦点边框、快捷键）
    pub accent: Color,
    /// Update 操作颜色
    pub update: Color,
    /// Delete 操作颜色
    pub danger: Color,
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Light => light_colors(),
        Theme::Dark => dark_colors(),
    }
}
