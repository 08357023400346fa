//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 浅色主题（默认）
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(248, 249, 250),          // #f8f9fa
        surface: Color::White,
        bg_selected: Color::Rgb(233, 236, 239), // #e9ecef
        title: Color::Rgb(33, 37, 41),          // #212529
        text: Color::Rgb(33, 37, 41),
        muted: Color::Rgb(108, 117, 125),       // #6c757d
        border: Color::Rgb(206, 212, 218),      // #ced4da
        accent: Color::Rgb(0, 123, 255),        // #007bff
        update: Color::Rgb(23, 162, 184),       // #17a2b8
        danger: Color::Rgb(220, 53, 69),        // #dc3545
    }
}

/// 深色主题
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(33, 37, 41),             // #212529
        surface: Color::Rgb(52, 58, 64),        // #343a40
        bg_selected: Color::Rgb(73, 80, 87),    // #495057
        title: Color::White,
        text: Color::White,
        muted: Color::Rgb(173, 181, 189),       // #adb5bd
        border: Color::Rgb(73, 80, 87),
        accent: Color::Rgb(23, 162, 184),       // #17a2b8
        update: Color::Rgb(23, 162, 184),
        danger: Color::Rgb(220, 53, 69),
    }
}
