//! 快捷键帮助面板

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

use super::dialog_utils::{center_dialog, render_dialog_frame};

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 36;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let lines = build_help_lines(colors);
    let panel_area = center_dialog(frame.area(), PANEL_WIDTH, lines.len() as u16 + 2);

    let inner = render_dialog_frame(frame, panel_area, " Help ", colors.accent, colors);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        section_header("Tasks", colors),
        key_line("Enter", "Add task (input)", colors),
        key_line("e / Enter", "Edit selected", colors),
        key_line("d / x / Del", "Delete selected", colors),
        Line::from(""),
        section_header("Navigation", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        key_line("Tab", "Next field", colors),
        key_line("a / i", "Focus input", colors),
        key_line("Esc", "Back to list", colors),
        Line::from(""),
        section_header("Other", colors),
        key_line("t / Ctrl+T", "Toggle theme", colors),
        key_line("?", "Close help", colors),
        key_line("q / Ctrl+C", "Quit", colors),
    ]
}

fn section_header(title: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, desc: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("   {:<13}", key), Style::default().fg(colors.text)),
        Span::styled(desc.to_string(), Style::default().fg(colors.muted)),
    ])
}
