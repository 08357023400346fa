//! 删除确认弹窗

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::controller::DeletePrompt;
use crate::theme::ThemeColors;

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};
use super::truncate;

const POPUP_WIDTH: u16 = 44;

/// 渲染删除确认弹窗
pub fn render(frame: &mut Frame, prompt: &DeletePrompt, colors: &ThemeColors) {
    let message_lines = message(prompt, POPUP_WIDTH as usize - 6, colors);
    // 边框 2 + 内容 + 空行 + 提示
    let popup_height = message_lines.len() as u16 + 4;
    let popup_area = center_dialog(frame.area(), POPUP_WIDTH, popup_height);

    let inner_area = render_dialog_frame(frame, popup_area, prompt.title, colors.danger, colors);

    let [content_area, _, hint_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    let content = Paragraph::new(message_lines).alignment(Alignment::Center);
    frame.render_widget(content, content_area);

    render_hint(
        frame,
        hint_area,
        &[("Y/Enter", "delete"), ("N/Esc", "cancel")],
        colors,
    );
}

fn message(prompt: &DeletePrompt, max_width: usize, colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            prompt.message,
            Style::default().fg(colors.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", truncate(&prompt.task_text, max_width)),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}
