//! 单行输入框：新任务输入和编辑栏共用

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 输入框高度（含上下边框）
pub const INPUT_HEIGHT: u16 = 3;

pub struct InputBar<'a> {
    pub title: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    /// 提交按钮文字，显示在右上角
    pub action: &'a str,
    /// 焦点边框与按钮颜色
    pub accent: Color,
    pub focused: bool,
}

/// 渲染输入框
pub fn render(frame: &mut Frame, area: Rect, bar: &InputBar, colors: &ThemeColors) {
    let border_color = if bar.focused { bar.accent } else { colors.border };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", bar.title),
            Style::default().fg(colors.muted),
        ))
        .title_top(
            Line::from(Span::styled(
                format!(" ⏎ {} ", bar.action),
                Style::default()
                    .fg(bar.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors.surface));

    let mut spans = if bar.value.is_empty() {
        vec![Span::styled(
            format!(" {}", bar.placeholder),
            Style::default().fg(colors.muted),
        )]
    } else {
        vec![Span::styled(
            format!(" {}", bar.value),
            Style::default().fg(colors.text),
        )]
    };

    // 只在获得焦点时显示光标
    if bar.focused {
        let cursor = Span::styled("█", Style::default().fg(bar.accent));
        if bar.value.is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
