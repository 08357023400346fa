use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染空列表提示（垂直居中）
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let lines = vec![
        Line::from(Span::styled("No tasks yet", Style::default().fg(colors.text))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Type above and press ", Style::default().fg(colors.muted)),
            Span::styled("Enter", Style::default().fg(colors.accent)),
            Span::styled(" to add one", Style::default().fg(colors.muted)),
        ]),
    ];

    let text_height = lines.len() as u16;
    let [_, text_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(text_height),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );
}
