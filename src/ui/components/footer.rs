use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Focus;
use crate::theme::ThemeColors;

use super::dialog_utils::hint_line;

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, focus: Focus, has_items: bool, colors: &ThemeColors) {
    let shortcuts = get_shortcuts(focus, has_items);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(hint_line(&shortcuts, colors)).block(block);
    frame.render_widget(paragraph, area);
}

fn get_shortcuts(focus: Focus, has_items: bool) -> Vec<(&'static str, &'static str)> {
    match focus {
        Focus::Input => vec![
            ("Enter", "add"),
            ("Tab", "list"),
            ("^T", "theme"),
            ("^C", "quit"),
        ],
        Focus::List if has_items => vec![
            ("j/k", "move"),
            ("e", "edit"),
            ("d", "delete"),
            ("a", "add"),
            ("t", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Focus::List => vec![("a", "add"), ("t", "theme"), ("?", "help"), ("q", "quit")],
        Focus::Edit => vec![
            ("Enter", "update"),
            ("Esc", "back"),
            ("^T", "theme"),
            ("^C", "quit"),
        ],
    }
}
