use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::controller::TaskView;
use crate::theme::ThemeColors;

use super::truncate;

/// 选中行右侧操作提示的宽度
const ACTIONS_WIDTH: usize = 20;

/// 渲染任务列表
///
/// `editing` 为正在编辑的任务位置，该行带 ✎ 标记。
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[TaskView],
    list_state: &mut ListState,
    editing: Option<usize>,
    focused: bool,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            colors.accent
        } else {
            colors.border
        }))
        .style(Style::default().bg(colors.bg));

    let inner_width = block.inner(area).width as usize;
    let selected = list_state.selected();

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected == Some(i);
            let marker = if editing == Some(i) { "✎ " } else { "• " };
            let text_width = inner_width.saturating_sub(ACTIONS_WIDTH + 4).max(1);

            let mut spans = vec![
                Span::styled(
                    if is_selected { "❯ " } else { "  " },
                    Style::default().fg(colors.accent),
                ),
                Span::styled(marker, Style::default().fg(colors.update)),
                Span::styled(
                    truncate(&task.text, text_width),
                    Style::default().fg(colors.text),
                ),
            ];

            // 选中行显示可用操作
            if is_selected && focused {
                let used: usize = spans.iter().map(|s| s.width()).sum();
                let padding = inner_width.saturating_sub(used + ACTIONS_WIDTH);
                spans.push(Span::raw(" ".repeat(padding)));
                spans.push(Span::styled(
                    " e edit ",
                    Style::default().fg(colors.surface).bg(colors.update),
                ));
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    " d delete ",
                    Style::default().fg(colors.surface).bg(colors.danger),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(colors.bg_selected)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(list, area, list_state);
}
