use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::{Theme, ThemeColors};

/// Header 高度：标题行 + 下边框
pub const HEADER_HEIGHT: u16 = 2;

const TITLE: &str = "Todo List";

/// 渲染顶部标题栏（标题 + 任务数 + 主题切换提示）
pub fn render(frame: &mut Frame, area: Rect, task_count: usize, theme: Theme, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let left = Span::styled(
        format!(" {}", TITLE),
        Style::default()
            .fg(colors.title)
            .add_modifier(Modifier::BOLD),
    );

    let count = Span::styled(
        format!("  {}", task_count_label(task_count)),
        Style::default().fg(colors.muted),
    );

    let right = Span::styled(
        format!("{} {} ", theme.toggle_icon(), theme.toggled().label()),
        Style::default().fg(colors.accent),
    );

    // 计算中间填充空格
    let total_width = inner_area.width as usize;
    let used_width = left.width() + count.width() + right.width();
    let padding = " ".repeat(total_width.saturating_sub(used_width));

    let line = Line::from(vec![left, count, Span::raw(padding), right]);
    frame.render_widget(Paragraph::new(line), inner_area);
}

fn task_count_label(count: usize) -> String {
    match count {
        1 => "1 task".to_string(),
        n => format!("{} tasks", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_count_label() {
        assert_eq!(task_count_label(0), "0 tasks");
        assert_eq!(task_count_label(1), "1 task");
        assert_eq!(task_count_label(2), "2 tasks");
    }
}
