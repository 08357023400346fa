//! 主界面渲染

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::{App, Focus};

use super::components::{
    confirm_dialog, empty_state, footer, header,
    header::HEADER_HEIGHT,
    help_panel,
    input_bar::{self, InputBar, INPUT_HEIGHT},
    task_list,
};

/// 渲染整个界面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let snapshot = app.controller.snapshot();
    let colors = app.colors();

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let edit_height = if snapshot.editing.is_some() {
        INPUT_HEIGHT
    } else {
        0
    };

    let [header_area, input_area, list_area, edit_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT), // 标题
        Constraint::Length(INPUT_HEIGHT),  // 新任务输入
        Constraint::Fill(1),               // 任务列表
        Constraint::Length(edit_height),   // 编辑栏
        Constraint::Length(2),             // Footer
    ])
    .areas(area);

    header::render(
        frame,
        header_area,
        snapshot.tasks.len(),
        snapshot.theme,
        &colors,
    );

    input_bar::render(
        frame,
        input_area,
        &InputBar {
            title: "New Task",
            value: &snapshot.input,
            placeholder: "Enter a new task",
            action: "Add",
            accent: colors.accent,
            focused: app.focus == Focus::Input,
        },
        &colors,
    );

    if snapshot.tasks.is_empty() {
        empty_state::render(frame, list_area, &colors);
    } else {
        task_list::render(
            frame,
            list_area,
            &snapshot.tasks,
            &mut app.list_state,
            snapshot.editing.as_ref().map(|e| e.index),
            app.focus == Focus::List,
            &colors,
        );
    }

    // 编辑栏只在编辑会话打开时显示
    if let Some(ref editing) = snapshot.editing {
        input_bar::render(
            frame,
            edit_area,
            &InputBar {
                title: "Edit Task",
                value: &editing.draft,
                placeholder: "Update the task",
                action: "Update",
                accent: colors.update,
                focused: app.focus == Focus::Edit,
            },
            &colors,
        );
    }

    footer::render(
        frame,
        footer_area,
        app.focus,
        !snapshot.tasks.is_empty(),
        &colors,
    );

    // 弹窗
    if let Some(ref prompt) = snapshot.pending_delete {
        confirm_dialog::render(frame, prompt, &colors);
    } else if app.show_help {
        help_panel::render(frame, &colors);
    }
}
