use ratatui::widgets::ListState;
use tracing::debug;

use crate::controller::{Decision, Resolution, TaskListController};
use crate::error::Rejection;
use crate::theme::{get_theme_colors, Theme, ThemeColors};

/// 接收键盘输入的区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// 新任务输入框
    #[default]
    Input,
    /// 任务列表
    List,
    /// 编辑栏（仅在编辑会话打开时可用）
    Edit,
}

/// 全局应用状态
///
/// 业务状态全部在 `controller` 中，这里只保存焦点、列表选择等界面状态。
#[derive(Debug)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    pub controller: TaskListController,
    pub focus: Focus,
    /// 列表选择状态
    pub list_state: ListState,
    /// 是否显示帮助面板
    pub show_help: bool,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            should_quit: false,
            controller: TaskListController::with_theme(theme),
            focus: Focus::Input,
            list_state: ListState::default(),
            show_help: false,
        }
    }

    /// 当前颜色方案
    pub fn colors(&self) -> ThemeColors {
        get_theme_colors(self.controller.theme())
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    // ========== Focus ==========

    /// Tab 循环切换焦点：Input → List → Edit → Input
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::List,
            Focus::List if self.controller.is_editing() => Focus::Edit,
            Focus::List | Focus::Edit => Focus::Input,
        };
        self.ensure_selection();
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
        self.ensure_selection();
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    // ========== Selection ==========

    /// 确保列表非空时有选中项，且不越界
    pub fn ensure_selection(&mut self) {
        let len = self.controller.len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.controller.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.controller.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    // ========== Commands ==========

    /// 提交输入框内容为新任务
    pub fn submit_input(&mut self) {
        match self.controller.submit_input() {
            Ok(index) => {
                if self.list_state.selected().is_none() {
                    self.list_state.select(Some(index));
                }
            }
            Err(reason) => rejected("add", reason),
        }
    }

    /// 编辑选中的任务，焦点移到编辑栏
    pub fn begin_edit_selected(&mut self) {
        let Some(index) = self.selected() else { return };
        match self.controller.begin_edit(index) {
            Ok(()) => self.focus = Focus::Edit,
            Err(reason) => rejected("edit", reason),
        }
    }

    /// 提交编辑草稿，成功后焦点回到列表
    pub fn commit_draft(&mut self) {
        match self.controller.commit_draft() {
            Ok(index) => {
                self.list_state.select(Some(index));
                self.focus = Focus::List;
            }
            Err(reason @ Rejection::UnknownTask) => {
                rejected("update", reason);
                self.focus = Focus::List;
                self.ensure_selection();
            }
            Err(reason) => rejected("update", reason),
        }
    }

    pub fn draft_push(&mut self, c: char) {
        if let Err(reason) = self.controller.draft_push(c) {
            rejected("type", reason);
        }
    }

    pub fn draft_pop(&mut self) {
        if let Err(reason) = self.controller.draft_pop() {
            rejected("backspace", reason);
        }
    }

    /// 对选中的任务打开删除确认
    pub fn request_delete_selected(&mut self) {
        let Some(index) = self.selected() else { return };
        if let Err(reason) = self.controller.request_delete(index) {
            rejected("delete", reason);
        }
    }

    /// 确认弹窗 - 确认
    pub fn confirm_delete(&mut self) {
        self.resolve_delete(Decision::Confirm);
    }

    /// 确认弹窗 - 取消
    pub fn cancel_delete(&mut self) {
        self.resolve_delete(Decision::Cancel);
    }

    fn resolve_delete(&mut self, decision: Decision) {
        match self.controller.resolve_delete(decision) {
            Ok(Resolution::Deleted { .. }) => {
                // 编辑会话随删除关闭
                if self.focus == Focus::Edit {
                    self.focus = Focus::List;
                }
                self.ensure_selection();
            }
            Ok(Resolution::Cancelled) => {}
            Err(reason) => rejected("confirm", reason),
        }
    }

    pub fn toggle_theme(&mut self) {
        self.controller.toggle_theme();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

/// 被拒绝的命令不在界面上提示，只记录日志
fn rejected(command: &str, reason: Rejection) {
    debug!(command, %reason, "command ignored");
}
