//! Task List Controller
//!
//! 持有任务列表、编辑会话、待确认的删除请求、输入缓冲与主题。
//! 视图层只读取 [`Snapshot`] 并发出命令，所有状态变化都经过这里。
//!
//! 视图按位置寻址任务，Controller 在打开请求时把位置解析为 [`TaskId`]，
//! 完成请求时再按 id 查找，列表在中途变化也不会误改其他任务。

use tracing::{debug, info};

use crate::error::Rejection;
use crate::model::{Task, TaskId};
use crate::theme::Theme;

/// 删除确认弹窗标题
pub const DELETE_TITLE: &str = " Confirm Delete ";
/// 删除确认弹窗正文
pub const DELETE_MESSAGE: &str = "Delete this task?";

/// Controller 的交互模式
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// 正在编辑 `id` 对应的任务，`draft` 为编辑中的文本
    Editing { id: TaskId, draft: String },
}

/// 用户对删除确认的回答
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Cancel,
}

/// 删除确认的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 已删除，原位置为 `index`
    Deleted { index: usize },
    Cancelled,
}

/// 交给确认弹窗展示的内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    /// 当前位置
    pub index: usize,
    pub title: &'static str,
    pub message: &'static str,
    pub task_text: String,
}

/// 确认弹窗协作者：对一个提示给出且仅给出一个回答
pub trait ConfirmationDialog {
    fn ask(&mut self, prompt: &DeletePrompt) -> Decision;
}

impl<F> ConfirmationDialog for F
where
    F: FnMut(&DeletePrompt) -> Decision,
{
    fn ask(&mut self, prompt: &DeletePrompt) -> Decision {
        self(prompt)
    }
}

/// 单个任务的渲染数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub id: TaskId,
    pub text: String,
}

/// 编辑会话的渲染数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditView {
    pub index: usize,
    pub draft: String,
}

/// 视图层读取的只读快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub tasks: Vec<TaskView>,
    pub editing: Option<EditView>,
    pub theme: Theme,
    pub pending_delete: Option<DeletePrompt>,
    /// 新任务输入框内容
    pub input: String,
}

#[derive(Debug, Default)]
pub struct TaskListController {
    tasks: Vec<Task>,
    mode: Mode,
    pending_delete: Option<TaskId>,
    input: String,
    theme: Theme,
}

impl TaskListController {
    /// 初始状态：Idle、无任务、浅色主题
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing { .. })
    }

    pub fn has_pending_delete(&self) -> bool {
        self.pending_delete.is_some()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    fn index_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }

    fn id_at(&self, index: usize) -> Result<TaskId, Rejection> {
        self.tasks
            .get(index)
            .map(Task::id)
            .ok_or(Rejection::UnknownTask)
    }

    // ========== Add ==========

    /// 追加任务，成功时清空输入缓冲，返回新任务的位置
    pub fn add_task(&mut self, text: &str) -> Result<usize, Rejection> {
        let task = Task::new(text).ok_or(Rejection::EmptyInput)?;
        debug!(id = %task.id(), "task added");
        self.tasks.push(task);
        self.input.clear();
        Ok(self.tasks.len() - 1)
    }

    /// 输入缓冲追加字符
    pub fn input_push(&mut self, c: char) {
        self.input.push(c);
    }

    /// 输入缓冲删除末尾字符
    pub fn input_pop(&mut self) {
        self.input.pop();
    }

    /// 以输入缓冲内容执行 [`add_task`](Self::add_task)
    pub fn submit_input(&mut self) -> Result<usize, Rejection> {
        let text = self.input.clone();
        self.add_task(&text)
    }

    // ========== Edit ==========

    /// 打开编辑会话，草稿初始化为任务当前文本
    ///
    /// 已在编辑其他任务时会切换到新任务。
    pub fn begin_edit(&mut self, index: usize) -> Result<(), Rejection> {
        let task = self.tasks.get(index).ok_or(Rejection::UnknownTask)?;
        debug!(id = %task.id(), index, "edit session opened");
        self.mode = Mode::Editing {
            id: task.id(),
            draft: task.text().to_string(),
        };
        Ok(())
    }

    /// 用 `text` 替换正在编辑的任务并关闭会话，返回任务位置
    ///
    /// 文本为空时会话保持打开。
    pub fn commit_edit(&mut self, text: &str) -> Result<usize, Rejection> {
        let Mode::Editing { id, .. } = &self.mode else {
            return Err(Rejection::NotEditing);
        };
        let id = *id;
        if text.trim().is_empty() {
            return Err(Rejection::EmptyInput);
        }

        let Some(index) = self.index_of(id) else {
            // 任务已不存在，会话失去意义
            self.mode = Mode::Idle;
            return Err(Rejection::UnknownTask);
        };

        self.tasks[index].set_text(text);
        self.mode = Mode::Idle;
        debug!(%id, index, "task updated");
        Ok(index)
    }

    /// 草稿追加字符
    pub fn draft_push(&mut self, c: char) -> Result<(), Rejection> {
        match &mut self.mode {
            Mode::Editing { draft, .. } => {
                draft.push(c);
                Ok(())
            }
            Mode::Idle => Err(Rejection::NotEditing),
        }
    }

    /// 草稿删除末尾字符
    pub fn draft_pop(&mut self) -> Result<(), Rejection> {
        match &mut self.mode {
            Mode::Editing { draft, .. } => {
                draft.pop();
                Ok(())
            }
            Mode::Idle => Err(Rejection::NotEditing),
        }
    }

    /// 以草稿内容执行 [`commit_edit`](Self::commit_edit)
    pub fn commit_draft(&mut self) -> Result<usize, Rejection> {
        let draft = match &self.mode {
            Mode::Editing { draft, .. } => draft.clone(),
            Mode::Idle => return Err(Rejection::NotEditing),
        };
        self.commit_edit(&draft)
    }

    // ========== Delete ==========

    /// 打开删除请求（不修改列表），返回给确认弹窗的提示
    ///
    /// 已有未处理的请求时会被替换。
    pub fn request_delete(&mut self, index: usize) -> Result<DeletePrompt, Rejection> {
        let id = self.id_at(index)?;
        debug!(%id, index, "delete requested");
        self.pending_delete = Some(id);
        self.delete_prompt().ok_or(Rejection::UnknownTask)
    }

    /// 处理确认结果
    ///
    /// 确认时按 id 删除任务并关闭编辑会话；任务已不存在则忽略。
    pub fn resolve_delete(&mut self, decision: Decision) -> Result<Resolution, Rejection> {
        let id = self.pending_delete.take().ok_or(Rejection::NoPendingDelete)?;

        match decision {
            Decision::Cancel => {
                debug!(%id, "delete cancelled");
                Ok(Resolution::Cancelled)
            }
            Decision::Confirm => {
                let index = self.index_of(id).ok_or(Rejection::UnknownTask)?;
                self.tasks.remove(index);
                self.mode = Mode::Idle;
                info!(%id, index, remaining = self.tasks.len(), "task deleted");
                Ok(Resolution::Deleted { index })
            }
        }
    }

    /// 请求删除并立即交给同步的确认协作者处理
    pub fn request_delete_with(
        &mut self,
        index: usize,
        dialog: &mut dyn ConfirmationDialog,
    ) -> Result<Resolution, Rejection> {
        let prompt = self.request_delete(index)?;
        let decision = dialog.ask(&prompt);
        self.resolve_delete(decision)
    }

    fn delete_prompt(&self) -> Option<DeletePrompt> {
        let id = self.pending_delete?;
        let index = self.index_of(id)?;
        Some(DeletePrompt {
            index,
            title: DELETE_TITLE,
            message: DELETE_MESSAGE,
            task_text: self.tasks[index].text().to_string(),
        })
    }

    // ========== Theme ==========

    /// 切换深浅主题，返回新主题
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        info!(theme = self.theme.label(), "theme toggled");
        self.theme
    }

    // ========== Snapshot ==========

    pub fn snapshot(&self) -> Snapshot {
        let editing = match &self.mode {
            Mode::Editing { id, draft } => self.index_of(*id).map(|index| EditView {
                index,
                draft: draft.clone(),
            }),
            Mode::Idle => None,
        };

        Snapshot {
            tasks: self
                .tasks
                .iter()
                .map(|t| TaskView {
                    id: t.id(),
                    text: t.text().to_string(),
                })
                .collect(),
            editing,
            theme: self.theme,
            pending_delete: self.delete_prompt(),
            input: self.input.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
