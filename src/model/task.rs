use std::fmt;

use uuid::Uuid;

/// 任务的稳定标识，创建时分配，不随列表位置变化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 日志里只需要前 8 位
        let s = self.0.simple().to_string();
        write!(f, "{}", &s[..8])
    }
}

/// 一条待办任务
///
/// `text` 总是非空且已 trim，只能通过 [`Task::new`] / [`Task::set_text`] 修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    text: String,
}

impl Task {
    /// 创建任务；文本 trim 后为空时返回 None
    pub fn new(text: &str) -> Option<Self> {
        let text = normalize(text)?;
        Some(Self {
            id: TaskId::new(),
            text,
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 替换文本；空文本不修改并返回 false
    pub fn set_text(&mut self, text: &str) -> bool {
        match normalize(text) {
            Some(text) => {
                self.text = text;
                true
            }
            None => false,
        }
    }
}

/// trim 文本，空白输入返回 None
pub fn normalize(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
