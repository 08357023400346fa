//! 通过公开 API 验证 Controller 的行为约束

use tasklist_tui::controller::{
    ConfirmationDialog, Decision, DeletePrompt, Resolution, TaskListController,
};
use tasklist_tui::error::Rejection;
use tasklist_tui::theme::Theme;

/// 按预设顺序回答的确认弹窗，记录被问到的任务
struct ScriptedDialog {
    answers: Vec<Decision>,
    asked: Vec<String>,
}

impl ScriptedDialog {
    fn new(answers: &[Decision]) -> Self {
        Self {
            answers: answers.iter().rev().copied().collect(),
            asked: Vec::new(),
        }
    }
}

impl ConfirmationDialog for ScriptedDialog {
    fn ask(&mut self, prompt: &DeletePrompt) -> Decision {
        self.asked.push(prompt.task_text.clone());
        self.answers.pop().unwrap_or(Decision::Cancel)
    }
}

fn texts(c: &TaskListController) -> Vec<String> {
    c.snapshot().tasks.into_iter().map(|t| t.text).collect()
}

#[test]
fn add_appends_every_non_blank_string() {
    let inputs = ["a", "Buy milk", "  padded  ", "ünïcödé", "x y z"];
    let mut c = TaskListController::new();
    for (n, input) in inputs.iter().enumerate() {
        let before = c.len();
        assert_eq!(c.add_task(input), Ok(n));
        assert_eq!(c.len(), before + 1);
        assert_eq!(texts(&c).last().map(String::as_str), Some(input.trim()));
    }
}

#[test]
fn blank_inputs_never_change_the_list() {
    let mut c = TaskListController::new();
    c.add_task("keep").unwrap();
    let before = c.snapshot();
    for input in ["", " ", "   ", "\t\n"] {
        assert_eq!(c.add_task(input), Err(Rejection::EmptyInput));
    }
    assert_eq!(c.snapshot(), before);
}

#[test]
fn edit_replaces_only_the_target() {
    let mut c = TaskListController::new();
    for t in ["a", "b", "c"] {
        c.add_task(t).unwrap();
    }
    for i in 0..3 {
        c.begin_edit(i).unwrap();
        c.commit_edit(&format!("edited {}", i)).unwrap();
        assert_eq!(c.len(), 3);
        assert!(c.snapshot().editing.is_none());
    }
    assert_eq!(texts(&c), vec!["edited 0", "edited 1", "edited 2"]);
}

#[test]
fn delete_through_dialog_collaborator() {
    let mut c = TaskListController::new();
    for t in ["a", "b", "c"] {
        c.add_task(t).unwrap();
    }
    let mut dialog = ScriptedDialog::new(&[Decision::Cancel, Decision::Confirm]);

    assert_eq!(
        c.request_delete_with(1, &mut dialog),
        Ok(Resolution::Cancelled)
    );
    assert_eq!(texts(&c), vec!["a", "b", "c"]);

    assert_eq!(
        c.request_delete_with(1, &mut dialog),
        Ok(Resolution::Deleted { index: 1 })
    );
    assert_eq!(texts(&c), vec!["a", "c"]);
    assert_eq!(dialog.asked, vec!["b", "b"]);
}

#[test]
fn theme_toggle_is_independent_of_tasks() {
    let mut c = TaskListController::new();
    c.add_task("a").unwrap();
    c.begin_edit(0).unwrap();
    let tasks = c.snapshot().tasks;

    c.toggle_theme();
    assert_eq!(c.theme(), Theme::Dark);
    c.toggle_theme();
    assert_eq!(c.theme(), Theme::Light);
    assert_eq!(c.snapshot().tasks, tasks);
    assert!(c.is_editing());
}

#[test]
fn documented_scenario() {
    let mut c = TaskListController::new();
    c.add_task("Buy milk").unwrap();
    c.add_task("Walk dog").unwrap();
    assert_eq!(texts(&c), vec!["Buy milk", "Walk dog"]);

    c.begin_edit(0).unwrap();
    c.commit_edit("Buy oat milk").unwrap();
    assert_eq!(texts(&c), vec!["Buy oat milk", "Walk dog"]);

    let mut yes = |_: &DeletePrompt| Decision::Confirm;
    c.request_delete_with(1, &mut yes).unwrap();
    assert_eq!(texts(&c), vec!["Buy oat milk"]);
}
