use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Focus};

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // 全局快捷键
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.quit();
                return;
            }
            KeyCode::Char('t') => {
                app.toggle_theme();
                return;
            }
            _ => {}
        }
    }
    if key.code == KeyCode::F(2) {
        app.toggle_theme();
        return;
    }

    // 优先处理弹窗事件

    // 删除确认弹窗
    if app.controller.has_pending_delete() {
        handle_confirm_dialog_key(app, key);
        return;
    }

    // 帮助面板
    if app.show_help {
        handle_help_key(app, key);
        return;
    }

    // 根据焦点分发事件
    match app.focus {
        Focus::Input => handle_input_key(app, key),
        Focus::List => handle_list_key(app, key),
        Focus::Edit => handle_edit_key(app, key),
    }
}

/// 处理新任务输入框的键盘事件
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => app.controller.input_pop(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::Esc | KeyCode::Down => app.focus_list(),
        KeyCode::Char(c) if is_plain(key) => app.controller.input_push(c),
        _ => {}
    }
}

/// 未按 Ctrl/Alt 的字符才写入文本
fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// 处理任务列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 编辑
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit_selected(),

        // 删除（需要确认）
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
            app.request_delete_selected();
        }

        // 回到输入框
        KeyCode::Char('a') | KeyCode::Char('i') => app.focus_input(),
        KeyCode::Tab => app.focus_next(),

        // 主题
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),

        // 帮助
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// 处理编辑栏的键盘事件
fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_draft(),
        KeyCode::Backspace => app.draft_pop(),
        // 会话保持打开，编辑栏仍然显示
        KeyCode::Esc => app.focus_list(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::Char(c) if is_plain(key) => app.draft_push(c),
        _ => {}
    }
}

/// 处理删除确认弹窗
fn handle_confirm_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_delete();
        }

        // 取消
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_delete();
        }

        _ => {}
    }
}

/// 处理帮助面板
fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
    ) {
        app.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn texts(app: &App) -> Vec<String> {
        app.controller
            .tasks()
            .iter()
            .map(|t| t.text().to_string())
            .collect()
    }

    #[test]
    fn test_typing_and_enter_adds_task() {
        let mut app = App::default();
        type_str(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Walk dog");
        press(&mut app, KeyCode::Enter);
        assert_eq!(texts(&app), vec!["Buy milk", "Walk dog"]);
        assert!(app.controller.input().is_empty());
    }

    #[test]
    fn test_blank_enter_is_silent() {
        let mut app = App::default();
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_q_types_in_input_but_quits_in_list() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.controller.input(), "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = App::default();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_theme_toggle_keys() {
        let mut app = App::default();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
        );
        assert!(app.controller.theme().is_dark());
        // 输入框中 't' 只是普通字符
        press(&mut app, KeyCode::Char('t'));
        assert!(app.controller.theme().is_dark());
        press(&mut app, KeyCode::F(2));
        assert!(!app.controller.theme().is_dark());
    }

    #[test]
    fn test_scenario_through_keys() {
        let mut app = App::default();
        type_str(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Walk dog");
        press(&mut app, KeyCode::Enter);

        // 编辑第一项
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.focus, Focus::Edit);
        for _ in 0.."milk".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "oat milk");
        press(&mut app, KeyCode::Enter);
        assert_eq!(texts(&app), vec!["Buy oat milk", "Walk dog"]);

        // 删除第二项，先取消再确认
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(texts(&app), vec!["Buy oat milk", "Walk dog"]);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(texts(&app), vec!["Buy oat milk"]);
    }

    #[test]
    fn test_confirm_dialog_captures_keys() {
        let mut app = App::default();
        type_str(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('d'));

        // 弹窗打开时 q 不会退出
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert!(app.controller.has_pending_delete());

        press(&mut app, KeyCode::Esc);
        assert!(!app.controller.has_pending_delete());
        assert_eq!(app.controller.len(), 1);
    }

    #[test]
    fn test_esc_in_edit_keeps_session() {
        let mut app = App::default();
        type_str(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::Edit);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::List);
        assert!(app.controller.is_editing());
    }

    #[test]
    fn test_help_panel() {
        let mut app = App::default();
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        // 帮助面板打开时 q 只关闭面板
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_modified_chars_are_not_typed() {
        let mut app = App::default();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL),
        );
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        // Shift 仍然可以输入大写
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT),
        );
        assert_eq!(app.controller.input(), "B");

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('e'));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('z'), KeyModifiers::ALT));
        assert_eq!(
            app.controller.snapshot().editing.map(|e| e.draft).as_deref(),
            Some("B")
        );
    }
}
