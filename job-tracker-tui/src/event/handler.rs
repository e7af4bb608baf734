//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage, SearchMessage};
use crate::model::state::FormField;
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // Resize 等：下一帧自动重绘
    }
}

/// 普通字符输入（允许 Shift 输入大写和符号）
fn is_text_input(key: &KeyEvent) -> bool {
    key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(ref modal) = app.modal.active {
        return handle_modal_keys(key, modal);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::RELOAD.matches(&key) {
        return AppMessage::Reload;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }

    // 搜索框中 ? / Tab 等都是普通输入
    if app.focus.is_search() {
        return handle_search_keys(key);
    }

    if is_text_input(&key) && key.code == KeyCode::Char('?') {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if DefaultKeymap::FOCUS_SEARCH.matches(&key) {
        return AppMessage::FocusSearch;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key)
    }
}

/// 处理搜索框的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
            AppMessage::Search(SearchMessage::Done)
        }
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),
        // Ctrl+u: 清空
        KeyCode::Char('u') if key.modifiers == KeyModifiers::CONTROL => {
            AppMessage::Search(SearchMessage::Clear)
        }
        KeyCode::Char(ch) if is_text_input(&key) => AppMessage::Search(SearchMessage::Input(ch)),
        _ => AppMessage::Noop,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter 或 →: 进入列表
        KeyCode::Enter | KeyCode::Right => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        // Enter: 编辑选中项
        KeyCode::Enter => AppMessage::Content(ContentMessage::Edit),
        // ←: 回到分类
        KeyCode::Left => AppMessage::ToggleFocus,
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗（请求进行中由 update 层拒绝）
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    match modal {
        Modal::ApplicationForm { focus, .. } => handle_form_keys(key, *focus),
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Help | Modal::Error { .. } => {
            // 帮助和错误弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 处理表单弹窗的按键
fn handle_form_keys(key: KeyEvent, focus: usize) -> AppMessage {
    if DefaultKeymap::FORM_ADD_LINK.matches(&key) {
        return AppMessage::Modal(ModalMessage::AddLink);
    }
    if DefaultKeymap::FORM_REMOVE_LINK.matches(&key) {
        return AppMessage::Modal(ModalMessage::RemoveLink);
    }

    let field = FormField::from_focus(focus);

    match key.code {
        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),

        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),

        // ← →: 状态、优先级、薪资
        KeyCode::Left => AppMessage::Modal(ModalMessage::Decrease),
        KeyCode::Right => AppMessage::Modal(ModalMessage::Increase),

        // Enter: 提交
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),

        // 字符输入（选择器字段不接受键入）
        KeyCode::Char(ch) if is_text_input(&key) && !field.is_selector() => {
            AppMessage::Modal(ModalMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }

        // Enter: 确认
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}
