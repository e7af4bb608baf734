//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::event::DefaultKeymap;
use crate::i18n::t;
use crate::model::{App, FocusPanel, Modal};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(key.clone(), Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据焦点和弹窗生成快捷键提示
fn get_hints(app: &App) -> Vec<(String, &'static str)> {
    let h = &t().hints;
    let key = |k: &str| k.to_string();

    if let Some(ref modal) = app.modal.active {
        return match modal {
            Modal::ApplicationForm { .. } => vec![
                (key("Tab"), h.next_field),
                (key("←→"), h.adjust),
                (DefaultKeymap::FORM_ADD_LINK.label(), h.add_link),
                (DefaultKeymap::FORM_REMOVE_LINK.label(), h.remove_link),
                (key("Enter"), h.submit),
                (DefaultKeymap::BACK.label(), h.cancel),
            ],
            Modal::ConfirmDelete { .. } => vec![
                (key("←→"), h.select),
                (key("Enter"), h.submit),
                (DefaultKeymap::BACK.label(), h.cancel),
            ],
            Modal::Help | Modal::Error { .. } => vec![(DefaultKeymap::BACK.label(), h.cancel)],
        };
    }

    let mut hints = vec![(DefaultKeymap::TOGGLE_FOCUS.label(), h.switch_panel)];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push((key("↑↓"), h.select));
            hints.push((DefaultKeymap::FOCUS_SEARCH.label(), h.search));
        }
        FocusPanel::Content => {
            hints.push((key("↑↓"), h.select));
            hints.push((DefaultKeymap::ACTION_EDIT.label(), h.edit));
            hints.push((DefaultKeymap::ACTION_DELETE.label(), h.delete));
            hints.push((DefaultKeymap::FOCUS_SEARCH.label(), h.search));
        }
        FocusPanel::Search => {
            return vec![
                (key("Enter"), h.done),
                (key("Ctrl+u"), h.clear),
                (DefaultKeymap::BACK.label(), h.done),
            ];
        }
    }

    hints.push((DefaultKeymap::ACTION_ADD.label(), h.add));
    hints.push((DefaultKeymap::RELOAD.label(), h.reload));
    hints.push((key("?"), h.help));
    hints.push((DefaultKeymap::QUIT.label(), h.quit));

    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_focus_only_shows_input_hints() {
        let mut app = App::new();
        app.focus = FocusPanel::Search;
        let keys: Vec<String> = get_hints(&app).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Enter", "Ctrl+u", "Esc"]);
    }

    #[test]
    fn form_modal_overrides_panel_hints() {
        let mut app = App::new();
        app.modal.show_create_form();
        let keys: Vec<String> = get_hints(&app).into_iter().map(|(k, _)| k).collect();
        assert!(keys.iter().any(|k| k == "Alt+n"));
        assert!(!keys.iter().any(|k| k == "Alt+q"));
    }
}
