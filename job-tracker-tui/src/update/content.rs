//! 内容面板更新逻辑
//!
//! 处理卡片列表中的选择与增删改入口

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::App;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => app.applications.select_previous(),
        ContentMessage::SelectNext => app.applications.select_next(),
        ContentMessage::SelectFirst => app.applications.select_first(),
        ContentMessage::SelectLast => app.applications.select_last(),

        // ========== CRUD 操作 ==========
        ContentMessage::Add => {
            app.modal.show_create_form();
        }
        ContentMessage::Edit => {
            handle_edit(app);
        }
        ContentMessage::Delete => {
            handle_delete(app);
        }
    }
}

fn handle_edit(app: &mut App) {
    match app.applications.selected_application().cloned() {
        Some(record) => app.modal.show_edit_form(&record),
        None => app.set_status(t().status_bar.nothing_selected),
    }
}

fn handle_delete(app: &mut App) {
    match app.applications.selected_application().cloned() {
        Some(record) => app.modal.show_confirm_delete(&record),
        None => app.set_status(t().status_bar.nothing_selected),
    }
}
