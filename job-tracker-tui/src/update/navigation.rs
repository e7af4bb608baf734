//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel};

/// 处理导航消息
///
/// 移动选中项即切换分类，Enter 把焦点交给列表。
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
        }

        NavigationMessage::SelectLast => {
            app.navigation.select_last();
        }

        NavigationMessage::Confirm => {
            app.focus = FocusPanel::Content;
            return;
        }
    }

    if let Some(category) = app.navigation.current_category() {
        app.applications.set_category(category);
        app.clear_status(); // 切换分类时清除状态消息
    }
}
