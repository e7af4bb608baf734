//! 搜索框更新逻辑

use crate::message::SearchMessage;
use crate::model::{App, FocusPanel};

/// 处理搜索框消息，搜索词变化后选中项回到顶部
pub fn update(app: &mut App, msg: SearchMessage) {
    let search = &mut app.applications.search;
    match msg {
        SearchMessage::Input(ch) => search.push(ch),
        SearchMessage::Backspace => {
            search.pop();
        }
        SearchMessage::Clear => search.clear(),
        SearchMessage::Done => {
            app.focus = FocusPanel::Content;
            return;
        }
    }
    app.applications.search_changed();
}
