//! 应用主消息枚举

use super::{BackendMessage, ContentMessage, ModalMessage, NavigationMessage, SearchMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 聚焦搜索框
    FocusSearch,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 搜索框相关消息
    Search(SearchMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务返回的结果
    Backend(BackendMessage),

    /// 重新加载全部记录
    Reload,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
