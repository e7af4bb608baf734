//! 应用主状态结构

use super::{ApplicationsState, FocusPanel, ModalState, NavigationState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 分类导航状态
    pub navigation: NavigationState,

    /// 求职记录列表状态
    pub applications: ApplicationsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        let navigation = NavigationState::new();
        let mut applications = ApplicationsState::new();
        if let Some(category) = navigation.current_category() {
            applications.category = category;
        }

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation,
            applications,
            modal: ModalState::new(),
            status_message: None,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
