//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧分类面板
    #[default]
    Navigation,
    /// 右侧卡片列表
    Content,
    /// 搜索框
    Search,
}

impl FocusPanel {
    /// 在左右面板之间切换；搜索框回到列表
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content | FocusPanel::Search => FocusPanel::Navigation,
        }
    }

    /// 是否是导航面板
    pub fn is_navigation(self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    /// 是否是内容面板（搜索框也属于内容面板）
    pub fn is_content(self) -> bool {
        matches!(self, FocusPanel::Content | FocusPanel::Search)
    }

    /// 是否在搜索框中输入
    pub fn is_search(self) -> bool {
        matches!(self, FocusPanel::Search)
    }
}
