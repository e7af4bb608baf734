//! 导航相关消息

/// 导航消息
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// 选择上一个分类
    SelectPrevious,
    /// 选择下一个分类
    SelectNext,
    /// 确认选择（焦点移到列表）
    Confirm,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
}
