//! 内容面板消息
//!
//! 处理卡片列表中的选择与增删改

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== CRUD 操作 ==========
    /// 新建记录
    Add,
    /// 编辑当前选中项
    Edit,
    /// 删除当前选中项
    Delete,
}
