//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// ←：上一个状态 / 优先级减一 / 薪资滑块左移
    Decrease,

    /// →：下一个状态 / 优先级加一 / 薪资滑块右移
    Increase,

    /// 确认/提交
    Confirm,

    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 新增一条链接
    AddLink,

    /// 移除当前聚焦的链接
    RemoveLink,
}
