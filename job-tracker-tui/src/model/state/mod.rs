//! 页面状态模块
//!
//! 定义列表与弹窗的状态数据结构

mod applications;
mod modal;

pub use applications::ApplicationsState;
pub use modal::{form_field_count, FormField, FormMode, Modal, ModalState};
