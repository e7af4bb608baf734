//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//! 布局见 `layout.rs`，弹窗最后绘制，位于最上层。

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
