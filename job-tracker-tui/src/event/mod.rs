//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!         pub use keymap::DefaultKeymap;     // 状态栏与帮助弹窗也用它显示按键名
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!             Event::Key(KeyEvent)                // 键盘事件，只处理 Press
//!             Event::Resize(width, height)        // 终端窗口大小变化，下一帧自动重绘
//!             其它事件                             // 忽略
//!
//!             当接收到键盘事件时，按以下顺序判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键（Alt+q、Ctrl+c、Alt+r、Alt+h、?、Tab、/），就地处理
//!                 - 焦点在搜索框，调用 handle_search_keys 处理
//!                 - 焦点位于导航面板，调用 handle_navigation_keys 处理
//!                 - 焦点位于内容面板，调用 handle_content_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     表单弹窗：
//!             Esc             → ModalMessage::Close
//!             Tab / ↓         → ModalMessage::NextField
//!             Shift+Tab / ↑   → ModalMessage::PrevField
//!             ← / →           → ModalMessage::Decrease / Increase
//!             Alt+n / Alt+x   → ModalMessage::AddLink / RemoveLink
//!             Enter           → ModalMessage::Confirm
//!             字符输入         → ModalMessage::Input(c)
//!
//!     确认删除弹窗：
//!             Tab / ← / →     → ModalMessage::ToggleDeleteFocus
//!             Enter           → ModalMessage::Confirm
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
