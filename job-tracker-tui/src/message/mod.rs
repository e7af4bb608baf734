//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和后台结果都通过 Message 来表达。
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod backend;        // BackendRequest / BackendMessage
//!         mod content;        // 卡片列表子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 分类侧边栏子消息
//!         mod search;         // 搜索框子消息
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             ToggleFocus,                        // 切换焦点面板
//!             FocusSearch,                        // 聚焦搜索框
//!             Navigation(NavigationMessage),      // 子消息，与主消息分离
//!             Content(ContentMessage),
//!             Search(SearchMessage),
//!             Modal(ModalMessage),
//!             Backend(BackendMessage),            // 后台任务结果
//!             Reload,                             // 重新加载
//!             ShowHelp,                           // 显示帮助
//!             ClearStatus,                        // 清除状态栏消息
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//! 两个方向：
//!     - 键盘事件由 event/handler.rs 翻译成 AppMessage；
//!     - 后台任务完成后，Backend 通过 mpsc 通道送回 AppMessage::Backend(..)。
//!
//!     update::update() 可能返回一个 BackendRequest，主循环把它交给 Backend 执行。
//!     这是发起网络请求的唯一入口。
//!

mod app;
mod backend;
mod content;
mod modal;
mod navigation;
mod search;

pub use app::AppMessage;
pub use backend::{BackendMessage, BackendRequest};
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
pub use search::SearchMessage;
