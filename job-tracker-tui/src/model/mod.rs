//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ SearchMsg │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └─────▲─────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ─┼────────┘      └────┬─────┘         │   │
//！│  │        │                      │ BackendMessage     │ BackendRequest│   │
//！│  └────────│──────────────────────│────────────────────│───────────────┘   │
//！│           │                      │                    │ tokio 任务        │
//！│           ▼                      │                    ▼                   │
//！│      ┌─────────┐                 │              ┌──────────┐              │
//！│      │  终端   │                 └───── mpsc ── │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ job-tracker-core  │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和简单的选择逻辑，不发起任何网络请求。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content / Search）
//!         mod navigation;     // 分类侧边栏状态
//!
//!         pub mod state;      // 列表与弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub focus: FocusPanel,                  // 当前焦点
//!             pub navigation: NavigationState,        // 分类侧边栏
//!             pub applications: ApplicationsState,    // 记录、分类、搜索词、选中项
//!             pub modal: ModalState,                  // 弹窗状态
//!             pub status_message: Option<String>,     // 状态栏消息（可选）
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（FocusPanel）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Navigation：左侧分类    Content：右侧卡片    Search：搜索框
//!
//!     数据流：
//!         用户按 Tab
//!             ↓
//!         event/handler.rs 返回 AppMessage::ToggleFocus
//!             ↓
//!         update/mod.rs 执行 app.focus = app.focus.toggle()
//!
//!         用户按 /
//!             ↓
//!         AppMessage::FocusSearch，之后的字符输入都进入搜索框
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、分类与列表（NavigationState / ApplicationsState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     侧边栏顺序：All, Offers, Interview, Applied, Rejected, Graveyard
//!     默认分类：Applied
//!
//!     ApplicationsState 只保存服务端返回的原始记录，
//!     可见列表由 job_tracker_core::filter_applications 按需计算，
//!     selected 是可见列表中的索引。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Modal 枚举：每种弹窗都是一个变体，携带该弹窗的所有数据
//!         - ApplicationForm { mode, form, focus, error, submitting }
//!         - ConfirmDelete { id, title, company, focus, deleting, error }
//!         - Help, Error { title, message }
//!
//!     submitting / deleting 为 true 时，弹窗不能关闭，输入被忽略。
//!

mod app;
mod focus;
mod navigation;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavigationState};
pub use state::{ApplicationsState, FormField, FormMode, Modal, ModalState};
