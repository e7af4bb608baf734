//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，终端被初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: NavigationState {
//!         items: [All, Offers, Interview, Applied, Rejected, Graveyard],
//!         selected = 3                                    // 默认选中 Applied
//!     },
//!     applications: ApplicationsState {
//!         records: [],                                    // 首次加载完成前为空
//!         category: Applied,
//!         loading: true,                                  // main.rs 已经发出 Reload
//!         ..
//!     },
//!     modal: None,
//!     status_message = Some("Reloading..."),
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     while let Some(result) = backend.try_recv() {   // 先取回已完成的网络请求
//!         update(&mut app, AppMessage::Backend(result))   // 可能再产生 Reload
//!             → backend.dispatch(..)
//!     }
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update(&mut app , msg)                          // 更新状态
//!             → backend.dispatch(..)                      // 需要网络请求时
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 处理一条消息，需要时把请求交给后台
fn apply(app: &mut App, backend: &Backend, msg: AppMessage) {
    if let Some(request) = update::update(app, msg) {
        tracing::debug!(?request, "Dispatching backend request");
        backend.dispatch(request);
    }
}

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut Backend) -> Result<()> {
    loop {
        // 1. 取回后台结果
        while let Some(result) = backend.try_recv() {
            apply(app, backend, AppMessage::Backend(result));
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            apply(app, backend, msg);
        }
    }

    Ok(())
}
