//! 启动与退出时 util 的位置 (main.rs)
//!
//!     init_logging()  ──▶  <data_dir>/job-tracker-tui/job-tracker-tui.log
//!          │
//!          ▼
//!     读取配置 / 构建 Backend
//!          │
//!          ▼
//!     init_terminal() ──▶  raw mode + 备用屏幕 + panic 钩子
//!          │
//!          ▼
//!     app::run(..)          主循环，见 src/app.rs
//!          │
//!          ▼
//!     restore_terminal()    无论 run 返回 Ok 还是 Err

//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与求职记录无关的代码：终端的初始化和恢复，以及日志文件。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // tracing 日志写入文件
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use logging::init_logging;
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//!     终端：
//!
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：每个按键立即生效
//!             - 关闭字符回显
//!             - 捕获 Ctrl+C、箭头键等特殊键
//!
//!         · Alternate Screen（备用屏幕）
//!             - TUI 在备用屏幕运行，退出后恢复原有内容
//!
//!         restore_terminal() 无论 app::run 成功与否都必须调用，
//!         否则终端停留在原始模式。
//!
//!
//!     日志：
//!         终端被 TUI 占满，不能往 stdout/stderr 打日志。
//!         init_logging() 把 tracing 输出写到：
//!
//!             <data_dir>/job-tracker-tui/job-tracker-tui.log
//!
//!         RUST_LOG=debug 可以看到每个 HTTP 请求。
//!
//!
//!     接下来去往 src/app.rs 主循环吧
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
