//! Job Tracker TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 网络请求与配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件，终端留给 UI
//!     load_config()           // 读取 config.json，环境变量覆盖 API 地址
//!     HttpJobApplicationClient + JobApplicationService
//!     tokio Runtime           // 网络请求在运行时上执行，不阻塞 UI
//!     init_terminal()
//!     App::new() + Reload     // 启动即加载全部记录
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 配置文件无法解析时使用默认配置，并在界面上弹出错误提示。

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use job_tracker_api::HttpJobApplicationClient;
use job_tracker_core::JobApplicationService;

use backend::{AppConfig, Backend, ConfigService, LocalConfigService, API_URL_ENV};
use message::AppMessage;
use util::{init_logging, init_terminal, restore_terminal};

/// 加载配置；失败时返回默认配置和错误文本
fn load_config(service: &LocalConfigService) -> (AppConfig, Option<String>) {
    match service.load() {
        Ok(config) => {
            if !service.path().exists() {
                // 首次运行写出默认配置，方便用户修改
                match service.save(&config) {
                    Ok(()) => tracing::info!(path = %service.path().display(), "Wrote default config"),
                    Err(e) => tracing::warn!(error = %e, "Failed to write default config"),
                }
            }
            (config, None)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load config, using defaults");
            (AppConfig::default(), Some(e.to_string()))
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志（终端尚未接管，失败时还能打印到 stderr）
    match init_logging() {
        Ok(path) => tracing::info!(path = %path.display(), "Starting Job Tracker TUI"),
        Err(e) => eprintln!("Logging disabled: {e}"),
    }

    // 2. 配置
    let config_service = LocalConfigService::new();
    let (config, config_error) = load_config(&config_service);
    let config = config.with_env_override(std::env::var(API_URL_ENV).ok());
    i18n::set_language(config.language());
    view::theme::set_theme(config.theme);
    tracing::info!(api = %config.api_base_url, "Using job applications API");

    // 3. 服务与运行时
    let client = HttpJobApplicationClient::new(&config.client_config())?;
    let service = Arc::new(JobApplicationService::new(Arc::new(client)));
    let runtime = tokio::runtime::Runtime::new()?;
    let mut backend = Backend::new(service, runtime.handle().clone());

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例，并开始首次加载
    let mut app = model::App::new();
    if let Some(message) = config_error {
        app.modal.show_error(i18n::t().common.error, &message);
    }
    if let Some(request) = update::update(&mut app, AppMessage::Reload) {
        backend.dispatch(request);
    }

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("Job Tracker TUI exited");

    // 8. 返回结果
    result
}
