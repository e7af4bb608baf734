//! 日志初始化
//!
//! TUI 占用整个终端，日志写入数据目录下的文件：
//! `<data_dir>/job-tracker-tui/job-tracker-tui.log`。
//! 级别由 `RUST_LOG` 控制，默认 info。
//! core 与 api 库使用 `log` 宏，经 tracing-subscriber 的 log 桥接一并写入。

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "job-tracker-tui.log";

/// 日志文件路径
fn log_file_path(base: &Path) -> PathBuf {
    base.join("job-tracker-tui").join(LOG_FILE_NAME)
}

/// 以追加模式打开日志文件，目录不存在时创建
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// 初始化全局日志，返回日志文件路径
pub fn init_logging() -> Result<PathBuf> {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    let path = log_file_path(&base);
    let file = open_log_file(&path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .try_init()?;

    Ok(path)
}
