//! 后台请求与结果
//!
//! Update 层返回 [`BackendRequest`]，Backend 层执行后以 [`BackendMessage`] 回传。

use job_tracker_api::JobApplication;
use job_tracker_core::ApplicationForm;

/// 需要 Backend 层执行的网络操作
#[derive(Debug, Clone, PartialEq)]
pub enum BackendRequest {
    /// 重新拉取全部记录
    Reload,
    /// 新建记录
    Create(ApplicationForm),
    /// 更新记录
    Update { id: String, form: ApplicationForm },
    /// 删除记录
    Delete { id: String },
}

/// 后台任务的结果，错误为可显示的文本
#[derive(Debug, Clone)]
pub enum BackendMessage {
    Loaded(Result<Vec<JobApplication>, String>),
    Created(Result<(), String>),
    Updated(Result<(), String>),
    Deleted(Result<(), String>),
}
