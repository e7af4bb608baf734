//! 后台结果更新逻辑
//!
//! 失败原因已由服务层记录日志，这里只展示统一的提示文本。

use crate::i18n::t;
use crate::message::{BackendMessage, BackendRequest};
use crate::model::{App, Modal};

use super::request_reload;

/// 处理后台任务结果
pub fn update(app: &mut App, msg: BackendMessage) -> Option<BackendRequest> {
    match msg {
        BackendMessage::Loaded(Ok(records)) => {
            app.applications.set_records(records);
            app.set_status(t().status_bar.loaded);
            None
        }
        BackendMessage::Loaded(Err(_)) => {
            app.applications.loading = false;
            app.applications.error = Some(t().applications.load_failed.to_string());
            None
        }
        BackendMessage::Created(result) => finish_submit(
            app,
            result,
            t().form.create_failed,
            t().status_bar.created,
        ),
        BackendMessage::Updated(result) => finish_submit(
            app,
            result,
            t().form.update_failed,
            t().status_bar.updated,
        ),
        BackendMessage::Deleted(result) => finish_delete(app, result),
    }
}

/// 表单提交完成：成功则关闭弹窗并刷新一次，失败则保留表单
fn finish_submit(
    app: &mut App,
    result: Result<(), String>,
    failure: &str,
    success: &str,
) -> Option<BackendRequest> {
    let form_pending = matches!(
        app.modal.active,
        Some(Modal::ApplicationForm {
            submitting: true,
            ..
        })
    );

    match result {
        Ok(()) => {
            if form_pending {
                app.modal.close();
            }
            app.set_status(success);
            request_reload(app)
        }
        Err(_) => {
            if let Some(Modal::ApplicationForm {
                error, submitting, ..
            }) = app.modal.active.as_mut()
            {
                *submitting = false;
                *error = Some(failure.to_string());
            } else {
                app.set_status(failure);
            }
            None
        }
    }
}

/// 删除完成：成功则关闭弹窗并刷新一次，失败则在弹窗内提示
fn finish_delete(app: &mut App, result: Result<(), String>) -> Option<BackendRequest> {
    match result {
        Ok(()) => {
            if matches!(app.modal.active, Some(Modal::ConfirmDelete { .. })) {
                app.modal.close();
            }
            app.set_status(t().status_bar.deleted);
            request_reload(app)
        }
        Err(_) => {
            let failure = t().confirm_delete.delete_failed;
            if let Some(Modal::ConfirmDelete {
                deleting, error, ..
            }) = app.modal.active.as_mut()
            {
                *deleting = false;
                *error = Some(failure.to_string());
            } else {
                app.set_status(failure);
            }
            None
        }
    }
}
