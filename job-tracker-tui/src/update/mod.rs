//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方，本身不做任何 I/O。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;            // 后台结果处理
//!         mod content;            // 卡片列表子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod navigation;         // 分类侧边栏子消息处理
//!         mod search;             // 搜索框子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<BackendRequest> {...}
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 返回值：BackendRequest
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     需要网络请求时，update 不直接调用服务，而是返回一个 BackendRequest：
//!
//!         用户在表单中按 Enter
//!             ↓
//!         modal::update 校验表单
//!             ├─ 校验失败 → 行内显示错误，返回 None（不发请求）
//!             └─ 校验通过 → submitting = true，返回 Some(Create / Update)
//!                     ↓
//!                 app.rs 把请求交给 Backend::dispatch
//!                     ↓
//!                 结果以 AppMessage::Backend(..) 回到这里
//!                     ├─ 成功 → 关闭弹窗，返回 Some(Reload)（恰好一次）
//!                     └─ 失败 → 表单保持打开，显示 "Failed to ... Please try again."
//!
//!     submitting / deleting 期间弹窗忽略输入，也不能关闭。
//!

mod backend;
mod content;
mod modal;
mod navigation;
mod search;

use crate::i18n::t;
use crate::message::{AppMessage, BackendRequest};
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态；返回需要执行的后台请求
pub fn update(app: &mut App, msg: AppMessage) -> Option<BackendRequest> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
            None
        }

        AppMessage::FocusSearch => {
            if !app.modal.is_open() {
                app.focus = FocusPanel::Search;
            }
            None
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
            None
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
            None
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
            None
        }

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),

        AppMessage::Reload => {
            app.set_status(t().status_bar.reloading);
            request_reload(app)
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }

        AppMessage::Noop => None,
    }
}

/// 标记加载中并请求重新拉取
///
/// 不去重：多个重载同时进行时，最后到达的结果生效。
fn request_reload(app: &mut App) -> Option<BackendRequest> {
    app.applications.loading = true;
    app.applications.error = None;
    Some(BackendRequest::Reload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{
        BackendMessage, ContentMessage, ModalMessage, NavigationMessage, SearchMessage,
    };
    use crate::model::{FormMode, Modal};
    use job_tracker_api::{JobApplication, JobStatus};
    use job_tracker_core::Category;

    fn record(id: &str, title: &str, company: &str) -> JobApplication {
        JobApplication {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            status: Some("applied".to_string()),
            priority: Some(3),
            ..Default::default()
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        let req = update(&mut app, AppMessage::Reload);
        assert_eq!(req, Some(BackendRequest::Reload));
        update(
            &mut app,
            AppMessage::Backend(BackendMessage::Loaded(Ok(vec![
                record("1", "Engineer", "Acme"),
                record("2", "Designer", "Beta"),
            ]))),
        );
        app
    }

    fn modal(app: &mut App, msg: ModalMessage) -> Option<BackendRequest> {
        update(app, AppMessage::Modal(msg))
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            modal(app, ModalMessage::Input(ch));
        }
    }

    fn form_error(app: &App) -> Option<String> {
        match &app.modal.active {
            Some(Modal::ApplicationForm { error, .. }) => error.clone(),
            other => panic!("expected form modal, got {other:?}"),
        }
    }

    fn is_submitting(app: &App) -> bool {
        matches!(
            app.modal.active,
            Some(Modal::ApplicationForm {
                submitting: true,
                ..
            })
        )
    }

    /// 打开新建表单并填好 title / company
    fn open_filled_create_form(app: &mut App) {
        update(app, AppMessage::Content(ContentMessage::Add));
        type_text(app, "Engineer");
        modal(app, ModalMessage::NextField);
        type_text(app, "Acme");
    }

    #[test]
    fn reload_marks_loading_until_records_arrive() {
        let mut app = App::new();
        assert_eq!(update(&mut app, AppMessage::Reload), Some(BackendRequest::Reload));
        assert!(app.applications.loading);

        update(
            &mut app,
            AppMessage::Backend(BackendMessage::Loaded(Ok(vec![record("1", "a", "b")]))),
        );
        assert!(!app.applications.loading);
        assert_eq!(app.applications.records.len(), 1);
    }

    #[test]
    fn failed_load_shows_error() {
        let mut app = App::new();
        update(&mut app, AppMessage::Reload);
        update(
            &mut app,
            AppMessage::Backend(BackendMessage::Loaded(Err("connection refused".to_string()))),
        );
        assert!(!app.applications.loading);
        assert_eq!(
            app.applications.error.as_deref(),
            Some("Failed to load job applications.")
        );
    }

    #[test]
    fn validation_failure_never_dispatches() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Content(ContentMessage::Add));
        type_text(&mut app, "Engineer");

        let req = modal(&mut app, ModalMessage::Confirm);

        assert_eq!(req, None);
        assert_eq!(form_error(&app).as_deref(), Some("Please fill in all fields"));
        assert!(!is_submitting(&app));
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Content(ContentMessage::Add));
        type_text(&mut app, "   ");
        modal(&mut app, ModalMessage::NextField);
        type_text(&mut app, "Acme");

        assert_eq!(modal(&mut app, ModalMessage::Confirm), None);
        assert!(form_error(&app).is_some());
    }

    #[test]
    fn valid_create_dispatches_once_and_locks_form() {
        let mut app = loaded_app();
        open_filled_create_form(&mut app);

        let req = modal(&mut app, ModalMessage::Confirm);
        match req {
            Some(BackendRequest::Create(form)) => {
                assert_eq!(form.title, "Engineer");
                assert_eq!(form.company, "Acme");
                assert_eq!(form.status, JobStatus::Applied);
            }
            other => panic!("unexpected request: {other:?}"),
        }
        assert!(is_submitting(&app));

        // 请求进行中：再次提交、输入和关闭都无效
        assert_eq!(modal(&mut app, ModalMessage::Confirm), None);
        modal(&mut app, ModalMessage::Input('x'));
        modal(&mut app, ModalMessage::Close);
        assert!(app.modal.is_open());
        match &app.modal.active {
            Some(Modal::ApplicationForm { form, .. }) => assert_eq!(form.company, "Acme"),
            other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn create_success_closes_form_and_reloads_once() {
        let mut app = loaded_app();
        open_filled_create_form(&mut app);
        modal(&mut app, ModalMessage::Confirm);

        let req = update(&mut app, AppMessage::Backend(BackendMessage::Created(Ok(()))));

        assert_eq!(req, Some(BackendRequest::Reload));
        assert!(!app.modal.is_open());
        assert!(app.applications.loading);
    }

    #[test]
    fn create_failure_keeps_form_open_and_editable() {
        let mut app = loaded_app();
        open_filled_create_form(&mut app);
        modal(&mut app, ModalMessage::Confirm);

        let req = update(
            &mut app,
            AppMessage::Backend(BackendMessage::Created(Err("HTTP 500".to_string()))),
        );

        assert_eq!(req, None);
        assert!(app.modal.is_open());
        assert!(!is_submitting(&app));
        assert_eq!(
            form_error(&app).as_deref(),
            Some("Failed to create job application. Please try again.")
        );

        // 仍可编辑并重新提交
        type_text(&mut app, " Inc");
        assert!(matches!(
            modal(&mut app, ModalMessage::Confirm),
            Some(BackendRequest::Create(_))
        ));
    }

    #[test]
    fn edit_prefills_and_dispatches_update() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Content(ContentMessage::SelectNext));
        update(&mut app, AppMessage::Content(ContentMessage::Edit));

        match &app.modal.active {
            Some(Modal::ApplicationForm { mode, form, .. }) => {
                assert_eq!(mode, &FormMode::Edit { id: "2".to_string() });
                assert_eq!(form.title, "Designer");
                assert_eq!(form.priority, 3);
            }
            other => panic!("unexpected modal: {other:?}"),
        }

        // 跳到状态字段，改为 interview
        for _ in 0..5 {
            modal(&mut app, ModalMessage::NextField);
        }
        modal(&mut app, ModalMessage::Increase);

        match modal(&mut app, ModalMessage::Confirm) {
            Some(BackendRequest::Update { id, form }) => {
                assert_eq!(id, "2");
                assert_eq!(form.status, JobStatus::Interview);
            }
            other => panic!("unexpected request: {other:?}"),
        }

        let req = update(&mut app, AppMessage::Backend(BackendMessage::Updated(Err(
            "timeout".to_string(),
        ))));
        assert_eq!(req, None);
        assert_eq!(
            form_error(&app).as_deref(),
            Some("Failed to update job application. Please try again.")
        );
    }

    #[test]
    fn update_success_closes_form_and_reloads_once() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Content(ContentMessage::Edit));
        assert!(matches!(
            modal(&mut app, ModalMessage::Confirm),
            Some(BackendRequest::Update { .. })
        ));

        let req = update(&mut app, AppMessage::Backend(BackendMessage::Updated(Ok(()))));

        assert_eq!(req, Some(BackendRequest::Reload));
        assert!(!app.modal.is_open());
        assert!(app.applications.loading);

        // 重载结果回来后不会再触发请求
        let req = update(
            &mut app,
            AppMessage::Backend(BackendMessage::Loaded(Ok(vec![record("1", "Engineer", "Acme")]))),
        );
        assert_eq!(req, None);
        assert!(!app.applications.loading);
    }

    #[test]
    fn edit_without_selection_only_sets_status() {
        let mut app = App::new();
        update(&mut app, AppMessage::Content(ContentMessage::Edit));
        assert!(!app.modal.is_open());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn numeric_fields_accept_digits_only() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Content(ContentMessage::Add));
        // 焦点移到过期天数
        for _ in 0..7 {
            modal(&mut app, ModalMessage::NextField);
        }
        type_text(&mut app, "1a4");

        match &app.modal.active {
            Some(Modal::ApplicationForm { form, .. }) => assert_eq!(form.expiration, "14"),
            other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn salary_slider_moves_with_arrows() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Content(ContentMessage::Add));
        for _ in 0..3 {
            modal(&mut app, ModalMessage::NextField);
        }
        modal(&mut app, ModalMessage::Increase);
        modal(&mut app, ModalMessage::Increase);
        modal(&mut app, ModalMessage::NextField);
        modal(&mut app, ModalMessage::Increase);

        match &app.modal.active {
            Some(Modal::ApplicationForm { form, .. }) => {
                assert_eq!(form.salary_low, "2000");
                assert_eq!(form.salary_high, "3000");
            }
            other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn links_can_be_added_and_removed() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Content(ContentMessage::Add));
        modal(&mut app, ModalMessage::AddLink);
        type_text(&mut app, "https://jobs.example");

        match &app.modal.active {
            Some(Modal::ApplicationForm { form, focus, .. }) => {
                assert_eq!(form.links.as_slice(), ["", "https://jobs.example"]);
                assert_eq!(*focus, 9);
            }
            other => panic!("unexpected modal: {other:?}"),
        }

        modal(&mut app, ModalMessage::RemoveLink);
        modal(&mut app, ModalMessage::RemoveLink);
        match &app.modal.active {
            Some(Modal::ApplicationForm { form, focus, .. }) => {
                assert_eq!(form.links.as_slice(), [""]);
                assert_eq!(*focus, 8);
            }
            other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn delete_cancel_has_no_effect() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Content(ContentMessage::Delete));
        assert!(matches!(
            app.modal.active,
            Some(Modal::ConfirmDelete { focus: 0, .. })
        ));

        let req = modal(&mut app, ModalMessage::Confirm);

        assert_eq!(req, None);
        assert!(!app.modal.is_open());
        assert_eq!(app.applications.records.len(), 2);
        assert!(!app.applications.loading);
    }

    #[test]
    fn delete_confirm_dispatches_then_reloads() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Content(ContentMessage::Delete));
        modal(&mut app, ModalMessage::ToggleDeleteFocus);

        let req = modal(&mut app, ModalMessage::Confirm);
        assert_eq!(
            req,
            Some(BackendRequest::Delete {
                id: "1".to_string()
            })
        );

        // 删除中不能关闭
        modal(&mut app, ModalMessage::Close);
        assert!(app.modal.is_open());

        let req = update(&mut app, AppMessage::Backend(BackendMessage::Deleted(Ok(()))));
        assert_eq!(req, Some(BackendRequest::Reload));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn delete_failure_stays_open_with_error() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Content(ContentMessage::Delete));
        modal(&mut app, ModalMessage::ToggleDeleteFocus);
        modal(&mut app, ModalMessage::Confirm);

        let req = update(
            &mut app,
            AppMessage::Backend(BackendMessage::Deleted(Err("HTTP 404".to_string()))),
        );

        assert_eq!(req, None);
        match &app.modal.active {
            Some(Modal::ConfirmDelete {
                deleting, error, ..
            }) => {
                assert!(!deleting);
                assert_eq!(
                    error.as_deref(),
                    Some("Failed to delete job application. Please try again.")
                );
            }
            other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn navigation_switches_category() {
        let mut app = loaded_app();
        assert_eq!(app.applications.category, Category::Status(JobStatus::Applied));

        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectFirst));
        assert_eq!(app.applications.category, Category::All);

        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(app.focus, FocusPanel::Content);
    }

    #[test]
    fn search_filters_visible_cards() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::FocusSearch);
        assert_eq!(app.focus, FocusPanel::Search);

        for ch in "BETA".chars() {
            update(&mut app, AppMessage::Search(SearchMessage::Input(ch)));
        }
        let ids: Vec<&str> = app
            .applications
            .visible()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2"]);

        update(&mut app, AppMessage::Search(SearchMessage::Clear));
        assert_eq!(app.applications.visible().len(), 2);

        update(&mut app, AppMessage::Search(SearchMessage::Done));
        assert_eq!(app.focus, FocusPanel::Content);
    }

    #[test]
    fn focus_does_not_move_under_modal() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::ShowHelp);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Navigation);

        modal(&mut app, ModalMessage::Close);
        assert!(!app.modal.is_open());
    }
}
