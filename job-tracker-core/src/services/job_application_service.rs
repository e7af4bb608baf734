//! 求职记录服务

use std::sync::Arc;

use chrono::{DateTime, Utc};
use job_tracker_api::{JobApplication, JobApplicationApi};

use crate::error::{CoreError, CoreResult};
use crate::form::ApplicationForm;

/// 求职记录服务
///
/// 校验在本地完成，校验失败时不会发出任何请求。
pub struct JobApplicationService {
    api: Arc<dyn JobApplicationApi>,
}

fn log_failure(action: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{action} failed: {err}");
    } else {
        log::error!("{action} failed: {err}");
    }
}

impl JobApplicationService {
    /// 创建服务实例
    #[must_use]
    pub fn new(api: Arc<dyn JobApplicationApi>) -> Self {
        Self { api }
    }

    /// 重新拉取全部记录
    pub async fn reload(&self) -> CoreResult<Vec<JobApplication>> {
        let result = self.api.list_applications().await.map_err(CoreError::from);
        match &result {
            Ok(apps) => log::info!("Reloaded {} job applications", apps.len()),
            Err(e) => log_failure("Reload", e),
        }
        result
    }

    /// 获取单条记录
    pub async fn get(&self, id: &str) -> CoreResult<JobApplication> {
        Ok(self.api.get_application(id).await?)
    }

    /// 新建记录
    pub async fn create(&self, form: &ApplicationForm) -> CoreResult<Option<JobApplication>> {
        self.create_at(form, Utc::now()).await
    }

    /// 新建记录（指定时间戳）
    pub async fn create_at(
        &self,
        form: &ApplicationForm,
        now: DateTime<Utc>,
    ) -> CoreResult<Option<JobApplication>> {
        let payload = form.to_create_payload(now)?;
        let result = self
            .api
            .create_application(&payload)
            .await
            .map_err(CoreError::from);
        match &result {
            Ok(_) => log::info!(
                "Created job application: {} @ {}",
                payload.title,
                payload.company
            ),
            Err(e) => log_failure("Create", e),
        }
        result
    }

    /// 更新记录
    pub async fn update(
        &self,
        id: &str,
        form: &ApplicationForm,
    ) -> CoreResult<Option<JobApplication>> {
        self.update_at(id, form, Utc::now()).await
    }

    /// 更新记录（指定时间戳）
    pub async fn update_at(
        &self,
        id: &str,
        form: &ApplicationForm,
        now: DateTime<Utc>,
    ) -> CoreResult<Option<JobApplication>> {
        let payload = form.to_update_payload(now)?;
        let result = self
            .api
            .update_application(id, &payload)
            .await
            .map_err(CoreError::from);
        match &result {
            Ok(_) => log::info!("Updated job application {id}"),
            Err(e) => log_failure("Update", e),
        }
        result
    }

    /// 删除记录
    pub async fn delete(&self, id: &str) -> CoreResult<()> {
        let result = self.api.delete_application(id).await.map_err(CoreError::from);
        match &result {
            Ok(()) => log::info!("Deleted job application {id}"),
            Err(e) => log_failure("Delete", e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormError;
    use crate::test_utils::{create_test_service, sample_application, ApiCall};
    use job_tracker_api::{ApiError, JobStatus};

    fn valid_form() -> ApplicationForm {
        ApplicationForm {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            ..ApplicationForm::new()
        }
    }

    #[tokio::test]
    async fn reload_returns_server_records() {
        let (svc, api) = create_test_service();
        api.set_records(vec![
            sample_application("1", "Engineer", "Acme", Some("interview")),
            sample_application("2", "Designer", "Beta", None),
        ])
        .await;

        let apps = svc.reload().await.unwrap();

        assert_eq!(apps.len(), 2);
        assert_eq!(api.calls().await, vec![ApiCall::List]);
    }

    #[tokio::test]
    async fn create_with_missing_fields_makes_no_request() {
        let (svc, api) = create_test_service();

        let result = svc.create(&ApplicationForm::new()).await;

        assert!(matches!(
            result,
            Err(CoreError::Validation(FormError::MissingRequired))
        ));
        assert!(api.calls().await.is_empty());
    }

    #[tokio::test]
    async fn create_sends_default_status() {
        let (svc, api) = create_test_service();

        svc.create(&valid_form()).await.unwrap();

        let calls = api.calls().await;
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            ApiCall::Create(payload) => {
                assert_eq!(payload.status.as_deref(), Some("applied"));
                assert!(payload.created_at.is_some());
            }
            other => panic!("unexpected call: {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_targets_record_id() {
        let (svc, api) = create_test_service();
        let mut form = valid_form();
        form.status = JobStatus::Offers;

        svc.update("42", &form).await.unwrap();

        let calls = api.calls().await;
        match &calls[..] {
            [ApiCall::Update(id, payload)] => {
                assert_eq!(id, "42");
                assert_eq!(payload.status.as_deref(), Some("offers"));
                assert!(payload.created_at.is_none());
            }
            other => panic!("unexpected calls: {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_with_blank_title_makes_no_request() {
        let (svc, api) = create_test_service();
        let mut form = valid_form();
        form.title = " ".to_string();

        assert!(svc.update("42", &form).await.is_err());
        assert!(api.calls().await.is_empty());
    }

    #[tokio::test]
    async fn api_failures_surface_as_api_errors() {
        let (svc, api) = create_test_service();
        api.fail_with(Some(ApiError::Http {
            status: 500,
            body: String::new(),
        }))
        .await;

        let result = svc.delete("1").await;

        assert!(matches!(
            result,
            Err(CoreError::Api(ApiError::Http { status: 500, .. }))
        ));
        assert_eq!(api.calls().await, vec![ApiCall::Delete("1".to_string())]);
    }

    #[tokio::test]
    async fn get_returns_matching_record() {
        let (svc, api) = create_test_service();
        api.set_records(vec![sample_application("7", "PM", "Gamma", None)])
            .await;

        let app = svc.get("7").await.unwrap();
        assert_eq!(app.company, "Gamma");

        let missing = svc.get("8").await;
        assert!(matches!(
            missing,
            Err(CoreError::Api(ApiError::Http { status: 404, .. }))
        ));
    }
}
