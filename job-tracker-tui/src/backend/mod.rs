//!
//! src/backend/mod.rs
//! Backend 层：业务服务与后台任务
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件读写
//!
//!         pub struct Backend;     // 持有 JobApplicationService 与 tokio 运行时句柄
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、请求分发（Backend::dispatch）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     update::update() 返回 Some(BackendRequest) 时，主循环调用：
//!
//!         backend.dispatch(request)
//!             ↓
//!         runtime.spawn(async { service.xxx().await })     // 不阻塞 UI
//!             ↓
//!         tx.send(BackendMessage::...)                      // 结果送回通道
//!
//!     主循环每一帧调用 backend.try_recv() 取出结果，
//!     包装成 AppMessage::Backend(..) 再交给 update 处理。
//!
//!     多个请求可以同时进行，没有去重和取消，
//!     最后到达的重载结果生效。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：<config_dir>/job-tracker-tui/config.json
//!     环境变量 JOB_TRACKER_API_URL 覆盖 API 地址。
//!

mod config_service;

use std::sync::Arc;

use job_tracker_core::JobApplicationService;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::message::{BackendMessage, BackendRequest};

pub use config_service::{AppConfig, ConfigService, LocalConfigService, API_URL_ENV};

/// 后台任务执行器
pub struct Backend {
    service: Arc<JobApplicationService>,
    runtime: Handle,
    tx: UnboundedSender<BackendMessage>,
    rx: UnboundedReceiver<BackendMessage>,
}

impl Backend {
    pub fn new(service: Arc<JobApplicationService>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            service,
            runtime,
            tx,
            rx,
        }
    }

    /// 在运行时上执行请求，结果稍后从 [`Backend::try_recv`] 取回
    pub fn dispatch(&self, request: BackendRequest) {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let msg = execute(&service, request).await;
            if tx.send(msg).is_err() {
                tracing::debug!("UI loop has exited, dropping backend result");
            }
        });
    }

    /// 取出一个已完成的结果（不阻塞）
    pub fn try_recv(&mut self) -> Option<BackendMessage> {
        self.rx.try_recv().ok()
    }
}

async fn execute(service: &JobApplicationService, request: BackendRequest) -> BackendMessage {
    match request {
        BackendRequest::Reload => {
            BackendMessage::Loaded(service.reload().await.map_err(|e| e.to_string()))
        }
        BackendRequest::Create(form) => BackendMessage::Created(
            service
                .create(&form)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string()),
        ),
        BackendRequest::Update { id, form } => BackendMessage::Updated(
            service
                .update(&id, &form)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string()),
        ),
        BackendRequest::Delete { id } => {
            BackendMessage::Deleted(service.delete(&id).await.map_err(|e| e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use job_tracker_api::{
        ApiError, JobApplication, JobApplicationApi, JobApplicationPayload,
    };
    use job_tracker_core::ApplicationForm;

    /// 固定返回结果的 API
    struct StubApi {
        fail: bool,
    }

    impl StubApi {
        fn outcome<T>(&self, value: T) -> Result<T, ApiError> {
            if self.fail {
                Err(ApiError::Http {
                    status: 500,
                    body: "boom".to_string(),
                })
            } else {
                Ok(value)
            }
        }
    }

    #[async_trait]
    impl JobApplicationApi for StubApi {
        async fn list_applications(&self) -> Result<Vec<JobApplication>, ApiError> {
            self.outcome(vec![JobApplication {
                id: "1".to_string(),
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                ..Default::default()
            }])
        }

        async fn get_application(&self, id: &str) -> Result<JobApplication, ApiError> {
            self.outcome(JobApplication {
                id: id.to_string(),
                ..Default::default()
            })
        }

        async fn create_application(
            &self,
            _payload: &JobApplicationPayload,
        ) -> Result<Option<JobApplication>, ApiError> {
            self.outcome(None)
        }

        async fn update_application(
            &self,
            _id: &str,
            _payload: &JobApplicationPayload,
        ) -> Result<Option<JobApplication>, ApiError> {
            self.outcome(None)
        }

        async fn delete_application(&self, _id: &str) -> Result<(), ApiError> {
            self.outcome(())
        }
    }

    fn backend(fail: bool) -> (tokio::runtime::Runtime, Backend) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let service = Arc::new(JobApplicationService::new(Arc::new(StubApi { fail })));
        let backend = Backend::new(service, rt.handle().clone());
        (rt, backend)
    }

    fn valid_form() -> ApplicationForm {
        ApplicationForm {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            ..ApplicationForm::new()
        }
    }

    #[test]
    fn reload_result_comes_back_over_channel() {
        let (_rt, mut backend) = backend(false);

        backend.dispatch(BackendRequest::Reload);

        match backend.rx.blocking_recv() {
            Some(BackendMessage::Loaded(Ok(records))) => assert_eq!(records.len(), 1),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn create_and_delete_report_success() {
        let (_rt, mut backend) = backend(false);

        backend.dispatch(BackendRequest::Create(valid_form()));
        assert!(matches!(
            backend.rx.blocking_recv(),
            Some(BackendMessage::Created(Ok(())))
        ));

        backend.dispatch(BackendRequest::Delete {
            id: "1".to_string(),
        });
        assert!(matches!(
            backend.rx.blocking_recv(),
            Some(BackendMessage::Deleted(Ok(())))
        ));
    }

    #[test]
    fn failures_carry_error_text() {
        let (_rt, mut backend) = backend(true);

        backend.dispatch(BackendRequest::Update {
            id: "1".to_string(),
            form: valid_form(),
        });

        match backend.rx.blocking_recv() {
            Some(BackendMessage::Updated(Err(text))) => assert!(text.contains("500")),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn try_recv_is_empty_before_any_dispatch() {
        let (_rt, mut backend) = backend(false);
        assert!(backend.try_recv().is_none());
    }
}
