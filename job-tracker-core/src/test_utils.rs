//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::Arc;

use async_trait::async_trait;
use job_tracker_api::{ApiError, JobApplication, JobApplicationApi, JobApplicationPayload};
use tokio::sync::RwLock;

use crate::services::JobApplicationService;

/// mock 记录下来的调用
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Get(String),
    Create(JobApplicationPayload),
    Update(String, JobApplicationPayload),
    Delete(String),
}

// ===== MockJobApplicationApi =====

pub struct MockJobApplicationApi {
    records: RwLock<Vec<JobApplication>>,
    calls: RwLock<Vec<ApiCall>>,
    /// 如果 Some，所有请求都返回此错误
    failure: RwLock<Option<ApiError>>,
}

impl MockJobApplicationApi {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            calls: RwLock::new(Vec::new()),
            failure: RwLock::new(None),
        }
    }

    pub async fn set_records(&self, records: Vec<JobApplication>) {
        *self.records.write().await = records;
    }

    pub async fn fail_with(&self, err: Option<ApiError>) {
        *self.failure.write().await = err;
    }

    pub async fn calls(&self) -> Vec<ApiCall> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: ApiCall) -> Result<(), ApiError> {
        self.calls.write().await.push(call);
        match self.failure.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl JobApplicationApi for MockJobApplicationApi {
    async fn list_applications(&self) -> Result<Vec<JobApplication>, ApiError> {
        self.record(ApiCall::List).await?;
        Ok(self.records.read().await.clone())
    }

    async fn get_application(&self, id: &str) -> Result<JobApplication, ApiError> {
        self.record(ApiCall::Get(id.to_string())).await?;
        self.records
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Http {
                status: 404,
                body: String::new(),
            })
    }

    async fn create_application(
        &self,
        payload: &JobApplicationPayload,
    ) -> Result<Option<JobApplication>, ApiError> {
        self.record(ApiCall::Create(payload.clone())).await?;
        Ok(None)
    }

    async fn update_application(
        &self,
        id: &str,
        payload: &JobApplicationPayload,
    ) -> Result<Option<JobApplication>, ApiError> {
        self.record(ApiCall::Update(id.to_string(), payload.clone()))
            .await?;
        Ok(None)
    }

    async fn delete_application(&self, id: &str) -> Result<(), ApiError> {
        self.record(ApiCall::Delete(id.to_string())).await
    }
}

// ===== 工厂方法 =====

pub fn sample_application(
    id: &str,
    title: &str,
    company: &str,
    status: Option<&str>,
) -> JobApplication {
    JobApplication {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        status: status.map(ToString::to_string),
        ..Default::default()
    }
}

pub fn create_test_service() -> (JobApplicationService, Arc<MockJobApplicationApi>) {
    let api = Arc::new(MockJobApplicationApi::new());
    let svc = JobApplicationService::new(api.clone());
    (svc, api)
}
