use async_trait::async_trait;

use crate::error::Result;
use crate::types::{JobApplication, JobApplicationPayload};

/// 求职记录 API Trait
///
/// 所有持久化都交给远端服务；实现方只负责一次请求一次响应，
/// 不做重试、缓存或去重。
#[async_trait]
pub trait JobApplicationApi: Send + Sync {
    /// 获取全部记录（服务端顺序）
    async fn list_applications(&self) -> Result<Vec<JobApplication>>;

    /// 按 ID 获取单条记录
    async fn get_application(&self, id: &str) -> Result<JobApplication>;

    /// 创建记录
    ///
    /// 服务端响应体不做校验，能解析出记录时返回 `Some`。
    async fn create_application(
        &self,
        payload: &JobApplicationPayload,
    ) -> Result<Option<JobApplication>>;

    /// 更新记录
    async fn update_application(
        &self,
        id: &str,
        payload: &JobApplicationPayload,
    ) -> Result<Option<JobApplication>>;

    /// 删除记录，响应体被忽略
    async fn delete_application(&self, id: &str) -> Result<()>;
}
