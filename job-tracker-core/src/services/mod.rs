//! 业务逻辑服务层

mod job_application_service;

pub use job_application_service::JobApplicationService;
