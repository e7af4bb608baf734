//! 配置服务
//!
//! 配置保存在 `<config_dir>/job-tracker-tui/config.json`。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use job_tracker_api::ClientConfig;
use job_tracker_core::CoreError;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 默认 API 地址
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// 覆盖 API 地址的环境变量
pub const API_URL_ENV: &str = "JOB_TRACKER_API_URL";

/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub api_base_url: String,
    pub theme: Theme,
    /// 语言代码，如 `en-US`、`zh-CN`
    pub language: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            theme: Theme::Dark,
            language: Language::EnUs.code().to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// 环境变量优先于配置文件中的 API 地址
    #[must_use]
    pub fn with_env_override(mut self, env_url: Option<String>) -> Self {
        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        self
    }

    /// 配置中的语言，无法识别时回退到英文
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    /// 构建 HTTP 客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_base_url.clone())
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs.max(1)))
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("job-tracker-tui")
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认配置文件路径
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join("config.json"))
    }

    /// 使用指定路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    /// 文件不存在时返回默认配置；内容无法解析时返回配置错误
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            CoreError::Config(format!("failed to read {}: {e}", self.path.display()))
        })?;

        let config = serde_json::from_str(&content).map_err(|e| {
            CoreError::Config(format!("failed to parse {}: {e}", self.path.display()))
        })?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = LocalConfigService::with_path(tmp.path().join("config.json"));

        let config = svc.load().unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = LocalConfigService::with_path(tmp.path().join("nested").join("config.json"));
        let config = AppConfig {
            api_base_url: "http://jobs.internal:9000".to_string(),
            theme: Theme::Light,
            language: "zh-CN".to_string(),
            request_timeout_secs: 5,
        };

        svc.save(&config).unwrap();

        assert_eq!(svc.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{ "theme": "light" }"#).unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();

        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = LocalConfigService::with_path(&path).load().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::Config(_))
        ));
    }

    #[test]
    fn env_override_wins_when_non_blank() {
        let base = AppConfig::default();
        assert_eq!(
            base.clone()
                .with_env_override(Some(" http://example.test ".to_string()))
                .api_base_url,
            "http://example.test"
        );
        assert_eq!(
            base.clone().with_env_override(Some("  ".to_string())).api_base_url,
            DEFAULT_API_BASE_URL
        );
        assert_eq!(base.with_env_override(None).api_base_url, DEFAULT_API_BASE_URL);
    }
}
