//! `reqwest` implementation of [`JobApplicationApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::http_client::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, HttpUtils, create_http_client,
};
use crate::traits::JobApplicationApi;
use crate::types::{JobApplication, JobApplicationPayload, ListResponse};

/// Connection settings for [`HttpJobApplicationClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:8000`. A trailing `/` is ignored.
    pub base_url: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Overall per-request timeout.
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Config with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Single-record responses are either the bare record or wrapped in
/// `{"job_application": ...}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordBody {
    Wrapped { job_application: JobApplication },
    Bare(JobApplication),
}

impl RecordBody {
    fn into_record(self) -> JobApplication {
        match self {
            Self::Wrapped { job_application } => job_application,
            Self::Bare(record) => record,
        }
    }
}

/// HTTP client for the job application API.
pub struct HttpJobApplicationClient {
    client: Client,
    base_url: String,
}

impl HttpJobApplicationClient {
    /// Build a client. Fails only if the TLS backend cannot be initialised.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = create_http_client(config.connect_timeout, config.request_timeout)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Normalised base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn url_with_id(&self, path: &str, id: &str) -> String {
        format!("{}{path}/{}", self.base_url, urlencoding::encode(id))
    }

    fn json_header() -> HeaderValue {
        HeaderValue::from_static("application/json")
    }

    fn encode_payload(payload: &JobApplicationPayload) -> Result<Vec<u8>> {
        serde_json::to_vec(payload).map_err(|e| ApiError::Serialization {
            detail: e.to_string(),
        })
    }

    /// Decode a mutation response, tolerating bodies that are not a record.
    fn optional_record(body: &str) -> Option<JobApplication> {
        if body.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<RecordBody>(body) {
            Ok(parsed) => {
                let record = parsed.into_record();
                (!record.id.is_empty()).then_some(record)
            }
            Err(e) => {
                log::debug!("[job-tracker-api] Mutation response is not a record: {e}");
                None
            }
        }
    }

    async fn send(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<String> {
        let mut request = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, Self::json_header());
        if let Some(body) = body {
            request = request.body(body);
        }
        let (status, text) = HttpUtils::execute_request(request, method.as_str(), url).await?;
        HttpUtils::ensure_success(status, text)
    }
}

#[async_trait]
impl JobApplicationApi for HttpJobApplicationClient {
    async fn list_applications(&self) -> Result<Vec<JobApplication>> {
        let url = self.url("/job-applications");
        let text = self.send(reqwest::Method::GET, &url, None).await?;
        let list: ListResponse = HttpUtils::parse_json(&text)?;
        log::debug!(
            "[job-tracker-api] Loaded {} job applications",
            list.job_applications.len()
        );
        Ok(list.job_applications)
    }

    async fn get_application(&self, id: &str) -> Result<JobApplication> {
        let url = self.url_with_id("/job-applications", id);
        let text = self.send(reqwest::Method::GET, &url, None).await?;
        let body: RecordBody = HttpUtils::parse_json(&text)?;
        Ok(body.into_record())
    }

    async fn create_application(
        &self,
        payload: &JobApplicationPayload,
    ) -> Result<Option<JobApplication>> {
        let url = self.url("/create-job-application");
        let body = Self::encode_payload(payload)?;
        let text = self.send(reqwest::Method::POST, &url, Some(body)).await?;
        Ok(Self::optional_record(&text))
    }

    async fn update_application(
        &self,
        id: &str,
        payload: &JobApplicationPayload,
    ) -> Result<Option<JobApplication>> {
        let url = self.url_with_id("/update-job-application", id);
        let body = Self::encode_payload(payload)?;
        let text = self.send(reqwest::Method::PUT, &url, Some(body)).await?;
        Ok(Self::optional_record(&text))
    }

    async fn delete_application(&self, id: &str) -> Result<()> {
        let url = self.url_with_id("/delete-job-application", id);
        self.send(reqwest::Method::DELETE, &url, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpJobApplicationClient {
        HttpJobApplicationClient::new(&ClientConfig::new(base)).unwrap()
    }

    #[test]
    fn trims_trailing_slashes() {
        assert_eq!(client("http://api.test//").base_url(), "http://api.test");
    }

    #[test]
    fn ids_are_percent_encoded() {
        let c = client("http://api.test");
        assert_eq!(
            c.url_with_id("/job-applications", "a b/c"),
            "http://api.test/job-applications/a%20b%2Fc"
        );
    }

    #[test]
    fn optional_record_variants() {
        assert!(HttpJobApplicationClient::optional_record("").is_none());
        assert!(HttpJobApplicationClient::optional_record(r#"{"message":"ok"}"#).is_none());
        assert!(HttpJobApplicationClient::optional_record("not json").is_none());

        let bare = HttpJobApplicationClient::optional_record(r#"{"id":"1","title":"T"}"#);
        assert_eq!(bare.map(|r| r.title).as_deref(), Some("T"));

        let wrapped = HttpJobApplicationClient::optional_record(
            r#"{"job_application":{"id":"2","company":"C"}}"#,
        );
        assert_eq!(wrapped.map(|r| r.company).as_deref(), Some("C"));
    }
}
