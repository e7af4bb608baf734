//! Shared HTTP plumbing
//!
//! The client builds each `RequestBuilder` itself; this module only owns the
//! part every endpoint has in common: sending, logging and reading the body.
//!
//! # Behaviour
//! - Transport failures map to `ApiError::Network` / `ApiError::Timeout`
//! - Status codes are returned untouched; the caller decides what is an error
//! - No retries. A failed call is reported once

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ApiError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Default TCP connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default overall request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared `reqwest` client.
pub fn create_http_client(
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(|e| ApiError::Network {
            detail: format!("Failed to build HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and return `(status_code, response_text)`.
    ///
    /// # Arguments
    /// * `request_builder` - fully configured request (URL, headers, body)
    /// * `method_name` - HTTP verb, only used for logging
    /// * `url` - target URL, only used for logging
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("[job-tracker-api] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            let err = if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::Network {
                    detail: e.to_string(),
                }
            };
            log::warn!("[job-tracker-api] {method_name} {url} failed: {err}");
            err
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[job-tracker-api] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| ApiError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[job-tracker-api] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Turn a non-2xx status into `ApiError::Http`, passing the body through.
    pub fn ensure_success(status_code: u16, response_text: String) -> Result<String, ApiError> {
        if (200..300).contains(&status_code) {
            Ok(response_text)
        } else {
            let err = ApiError::Http {
                status: status_code,
                body: response_text,
            };
            if err.is_expected() {
                log::warn!("[job-tracker-api] Request rejected: {err}");
            } else {
                log::error!("[job-tracker-api] Request failed: {err}");
            }
            Err(err)
        }
    }

    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ApiError::Parse)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[job-tracker-api] JSON parse failed: {e}");
            log::error!(
                "[job-tracker-api] Raw response: {}",
                truncate_for_log(response_text)
            );
            ApiError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_success_passes_2xx_body_through() {
        let body = HttpUtils::ensure_success(201, "{}".to_string());
        assert!(matches!(body.as_deref(), Ok("{}")));
    }

    #[test]
    fn ensure_success_maps_4xx_to_http_error() {
        let result = HttpUtils::ensure_success(404, "missing".to_string());
        assert!(
            matches!(&result, Err(ApiError::Http { status: 404, body }) if body == "missing"),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn ensure_success_maps_5xx_to_http_error() {
        let result = HttpUtils::ensure_success(500, String::new());
        assert!(matches!(result, Err(ApiError::Http { status: 500, .. })));
    }

    #[test]
    fn ensure_success_rejects_redirect_status() {
        let result = HttpUtils::ensure_success(304, String::new());
        assert!(matches!(result, Err(ApiError::Http { status: 304, .. })));
    }

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(ApiError::Parse { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn builds_client_with_default_timeouts() {
        assert!(create_http_client(DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT).is_ok());
    }
}
