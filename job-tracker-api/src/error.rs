use serde::{Deserialize, Serialize};

/// Unified error type for all job application API operations.
///
/// The client performs no retries and no status-specific handling: any
/// transport failure or non-2xx response is surfaced once, as-is, and the
/// caller decides what to show the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-success status code.
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body as returned by the server (may be empty).
        body: String,
    },

    /// Failed to decode the server's response.
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ApiError {
    /// 是否为预期行为（服务端拒绝请求等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Http { status: 400..=499, .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Http { status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "HTTP {status}: {body}")
                }
            }
            Self::Parse { detail } => write!(f, "Parse error: {detail}"),
            Self::Serialization { detail } => write!(f, "Serialization error: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
