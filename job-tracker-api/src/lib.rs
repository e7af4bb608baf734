//! # job-tracker-api
//!
//! REST client for the job application tracker backend.
//!
//! ## Endpoints
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | list | `GET` | `/job-applications` |
//! | get | `GET` | `/job-applications/{id}` |
//! | create | `POST` | `/create-job-application` |
//! | update | `PUT` | `/update-job-application/{id}` |
//! | delete | `DELETE` | `/delete-job-application/{id}` |
//!
//! All requests carry `Content-Type: application/json`. There is no auth,
//! no pagination and no retry.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use job_tracker_api::{ClientConfig, HttpJobApplicationClient, JobApplicationApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpJobApplicationClient::new(&ClientConfig::new("http://localhost:8000"))?;
//!     for app in client.list_applications().await? {
//!         println!("{} @ {} [{}]", app.title, app.company, app.effective_status());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`Result<T, ApiError>`](ApiError). Non-2xx responses
//! become [`ApiError::Http`] with the raw body; transport failures become
//! [`ApiError::Network`] or [`ApiError::Timeout`].

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{ClientConfig, HttpJobApplicationClient};
pub use error::{ApiError, Result};
pub use traits::JobApplicationApi;
pub use types::{JobApplication, JobApplicationPayload, JobStatus, ListResponse, SalaryRange};
pub use utils::datetime::{format_timestamp, parse_timestamp};
