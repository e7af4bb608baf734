//! Job Tracker Core Library
//!
//! Platform-independent logic for the job application tracker:
//! - Category and search filtering (`filter`)
//! - Create/edit form state, validation and payload building (`form`)
//! - Card display rules (`display`)
//! - Service layer over the REST client (`services`)
//!
//! The remote API is abstracted through [`job_tracker_api::JobApplicationApi`],
//! so the services run against a mock in tests.

pub mod display;
pub mod error;
pub mod filter;
pub mod form;
pub mod services;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use filter::{category_counts, filter_applications, Category};
pub use form::{ApplicationForm, DualRangeSlider, FormError, LinkList};
pub use services::JobApplicationService;
