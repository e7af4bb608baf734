use serde::{Deserialize, Serialize};

use crate::utils::{datetime, lenient};

// ============ Status ============

/// Pipeline stage of an application.
///
/// The wire form is the lowercase variant name. Records without a status are
/// treated as [`JobStatus::Applied`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Submitted, no answer yet.
    #[default]
    Applied,
    /// Interviewing.
    Interview,
    /// Offer received.
    Offers,
    /// Turned down.
    Rejected,
    /// Abandoned or expired.
    Graveyard,
}

impl JobStatus {
    /// All statuses in sidebar order.
    pub const ALL: [Self; 5] = [
        Self::Offers,
        Self::Interview,
        Self::Applied,
        Self::Rejected,
        Self::Graveyard,
    ];

    /// Wire name (`"applied"`, `"interview"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::Offers => "offers",
            Self::Rejected => "rejected",
            Self::Graveyard => "graveyard",
        }
    }

    /// Parse a wire name. Case and surrounding whitespace are ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(raw))
    }

    /// Next status in form cycling order (wraps around).
    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.form_index();
        Self::FORM_ORDER[(idx + 1) % Self::FORM_ORDER.len()]
    }

    /// Previous status in form cycling order (wraps around).
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = self.form_index();
        Self::FORM_ORDER[(idx + Self::FORM_ORDER.len() - 1) % Self::FORM_ORDER.len()]
    }

    /// Order of the status dropdown in the create/edit forms.
    const FORM_ORDER: [Self; 5] = [
        Self::Applied,
        Self::Interview,
        Self::Offers,
        Self::Rejected,
        Self::Graveyard,
    ];

    fn form_index(self) -> usize {
        Self::FORM_ORDER
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Records ============

/// Salary bounds. Zero or absent means "unspecified".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    /// Lower bound.
    #[serde(
        default,
        alias = "lowEnd",
        deserialize_with = "lenient::deserialize_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub low_end: Option<u64>,
    /// Upper bound.
    #[serde(
        default,
        alias = "highEnd",
        deserialize_with = "lenient::deserialize_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub high_end: Option<u64>,
}

/// A job application as returned by the server.
///
/// Decoding is tolerant: missing strings become `""`, numbers in string
/// fields are stringified, unreadable numbers become `None`, and unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    /// Server-assigned identifier; numeric ids are stringified.
    #[serde(default, deserialize_with = "lenient::deserialize_string")]
    pub id: String,
    /// Job title.
    #[serde(default, deserialize_with = "lenient::deserialize_string")]
    pub title: String,
    /// Company name.
    #[serde(default, deserialize_with = "lenient::deserialize_string")]
    pub company: String,
    /// Raw status string; see [`JobApplication::effective_status`].
    #[serde(default, deserialize_with = "lenient::deserialize_opt_string")]
    pub status: Option<String>,
    /// Location (city, "Remote", ...).
    #[serde(default, deserialize_with = "lenient::deserialize_opt_string")]
    pub location: Option<String>,
    /// Salary bounds; anything that is not an object becomes `None`.
    #[serde(
        default,
        alias = "salary_range",
        deserialize_with = "lenient::deserialize_salary"
    )]
    pub salary_range: Option<SalaryRange>,
    /// Priority, displayed as 0-5 stars.
    #[serde(default, deserialize_with = "lenient::deserialize_i64")]
    pub priority: Option<i64>,
    /// Related URLs. Entries may be `None` or blank.
    #[serde(default, deserialize_with = "lenient::deserialize_links")]
    pub links: Vec<Option<String>>,
    /// Days until the posting expires.
    #[serde(default, deserialize_with = "lenient::deserialize_i64")]
    pub expiration: Option<i64>,
    /// Creation timestamp, kept as sent by the server.
    #[serde(default, deserialize_with = "datetime::deserialize_raw")]
    pub created_at: Option<String>,
    /// Last update timestamp, kept as sent by the server.
    #[serde(default, deserialize_with = "datetime::deserialize_raw")]
    pub updated_at: Option<String>,
}

impl JobApplication {
    /// Status used for filtering: `"applied"` when absent or empty.
    pub fn effective_status(&self) -> &str {
        match self.status.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => JobStatus::Applied.as_str(),
        }
    }

    /// Typed status, if the raw value is a known one.
    pub fn job_status(&self) -> Option<JobStatus> {
        JobStatus::parse(self.effective_status())
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationPayload {
    /// Job title.
    pub title: String,
    /// Company name.
    pub company: String,
    /// Status wire name; always set by the form. Unknown stored values are
    /// passed through unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Salary bounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
    /// Links as entered, blank entries included.
    pub links: Vec<String>,
    /// Priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// Days until expiration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,
    /// Creation timestamp (create only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Envelope of `GET /job-applications`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResponse {
    /// All records, in server order.
    #[serde(default, deserialize_with = "deserialize_list")]
    pub job_applications: Vec<JobApplication>,
}

fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<JobApplication>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(app) => Some(app),
            Err(e) => {
                log::warn!("[job-tracker-api] Skipping unreadable record: {e}");
                None
            }
        })
        .collect())
}
