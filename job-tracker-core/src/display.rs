//! Card display rules.
//!
//! Pure formatting helpers; the TUI decides layout and colors.

use chrono::{DateTime, Datelike, Utc};
use job_tracker_api::{parse_timestamp, SalaryRange};

use crate::filter::Category;
use crate::form::MAX_PRIORITY;

/// Links longer than this are shortened on cards.
pub const LINK_DISPLAY_LIMIT: usize = 40;

/// Priority clamped to `[0, 5]`; `None` when no stars should be shown.
pub fn priority_stars(priority: Option<i64>) -> Option<u8> {
    let clamped = priority.unwrap_or(0).clamp(0, MAX_PRIORITY);
    // clamped to 0..=5, always fits
    u8::try_from(clamped).ok().filter(|v| *v > 0)
}

/// Group digits with `,` (`85000` becomes `85,000`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Salary line for a card, or `None` when neither bound is set.
pub fn salary_text(range: Option<&SalaryRange>) -> Option<String> {
    let range = range?;
    let low = range.low_end.unwrap_or(0);
    let high = range.high_end.unwrap_or(0);
    match (low > 0, high > 0) {
        (true, true) => Some(format!(
            "${} - ${}",
            format_thousands(low),
            format_thousands(high)
        )),
        (false, true) => Some(format!("Up to ${}", format_thousands(high))),
        (true, false) => Some(format!("From ${}", format_thousands(low))),
        (false, false) => None,
    }
}

/// Non-blank links, in order.
pub fn valid_links(links: &[Option<String>]) -> Vec<&str> {
    links
        .iter()
        .filter_map(Option::as_deref)
        .filter(|l| !l.trim().is_empty())
        .collect()
}

/// Shorten a link to 40 chars plus `...`.
pub fn truncate_link(link: &str) -> String {
    if link.chars().count() > LINK_DISPLAY_LIMIT {
        let head: String = link.chars().take(LINK_DISPLAY_LIMIT).collect();
        format!("{head}...")
    } else {
        link.to_string()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Status badge text. Missing status reads "Applied".
pub fn status_label(status: Option<&str>) -> String {
    match status {
        Some(s) if !s.is_empty() => capitalize(s),
        _ => "Applied".to_string(),
    }
}

/// "Just now", "5m ago", "3h ago", "2d ago", then "Mar 4" or "Mar 4, 2023".
pub fn relative_time(created_at: Option<&str>, now: DateTime<Utc>) -> Option<String> {
    let created = parse_timestamp(created_at?)?;
    let diff = now.signed_duration_since(created);
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    let text = if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else if created.year() == now.year() {
        created.format("%b %-d").to_string()
    } else {
        created.format("%b %-d, %Y").to_string()
    };
    Some(text)
}

/// Header title for the active category.
pub fn category_title(category: Category) -> String {
    match category {
        Category::All => "All Applications".to_string(),
        Category::Status(status) => capitalize(status.as_str()),
    }
}

/// "1 application" / "N applications".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 application".to_string()
    } else {
        format!("{count} applications")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use job_tracker_api::JobStatus;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        (now() - d).to_rfc3339()
    }

    #[test]
    fn priority_is_clamped() {
        assert_eq!(priority_stars(Some(7)), Some(5));
        assert_eq!(priority_stars(Some(3)), Some(3));
        assert_eq!(priority_stars(Some(-2)), None);
        assert_eq!(priority_stars(Some(0)), None);
        assert_eq!(priority_stars(None), None);
    }

    #[test]
    fn salary_variants() {
        let range = |low, high| SalaryRange {
            low_end: low,
            high_end: high,
        };
        assert_eq!(
            salary_text(Some(&range(Some(80_000), Some(120_000)))).as_deref(),
            Some("$80,000 - $120,000")
        );
        assert_eq!(
            salary_text(Some(&range(None, Some(95_000)))).as_deref(),
            Some("Up to $95,000")
        );
        assert_eq!(
            salary_text(Some(&range(Some(1_500), Some(0)))).as_deref(),
            Some("From $1,500")
        );
        assert_eq!(salary_text(Some(&range(Some(0), None))), None);
        assert_eq!(salary_text(None), None);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn links_drop_blanks_and_truncate() {
        let links = vec![
            Some("https://a.example".to_string()),
            None,
            Some("   ".to_string()),
            Some(format!("https://{}", "x".repeat(60))),
        ];
        let valid = valid_links(&links);
        assert_eq!(valid.len(), 2);
        assert_eq!(truncate_link(valid[0]), "https://a.example");
        let long = truncate_link(valid[1]);
        assert!(long.ends_with("..."));
        assert_eq!(long.chars().count(), 43);
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(None), "Applied");
        assert_eq!(status_label(Some("")), "Applied");
        assert_eq!(status_label(Some("interview")), "Interview");
        assert_eq!(status_label(Some("ghosted")), "Ghosted");
    }

    #[test]
    fn relative_time_buckets() {
        let t = |d| relative_time(Some(ago(d).as_str()), now());
        assert_eq!(t(Duration::seconds(30)).as_deref(), Some("Just now"));
        assert_eq!(t(Duration::minutes(5)).as_deref(), Some("5m ago"));
        assert_eq!(t(Duration::hours(3)).as_deref(), Some("3h ago"));
        assert_eq!(t(Duration::days(2)).as_deref(), Some("2d ago"));
        assert_eq!(t(Duration::days(10)).as_deref(), Some("Jun 5"));
        assert_eq!(t(Duration::days(400)).as_deref(), Some("May 12, 2023"));
    }

    #[test]
    fn relative_time_edge_inputs() {
        assert_eq!(relative_time(None, now()), None);
        assert_eq!(relative_time(Some("not a date"), now()), None);
        // clock skew: future timestamps read as "Just now"
        let future = (now() + Duration::hours(2)).to_rfc3339();
        assert_eq!(
            relative_time(Some(future.as_str()), now()).as_deref(),
            Some("Just now")
        );
    }

    #[test]
    fn titles_and_counts() {
        assert_eq!(category_title(Category::All), "All Applications");
        assert_eq!(
            category_title(Category::Status(JobStatus::Graveyard)),
            "Graveyard"
        );
        assert_eq!(count_label(1), "1 application");
        assert_eq!(count_label(0), "0 applications");
        assert_eq!(count_label(12), "12 applications");
    }
}
