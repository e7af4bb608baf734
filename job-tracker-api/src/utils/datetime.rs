//! 时间戳解析工具
//!
//! 服务端的 `createdAt` / `updatedAt` 原样保存为字符串，只在展示时解析：
//! - RFC3339 字符串（含时区）
//! - 不带时区的 ISO 8601 字符串，按 UTC 处理
//! - Unix 时间戳（秒/毫秒自动识别），数字或数字字符串

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// 解析服务端时间戳，失败返回 `None`
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    raw.parse::<i64>().ok().and_then(parse_unix_timestamp)
}

/// 格式化为写请求使用的 RFC3339 字符串（毫秒精度，`Z` 结尾）
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// 反序列化：字符串原样保留，数字转成字符串，其它类型丢弃
pub fn deserialize_raw<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(other) => {
            log::warn!("[job-tracker-api] Ignoring non-timestamp value: {other}");
            None
        }
        None => None,
    })
}

/// 解析 Unix 时间戳（自动判断秒/毫秒）
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // 大于 10^11 视为毫秒
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
