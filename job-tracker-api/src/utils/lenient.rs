//! Lenient field deserializers.
//!
//! Records are not schema-validated, so numeric fields may arrive as
//! integers, floats, numeric strings or `null`, and string fields may arrive
//! as numbers. Anything that cannot be read becomes `None` (or `""`) instead
//! of failing the whole list.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::SalaryRange;

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// `Option<i64>`; fractional values are truncated toward zero.
pub fn deserialize_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| value_as_f64(v).map(f64_to_i64)),
        _ => value_as_f64(v).map(f64_to_i64),
    }))
}

/// `Option<u64>`; negative values become `None`.
pub fn deserialize_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::Number(n) => n.as_u64().or_else(|| value_as_f64(v).and_then(f64_to_u64)),
        _ => value_as_f64(v).and_then(f64_to_u64),
    }))
}

/// `null` list becomes an empty `Vec`; non-string entries become `None`.
pub fn deserialize_links<'de, D>(deserializer: D) -> Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(value
        .unwrap_or_default()
        .into_iter()
        .map(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

fn value_as_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// `Option<String>`; numbers are stringified, other types become `None`.
pub fn deserialize_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_as_string))
}

/// Like [`deserialize_opt_string`], but missing or unreadable values become `""`.
pub fn deserialize_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_string(deserializer)?.unwrap_or_default())
}

/// Salary object; any other shape becomes `None`.
pub fn deserialize_salary<'de, D>(deserializer: D) -> Result<Option<SalaryRange>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(v @ Value::Object(_)) => serde_json::from_value(v).ok(),
        _ => None,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn f64_to_i64(f: f64) -> i64 {
    if f.is_nan() {
        0
    } else {
        f.trunc().clamp(i64::MIN as f64, i64::MAX as f64) as i64
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn f64_to_u64(f: f64) -> Option<u64> {
    if f.is_nan() || f < 0.0 {
        None
    } else {
        Some(f.trunc().min(u64::MAX as f64) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_i64")]
        signed: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_u64")]
        unsigned: Option<u64>,
        #[serde(default, deserialize_with = "deserialize_links")]
        links: Vec<Option<String>>,
        #[serde(default, deserialize_with = "deserialize_string")]
        text: String,
        #[serde(default, deserialize_with = "deserialize_opt_string")]
        maybe: Option<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn accepts_int_float_and_string() {
        assert_eq!(probe(r#"{"signed": 3}"#).signed, Some(3));
        assert_eq!(probe(r#"{"signed": 3.9}"#).signed, Some(3));
        assert_eq!(probe(r#"{"signed": "-2"}"#).signed, Some(-2));
        assert_eq!(probe(r#"{"unsigned": "85000"}"#).unsigned, Some(85_000));
    }

    #[test]
    fn junk_becomes_none() {
        assert_eq!(probe(r#"{"signed": "high"}"#).signed, None);
        assert_eq!(probe(r#"{"signed": true}"#).signed, None);
        assert_eq!(probe(r#"{"unsigned": -5}"#).unsigned, None);
    }

    #[test]
    fn missing_and_null_fields() {
        let p = probe(r#"{"signed": null, "links": null, "text": null}"#);
        assert_eq!(p.signed, None);
        assert!(p.links.is_empty());
        assert_eq!(p.text, "");
        assert_eq!(probe("{}").unsigned, None);
    }

    #[test]
    fn strings_accept_numbers_and_drop_other_types() {
        assert_eq!(probe(r#"{"text": 42}"#).text, "42");
        assert_eq!(probe(r#"{"text": 1.5}"#).text, "1.5");
        assert_eq!(probe(r#"{"text": {"a": 1}}"#).text, "");
        assert_eq!(probe(r#"{"maybe": "remote"}"#).maybe.as_deref(), Some("remote"));
        assert_eq!(probe(r#"{"maybe": false}"#).maybe, None);
        assert_eq!(probe(r#"{"maybe": [1]}"#).maybe, None);
    }

    #[test]
    fn links_keep_null_entries() {
        let p = probe(r#"{"links": ["https://a.example", null, 7, ""]}"#);
        assert_eq!(
            p.links,
            vec![
                Some("https://a.example".to_string()),
                None,
                None,
                Some(String::new())
            ]
        );
    }
}
