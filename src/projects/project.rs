//! Project record as published in the data document.
//!
//! The document is not schema-validated: every field falls back to an empty
//! value so a sparse record still renders as a card.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level shape of the data document: `{ "projects": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectDocument {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, rename = "shortDescription", deserialize_with = "lenient")]
    pub short_description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub technologies: Vec<String>,
    #[serde(default, rename = "repoUrl", deserialize_with = "lenient")]
    pub repo_url: String,
    /// Zero means "no star badge".
    #[serde(default, deserialize_with = "lenient_count")]
    pub stars: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<String>,
}

/// Any value of the wrong shape (including `null`) reads as the default.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Keeps the string entries of an array and drops everything else.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

/// Non-negative whole count. Fractions are truncated, numeric strings are
/// accepted and anything else is zero.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(match n {
        Some(n) if n.is_finite() && n > 0.0 => n.trunc().min(u32::MAX as f64) as u32,
        _ => 0,
    })
}

impl Project {
    /// Parsed `updated_at`, or `None` when absent or unparseable.
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.updated_at.as_deref().and_then(parse_date)
    }

    /// Sort key for "recent": milliseconds since the epoch, with missing or
    /// unparseable dates pinned to epoch zero.
    pub fn recency_key(&self) -> i64 {
        self.updated().map(|d| d.timestamp_millis()).unwrap_or(0)
    }
}

/// Parse the date-like strings found in `updated_at`.
///
/// Accepts RFC 3339 plus the common offset-less forms; those are read as UTC.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    // Date-only: YYYY, YYYY-MM, YYYY-MM-DD.
    let padded = match raw.len() {
        4 => format!("{}-01-01", raw),
        7 => format!("{}-01", raw),
        _ => raw.to_string(),
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_deserialize_sparse_record() {
        let doc: ProjectDocument = serde_json::from_str(
            r#"{"projects":[{"title":"Only a title"}]}"#,
        )
        .unwrap();
        let p = &doc.projects[0];
        assert_eq!(p.title, "Only a title");
        assert!(p.technologies.is_empty());
        assert_eq!(p.stars, 0);
        assert_eq!(p.updated_at, None);
    }

    #[test]
    fn test_star_count_is_clamped() {
        let stars = |raw: &str| {
            serde_json::from_str::<Project>(&format!(r#"{{"stars":{}}}"#, raw))
                .unwrap()
                .stars
        };
        assert_eq!(stars("-3"), 0);
        assert_eq!(stars("9.99"), 9);
        assert_eq!(stars("1e12"), u32::MAX);
        assert_eq!(stars(r#""abc""#), 0);
        assert_eq!(stars("[1]"), 0);
    }

    #[test]
    fn test_deserialize_camel_case_fields() {
        let p: Project = serde_json::from_str(
            r#"{
                "title": "Crawler",
                "shortDescription": "Scrapes things",
                "category": "Back-end",
                "technologies": ["Rust", "Tokio"],
                "repoUrl": "https://example.com/crawler",
                "stars": 12,
                "updated_at": "2024-03-05T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(p.short_description, "Scrapes things");
        assert_eq!(p.repo_url, "https://example.com/crawler");
        assert_eq!(p.technologies, vec!["Rust", "Tokio"]);
        assert_eq!(p.stars, 12);
    }

    #[test]
    fn test_missing_projects_field_is_empty() {
        let doc: ProjectDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn test_parse_date_forms() {
        let d = parse_date("2024-01-01").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 1, 1));

        let d = parse_date("2023-06-15T08:30:00-03:00").unwrap();
        assert_eq!(d.hour(), 11);

        assert!(parse_date("2024-02-10T12:00:00").is_some());
        assert!(parse_date("2024-02-10 12:00:00").is_some());
        assert_eq!(parse_date("2022-07").unwrap().month(), 7);
        assert_eq!(parse_date("2021").unwrap().year(), 2021);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("").is_none());
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("2024-13-01").is_none());
    }

    #[test]
    fn test_recency_key_defaults_to_epoch() {
        let missing = Project::default();
        let invalid = Project {
            updated_at: Some("not a date".into()),
            ..Default::default()
        };
        assert_eq!(missing.recency_key(), 0);
        assert_eq!(invalid.recency_key(), 0);
    }
}
