//! TOML front matter extraction.
//!
//! Content files open with a `+++` delimited TOML block:
//!
//! ```text
//! +++
//! title = "Page 1"
//! date = 2017-01-03
//! keywords = ["hugo", "says"]
//! +++
//!
//! Content
//! ```
//!
//! Only the fields the relatedness engine needs are interpreted. Every
//! other key stays available in [`FrontMatter::params`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::core::error::{RelatedError, Result};

static FRONT_MATTER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A\+\+\+[ \t]*\r?\n(?:(.*?)\r?\n)?\+\+\+[ \t]*(?:\r?\n|\z)").unwrap()
});

/// Parsed front matter of one content file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub draft: bool,
    pub expiry_date: Option<DateTime<Utc>>,
    /// The full TOML table, including the fields above
    pub params: toml::Table,
}

impl FrontMatter {
    /// Parse the front matter at the start of `source`
    ///
    /// A file without a `+++` block yields an empty front matter. `path` is
    /// only used for error reporting.
    pub fn parse(path: &Path, source: &str) -> Result<Self> {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        let Some(captures) = FRONT_MATTER_PATTERN.captures(source) else {
            if source.starts_with("+++") {
                return Err(content_error(path, "unterminated +++ front matter"));
            }
            return Ok(Self::default());
        };

        let block = captures.get(1).map_or("", |m| m.as_str());
        let params: toml::Table = toml::from_str(block)
            .map_err(|e| content_error(path, &format!("invalid TOML front matter: {e}")))?;

        let title = match params.get("title") {
            None => None,
            Some(toml::Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(content_error(
                    path,
                    &format!("title must be a string, got {}", other.type_str()),
                ))
            }
        };

        let draft = match params.get("draft") {
            None => false,
            Some(toml::Value::Boolean(b)) => *b,
            Some(other) => {
                return Err(content_error(
                    path,
                    &format!("draft must be a boolean, got {}", other.type_str()),
                ))
            }
        };

        let date = date_field(path, &params, &["date", "publishdate", "publishDate"])?;
        let expiry_date = date_field(path, &params, &["expiry_date", "expirydate", "expiryDate"])?;

        Ok(Self {
            title,
            date,
            draft,
            expiry_date,
            params,
        })
    }

    /// Raw values stored under `key`
    ///
    /// Accepts an array of strings or a single string. Non-string array
    /// members are ignored with a debug log.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        match self.params.get(key) {
            Some(toml::Value::String(s)) => vec![s.clone()],
            Some(toml::Value::Array(values)) => values
                .iter()
                .filter_map(|v| match v {
                    toml::Value::String(s) => Some(s.clone()),
                    other => {
                        tracing::debug!("Ignoring non-string {} in '{}'", other.type_str(), key);
                        None
                    }
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// First present key among `keys`, parsed as a timestamp
fn date_field(path: &Path, params: &toml::Table, keys: &[&str]) -> Result<Option<DateTime<Utc>>> {
    let Some((key, value)) = keys
        .iter()
        .find_map(|key| params.get(*key).map(|value| (*key, value)))
    else {
        return Ok(None);
    };

    let raw = match value {
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::String(s) => s.clone(),
        other => {
            return Err(content_error(
                path,
                &format!("{key} must be a date, got {}", other.type_str()),
            ))
        }
    };

    parse_date(&raw)
        .map(Some)
        .ok_or_else(|| content_error(path, &format!("unrecognised {key} '{raw}'")))
}

/// Parse RFC 3339, a local `YYYY-MM-DDTHH:MM:SS` (taken as UTC) or `YYYY-MM-DD`
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn content_error(path: &Path, message: &str) -> RelatedError {
    RelatedError::Content {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
