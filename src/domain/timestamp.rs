// src/domain/timestamp.rs
//
// The backend serializes timestamps with `isoformat()`, which drops the offset
// for values read back from SQLite. Both forms are accepted; naive values are UTC.
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use tracing::warn;

const NAIVE_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, NAIVE_ISO_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// `deserialize_with` helper for optional ISO-8601 timestamps; `null` and "" map to `None`.
///
/// Unparsable values are logged and also map to `None`, so one odd field
/// does not reject the whole record.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            let parsed = parse_timestamp(value);
            if parsed.is_none() {
                warn!(value, "Ignoring unparsable timestamp");
            }
            Ok(parsed)
        }
    }
}
