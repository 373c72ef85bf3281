//! Time utilities: parsing HH:MM, resolving local instants, padding, etc.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use serde::{Deserialize, Deserializer};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// serde helper for the `time` field of an event.
pub fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_time(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid time '{raw}'")))
}

/// Resolve a wall-clock date/time to an instant in the local zone.
///
/// Ambiguous times (clock going back) take the earlier instant; times that
/// fall in a DST gap are pushed forward by the size of the gap.
pub fn local_instant(naive: NaiveDateTime) -> DateTime<Local> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => Local
            .from_local_datetime(&(naive + TimeDelta::hours(1)))
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&naive)),
    }
}

/// Parse the `--at` override: "YYYY-MM-DD HH:MM" or "YYYY-MM-DD HH:MM:SS"
/// (a `T` separator is accepted too).
pub fn parse_datetime(s: &str) -> AppResult<DateTime<Local>> {
    let s = s.trim().replacen('T', " ", 1);
    let naive = NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M"))
        .map_err(|_| AppError::InvalidDate(s.clone()))?;
    Ok(local_instant(naive))
}

pub fn pad2(n: i64) -> String {
    format!("{:02}", n)
}
