use super::event_type::EventType;
use crate::utils::json::null_default;
use crate::utils::time::{deserialize_time, local_instant};
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One scheduled item of the itinerary, as found in the data document.
///
/// Everything except `day`, `date` and `time` is optional in the source
/// document; missing or `null` text fields become empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub day: i64,
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(deserialize_with = "deserialize_time")]
    pub time: NaiveTime, // "HH:MM" (or "HH:MM:SS")
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps_link: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub is_important: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub is_countdown: bool,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Event {
    /// Minimal constructor, mostly useful when building fixtures in code.
    pub fn new(day: i64, date: NaiveDate, time: NaiveTime, title: &str) -> Self {
        Self {
            day,
            date,
            time,
            title: title.to_string(),
            location: String::new(),
            description: String::new(),
            duration: None,
            maps_link: None,
            is_important: false,
            is_countdown: false,
            kind: None,
        }
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Absolute instant of the event in the local time zone.
    pub fn instant(&self) -> DateTime<Local> {
        local_instant(self.date.and_time(self.time))
    }

    /// Past is strictly after: an event happening exactly now is not past yet.
    pub fn is_past(&self, now: DateTime<Local>) -> bool {
        now > self.instant()
    }

    pub fn event_type(&self) -> EventType {
        EventType::from_key(self.kind.as_deref())
    }

    /// Text shown next to the countdown fields.
    pub fn countdown_label(&self) -> String {
        format!("{} - {}", self.title, self.location)
    }

    /// The metadata row exists only when at least one of its items does.
    pub fn has_meta(&self) -> bool {
        self.duration.is_some() || self.maps_link.is_some()
    }
}
