use super::event::Event;
use crate::utils::json::null_default;
use serde::{Deserialize, Serialize};

/// Station shown in the alternate ("stations") view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub lines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Top-level shape of the data file.
/// A missing or `null` `events` field is an empty itinerary, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "null_default")]
    pub events: Vec<Event>,
    #[serde(default, deserialize_with = "null_default")]
    pub stations: Vec<Station>,
}

impl Document {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
