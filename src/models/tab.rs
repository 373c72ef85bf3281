use serde::Serialize;
use std::fmt;

/// A view selector: one day of the timeline or the alternate stations view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tab {
    Day(i64),
    Stations,
}

impl Tab {
    /// Helper: parse a selector as typed by the user.
    /// Accepts `day1`, `Day 2`, bare `1` and `stations`.
    pub fn parse(selector: &str) -> Option<Self> {
        let s = selector.trim().to_lowercase();
        if s == "stations" || s == "s" {
            return Some(Tab::Stations);
        }

        let digits = s.strip_prefix("day").unwrap_or(&s).trim();
        digits.parse::<i64>().ok().map(Tab::Day)
    }

    pub fn day(&self) -> Option<i64> {
        match self {
            Tab::Day(d) => Some(*d),
            Tab::Stations => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Tab::Day(d) => format!("Tag {d}"),
            Tab::Stations => "Stationen".to_string(),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Day(d) => write!(f, "day{d}"),
            Tab::Stations => write!(f, "stations"),
        }
    }
}
