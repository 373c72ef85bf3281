use serde::Serialize;

/// Category of an event, used only to pick a decorative icon.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventType {
    Travel,
    Arrival,
    Transfer,
    Accommodation,
    Preparation,
    Food,
    Free,
    Activity,
    Meeting,
    Other,
}

/// Fallback glyph for unknown or absent types.
pub const DEFAULT_ICON: &str = "📌";

impl EventType {
    /// Convert the `type` field of the document → enum.
    /// Unrecognized or missing keys map to `Other`.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("travel") => EventType::Travel,
            Some("arrival") => EventType::Arrival,
            Some("transfer") => EventType::Transfer,
            Some("accommodation") => EventType::Accommodation,
            Some("preparation") => EventType::Preparation,
            Some("food") => EventType::Food,
            Some("free") => EventType::Free,
            Some("activity") => EventType::Activity,
            Some("meeting") => EventType::Meeting,
            _ => EventType::Other,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EventType::Travel => "🚂",
            EventType::Arrival => "🎉",
            EventType::Transfer => "🚊",
            EventType::Accommodation => "🏠",
            EventType::Preparation => "👔",
            EventType::Food => "🍽️",
            EventType::Free => "⭐",
            EventType::Activity => "🎨",
            EventType::Meeting => "👥",
            EventType::Other => DEFAULT_ICON,
        }
    }
}

/// Pure lookup used by the renderer: `type` key → icon.
pub fn icon_for(key: Option<&str>) -> &'static str {
    EventType::from_key(key).icon()
}
