//! Timeline rendering: events of one day → cards → text.
//!
//! Everything here is pure. The output only depends on the event list and
//! the `now` passed in, so the same inputs always produce the same timeline.

use crate::models::event::Event;
use crate::models::event_type::icon_for;
use crate::utils::colors::{self, BOLD, CYAN, GREY, RED};
use crate::utils::formatting::{display_width, pad_right};
use chrono::{DateTime, Local};

pub const NO_EVENTS: &str = "Keine Events für diesen Tag";
pub const LOAD_ERROR: &str = "Fehler beim Laden der Events";
pub const PAST_TAG: &str = "vorbei";

/// Optional metadata row of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    pub duration: Option<String>,
    pub maps_link: Option<String>,
}

/// Display model of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub time: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub icon: &'static str,
    pub past: bool,
    pub important: bool,
    pub meta: Option<Meta>,
}

/// What the timeline region shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineContent {
    Cards(Vec<Card>),
    Placeholder(String),
    Error(String),
}

impl TimelineContent {
    pub fn cards(&self) -> &[Card] {
        match self {
            TimelineContent::Cards(cards) => cards,
            _ => &[],
        }
    }
}

pub fn create_card(e: &Event, now: DateTime<Local>) -> Card {
    let meta = e.has_meta().then(|| Meta {
        duration: e.duration.clone(),
        maps_link: e.maps_link.clone(),
    });

    Card {
        time: e.time_str(),
        title: e.title.clone(),
        location: e.location.clone(),
        description: e.description.clone(),
        icon: icon_for(e.kind.as_deref()),
        past: e.is_past(now),
        important: e.is_important,
        meta,
    }
}

/// Cards for exactly the events of `day`, in load order.
/// An empty day gives the placeholder, never an empty card list.
pub fn render_day(events: &[Event], day: i64, now: DateTime<Local>) -> TimelineContent {
    let cards: Vec<Card> = events
        .iter()
        .filter(|e| e.day == day)
        .map(|e| create_card(e, now))
        .collect();

    if cards.is_empty() {
        TimelineContent::Placeholder(NO_EVENTS.to_string())
    } else {
        TimelineContent::Cards(cards)
    }
}

/// Lay out one card as terminal lines, `width` columns wide.
pub fn layout_card(card: &Card, width: usize, color: bool) -> Vec<String> {
    let accent = colors::color_for_card(card.past, card.important);
    let body_width = width.saturating_sub(10).max(20);
    let mut lines = Vec::new();

    let mut header = format!("{} {}", card.icon, card.title);
    if card.important {
        header.push_str(" ★");
    }
    if card.past {
        header.push_str(&format!(" ({PAST_TAG})"));
    }
    let header = if card.important && !card.past {
        colors::paint(&header, BOLD, color)
    } else {
        header
    };

    lines.push(format!(
        "{} │ {}",
        colors::paint(&pad_right(&card.time, 5), accent, color),
        header
    ));

    let indent = format!("{} │ ", " ".repeat(5));
    if !card.location.is_empty() {
        lines.push(format!(
            "{indent}{}",
            colors::paint(&format!("📍 {}", card.location), CYAN, color)
        ));
    }

    let description = if card.description.is_empty() {
        Vec::new()
    } else {
        textwrap::wrap(&card.description, body_width)
    };
    for line in description {
        let text = if card.past {
            colors::paint(&line, GREY, color)
        } else {
            line.into_owned()
        };
        lines.push(format!("{indent}{text}"));
    }

    if let Some(meta) = &card.meta {
        let mut items = Vec::new();
        if let Some(d) = &meta.duration {
            items.push(format!("Dauer: {d}"));
        }
        if let Some(link) = &meta.maps_link {
            items.push(format!("Karte öffnen: {link}"));
        }
        lines.push(format!("{indent}{}", items.join(" · ")));
    }

    lines
}

/// Lay out the whole timeline region.
pub fn layout_timeline(content: &TimelineContent, width: usize, color: bool) -> String {
    match content {
        TimelineContent::Cards(cards) => {
            let mut out = Vec::new();
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    out.push(format!("{} │", " ".repeat(5)));
                }
                out.extend(layout_card(card, width, color));
            }
            out.join("\n")
        }
        TimelineContent::Placeholder(msg) => center(msg, width),
        TimelineContent::Error(msg) => colors::paint(&center(msg, width), RED, color),
    }
}

fn center(msg: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(msg)) / 2;
    format!("{}{}", " ".repeat(pad), msg)
}
