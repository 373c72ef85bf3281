use chrono::TimeDelta;
use itinerary::core::renderer::{
    NO_EVENTS, TimelineContent, create_card, layout_card, layout_timeline, render_day,
};
use itinerary::models::document::Document;
use itinerary::models::event_type::{DEFAULT_ICON, icon_for};

mod common;
use common::{TRIP, at, event};

#[test]
fn test_render_day_keeps_only_matching_events_in_load_order() {
    let doc = Document::from_json(TRIP).expect("valid document");
    let now = at("2030-01-01", "00:00");

    for day in [1, 2] {
        let content = render_day(&doc.events, day, now);
        let titles: Vec<&str> = content.cards().iter().map(|c| c.title.as_str()).collect();
        let expected: Vec<&str> = doc
            .events
            .iter()
            .filter(|e| e.day == day)
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, expected, "day {day}");
    }

    // load order wins over chronological order
    let day1 = render_day(&doc.events, 1, now);
    let titles: Vec<&str> = day1.cards().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Abfahrt", "Mittagessen", "Check-in"]);
}

#[test]
fn test_render_day_without_events_gives_placeholder() {
    let doc = Document::from_json(TRIP).expect("valid document");
    let content = render_day(&doc.events, 3, at("2030-01-01", "00:00"));
    assert_eq!(content, TimelineContent::Placeholder(NO_EVENTS.to_string()));

    let empty = render_day(&[], 1, at("2030-01-01", "00:00"));
    assert_eq!(empty, TimelineContent::Placeholder(NO_EVENTS.to_string()));
}

#[test]
fn test_past_marking_around_the_event_instant() {
    let e = event(1, "2030-05-10", "08:00", "Abfahrt");
    let instant = at("2030-05-10", "08:00");

    assert!(!create_card(&e, instant - TimeDelta::seconds(1)).past);
    assert!(!create_card(&e, instant).past, "exactly now is not past yet");
    assert!(create_card(&e, instant + TimeDelta::seconds(1)).past);
}

#[test]
fn test_render_is_deterministic() {
    let doc = Document::from_json(TRIP).expect("valid document");
    let now = at("2030-05-10", "13:00");
    assert_eq!(render_day(&doc.events, 1, now), render_day(&doc.events, 1, now));

    let cards = render_day(&doc.events, 1, now);
    let past: Vec<bool> = cards.cards().iter().map(|c| c.past).collect();
    assert_eq!(past, vec![true, true, false]);
}

#[test]
fn test_card_meta_row_is_conditional() {
    let doc = Document::from_json(TRIP).expect("valid document");
    let now = at("2030-01-01", "00:00");
    let cards = render_day(&doc.events, 1, now);
    let cards = cards.cards();

    // duration only
    let meta = cards[0].meta.as_ref().expect("meta row");
    assert_eq!(meta.duration.as_deref(), Some("2h"));
    assert!(meta.maps_link.is_none());

    // link only
    let meta = cards[1].meta.as_ref().expect("meta row");
    assert!(meta.duration.is_none());
    assert_eq!(meta.maps_link.as_deref(), Some("https://maps.example.org/a"));

    // neither
    assert!(cards[2].meta.is_none());

    let lines = layout_card(&cards[2], 72, false).join("\n");
    assert!(!lines.contains("Dauer"));
    assert!(!lines.contains("Karte"));

    let lines = layout_card(&cards[0], 72, false).join("\n");
    assert!(lines.contains("Dauer: 2h"));
    assert!(!lines.contains("Karte öffnen"));
}

#[test]
fn test_important_and_icon() {
    let doc = Document::from_json(TRIP).expect("valid document");
    let cards = render_day(&doc.events, 1, at("2030-01-01", "00:00"));
    let cards = cards.cards();

    assert!(cards[0].important);
    assert!(!cards[1].important);
    assert_eq!(cards[0].icon, "🚂");
    assert_eq!(cards[1].icon, "🍽️");
    // unknown type falls back
    assert_eq!(cards[2].icon, DEFAULT_ICON);

    assert_eq!(icon_for(None), DEFAULT_ICON);
    assert_eq!(icon_for(Some("meeting")), "👥");
    assert_eq!(icon_for(Some("MEETING")), DEFAULT_ICON);
}

#[test]
fn test_layout_always_shows_time_title_location_description() {
    let doc = Document::from_json(TRIP).expect("valid document");
    let now = at("2030-05-10", "09:00");
    let text = layout_timeline(&render_day(&doc.events, 1, now), 72, false);

    for needle in ["08:00", "Abfahrt", "Hbf", "Gleis 7", "12:30", "Altstadt", "Reserviert"] {
        assert!(text.contains(needle), "missing {needle} in\n{text}");
    }
    assert!(text.contains("Abfahrt ★ (vorbei)"));
    assert!(!text.contains("Mittagessen (vorbei)"));
    assert!(!text.contains('\x1b'), "no colour codes when colours are off");
}

#[test]
fn test_missing_optional_fields_are_tolerated() {
    let doc = Document::from_json(
        r#"{"events":[{"day":1,"date":"2030-01-01","time":"07:05"}]}"#,
    )
    .expect("optional fields may be missing");
    let e = &doc.events[0];
    assert_eq!(e.title, "");
    assert!(!e.is_important);
    assert!(!e.is_countdown);
    assert_eq!(e.time_str(), "07:05");

    let card = create_card(e, at("2029-01-01", "00:00"));
    assert!(card.meta.is_none());
    assert_eq!(card.icon, DEFAULT_ICON);
}

#[test]
fn test_document_without_events_field_is_empty() {
    let doc = Document::from_json(r#"{"title":"Ausflug"}"#).expect("valid document");
    assert!(doc.events.is_empty());
    assert!(doc.stations.is_empty());
}

#[test]
fn test_null_values_fall_back_to_defaults() {
    let doc = Document::from_json(
        r#"{"events":[{"day":1,"date":"2030-01-01","time":"07:05","title":null,
            "location":null,"description":null,"isImportant":null,"isCountdown":null,
            "duration":null,"mapsLink":null,"type":null}],
            "stations":[{"name":"Hbf","lines":null}]}"#,
    )
    .expect("null reads as the default");

    let e = &doc.events[0];
    assert_eq!((e.title.as_str(), e.location.as_str(), e.description.as_str()), ("", "", ""));
    assert!(!e.is_important);
    assert!(!e.is_countdown);
    assert!(doc.stations[0].lines.is_empty());

    let card = create_card(e, at("2029-01-01", "00:00"));
    assert!(card.meta.is_none());
    assert_eq!(card.icon, DEFAULT_ICON);
}

#[test]
fn test_null_events_field_is_empty() {
    let doc = Document::from_json(r#"{"events":null,"stations":null}"#).expect("valid document");
    assert!(doc.events.is_empty());
    assert!(doc.stations.is_empty());
}
