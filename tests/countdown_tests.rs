use chrono::TimeDelta;
use itinerary::core::countdown::{CountdownEngine, CountdownFields, Tick, decompose};
use itinerary::models::document::Document;

mod common;
use common::{TRIP, TWO_EVENTS, at};

#[test]
fn test_decompose_truncates_each_unit() {
    let r = decompose(((2 * 24 + 3) * 3600 + 4 * 60 + 5) * 1000 + 999);
    assert_eq!((r.days, r.hours, r.minutes, r.seconds), (2, 3, 4, 5));

    let r = decompose(999);
    assert_eq!((r.days, r.hours, r.minutes, r.seconds), (0, 0, 0, 0));

    let r = decompose(86_400_000 - 1);
    assert_eq!((r.days, r.hours, r.minutes, r.seconds), (0, 23, 59, 59));
}

#[test]
fn test_decompose_bounds_hold() {
    let samples = [
        1_i64,
        1_000,
        59_999,
        60_000,
        3_599_999,
        3_600_000,
        86_399_999,
        86_400_000,
        123_456_789,
        987_654_321_012,
    ];

    for ms in samples {
        let r = decompose(ms);
        let whole = r.days * 86_400 + r.hours * 3_600 + r.minutes * 60 + r.seconds;
        let remaining_seconds = ms as f64 / 1000.0;
        assert!(whole as f64 <= remaining_seconds, "{ms}");
        assert!(remaining_seconds < (whole + 1) as f64, "{ms}");
        assert!(r.hours < 24 && r.minutes < 60 && r.seconds < 60);
    }
}

#[test]
fn test_fields_are_zero_padded() {
    let fields = CountdownFields::new(&decompose(3 * 60_000 + 7_000), "B - Y".to_string());
    assert_eq!(fields.days, "00");
    assert_eq!(fields.hours, "00");
    assert_eq!(fields.minutes, "03");
    assert_eq!(fields.seconds, "07");
    assert_eq!(fields.label, "B - Y");

    // more than 99 days just grows
    let fields = CountdownFields::new(&decompose(150 * 86_400_000), String::new());
    assert_eq!(fields.days, "150");
}

#[test]
fn test_no_countdown_events_means_no_engine() {
    let doc = Document::from_json(
        r#"{"events":[{"day":1,"date":"2030-01-01","time":"07:05","title":"x"}]}"#,
    )
    .expect("valid document");
    assert!(CountdownEngine::from_events(&doc.events).is_none());
    assert!(CountdownEngine::from_events(&[]).is_none());
}

#[test]
fn test_passed_targets_are_skipped_in_the_same_tick() {
    let doc = Document::from_json(TWO_EVENTS).expect("valid document");
    let mut engine = CountdownEngine::from_events(&doc.events).expect("flagged events");
    let now = at("2026-10-18", "12:00");

    match engine.tick(now) {
        Tick::Running {
            cursor,
            remaining,
            fields,
        } => {
            assert_eq!(cursor, 1);
            assert!(remaining.total_ms > 0);
            assert_eq!(fields.label, "B - Y");
        }
        Tick::Finished => panic!("B is still ahead"),
    }
    assert_eq!(engine.current().map(|e| e.title.as_str()), Some("B"));
}

#[test]
fn test_cursor_is_monotonic_and_ends_finished() {
    let doc = Document::from_json(TRIP).expect("valid document");
    let mut engine = CountdownEngine::from_events(&doc.events).expect("flagged events");
    assert_eq!(engine.targets().len(), 3);

    let mut now = at("2030-05-10", "07:00");
    let mut last = 0;
    for _ in 0..40 {
        let _ = engine.tick(now);
        assert!(engine.cursor() >= last, "cursor went back");
        last = engine.cursor();
        now += TimeDelta::hours(1);
    }
    assert!(engine.is_finished());
    assert_eq!(engine.tick(now), Tick::Finished);

    // going back in time never revives a passed target
    assert_eq!(engine.tick(at("2030-05-10", "07:00")), Tick::Finished);
    assert_eq!(engine.cursor(), 3);
}

#[test]
fn test_target_at_exactly_now_counts_as_passed() {
    let doc = Document::from_json(TRIP).expect("valid document");
    let mut engine = CountdownEngine::from_events(&doc.events).expect("flagged events");

    match engine.tick(at("2030-05-10", "08:00")) {
        Tick::Running { cursor, fields, .. } => {
            assert_eq!(cursor, 1);
            assert_eq!(fields.label, "Museum - Zentrum");
            assert_eq!(fields.days, "01");
            assert_eq!(fields.hours, "02");
            assert_eq!(fields.minutes, "00");
        }
        Tick::Finished => panic!("Museum is still ahead"),
    }
}
