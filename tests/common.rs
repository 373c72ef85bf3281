#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate};
use itinerary::core::log::ActivityLog;
use itinerary::core::reminder::MemoryFlagStore;
use itinerary::core::runtime::{Runtime, Timing};
use itinerary::core::scheduler::ManualClock;
use itinerary::core::session::{Features, Session};
use itinerary::core::store::StaticSource;
use itinerary::models::event::Event;
use itinerary::models::tab::Tab;
use itinerary::utils::time::{local_instant, parse_time};
use itinerary::view::Frame;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The two-event itinerary used throughout the tests: A long gone, B far ahead.
pub const TWO_EVENTS: &str = r#"{
  "events": [
    {"day":1,"date":"2025-06-01","time":"09:00","title":"A","isCountdown":true,"location":"X","description":"d"},
    {"day":1,"date":"2099-01-01","time":"10:00","title":"B","isCountdown":true,"location":"Y","description":"d"}
  ]
}"#;

pub const TRIP: &str = r#"{
  "events": [
    {"day":1,"date":"2030-05-10","time":"08:00","title":"Abfahrt","location":"Hbf","description":"Gleis 7","type":"travel","isCountdown":true,"isImportant":true,"duration":"2h"},
    {"day":1,"date":"2030-05-10","time":"12:30","title":"Mittagessen","location":"Altstadt","description":"Reserviert","type":"food","mapsLink":"https://maps.example.org/a"},
    {"day":2,"date":"2030-05-11","time":"10:00","title":"Museum","location":"Zentrum","description":"Führung","type":"activity","isCountdown":true},
    {"day":1,"date":"2030-05-10","time":"18:00","title":"Check-in","location":"Hotel","description":"Zimmer 12","type":"spaceship"},
    {"day":2,"date":"2030-05-11","time":"16:00","title":"Rückfahrt","location":"Hbf","description":"","isCountdown":true}
  ],
  "stations": [
    {"name":"Hauptbahnhof","lines":["S1","U4"],"note":"Ausgang Nord"}
  ]
}"#;

pub fn itn() -> Command {
    cargo_bin_cmd!("itinerary")
}

/// Fresh app directory inside the system temp dir.
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("itinerary_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Write a data document into `home` and return its path as String.
pub fn write_data(home: &PathBuf, body: &str) -> String {
    let path = home.join("events.json");
    fs::write(&path, body).expect("write data file");
    path.to_string_lossy().to_string()
}

pub fn at(date: &str, time: &str) -> DateTime<Local> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date");
    let t = parse_time(time).expect("valid time");
    local_instant(d.and_time(t))
}

pub fn event(day: i64, date: &str, time: &str, title: &str) -> Event {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date");
    let t = parse_time(time).expect("valid time");
    Event::new(day, d, t, title)
}

pub fn session(features: Features, initial: Tab) -> Session<Frame, MemoryFlagStore> {
    let frame = Frame::with_regions(&features.regions());
    Session::new(
        features,
        initial,
        frame,
        MemoryFlagStore::default(),
        ActivityLog::in_memory(),
    )
}

pub type TestRuntime = Runtime<Frame, MemoryFlagStore, ManualClock, StaticSource>;

/// Runtime on a manual clock, with the given flag state.
pub fn runtime(
    features: Features,
    body: StaticSource,
    start: DateTime<Local>,
    acknowledged: bool,
) -> TestRuntime {
    let frame = Frame::with_regions(&features.regions());
    let session = Session::new(
        features,
        Tab::Day(1),
        frame,
        MemoryFlagStore::new(acknowledged),
        ActivityLog::in_memory(),
    );
    Runtime::new(session, ManualClock::new(start), body, Timing::default())
}
