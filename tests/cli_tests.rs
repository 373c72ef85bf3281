use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{TRIP, TWO_EVENTS, itn, temp_home, write_data};

#[test]
fn test_show_day_with_countdown() {
    let home = temp_home("show_day");
    let data = write_data(&home, TWO_EVENTS);

    itn()
        .env("ITINERARY_HOME", &home)
        .args([
            "--test",
            "--no-color",
            "--data",
            &data,
            "show",
            "--tab",
            "day1",
            "--at",
            "2026-10-18 12:00",
        ])
        .assert()
        .success()
        .stdout(contains("A (vorbei)"))
        .stdout(contains("B"))
        .stdout(contains("B (vorbei)").not())
        .stdout(contains("⏳ B - Y"))
        .stdout(contains("[Tag 1]"))
        .stdout(contains("Sonntag, 18. Oktober 2026 um 12:00:00"));
}

#[test]
fn test_show_empty_day_prints_placeholder() {
    let home = temp_home("show_empty");
    let data = write_data(&home, TWO_EVENTS);

    itn()
        .env("ITINERARY_HOME", &home)
        .args(["--test", "--no-color", "--data", &data, "show", "--tab", "day2"])
        .assert()
        .success()
        .stdout(contains("Keine Events für diesen Tag"));
}

#[test]
fn test_show_stations() {
    let home = temp_home("show_stations");
    let data = write_data(&home, TRIP);

    itn()
        .env("ITINERARY_HOME", &home)
        .args([
            "--test",
            "--no-color",
            "--data",
            &data,
            "show",
            "--tab",
            "stations",
            "--at",
            "2030-05-10 09:00",
        ])
        .assert()
        .success()
        .stdout(contains("Hauptbahnhof"))
        .stdout(contains("S1, U4"))
        .stdout(contains("Gleis 7").not());
}

#[test]
fn test_show_missing_data_file_renders_error_inline() {
    let home = temp_home("show_missing");
    let missing = home.join("nope.json");

    itn()
        .env("ITINERARY_HOME", &home)
        .args([
            "--test",
            "--no-color",
            "--data",
            &missing.to_string_lossy(),
            "show",
        ])
        .assert()
        .success()
        .stdout(contains("Fehler beim Laden der Events"))
        .stderr(contains("Could not load"));
}

#[test]
fn test_show_rejects_unknown_tab() {
    let home = temp_home("show_bad_tab");
    let data = write_data(&home, TRIP);

    itn()
        .env("ITINERARY_HOME", &home)
        .args(["--test", "--data", &data, "show", "--tab", "day9"])
        .assert()
        .failure()
        .stderr(contains("Unknown tab selector: day9"));
}

#[test]
fn test_show_rejects_bad_at() {
    let home = temp_home("show_bad_at");
    let data = write_data(&home, TRIP);

    itn()
        .env("ITINERARY_HOME", &home)
        .args(["--test", "--data", &data, "show", "--at", "tomorrow"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_reminder_confirm_and_reset() {
    let home = temp_home("reminder_flag");

    itn()
        .env("ITINERARY_HOME", &home)
        .args(["reminder", "--status"])
        .assert()
        .success()
        .stdout(contains("Reminder pending"));

    itn()
        .env("ITINERARY_HOME", &home)
        .args(["reminder", "--confirm"])
        .assert()
        .success();
    assert!(home.join("state.yml").exists());

    itn()
        .env("ITINERARY_HOME", &home)
        .args(["reminder", "--status"])
        .assert()
        .success()
        .stdout(contains("Reminder acknowledged"));

    itn()
        .env("ITINERARY_HOME", &home)
        .args(["reminder", "--reset", "--status"])
        .assert()
        .success()
        .stdout(contains("Reminder pending"));
    assert!(!home.join("state.yml").exists());
}

#[test]
fn test_init_writes_config_and_sample_data() {
    let home = temp_home("init");

    itn()
        .env("ITINERARY_HOME", &home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(home.join("itinerary.conf").exists());
    assert!(home.join("events.json").exists());

    let conf = fs::read_to_string(home.join("itinerary.conf")).expect("config written");
    assert!(conf.contains("data_file: events.json"));

    // the sample document is usable right away
    itn()
        .env("ITINERARY_HOME", &home)
        .args(["--no-color", "show", "--tab", "day1", "--at", "2026-06-01 12:00"])
        .assert()
        .success()
        .stdout(contains("Abfahrt"))
        .stdout(contains("Check-in"));

    itn()
        .env("ITINERARY_HOME", &home)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("load"));
}

#[test]
fn test_config_check_reports_invalid_initial_tab() {
    let home = temp_home("config_check");
    fs::write(
        home.join("itinerary.conf"),
        "day_tabs: [1]\nalternate_view: false\ninitial_tab: stations\n",
    )
    .expect("write config");

    itn()
        .env("ITINERARY_HOME", &home)
        .args(["config", "--check"])
        .assert()
        .failure()
        .stderr(contains("initial_tab"));
}

#[test]
fn test_config_check_rejects_out_of_range_timers() {
    for (name, body, key) in [
        ("delay_huge", "reminder_delay_secs: 100000000000000000\n", "reminder_delay_secs"),
        ("delay_max", "reminder_delay_secs: 18446744073709551615\n", "reminder_delay_secs"),
        ("tick_huge", "tick_millis: 18446744073709551615\n", "tick_millis"),
        ("tick_zero", "tick_millis: 0\n", "tick_millis"),
    ] {
        let home = temp_home(&format!("config_timer_{name}"));
        fs::write(home.join("itinerary.conf"), body).expect("write config");

        itn()
            .env("ITINERARY_HOME", &home)
            .args(["config", "--check"])
            .assert()
            .failure()
            .stderr(contains(key));

        itn()
            .env("ITINERARY_HOME", &home)
            .args(["--test", "show"])
            .assert()
            .failure()
            .stderr(contains("Configuration error"));
    }
}

#[test]
fn test_config_accepts_timers_within_range() {
    let home = temp_home("config_timer_ok");
    fs::write(
        home.join("itinerary.conf"),
        "reminder_delay_secs: 86400\ntick_millis: 500\n",
    )
    .expect("write config");

    itn()
        .env("ITINERARY_HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid"));
}
