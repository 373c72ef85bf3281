use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::log::ActivityLog;
use crate::errors::AppResult;
use crate::ui::messages::{detail, info, success};
use std::fs;

/// Starter itinerary written by `init` when no data file exists yet.
const SAMPLE_DOCUMENT: &str = r#"{
  "events": [
    {
      "day": 1,
      "date": "2026-06-12",
      "time": "08:15",
      "title": "Abfahrt",
      "location": "Hauptbahnhof",
      "description": "Treffpunkt am Gleis 7, Tickets nicht vergessen.",
      "duration": "2h 40m",
      "type": "travel",
      "isImportant": true,
      "isCountdown": true
    },
    {
      "day": 1,
      "date": "2026-06-12",
      "time": "11:30",
      "title": "Check-in",
      "location": "Hotel am Markt",
      "description": "Zimmer beziehen, Gepäck abstellen.",
      "mapsLink": "https://maps.example.org/?q=Hotel+am+Markt",
      "type": "accommodation"
    },
    {
      "day": 2,
      "date": "2026-06-13",
      "time": "17:00",
      "title": "Rückfahrt",
      "location": "Hauptbahnhof",
      "description": "Letzte Verbindung des Tages.",
      "type": "travel",
      "isCountdown": true
    }
  ],
  "stations": [
    { "name": "Hauptbahnhof", "lines": ["S1", "S2", "U4"] }
  ]
}
"#;

/// Handle the `init` command
///
/// This initializes:
///  - the app directory (if missing)
///  - the configuration file
///  - a sample data file, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing itinerary…");

    let path = Config::init_all(cli.test)?;
    let cfg = Config::load()?;
    let data = cfg.data_path();

    if !cli.test && !data.exists() {
        fs::write(&data, SAMPLE_DOCUMENT)?;
    }

    detail("Config file", path.display());
    detail("Data file", data.display());
    detail("Flag file", cfg.flag_path().display());

    if !cli.test {
        let mut log = ActivityLog::to_file(cfg.log_path());
        log.ttlog("init", "config", &format!("Initialized at {}", path.display()));
    }

    success("itinerary initialization completed!");
    Ok(())
}
