use crate::errors::{AppError, AppResult};
use crate::models::document::{Document, Station};
use crate::models::event::Event;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the itinerary document comes from.
pub trait DataSource {
    /// Human readable origin, used in log lines.
    fn describe(&self) -> String;
    fn fetch(&self) -> AppResult<String>;
}

/// JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> AppResult<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Fixed payload, or a fixed failure.
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: Result<String, String>,
}

impl StaticSource {
    pub fn new(body: &str) -> Self {
        Self {
            body: Ok(body.to_string()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            body: Err(reason.to_string()),
        }
    }
}

impl DataSource for StaticSource {
    fn describe(&self) -> String {
        "<static>".to_string()
    }

    fn fetch(&self) -> AppResult<String> {
        self.body.clone().map_err(AppError::Load)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed(String),
}

/// The in-memory itinerary. Written once by [`EventStore::load`], read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    stations: Vec<Station>,
    state: LoadState,
}

impl Default for EventStore {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            stations: Vec::new(),
            state: LoadState::Pending,
        }
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Fetch and parse the document. All or nothing: on failure the store
    /// stays empty and remembers the reason. A store only loads once.
    pub fn load(&mut self, source: &dyn DataSource) -> AppResult<usize> {
        if self.state != LoadState::Pending {
            return Err(AppError::Load("event store already loaded".into()));
        }

        let parsed = source
            .fetch()
            .and_then(|raw| Document::from_json(&raw).map_err(AppError::from));

        match parsed {
            Ok(doc) => {
                self.events = doc.events;
                self.stations = doc.stations;
                self.state = LoadState::Loaded;
                Ok(self.events.len())
            }
            Err(e) => {
                self.state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }
}
