//! Display surface abstraction.
//!
//! The session never prints: it writes into named regions through
//! [`ViewPort`]. A host may lack some regions (the day-only variant has no
//! stations list and no notice); writes to those fail with
//! `AppError::MissingRegion` and the caller skips them.

pub mod terminal;

use crate::core::countdown::CountdownFields;
use crate::core::renderer::TimelineContent;
use crate::errors::{AppError, AppResult};
use crate::models::document::Station;
use crate::models::tab::Tab;
use std::collections::BTreeSet;
use std::fmt;

pub use terminal::TerminalView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Time,
    Tabs,
    Timeline,
    Stations,
    Countdown,
    Notice,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Time,
        Region::Tabs,
        Region::Timeline,
        Region::Stations,
        Region::Countdown,
        Region::Notice,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Time => "currentTime",
            Region::Tabs => "tabs",
            Region::Timeline => "timeline",
            Region::Stations => "stations",
            Region::Countdown => "countdown",
            Region::Notice => "appReminder",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named setters over the display surface.
pub trait ViewPort {
    fn set_time(&mut self, text: &str) -> AppResult<()>;
    fn set_tabs(&mut self, tabs: &[Tab], active: Tab) -> AppResult<()>;
    /// Exactly one of the two top-level views is shown at a time.
    fn set_views_visible(&mut self, timeline: bool, stations: bool) -> AppResult<()>;
    fn set_timeline_content(&mut self, content: &TimelineContent) -> AppResult<()>;
    fn set_stations(&mut self, stations: &[Station]) -> AppResult<()>;
    fn set_countdown_fields(&mut self, fields: &CountdownFields) -> AppResult<()>;
    fn set_countdown_visible(&mut self, visible: bool) -> AppResult<()>;
    fn set_notice_visible(&mut self, visible: bool) -> AppResult<()>;

    /// Push pending changes to the real surface, if there is one.
    fn present(&mut self) -> AppResult<()> {
        Ok(())
    }
}

/// Snapshot of everything the surface currently shows.
///
/// `Frame` is itself a [`ViewPort`] that only records writes, which is what
/// the tests drive the session with.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub time: Option<String>,
    pub tabs: Vec<Tab>,
    pub active_tab: Option<Tab>,
    pub timeline_visible: bool,
    pub stations_visible: bool,
    pub timeline: Option<TimelineContent>,
    pub stations: Vec<Station>,
    pub countdown: Option<CountdownFields>,
    pub countdown_visible: bool,
    pub notice_visible: bool,
    available: BTreeSet<Region>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::with_regions(&Region::ALL)
    }
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface that only offers `regions`.
    pub fn with_regions(regions: &[Region]) -> Self {
        Self {
            time: None,
            tabs: Vec::new(),
            active_tab: None,
            timeline_visible: true,
            stations_visible: false,
            timeline: None,
            stations: Vec::new(),
            countdown: None,
            countdown_visible: true,
            notice_visible: false,
            available: regions.iter().copied().collect(),
        }
    }

    /// A full surface minus `missing`.
    pub fn without(missing: &[Region]) -> Self {
        let regions: Vec<Region> = Region::ALL
            .iter()
            .copied()
            .filter(|r| !missing.contains(r))
            .collect();
        Self::with_regions(&regions)
    }

    pub fn has(&self, region: Region) -> bool {
        self.available.contains(&region)
    }

    fn require(&self, region: Region) -> AppResult<()> {
        if self.has(region) {
            Ok(())
        } else {
            Err(AppError::MissingRegion(region))
        }
    }
}

impl ViewPort for Frame {
    fn set_time(&mut self, text: &str) -> AppResult<()> {
        self.require(Region::Time)?;
        self.time = Some(text.to_string());
        Ok(())
    }

    fn set_tabs(&mut self, tabs: &[Tab], active: Tab) -> AppResult<()> {
        self.require(Region::Tabs)?;
        self.tabs = tabs.to_vec();
        self.active_tab = Some(active);
        Ok(())
    }

    fn set_views_visible(&mut self, timeline: bool, stations: bool) -> AppResult<()> {
        self.require(Region::Timeline)?;
        self.timeline_visible = timeline;
        // the day-only surface has nothing to toggle on the other side
        if self.has(Region::Stations) {
            self.stations_visible = stations;
        }
        Ok(())
    }

    fn set_timeline_content(&mut self, content: &TimelineContent) -> AppResult<()> {
        self.require(Region::Timeline)?;
        self.timeline = Some(content.clone());
        Ok(())
    }

    fn set_stations(&mut self, stations: &[Station]) -> AppResult<()> {
        self.require(Region::Stations)?;
        self.stations = stations.to_vec();
        Ok(())
    }

    fn set_countdown_fields(&mut self, fields: &CountdownFields) -> AppResult<()> {
        self.require(Region::Countdown)?;
        self.countdown = Some(fields.clone());
        Ok(())
    }

    fn set_countdown_visible(&mut self, visible: bool) -> AppResult<()> {
        self.require(Region::Countdown)?;
        self.countdown_visible = visible;
        Ok(())
    }

    fn set_notice_visible(&mut self, visible: bool) -> AppResult<()> {
        self.require(Region::Notice)?;
        self.notice_visible = visible;
        Ok(())
    }
}
