//! One viewing session: the state, the surface it paints on and the flag
//! store it consults.
//!
//! Every operation takes `now` explicitly and runs to completion; the
//! runtime is the only caller that decides when operations happen.

use crate::config::Config;
use crate::core::clock;
use crate::core::countdown::{CountdownEngine, Tick};
use crate::core::log::ActivityLog;
use crate::core::reminder::FlagStore;
use crate::core::renderer::{self, LOAD_ERROR, TimelineContent};
use crate::core::store::{DataSource, EventStore, LoadState};
use crate::core::tabs::TabController;
use crate::errors::AppResult;
use crate::models::tab::Tab;
use crate::view::{Region, ViewPort};
use chrono::{DateTime, Local};

pub const LOADING: &str = "Lade Events …";

/// Which variant of the viewer is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Features {
    pub day_tabs: Vec<i64>,
    pub alternate_view: bool,
    pub first_run_reminder: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            day_tabs: vec![1, 2],
            alternate_view: true,
            first_run_reminder: true,
        }
    }
}

impl Features {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            day_tabs: cfg.day_tabs.clone(),
            alternate_view: cfg.alternate_view,
            first_run_reminder: cfg.first_run_reminder,
        }
    }

    /// The day-only variant: no stations, no reminder.
    pub fn days_only(day_tabs: Vec<i64>) -> Self {
        Self {
            day_tabs,
            alternate_view: false,
            first_run_reminder: false,
        }
    }

    pub fn tabs(&self) -> Vec<Tab> {
        let mut tabs: Vec<Tab> = self.day_tabs.iter().copied().map(Tab::Day).collect();
        if self.alternate_view {
            tabs.push(Tab::Stations);
        }
        tabs
    }

    /// Regions a host surface for this variant provides.
    pub fn regions(&self) -> Vec<Region> {
        Region::ALL
            .iter()
            .copied()
            .filter(|r| match r {
                Region::Stations => self.alternate_view,
                Region::Notice => self.first_run_reminder,
                _ => true,
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum CountdownState {
    /// Events not loaded yet.
    NotStarted,
    /// No event is flagged: the countdown was hidden at start.
    Disabled,
    Running(CountdownEngine),
}

/// Mutable state of the session, in one place.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub tabs: TabController,
    pub store: EventStore,
    pub countdown: CountdownState,
    pub countdown_hidden: bool,
    pub notice_visible: bool,
}

impl SessionState {
    pub fn new(tabs: TabController) -> Self {
        Self {
            tabs,
            store: EventStore::new(),
            countdown: CountdownState::NotStarted,
            countdown_hidden: false,
            notice_visible: false,
        }
    }

    /// Index of the current countdown target, if the engine runs.
    pub fn countdown_cursor(&self) -> Option<usize> {
        match &self.countdown {
            CountdownState::Running(engine) => Some(engine.cursor()),
            _ => None,
        }
    }
}

pub struct Session<V: ViewPort, F: FlagStore> {
    pub state: SessionState,
    features: Features,
    view: V,
    flags: F,
    log: ActivityLog,
}

impl<V: ViewPort, F: FlagStore> Session<V, F> {
    pub fn new(features: Features, initial: Tab, view: V, flags: F, log: ActivityLog) -> Self {
        let tabs = TabController::new(features.tabs(), initial);
        Self {
            state: SessionState::new(tabs),
            features,
            view,
            flags,
            log,
        }
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn flags(&self) -> &F {
        &self.flags
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Skip a write the surface cannot take, but keep a trace of it.
    fn paint(&mut self, result: AppResult<()>) {
        if let Err(e) = result {
            self.log.ttlog("view", "skip", &e.to_string());
        }
    }

    /// First paint, before anything is loaded.
    pub fn mount(&mut self, now: DateTime<Local>) {
        self.update_clock(now);

        let active = self.state.tabs.active();
        let r = self.view.set_tabs(self.state.tabs.tabs(), active);
        self.paint(r);
        let r = self
            .view
            .set_views_visible(active != Tab::Stations, active == Tab::Stations);
        self.paint(r);
        let r = self
            .view
            .set_timeline_content(&TimelineContent::Placeholder(LOADING.to_string()));
        self.paint(r);
    }

    // ---------------------------
    // Clock
    // ---------------------------
    pub fn update_clock(&mut self, now: DateTime<Local>) {
        let r = clock::update_clock(&mut self.view, &now);
        self.paint(r);
    }

    // ---------------------------
    // Event store
    // ---------------------------

    /// Load the itinerary. Returns `true` when a countdown was started and
    /// needs its tick task.
    pub fn load(&mut self, source: &dyn DataSource, now: DateTime<Local>) -> bool {
        if *self.state.store.state() != LoadState::Pending {
            self.log
                .ttlog("load", &source.describe(), "ignored: events already loaded");
            return false;
        }

        match self.state.store.load(source) {
            Ok(n) => {
                self.log
                    .ttlog("load", &source.describe(), &format!("Loaded {n} events"));
                let active = self.state.tabs.active();
                self.show(active, now);
                self.start_countdown(now)
            }
            Err(e) => {
                self.log
                    .ttlog("load_failed", &source.describe(), &e.to_string());
                let r = self
                    .view
                    .set_timeline_content(&TimelineContent::Error(LOAD_ERROR.to_string()));
                self.paint(r);
                false
            }
        }
    }

    // ---------------------------
    // Renderer
    // ---------------------------
    pub fn render_day(&mut self, day: i64, now: DateTime<Local>) {
        let content = renderer::render_day(self.state.store.events(), day, now);
        let r = self.view.set_timeline_content(&content);
        self.paint(r);
    }

    // ---------------------------
    // Tab controller
    // ---------------------------

    /// Switch to the tab named by `selector`. Unknown selectors change
    /// nothing and return `false`.
    pub fn switch_tab(&mut self, selector: &str, now: DateTime<Local>) -> bool {
        match self.state.tabs.resolve(selector) {
            Some(tab) => {
                self.log.ttlog("tab", &tab.to_string(), "switched");
                self.show(tab, now);
                true
            }
            None => {
                self.log.ttlog("tab", selector, "unknown selector ignored");
                false
            }
        }
    }

    fn show(&mut self, tab: Tab, now: DateTime<Local>) {
        self.state.tabs.select(tab);
        let r = self.view.set_tabs(self.state.tabs.tabs(), tab);
        self.paint(r);

        match tab {
            Tab::Day(day) => {
                let r = self.view.set_views_visible(true, false);
                self.paint(r);
                self.render_day(day, now);
            }
            Tab::Stations => {
                let r = self.view.set_views_visible(false, true);
                self.paint(r);
                let r = self.view.set_stations(self.state.store.stations());
                self.paint(r);
            }
        }
    }

    // ---------------------------
    // Countdown
    // ---------------------------

    /// Returns `false` when there is nothing to count down to; the countdown
    /// is then hidden right away and never ticks.
    pub fn start_countdown(&mut self, now: DateTime<Local>) -> bool {
        match CountdownEngine::from_events(self.state.store.events()) {
            Some(engine) => {
                self.state.countdown = CountdownState::Running(engine);
                self.countdown_tick(now);
                true
            }
            None => {
                self.state.countdown = CountdownState::Disabled;
                self.hide_countdown("no countdown events");
                false
            }
        }
    }

    pub fn countdown_tick(&mut self, now: DateTime<Local>) {
        let CountdownState::Running(engine) = &mut self.state.countdown else {
            return;
        };
        let before = engine.cursor();
        let tick = engine.tick(now);

        match tick {
            Tick::Running { cursor, fields, .. } => {
                if cursor != before {
                    self.log
                        .ttlog("countdown", &fields.label, &format!("next target #{cursor}"));
                }
                let r = self.view.set_countdown_fields(&fields);
                self.paint(r);
            }
            Tick::Finished => self.hide_countdown("all countdown events passed"),
        }
    }

    fn hide_countdown(&mut self, reason: &str) {
        if self.state.countdown_hidden {
            return;
        }
        self.state.countdown_hidden = true;
        self.log.ttlog("countdown", "hidden", reason);
        let r = self.view.set_countdown_visible(false);
        self.paint(r);
    }

    // ---------------------------
    // First-run reminder
    // ---------------------------

    /// Show the notice unless it was acknowledged in an earlier session.
    pub fn check_reminder(&mut self) {
        if !self.features.first_run_reminder {
            return;
        }

        let acknowledged = match self.flags.is_acknowledged() {
            Ok(v) => v,
            Err(e) => {
                self.log.ttlog("reminder", "flag", &e.to_string());
                false
            }
        };

        if acknowledged {
            self.log.ttlog("reminder", "check", "already acknowledged");
            return;
        }

        self.log.ttlog("reminder", "check", "showing notice");
        match self.view.set_notice_visible(true) {
            Ok(()) => self.state.notice_visible = true,
            Err(e) => self.log.ttlog("view", "skip", &e.to_string()),
        }
    }

    /// Hide the notice; it will come back next session.
    pub fn dismiss_reminder(&mut self) -> bool {
        if !self.state.notice_visible {
            return false;
        }
        self.close_notice();
        self.log.ttlog("reminder", "dismiss", "hidden for this session");
        true
    }

    /// Hide the notice and never show it again.
    pub fn confirm_reminder(&mut self) -> bool {
        if !self.state.notice_visible {
            return false;
        }
        if let Err(e) = self.flags.acknowledge() {
            self.log.ttlog("reminder", "flag", &e.to_string());
        }
        self.close_notice();
        self.log.ttlog("reminder", "confirm", "acknowledged");
        true
    }

    fn close_notice(&mut self) {
        self.state.notice_visible = false;
        let r = self.view.set_notice_visible(false);
        self.paint(r);
    }

    pub fn present(&mut self) {
        let r = self.view.present();
        self.paint(r);
    }
}
