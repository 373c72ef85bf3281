//! Cooperative driver: timers and user input, one job at a time.

use crate::config::Config;
use crate::core::reminder::FlagStore;
use crate::core::scheduler::{Scheduler, TaskHandle, TimeSource};
use crate::core::session::Session;
use crate::core::store::DataSource;
use crate::view::ViewPort;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, TimeDelta};
use std::io::BufRead;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    LoadEvents,
    ClockTick,
    CountdownTick,
    ShowReminder,
}

/// A user action coming from the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Select(String),
    Confirm,
    Dismiss,
    Quit,
}

impl Input {
    pub fn parse(line: &str) -> Option<Self> {
        let l = line.trim();
        match l.to_lowercase().as_str() {
            "" => None,
            "q" | "quit" | "exit" => Some(Input::Quit),
            "ok" | "confirm" => Some(Input::Confirm),
            "x" | "close" | "dismiss" => Some(Input::Dismiss),
            _ => Some(Input::Select(l.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub tick: TimeDelta,
    pub reminder_delay: TimeDelta,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tick: TimeDelta::seconds(1),
            reminder_delay: TimeDelta::seconds(3),
        }
    }
}

/// Longest reminder delay accepted from the configuration (one day).
pub const MAX_REMINDER_DELAY_SECS: u64 = 86_400;
/// Longest tick accepted from the configuration (one minute).
pub const MAX_TICK_MILLIS: u64 = 60_000;

impl Timing {
    /// Fails when a configured duration is zero where it must not be, or
    /// out of range.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        if cfg.tick_millis == 0 || cfg.tick_millis > MAX_TICK_MILLIS {
            return Err(AppError::Config(format!(
                "tick_millis must be between 1 and {MAX_TICK_MILLIS}, got {}",
                cfg.tick_millis
            )));
        }
        if cfg.reminder_delay_secs > MAX_REMINDER_DELAY_SECS {
            return Err(AppError::Config(format!(
                "reminder_delay_secs must be at most {MAX_REMINDER_DELAY_SECS}, got {}",
                cfg.reminder_delay_secs
            )));
        }

        let tick = i64::try_from(cfg.tick_millis)
            .ok()
            .and_then(TimeDelta::try_milliseconds);
        let reminder_delay = i64::try_from(cfg.reminder_delay_secs)
            .ok()
            .and_then(TimeDelta::try_seconds);

        match (tick, reminder_delay) {
            (Some(tick), Some(reminder_delay)) => Ok(Self {
                tick,
                reminder_delay,
            }),
            _ => Err(AppError::Config("timer settings out of range".into())),
        }
    }
}

/// Forward input lines to the driver until the reader ends or the driver
/// hangs up. Returns how many lines were forwarded.
pub fn forward_lines<R: BufRead>(reader: R, tx: &Sender<String>) -> usize {
    let mut sent = 0;
    for line in reader.lines() {
        let Ok(l) = line else { break };
        if tx.send(l).is_err() {
            break;
        }
        sent += 1;
    }
    sent
}

pub struct Runtime<V: ViewPort, F: FlagStore, T: TimeSource, S: DataSource> {
    pub session: Session<V, F>,
    scheduler: Scheduler<Job>,
    time: T,
    source: S,
    timing: Timing,
    countdown_task: Option<TaskHandle>,
    started: bool,
}

impl<V: ViewPort, F: FlagStore, T: TimeSource, S: DataSource> Runtime<V, F, T, S> {
    pub fn new(session: Session<V, F>, time: T, source: S, timing: Timing) -> Self {
        Self {
            session,
            scheduler: Scheduler::new(),
            time,
            source,
            timing,
            countdown_task: None,
            started: false,
        }
    }

    pub fn time(&self) -> &T {
        &self.time
    }

    pub fn now(&self) -> DateTime<Local> {
        self.time.now()
    }

    pub fn scheduler(&self) -> &Scheduler<Job> {
        &self.scheduler
    }

    pub fn countdown_task(&self) -> Option<TaskHandle> {
        self.countdown_task
    }

    /// Paint the surface, arm the timers, then run whatever is already due
    /// (the load is due immediately).
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        let now = self.now();
        self.session.mount(now);
        self.scheduler
            .schedule_every(Job::ClockTick, now, self.timing.tick);
        self.scheduler
            .schedule_once(Job::LoadEvents, now, TimeDelta::zero());
        if self.session.features().first_run_reminder {
            self.scheduler
                .schedule_once(Job::ShowReminder, now, self.timing.reminder_delay);
        }

        self.run_due();
    }

    /// Run every job due at the current time, in due order.
    pub fn run_due(&mut self) -> usize {
        let mut ran = 0;
        loop {
            let now = self.now();
            let Some(job) = self.scheduler.pop_due(now) else {
                break;
            };
            self.run_job(job, now);
            ran += 1;
        }
        ran
    }

    fn run_job(&mut self, job: Job, now: DateTime<Local>) {
        match job {
            Job::LoadEvents => {
                if self.session.load(&self.source, now) {
                    let handle =
                        self.scheduler
                            .schedule_every(Job::CountdownTick, now, self.timing.tick);
                    self.countdown_task = Some(handle);
                }
            }
            Job::ClockTick => self.session.update_clock(now),
            Job::CountdownTick => self.session.countdown_tick(now),
            Job::ShowReminder => self.session.check_reminder(),
        }
    }

    /// Apply one user action. Returns `false` when the user asked to quit.
    pub fn handle_input(&mut self, input: Input) -> bool {
        let now = self.now();
        match input {
            Input::Select(selector) => {
                self.session.switch_tab(&selector, now);
            }
            Input::Confirm => {
                self.session.confirm_reminder();
            }
            Input::Dismiss => {
                self.session.dismiss_reminder();
            }
            Input::Quit => return false,
        }
        true
    }

    /// Parse one input line and apply it. Blank lines are ignored.
    /// Returns `false` when the line asks to quit.
    pub fn handle_line(&mut self, line: &str) -> bool {
        match Input::parse(line) {
            Some(input) => self.handle_input(input),
            None => true,
        }
    }

    /// How long the driver may sleep before the next job is due.
    pub fn time_to_next(&self) -> Option<TimeDelta> {
        self.scheduler
            .next_due()
            .map(|due| (due - self.now()).max(TimeDelta::zero()))
    }
}
