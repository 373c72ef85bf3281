use crate::models::event::Event;
use crate::utils::pad2;
use chrono::{DateTime, Local};

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time left until a target, split into whole units (truncated).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub total_ms: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Each unit is taken from the full millisecond value, so a unit never
/// depends on the rounding of the one above it.
pub fn decompose(total_ms: i64) -> Remaining {
    Remaining {
        total_ms,
        days: total_ms / MS_PER_DAY,
        hours: (total_ms % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (total_ms % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (total_ms % MS_PER_MINUTE) / MS_PER_SECOND,
    }
}

/// The four numeric fields plus the label, ready for the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownFields {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub label: String,
}

impl CountdownFields {
    pub fn new(remaining: &Remaining, label: String) -> Self {
        Self {
            days: pad2(remaining.days),
            hours: pad2(remaining.hours),
            minutes: pad2(remaining.minutes),
            seconds: pad2(remaining.seconds),
            label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Counting down towards the target at `cursor`.
    Running {
        cursor: usize,
        remaining: Remaining,
        fields: CountdownFields,
    },
    /// Every target has passed. Terminal for the rest of the session.
    Finished,
}

/// Walks the countdown-flagged events in list order.
///
/// The cursor only moves forward: once a target's instant has passed it is
/// skipped for good, even if the clock were to go back.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    targets: Vec<Event>,
    cursor: usize,
}

impl CountdownEngine {
    /// `None` when no event is flagged: there is nothing to count down to.
    pub fn from_events(events: &[Event]) -> Option<Self> {
        let targets: Vec<Event> = events.iter().filter(|e| e.is_countdown).cloned().collect();
        if targets.is_empty() {
            None
        } else {
            Some(Self { targets, cursor: 0 })
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn targets(&self) -> &[Event] {
        &self.targets
    }

    pub fn current(&self) -> Option<&Event> {
        self.targets.get(self.cursor)
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.targets.len()
    }

    /// Skip every passed target, then report the time left to the first
    /// one still ahead.
    pub fn tick(&mut self, now: DateTime<Local>) -> Tick {
        while let Some(target) = self.targets.get(self.cursor) {
            let remaining_ms = (target.instant() - now).num_milliseconds();
            if remaining_ms > 0 {
                let remaining = decompose(remaining_ms);
                return Tick::Running {
                    cursor: self.cursor,
                    remaining,
                    fields: CountdownFields::new(&remaining, target.countdown_label()),
                };
            }
            self.cursor += 1;
        }

        Tick::Finished
    }
}
