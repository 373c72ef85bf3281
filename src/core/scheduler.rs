//! Timer bookkeeping: one-shot and repeating tasks with cancel handles.
//!
//! The scheduler never looks at a clock itself. Callers pass `now`, which is
//! what lets tests drive it with a manual clock.

use chrono::{DateTime, Local, TimeDelta};
use std::cell::Cell;

/// Source of "now" for the runtime.
pub trait TimeSource {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Virtual clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<DateTime<Local>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: DateTime<Local>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: TimeDelta) {
        self.now.set(self.now.get() + by);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Task<J> {
    id: u64,
    job: J,
    due: DateTime<Local>,
    every: Option<TimeDelta>,
}

#[derive(Debug)]
pub struct Scheduler<J> {
    tasks: Vec<Task<J>>,
    next_id: u64,
}

impl<J> Default for Scheduler<J> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }
}

impl<J: Clone> Scheduler<J> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, job: J, due: DateTime<Local>, every: Option<TimeDelta>) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            job,
            due,
            every,
        });
        TaskHandle(id)
    }

    /// Run `job` once, `delay` after `now`.
    pub fn schedule_once(&mut self, job: J, now: DateTime<Local>, delay: TimeDelta) -> TaskHandle {
        self.push(job, now + delay, None)
    }

    /// Run `job` every `interval`, first time one interval after `now`.
    /// A non-positive interval is clamped to one millisecond.
    pub fn schedule_every(
        &mut self,
        job: J,
        now: DateTime<Local>,
        interval: TimeDelta,
    ) -> TaskHandle {
        let interval = interval.max(TimeDelta::milliseconds(1));
        self.push(job, now + interval, Some(interval))
    }

    /// Returns whether the task was still scheduled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != handle.0);
        self.tasks.len() != before
    }

    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.id == handle.0)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn next_due(&self) -> Option<DateTime<Local>> {
        self.tasks.iter().map(|t| t.due).min()
    }

    /// Take the earliest task due at `now` (ties go to the oldest task).
    ///
    /// Repeating tasks are moved to the first slot of their grid after
    /// `now`: a late task fires once, it does not burst to catch up.
    pub fn pop_due(&mut self, now: DateTime<Local>) -> Option<J> {
        let idx = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)?;

        match self.tasks[idx].every {
            Some(every) => {
                let task = &mut self.tasks[idx];
                while task.due <= now {
                    task.due += every;
                }
                Some(task.job.clone())
            }
            None => Some(self.tasks.remove(idx).job),
        }
    }
}
