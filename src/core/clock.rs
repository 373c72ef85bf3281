use crate::errors::AppResult;
use crate::utils::date;
use crate::view::ViewPort;
use chrono::{DateTime, Local};

/// Text of the current-time region.
pub fn clock_text(now: &DateTime<Local>) -> String {
    date::format_long(now)
}

pub fn update_clock<V: ViewPort + ?Sized>(view: &mut V, now: &DateTime<Local>) -> AppResult<()> {
    view.set_time(&clock_text(now))
}
