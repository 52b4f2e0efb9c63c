//! Open/closed status from a weekly opening-hours schedule.
//!
//! Only the first period whose opening day is today is consulted. Stores
//! that split a day into several periods (lunch closures) report the first
//! one only.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// Opening window starting on `day`.
///
/// A `close` earlier than `open` means the window runs past midnight.
/// `close == None` means the store does not close that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyPeriod {
    pub day: Weekday,
    pub open: NaiveTime,
    pub close: Option<NaiveTime>,
}

/// Result of evaluating a schedule at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenStatus {
    /// Open now, with the closing time as `"2:30 PM"` when one is known.
    Open(Option<String>),
    Closed,
    HoursUnavailable,
}

impl std::fmt::Display for OpenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenStatus::Open(Some(closes)) => write!(f, "Open \u{22c5} Closes {closes}"),
            OpenStatus::Open(None) => write!(f, "Open"),
            OpenStatus::Closed => write!(f, "Closed"),
            OpenStatus::HoursUnavailable => write!(f, "Hours not available"),
        }
    }
}

/// Evaluate `periods` for weekday `day` at time `now`.
///
/// Boundaries are strict: a store opening at 09:00 is still closed at
/// exactly 09:00, and one closing at 17:00 is closed at exactly 17:00.
#[must_use]
pub fn evaluate(periods: Option<&[WeeklyPeriod]>, day: Weekday, now: NaiveTime) -> OpenStatus {
    let Some(period) = periods.and_then(|ps| ps.iter().find(|p| p.day == day)) else {
        return OpenStatus::HoursUnavailable;
    };

    let is_open = match period.close {
        Some(close) if close < period.open => now > period.open || now < close,
        close => now > period.open && close.is_none_or(|c| now < c),
    };

    if is_open {
        OpenStatus::Open(period.close.map(format_clock_time))
    } else {
        OpenStatus::Closed
    }
}

/// [`evaluate`] at a local date-time.
#[must_use]
pub fn evaluate_at(periods: Option<&[WeeklyPeriod]>, now: NaiveDateTime) -> OpenStatus {
    evaluate(periods, now.weekday(), now.time())
}

/// 12-hour clock without a leading zero, e.g. `"2:30 PM"`, `"12:05 AM"`.
#[must_use]
pub fn format_clock_time(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    format!("{hour}:{:02} {suffix}", time.minute())
}

#[cfg(test)]
#[path = "hours_test.rs"]
mod tests;
