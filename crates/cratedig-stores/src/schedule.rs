//! Store opening-hours documents.
//!
//! Shape follows the places directory's `opening_hours.periods`:
//!
//! ```yaml
//! name: Rough Trade East
//! opening_hours:
//!   periods:
//!     - open:  { day: MONDAY, time: { hours: 9, minutes: 0 } }
//!       close: { day: MONDAY, time: { hours: 17, minutes: 30 } }
//! ```
//!
//! `day` is either a weekday name (`"MONDAY"`, `"mon"`, any case) or an
//! index with `0` = Sunday. JSON documents parse as well since JSON is
//! valid YAML.

use std::path::Path;

use chrono::{NaiveDateTime, NaiveTime, Weekday};
use serde::Deserialize;

use crate::error::StoresError;
use crate::hours::{evaluate_at, OpenStatus, WeeklyPeriod};

/// A store and its published opening hours.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreHours {
    #[serde(default)]
    pub name: Option<String>,
    /// Absent when the directory has no hours for the store.
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub periods: Vec<PeriodDoc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeriodDoc {
    pub open: TimeOfWeek,
    #[serde(default)]
    pub close: Option<TimeOfWeek>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeOfWeek {
    pub day: DayRepr,
    pub time: ClockTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DayRepr {
    Index(u8),
    Name(String),
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ClockTime {
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
}

impl StoreHours {
    /// Parse a schedule from YAML or JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`StoresError::ScheduleParse`] if the text does not match the
    /// document shape.
    pub fn from_text(text: &str) -> Result<Self, StoresError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Convert the document periods into [`WeeklyPeriod`]s.
    ///
    /// Returns `Ok(None)` when the store has no opening hours at all.
    ///
    /// # Errors
    ///
    /// [`StoresError::InvalidDay`] or [`StoresError::InvalidTime`] for
    /// out-of-range values.
    pub fn weekly_periods(&self) -> Result<Option<Vec<WeeklyPeriod>>, StoresError> {
        let Some(hours) = &self.opening_hours else {
            return Ok(None);
        };
        hours
            .periods
            .iter()
            .map(PeriodDoc::to_weekly_period)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Open status of this store at local time `now`.
    ///
    /// # Errors
    ///
    /// Propagates conversion errors from [`StoreHours::weekly_periods`].
    pub fn status_at(&self, now: NaiveDateTime) -> Result<OpenStatus, StoresError> {
        let periods = self.weekly_periods()?;
        Ok(evaluate_at(periods.as_deref(), now))
    }
}

impl PeriodDoc {
    fn to_weekly_period(&self) -> Result<WeeklyPeriod, StoresError> {
        Ok(WeeklyPeriod {
            day: self.open.day.to_weekday()?,
            open: self.open.time.to_naive_time()?,
            close: self
                .close
                .as_ref()
                .map(|c| c.time.to_naive_time())
                .transpose()?,
        })
    }
}

impl DayRepr {
    fn to_weekday(&self) -> Result<Weekday, StoresError> {
        match self {
            DayRepr::Index(0) => Ok(Weekday::Sun),
            DayRepr::Index(1) => Ok(Weekday::Mon),
            DayRepr::Index(2) => Ok(Weekday::Tue),
            DayRepr::Index(3) => Ok(Weekday::Wed),
            DayRepr::Index(4) => Ok(Weekday::Thu),
            DayRepr::Index(5) => Ok(Weekday::Fri),
            DayRepr::Index(6) => Ok(Weekday::Sat),
            DayRepr::Index(other) => Err(StoresError::InvalidDay(other.to_string())),
            DayRepr::Name(name) => match name.trim().to_ascii_lowercase().as_str() {
                "sunday" | "sun" => Ok(Weekday::Sun),
                "monday" | "mon" => Ok(Weekday::Mon),
                "tuesday" | "tue" => Ok(Weekday::Tue),
                "wednesday" | "wed" => Ok(Weekday::Wed),
                "thursday" | "thu" => Ok(Weekday::Thu),
                "friday" | "fri" => Ok(Weekday::Fri),
                "saturday" | "sat" => Ok(Weekday::Sat),
                _ => Err(StoresError::InvalidDay(name.clone())),
            },
        }
    }
}

impl ClockTime {
    fn to_naive_time(self) -> Result<NaiveTime, StoresError> {
        NaiveTime::from_hms_opt(self.hours, self.minutes, 0).ok_or(StoresError::InvalidTime {
            hours: self.hours,
            minutes: self.minutes,
        })
    }
}

/// Load a store schedule from a YAML or JSON file.
///
/// # Errors
///
/// Returns [`StoresError::ScheduleIo`] if the file cannot be read or
/// [`StoresError::ScheduleParse`] if it does not parse.
pub fn load_schedule(path: &Path) -> Result<StoreHours, StoresError> {
    let content = std::fs::read_to_string(path).map_err(|e| StoresError::ScheduleIo {
        path: path.display().to_string(),
        source: e,
    })?;
    let schedule = StoreHours::from_text(&content)?;
    tracing::debug!(
        path = %path.display(),
        store = schedule.name.as_deref().unwrap_or("<unnamed>"),
        "loaded store schedule"
    );
    Ok(schedule)
}
