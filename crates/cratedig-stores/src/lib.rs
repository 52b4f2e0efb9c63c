//! Record store helpers: opening-hours status and the store search area.

pub mod area;
pub mod error;
pub mod hours;
pub mod schedule;

pub use area::{search_bounds, SearchBounds, STORE_SEARCH_QUERY};
pub use error::StoresError;
pub use hours::{evaluate, evaluate_at, format_clock_time, OpenStatus, WeeklyPeriod};
pub use schedule::{load_schedule, StoreHours};
