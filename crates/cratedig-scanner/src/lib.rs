//! Barcode scan reduction.
//!
//! Turns the decoded payloads of one camera frame into a single lookup query,
//! rate limited by a [`CooldownGate`] so a barcode held in front of the camera
//! triggers one lookup rather than one per frame.

pub mod barcode;
pub mod cooldown;
pub mod reducer;

pub use barcode::{join_payloads, DecodedBarcode};
pub use cooldown::{Clock, CooldownGate, SystemClock, DEFAULT_COOLDOWN_MS};
pub use reducer::{reduce, report_decode_failure, ScanSession};
