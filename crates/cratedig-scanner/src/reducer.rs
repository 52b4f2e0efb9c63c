//! Frame-to-query reduction.

use crate::barcode::{join_payloads, DecodedBarcode};
use crate::cooldown::{Clock, CooldownGate, SystemClock};

/// Reduce one frame of decoded barcodes to a lookup query.
///
/// Returns `None` when no barcode carries usable text, or when `gate` fired
/// within its interval. On success the gate records `now_ms`.
#[must_use]
pub fn reduce(barcodes: &[DecodedBarcode], now_ms: u64, gate: &CooldownGate) -> Option<String> {
    let query = join_payloads(barcodes)?;

    if !gate.try_fire(now_ms) {
        tracing::trace!(now_ms, interval_ms = gate.interval_ms(), "scan suppressed by cooldown");
        return None;
    }

    tracing::debug!(query = %query, barcode_count = barcodes.len(), "scan accepted");
    Some(query)
}

/// Log a failure from the upstream decoder.
///
/// Decode failures never reach [`reduce`]; the frame is simply dropped.
pub fn report_decode_failure(error: &dyn std::error::Error) {
    tracing::error!(error = %error, "barcode processing failed");
}

/// Owns the gate and clock for one scanning screen.
#[derive(Debug)]
pub struct ScanSession<C: Clock = SystemClock> {
    gate: CooldownGate,
    clock: C,
}

impl ScanSession<SystemClock> {
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self::with_clock(interval_ms, SystemClock)
    }
}

impl<C: Clock> ScanSession<C> {
    #[must_use]
    pub fn with_clock(interval_ms: u64, clock: C) -> Self {
        Self {
            gate: CooldownGate::new(interval_ms),
            clock,
        }
    }

    #[must_use]
    pub fn gate(&self) -> &CooldownGate {
        &self.gate
    }

    /// Handle a successful decode batch, timestamped by the session clock.
    #[must_use]
    pub fn on_frame(&self, barcodes: &[DecodedBarcode]) -> Option<String> {
        reduce(barcodes, self.clock.now_millis(), &self.gate)
    }

    /// Handle a failed decode batch.
    pub fn on_decode_error(&self, error: &dyn std::error::Error) {
        report_decode_failure(error);
    }
}
