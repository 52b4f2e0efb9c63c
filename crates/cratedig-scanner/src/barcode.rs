//! Decoded barcode payloads as delivered by the camera decoder.

use serde::{Deserialize, Serialize};

/// One barcode read from a camera frame.
///
/// Decoders expose up to three textual views of the same symbol. Any of them
/// may be missing or empty depending on the symbology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedBarcode {
    /// Exact encoded payload (e.g. the 12 or 13 EAN/UPC digits).
    #[serde(default)]
    pub raw_value: Option<String>,
    /// Human-readable rendering chosen by the decoder.
    #[serde(default)]
    pub display_value: Option<String>,
    /// URL payload, present only for URL-type QR codes.
    #[serde(default)]
    pub url: Option<String>,
}

impl DecodedBarcode {
    /// A barcode carrying only a raw payload.
    #[must_use]
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            raw_value: Some(value.into()),
            ..Self::default()
        }
    }

    /// First non-empty text in priority order: raw, display, URL.
    #[must_use]
    pub fn best_text(&self) -> Option<&str> {
        [&self.raw_value, &self.display_value, &self.url]
            .into_iter()
            .filter_map(Option::as_deref)
            .find(|value| !value.is_empty())
    }
}

/// Join the best text of every barcode in a frame with `,`.
///
/// Barcodes with no usable text are dropped. Returns `None` when nothing
/// survives.
#[must_use]
pub fn join_payloads(barcodes: &[DecodedBarcode]) -> Option<String> {
    let joined = barcodes
        .iter()
        .filter_map(DecodedBarcode::best_text)
        .collect::<Vec<_>>()
        .join(",");

    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
