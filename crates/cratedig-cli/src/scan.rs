//! `scan` command: barcode payloads in, lookup queries out.

use std::io::BufRead;

use cratedig_core::AppConfig;
use cratedig_scanner::{DecodedBarcode, ScanSession};

/// Run payloads from the command line as one frame, or stdin lines as a
/// sequence of frames sharing one cooldown gate.
pub fn run_scan(config: &AppConfig, payloads: &[String], stdin: bool) -> anyhow::Result<()> {
    let session = ScanSession::new(config.scan_cooldown_ms);

    if !stdin {
        let frame: Vec<DecodedBarcode> = payloads.iter().map(DecodedBarcode::raw).collect();
        if let Some(query) = session.on_frame(&frame) {
            println!("{query}");
        }
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_frame(&line) {
            Ok(frame) => {
                if let Some(query) = session.on_frame(&frame) {
                    println!("{query}");
                }
            }
            Err(error) => session.on_decode_error(&error),
        }
    }
    Ok(())
}

fn parse_frame(line: &str) -> Result<Vec<DecodedBarcode>, serde_json::Error> {
    serde_json::from_str(line)
}
