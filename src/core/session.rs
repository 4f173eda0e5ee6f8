//! Channel-driven listening session and turn-log persistence
//!
//! A session is a single-consumer loop: the transport pushes raw codes into
//! an mpsc channel, one task pops them and runs the stabilizer. That single
//! consumer is what enforces the strict serialization the core requires -
//! no arrival is processed while a confirmation is outstanding.

use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::{timeout_at, Instant as TokioInstant};

use crate::core::{ConfirmationOracle, Stabilizer};
use crate::types::{IngestOutput, LogIoReason, RawCode, TurnLog};

/// Drain raw codes from `rx` into the stabilizer until the transport closes
/// or the listening window elapses; returns the number of arrivals processed
///
/// `on_output` is invoked once per arrival with the stabilizer's decision.
pub async fn run_session(
    mut rx: mpsc::Receiver<RawCode>,
    stabilizer: &mut Stabilizer,
    oracle: &mut dyn ConfirmationOracle,
    listen_for: Duration,
    mut on_output: impl FnMut(&IngestOutput),
) -> usize {
    let deadline = TokioInstant::now() + listen_for;
    let mut processed = 0;

    loop {
        match timeout_at(deadline, rx.recv()).await {
            Ok(Some(code)) => {
                let output = stabilizer.ingest(code, Instant::now(), oracle);
                on_output(&output);
                processed += 1;
            }
            // Transport closed
            Ok(None) => break,
            // Listening window elapsed
            Err(_) => break,
        }
    }

    processed
}

/// Save the turn log as pretty JSON under `dir`; returns the file path
pub fn save_log(log: &TurnLog, dir: &str) -> Result<String, LogIoReason> {
    let filename = format!(
        "{}/turnlog_{}.json",
        dir,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );

    let json = serde_json::to_string_pretty(log)
        .map_err(|_| LogIoReason::R401_LOG_SERIALIZE_ERROR)?;

    std::fs::create_dir_all(dir).map_err(|_| LogIoReason::R402_LOG_STORAGE_ERROR)?;

    std::fs::write(&filename, json).map_err(|_| LogIoReason::R402_LOG_STORAGE_ERROR)?;

    Ok(filename)
}

/// Load a turn log from a JSON file
pub fn load_log(path: &str) -> Result<TurnLog, LogIoReason> {
    let json =
        std::fs::read_to_string(path).map_err(|_| LogIoReason::R402_LOG_STORAGE_ERROR)?;

    serde_json::from_str(&json).map_err(|_| LogIoReason::R401_LOG_SERIALIZE_ERROR)
}

// =============================================================================
// TESTS
// =============================================================================
