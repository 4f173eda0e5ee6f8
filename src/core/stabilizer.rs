//! Stabilizer/Debouncer: the event-stabilization and confirmation state machine
//!
//! Per arrival:
//! 1. stability gate - ≥ 3 of the last 4 readings (counting this arrival)
//!    equal this code
//! 2. cooldown gate  - > 1 s since the last confirmed turn
//! 3. classify + describe
//! 4. confirmation gate - oracle accepts: commit to log; rejects: discard
//! 5. history update  - unconditional, after the gates
//!
//! Arrivals are strictly serialized; the oracle call is the one suspension
//! point and blocks the pipeline until answered.

use chrono::Utc;
use std::time::{Duration, Instant};

use crate::core::{Classifier, ConfirmationOracle};
use crate::types::{IngestOutput, RawCode, ReasonCode, RecentHistory, TurnEvent, TurnLog};
use crate::{COOLDOWN_MS, STABILITY_THRESHOLD};

/// Stateful filter turning raw sensor chatter into confirmed turn events
#[derive(Debug)]
pub struct Stabilizer {
    /// Raw code → face/direction mapping
    classifier: Classifier,
    /// Last few raw codes, oldest evicted
    history: RecentHistory,
    /// When the last turn was confirmed (read AFTER the oracle answered)
    last_confirmed_at: Option<Instant>,
    /// Confirmed turns, append-only
    log: TurnLog,
    /// Occurrences required in the window before a code is a candidate
    stability_threshold: usize,
    /// Quiet time required after a confirmed turn
    cooldown: Duration,
    /// Number of arrivals ingested
    ingest_count: u64,
}

impl Default for Stabilizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stabilizer {
    /// Create a stabilizer with the default classifier and thresholds
    pub fn new() -> Self {
        Self::with_classifier(Classifier::new())
    }

    /// Create a stabilizer around a specific classifier
    pub fn with_classifier(classifier: Classifier) -> Self {
        Self {
            classifier,
            history: RecentHistory::new(),
            last_confirmed_at: None,
            log: TurnLog::new(),
            stability_threshold: STABILITY_THRESHOLD,
            cooldown: Duration::from_millis(COOLDOWN_MS),
            ingest_count: 0,
        }
    }

    /// Override the cooldown window (tests, tuning)
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Override the stability threshold (tests, tuning)
    pub fn with_stability_threshold(mut self, threshold: usize) -> Self {
        self.stability_threshold = threshold;
        self
    }

    /// Process one raw arrival
    ///
    /// `now` is the arrival time and is what the cooldown gate measures
    /// against; the cooldown clock itself is re-read after the oracle
    /// answers, so a slow answer extends the effective quiet period.
    pub fn ingest(
        &mut self,
        code: RawCode,
        now: Instant,
        oracle: &mut dyn ConfirmationOracle,
    ) -> IngestOutput {
        self.ingest_count += 1;

        // Stability over the last four readings counting this arrival:
        // the first three-in-a-row triggers, not a four-in-a-row.
        let stable_count = self.history.count_with(code);

        let output = if stable_count < self.stability_threshold {
            IngestOutput::new(code, stable_count, None, ReasonCode::R101_STABILITY_NOT_MET, None)
        } else if let Some(remaining) = self.cooldown_remaining(now) {
            IngestOutput::new(
                code,
                stable_count,
                Some(remaining.as_millis() as u64),
                ReasonCode::R102_COOLDOWN_ACTIVE,
                None,
            )
        } else {
            match self.classifier.classify(code) {
                Err(_) => {
                    // Arrival is discarded but still recorded below,
                    // keeping the window an honest sensor record
                    IngestOutput::new(code, stable_count, None, ReasonCode::R301_UNKNOWN_FACE, None)
                }
                Ok((face, direction)) => {
                    let event = TurnEvent::new(Utc::now(), face, direction);

                    if oracle.confirm(&event.description()) {
                        self.log.append(event.clone());
                        // Fresh timestamp: cooldown runs from the answer,
                        // not from the arrival
                        self.last_confirmed_at = Some(Instant::now());
                        IngestOutput::new(
                            code,
                            stable_count,
                            None,
                            ReasonCode::R201_TURN_CONFIRMED,
                            Some(event),
                        )
                    } else {
                        // Nothing committed, cooldown clock untouched
                        IngestOutput::new(code, stable_count, None, ReasonCode::R202_TURN_REJECTED, None)
                    }
                }
            }
        };

        // Step 5: history update is unconditional, whether or not a
        // candidate fired
        self.history.push(code);

        output
    }

    /// Remaining cooldown at `now`, or None if the gate is open
    fn cooldown_remaining(&self, now: Instant) -> Option<Duration> {
        let last = self.last_confirmed_at?;
        let elapsed = now.saturating_duration_since(last);
        if elapsed > self.cooldown {
            None
        } else {
            Some(self.cooldown - elapsed)
        }
    }

    /// The accumulated log of confirmed turns
    pub fn log(&self) -> &TurnLog {
        &self.log
    }

    /// Snapshot of the recent-history window, oldest first
    pub fn history(&self) -> Vec<RawCode> {
        self.history.to_vec()
    }

    /// When the last turn was confirmed, if any
    pub fn last_confirmed_at(&self) -> Option<Instant> {
        self.last_confirmed_at
    }

    /// Number of arrivals ingested
    pub fn ingest_count(&self) -> u64 {
        self.ingest_count
    }

    /// Reset to the initial session state, dropping the log
    pub fn reset(&mut self) {
        let classifier = self.classifier.clone();
        *self = Self::with_classifier(classifier)
            .with_cooldown(self.cooldown)
            .with_stability_threshold(self.stability_threshold);
    }
}

// =============================================================================
// TESTS
// =============================================================================
