//! Output structure for terminal display

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{RawCode, ReasonCode, TurnEvent};

/// Per-arrival output: what the stabilizer decided and why
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// The raw code that arrived
    pub code: RawCode,
    /// Occurrences of this code among the last few readings, counting
    /// the arrival itself
    pub stable_count: usize,
    /// Remaining cooldown (milliseconds), if the cooldown gate blocked
    pub cooldown_remaining_ms: Option<u64>,
    /// Why the arrival resolved the way it did
    pub reason: ReasonCode,
    /// The committed event, present only on confirmation
    pub event: Option<TurnEvent>,
}

impl IngestOutput {
    /// Create new output
    pub fn new(
        code: RawCode,
        stable_count: usize,
        cooldown_remaining_ms: Option<u64>,
        reason: ReasonCode,
        event: Option<TurnEvent>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            code,
            stable_count,
            cooldown_remaining_ms,
            reason,
            event,
        }
    }

    /// ANSI color for this outcome
    pub fn color_code(&self) -> &'static str {
        match self.reason {
            ReasonCode::R201_TURN_CONFIRMED => "\x1b[32m", // Green
            ReasonCode::R202_TURN_REJECTED => "\x1b[31m",  // Red
            ReasonCode::R301_UNKNOWN_FACE => "\x1b[33m",   // Yellow
            _ => "\x1b[90m",                               // Gray
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.color_code();
        let reset = "\x1b[0m";

        match &self.event {
            Some(event) => format!(
                "{}✓ code={} | {} {} | {}{}",
                color,
                self.code,
                event.face,
                event.direction.arrow(),
                self.reason.code(),
                reset
            ),
            None => format!(
                "{}  code={} | seen={} | {}{}",
                color,
                self.code,
                self.stable_count,
                self.reason.code(),
                reset
            ),
        }
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let event = self
            .event
            .as_ref()
            .map(|e| format!("{} {}", e.face, e.direction))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "code={} | seen={} | reason={} | event={}",
            self.code,
            self.stable_count,
            self.reason.code(),
            event
        )
    }
}
