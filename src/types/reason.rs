//! Reason codes for ingest decisions and log IO

use serde::{Deserialize, Serialize};

/// Reason codes for every per-arrival outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // R1xx: Gates
    // =========================================================================
    /// Code seen fewer than STABILITY_THRESHOLD times in the window
    R101_STABILITY_NOT_MET,
    /// Stability met, but a confirmed turn happened within the cooldown window
    R102_COOLDOWN_ACTIVE,

    // =========================================================================
    // R2xx: Confirmation outcomes
    // =========================================================================
    /// Oracle accepted; event committed to the log
    R201_TURN_CONFIRMED,
    /// Oracle rejected (or failed); candidate discarded
    R202_TURN_REJECTED,

    // =========================================================================
    // R3xx: Classification
    // =========================================================================
    /// Code maps to no configured face; arrival recorded but discarded
    R301_UNKNOWN_FACE,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R101_STABILITY_NOT_MET => "R101_STABILITY_NOT_MET",
            Self::R102_COOLDOWN_ACTIVE => "R102_COOLDOWN_ACTIVE",
            Self::R201_TURN_CONFIRMED => "R201_TURN_CONFIRMED",
            Self::R202_TURN_REJECTED => "R202_TURN_REJECTED",
            Self::R301_UNKNOWN_FACE => "R301_UNKNOWN_FACE",
        }
    }

    /// Human-readable explanation
    pub fn description(&self) -> &'static str {
        match self {
            Self::R101_STABILITY_NOT_MET => "not enough repeats in the recent window",
            Self::R102_COOLDOWN_ACTIVE => "too soon after the last confirmed turn",
            Self::R201_TURN_CONFIRMED => "turn confirmed and logged",
            Self::R202_TURN_REJECTED => "turn rejected, nothing logged",
            Self::R301_UNKNOWN_FACE => "code outside the configured face table",
        }
    }

    /// Did this arrival commit an event to the log?
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::R201_TURN_CONFIRMED)
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Failure reasons for turn-log file IO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum LogIoReason {
    /// Log could not be serialized/deserialized
    R401_LOG_SERIALIZE_ERROR,
    /// Log file or directory could not be written/read
    R402_LOG_STORAGE_ERROR,
}

impl std::fmt::Display for LogIoReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::R401_LOG_SERIALIZE_ERROR => "R401_LOG_SERIALIZE_ERROR",
            Self::R402_LOG_STORAGE_ERROR => "R402_LOG_STORAGE_ERROR",
        };
        write!(f, "{}", name)
    }
}
