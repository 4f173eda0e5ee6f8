//! Confirmed turn events and the session log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Direction, Face};

/// A raw sensor reading: face + direction packed into one byte (1-24)
pub type RawCode = u8;

/// A single confirmed face turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnEvent {
    /// When the turn was detected
    pub timestamp: DateTime<Utc>,
    /// Which face was turned
    pub face: Face,
    /// Rotation direction
    pub direction: Direction,
}

impl TurnEvent {
    /// Create an event stamped with the given time
    pub fn new(timestamp: DateTime<Utc>, face: Face, direction: Direction) -> Self {
        Self {
            timestamp,
            face,
            direction,
        }
    }

    /// Human-readable description, as shown to the confirmation oracle
    pub fn description(&self) -> String {
        format!("The {} face was turned {}", self.face, self.direction)
    }
}

impl std::fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.face,
            self.direction
        )
    }
}

/// Append-only ordered log of confirmed turns
///
/// The one permitted removal is `pop_last` immediately after an append,
/// for rolling back a rejected confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurnLog {
    events: Vec<TurnEvent>,
}

impl TurnLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a confirmed event
    pub fn append(&mut self, event: TurnEvent) {
        self.events.push(event);
    }

    /// Remove and return the most recent event (rejection rollback)
    pub fn pop_last(&mut self) -> Option<TurnEvent> {
        self.events.pop()
    }

    /// Number of confirmed events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events, oldest first
    pub fn events(&self) -> &[TurnEvent] {
        &self.events
    }

    /// The most recent event, if any
    pub fn last(&self) -> Option<&TurnEvent> {
        self.events.last()
    }
}

// =============================================================================
// TESTS
// =============================================================================
