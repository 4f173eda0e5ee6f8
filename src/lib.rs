//! turnlock: Megaminx turn listener core
//!
//! Pipeline: raw code → Stabilizer (history + gates) → Classifier →
//! confirmation oracle → TurnLog

pub mod core;
pub mod types;

// =============================================================================
// STABILIZATION CONSTANTS
// =============================================================================

/// Capacity of the recent-history window (raw codes)
pub const HISTORY_CAPACITY: usize = 4;

/// Consistent readings required within the window before a code is a
/// candidate, counting the arrival itself
pub const STABILITY_THRESHOLD: usize = 3;

/// Minimum quiet time after a confirmed turn before the next candidate
/// may be proposed (milliseconds)
pub const COOLDOWN_MS: u64 = 1000;

// =============================================================================
// CODE DOMAIN
// =============================================================================

/// Number of faces on the puzzle
pub const FACE_COUNT: u8 = 12;

/// Lowest valid raw code (face 1, clockwise)
pub const RAW_CODE_MIN: u8 = 1;

/// Highest valid raw code (face 12, counter-clockwise)
pub const RAW_CODE_MAX: u8 = 24;

// =============================================================================
// SESSION
// =============================================================================

/// Default listening window for a channel-driven session (seconds)
pub const DEFAULT_LISTEN_SECS: u64 = 300;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
