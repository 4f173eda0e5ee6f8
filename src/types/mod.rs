//! Core types for turnlock

mod face;
mod history;
mod output;
mod reason;
mod turn;

pub use face::{Direction, Face};
pub use history::RecentHistory;
pub use output::IngestOutput;
pub use reason::{LogIoReason, ReasonCode};
pub use turn::{RawCode, TurnEvent, TurnLog};
