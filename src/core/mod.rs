//! Core modules for turnlock

pub mod classifier;
pub mod oracle;
pub mod session;
pub mod stabilizer;

pub use classifier::{Classifier, UnknownFaceError, DEFAULT_FACE_LABELS};
pub use oracle::{is_affirmative, AutoOracle, ConfirmationOracle, ConsoleOracle, ScriptedOracle};
pub use session::{load_log, run_session, save_log};
pub use stabilizer::Stabilizer;
