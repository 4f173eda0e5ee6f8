//! Integration tests for the channel-driven session
//!
//! The session loop is the single consumer that serializes arrivals; the
//! transport side only pushes codes into the channel.

use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::sync::mpsc;

use turnlock::core::{load_log, run_session, save_log, AutoOracle, ScriptedOracle, Stabilizer};
use turnlock::types::{RawCode, ReasonCode};

/// A full noisy transmission drains through the session in arrival order
#[tokio::test]
async fn test_noisy_stream_end_to_end() {
    let (tx, rx) = mpsc::channel(64);
    let mut stabilizer = Stabilizer::new();
    let mut oracle = AutoOracle::accept();

    // Sensor chatter: a stray 3, then a stable run of 5s
    let feeder = tokio::spawn(async move {
        for code in [3u8, 5, 5, 5, 5] {
            tx.send(code).await.unwrap();
        }
    });

    let mut reasons = Vec::new();
    let processed = run_session(
        rx,
        &mut stabilizer,
        &mut oracle,
        Duration::from_secs(5),
        |output| reasons.push(output.reason),
    )
    .await;
    feeder.await.unwrap();

    assert_eq!(processed, 5);
    assert_eq!(
        reasons,
        vec![
            ReasonCode::R101_STABILITY_NOT_MET,
            ReasonCode::R101_STABILITY_NOT_MET,
            ReasonCode::R101_STABILITY_NOT_MET,
            ReasonCode::R201_TURN_CONFIRMED,
            ReasonCode::R102_COOLDOWN_ACTIVE,
        ]
    );
    assert_eq!(stabilizer.log().len(), 1);
}

/// The listening window ends the session even with the sender still open
#[tokio::test]
async fn test_listening_window_elapses() {
    let (tx, rx) = mpsc::channel::<RawCode>(8);
    let mut stabilizer = Stabilizer::new();
    let mut oracle = AutoOracle::accept();

    let processed = run_session(
        rx,
        &mut stabilizer,
        &mut oracle,
        Duration::from_millis(50),
        |_| {},
    )
    .await;

    assert_eq!(processed, 0);
    assert!(stabilizer.log().is_empty());
    drop(tx);
}

/// Closing the transport ends the session before the deadline
#[tokio::test]
async fn test_transport_close_ends_session() {
    let (tx, rx) = mpsc::channel(8);
    let mut stabilizer = Stabilizer::new();
    let mut oracle = AutoOracle::accept();

    tx.send(7).await.unwrap();
    drop(tx);

    let processed = run_session(
        rx,
        &mut stabilizer,
        &mut oracle,
        Duration::from_secs(60),
        |_| {},
    )
    .await;

    assert_eq!(processed, 1);
}

/// Rejections inside a session leave the log empty
#[tokio::test]
async fn test_session_with_rejecting_oracle() {
    let (tx, rx) = mpsc::channel(8);
    let mut stabilizer = Stabilizer::new();
    let mut oracle = ScriptedOracle::new([false]);

    for code in [9u8, 9, 9] {
        tx.send(code).await.unwrap();
    }
    drop(tx);

    run_session(
        rx,
        &mut stabilizer,
        &mut oracle,
        Duration::from_secs(5),
        |_| {},
    )
    .await;

    assert_eq!(oracle.request_count(), 1);
    assert_eq!(oracle.requests(), &["The dark blue face was turned clockwise"]);
    assert!(stabilizer.log().is_empty());
}

/// The session's final artifact survives a save/load round trip
#[tokio::test]
async fn test_session_log_persists() {
    let (tx, rx) = mpsc::channel(8);
    let mut stabilizer = Stabilizer::new();
    let mut oracle = AutoOracle::accept();

    for code in [11u8, 11, 11] {
        tx.send(code).await.unwrap();
    }
    drop(tx);

    run_session(
        rx,
        &mut stabilizer,
        &mut oracle,
        Duration::from_secs(5),
        |_| {},
    )
    .await;
    assert_eq!(stabilizer.log().len(), 1);

    let dir = std::env::temp_dir().join("turnlock_session_integration");
    let dir = dir.to_str().unwrap();
    let path = save_log(stabilizer.log(), dir).unwrap();

    let restored = load_log(&path).unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(restored.events()[0].face.label, "purple");

    let _ = std::fs::remove_file(&path);
}
