//! Confirmation oracle: the external yes/no gate for candidate turns
//!
//! The oracle call blocks the whole pipeline until answered; that is what
//! keeps the log and cooldown clock serialized. Any non-affirmative answer
//! (including a failed read) is a rejection - never silently commit.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

lazy_static! {
    // Free-text affirmatives; "j"/"ja" kept from the original sensor operators
    static ref RE_AFFIRMATIVE: Regex = Regex::new(
        r"(?i)^\s*(y|yes|yeah|yep|j|ja|ok|okay|sure|correct)\s*$"
    ).unwrap();
}

/// Interpret a free-text answer; anything non-affirmative is a rejection
pub fn is_affirmative(answer: &str) -> bool {
    RE_AFFIRMATIVE.is_match(answer)
}

/// External yes/no decision source gating commit of a candidate event
pub trait ConfirmationOracle {
    /// Present a candidate description, block until answered
    fn confirm(&mut self, description: &str) -> bool;
}

/// Interactive oracle: prompt on stdout, read one line from stdin
#[derive(Debug, Default)]
pub struct ConsoleOracle;

impl ConsoleOracle {
    /// Create a console oracle
    pub fn new() -> Self {
        Self
    }
}

impl ConfirmationOracle for ConsoleOracle {
    fn confirm(&mut self, description: &str) -> bool {
        print!("{}. Is that correct? (y/n): ", description);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => false, // EOF = rejection
            Ok(_) => is_affirmative(&line),
            Err(_) => false,
        }
    }
}

/// Non-interactive oracle giving the same answer to every request
#[derive(Debug)]
pub struct AutoOracle {
    answer: bool,
    requests: u64,
}

impl AutoOracle {
    /// Oracle that accepts everything
    pub fn accept() -> Self {
        Self {
            answer: true,
            requests: 0,
        }
    }

    /// Oracle that rejects everything
    pub fn reject() -> Self {
        Self {
            answer: false,
            requests: 0,
        }
    }

    /// How many confirmation requests were issued
    pub fn request_count(&self) -> u64 {
        self.requests
    }
}

impl ConfirmationOracle for AutoOracle {
    fn confirm(&mut self, _description: &str) -> bool {
        self.requests += 1;
        self.answer
    }
}

/// Scripted oracle: pops pre-seeded answers and records every description.
/// Runs out of script = rejection (fail-safe).
#[derive(Debug, Default)]
pub struct ScriptedOracle {
    answers: VecDeque<bool>,
    requests: Vec<String>,
}

impl ScriptedOracle {
    /// Create an oracle that will answer with the given sequence
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            requests: Vec::new(),
        }
    }

    /// Descriptions of every confirmation request issued so far
    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    /// How many confirmation requests were issued
    pub fn request_count(&self) -> usize {
        self.requests.len()
    }
}

impl ConfirmationOracle for ScriptedOracle {
    fn confirm(&mut self, description: &str) -> bool {
        self.requests.push(description.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

// =============================================================================
// TESTS
// =============================================================================
