//! Code Classifier: raw sensor code → (Face, Direction)
//!
//! Codes 1-12 are clockwise turns of faces 1-12; codes 13-24 are
//! counter-clockwise turns of the same faces (code − 12 = face id).
//! Pure and total over the valid domain, no state.

use crate::types::{Direction, Face, RawCode};
use crate::FACE_COUNT;

/// Default face labels (faces 1-12), matching the sensor firmware's table
pub const DEFAULT_FACE_LABELS: [&str; FACE_COUNT as usize] = [
    "green",
    "black",
    "red",
    "brown",
    "white",
    "blue",
    "yellow",
    "dark gray",
    "dark blue",
    "light green",
    "purple",
    "orange",
];

/// Raw code falls outside the configured face table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownFaceError {
    /// The derived face id that had no table entry
    pub face_id: u8,
}

impl std::fmt::Display for UnknownFaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown face id {}", self.face_id)
    }
}

impl std::error::Error for UnknownFaceError {}

/// Pure mapping from raw codes to faces and directions
#[derive(Debug, Clone)]
pub struct Classifier {
    labels: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Create a classifier with the default color table
    pub fn new() -> Self {
        Self {
            labels: DEFAULT_FACE_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a classifier with custom labels (face 1 first)
    pub fn with_labels(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Classify a raw code into a face and rotation direction
    pub fn classify(&self, code: RawCode) -> Result<(Face, Direction), UnknownFaceError> {
        let (face_id, direction) = if code > FACE_COUNT {
            (code - FACE_COUNT, Direction::CounterClockwise)
        } else {
            (code, Direction::Clockwise)
        };

        let face = self.lookup(face_id)?;
        Ok((face, direction))
    }

    /// Resolve a face id (1-based) against the configured table
    fn lookup(&self, face_id: u8) -> Result<Face, UnknownFaceError> {
        if face_id == 0 {
            return Err(UnknownFaceError { face_id });
        }
        self.labels
            .get(face_id as usize - 1)
            .map(|label| Face::new(face_id, label.clone()))
            .ok_or(UnknownFaceError { face_id })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RAW_CODE_MAX, RAW_CODE_MIN};

    #[test]
    fn test_clockwise_codes() {
        let classifier = Classifier::new();
        let (face, direction) = classifier.classify(5).unwrap();
        assert_eq!(face.id, 5);
        assert_eq!(face.label, "white");
        assert_eq!(direction, Direction::Clockwise);
    }

    #[test]
    fn test_counter_clockwise_codes() {
        let classifier = Classifier::new();
        let (face, direction) = classifier.classify(17).unwrap();
        assert_eq!(face.id, 5);
        assert_eq!(face.label, "white");
        assert_eq!(direction, Direction::CounterClockwise);
    }

    #[test]
    fn test_full_domain_round_trip() {
        // For every code in 1..=24: face id = code mod 12 (12 for remainder 0),
        // clockwise iff code <= 12
        let classifier = Classifier::new();
        for code in RAW_CODE_MIN..=RAW_CODE_MAX {
            let (face, direction) = classifier.classify(code).unwrap();
            let expected_id = if code % 12 == 0 { 12 } else { code % 12 };
            assert_eq!(face.id, expected_id, "code {}", code);
            assert_eq!(
                direction == Direction::Clockwise,
                code <= 12,
                "code {}",
                code
            );
        }
    }

    #[test]
    fn test_boundary_codes() {
        let classifier = Classifier::new();

        let (face, direction) = classifier.classify(12).unwrap();
        assert_eq!((face.id, direction), (12, Direction::Clockwise));

        let (face, direction) = classifier.classify(13).unwrap();
        assert_eq!((face.id, direction), (1, Direction::CounterClockwise));

        let (face, direction) = classifier.classify(24).unwrap();
        assert_eq!((face.id, direction), (12, Direction::CounterClockwise));
    }

    #[test]
    fn test_unknown_face() {
        let classifier = Classifier::new();
        assert_eq!(classifier.classify(0), Err(UnknownFaceError { face_id: 0 }));
        assert_eq!(
            classifier.classify(25),
            Err(UnknownFaceError { face_id: 13 })
        );
        assert_eq!(
            classifier.classify(255),
            Err(UnknownFaceError { face_id: 243 })
        );
    }

    #[test]
    fn test_custom_labels() {
        let classifier = Classifier::with_labels(vec!["top".to_string(), "bottom".to_string()]);
        let (face, _) = classifier.classify(2).unwrap();
        assert_eq!(face.label, "bottom");

        // Face 3 not configured in a 2-entry table
        assert!(classifier.classify(3).is_err());
    }
}
