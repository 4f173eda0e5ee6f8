//! Face and rotation-direction definitions

use serde::{Deserialize, Serialize};

/// Rotation direction of a face turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Codes 1-12
    Clockwise,
    /// Codes 13-24
    CounterClockwise,
}

impl Direction {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Direction::Clockwise => "\x1b[32m",        // Green
            Direction::CounterClockwise => "\x1b[36m", // Cyan
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Short arrow for compact display
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Clockwise => "↻",
            Direction::CounterClockwise => "↺",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Clockwise => "clockwise",
            Direction::CounterClockwise => "counter-clockwise",
        };
        write!(f, "{}", name)
    }
}

/// A puzzle face: numeric id (1-12) plus its display label (a color name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    /// Face id, 1-12
    pub id: u8,
    /// Display label, e.g. "white"
    pub label: String,
}

impl Face {
    /// Create a face with an id and label
    pub fn new(id: u8, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Clockwise.to_string(), "clockwise");
        assert_eq!(Direction::CounterClockwise.to_string(), "counter-clockwise");
    }

    #[test]
    fn test_direction_serde_screaming_snake() {
        let json = serde_json::to_string(&Direction::CounterClockwise).unwrap();
        assert_eq!(json, "\"COUNTER_CLOCKWISE\"");
    }

    #[test]
    fn test_face_display_uses_label() {
        let face = Face::new(5, "white");
        assert_eq!(face.to_string(), "white");
    }
}
