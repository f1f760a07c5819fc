use serde::{Deserialize, Serialize};
use std::fmt;

/// Movement direction sign attached to each trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn sign(&self) -> i8 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }

    pub fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            1 => Some(Direction::Positive),
            -1 => Some(Direction::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}

/// Recorded result per trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub trial_id: usize,
    /// Sampled displacement in pixels
    pub distance: u32,
    /// Side length of the newly placed target
    pub size: u32,
    pub direction: Direction,
    /// Milliseconds since the previous click
    pub elapsed_ms: u64,
    /// From the click that closed the trial to the new target's top-left corner
    pub distance_travelled: f64,
    pub misclicks: u32,
}
