use std::fmt;
use thiserror::Error;

/// Screen axis, used to report which dimension failed a bounds check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FittsError {
    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    #[error("Viewport too small on the {axis} axis: {available}px available, {required}px required")]
    ViewportTooSmall {
        axis: Axis,
        available: f64,
        required: f64,
    },

    #[error("Participant name must not be empty")]
    EmptyParticipantName,

    #[error("Session has already been started")]
    SessionAlreadyStarted,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, FittsError>;
