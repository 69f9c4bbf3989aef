//! Initialization errors
//!
//! Only setup can fail. Once a `GameState` exists the tick loop normalizes
//! every condition in place and never returns an error.

use std::fmt;

#[derive(Debug)]
pub enum InitError {
    /// World or viewport has a non-positive or non-finite dimension
    InvalidWorld { width: f32, height: f32 },
    /// At least one landing pad is required
    NoLandingPads,
    /// A landing pad does not fit inside the world
    PadOutsideWorld { index: usize },
    /// A per-tick probability is outside [0, 1]
    InvalidProbability { name: &'static str, value: f64 },
    /// A speed, range or fraction is negative, out of range or not finite
    InvalidTuning { name: &'static str, value: f32 },
    /// Craft geometry or starting values are unusable
    InvalidCraft { reason: &'static str },
    /// Config file could not be parsed
    Config(serde_json::Error),
    /// Config file could not be read
    Io(std::io::Error),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::InvalidWorld { width, height } => {
                write!(f, "invalid world dimensions {width}x{height}")
            }
            InitError::NoLandingPads => write!(f, "no landing pads configured"),
            InitError::PadOutsideWorld { index } => {
                write!(f, "landing pad {index} lies outside the world")
            }
            InitError::InvalidProbability { name, value } => {
                write!(f, "probability `{name}` out of range: {value}")
            }
            InitError::InvalidTuning { name, value } => {
                write!(f, "tuning value `{name}` out of range: {value}")
            }
            InitError::InvalidCraft { reason } => write!(f, "invalid craft setup: {reason}"),
            InitError::Config(e) => write!(f, "failed to parse config: {e}"),
            InitError::Io(e) => write!(f, "failed to read config: {e}"),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Config(e) => Some(e),
            InitError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for InitError {
    fn from(e: serde_json::Error) -> Self {
        InitError::Config(e)
    }
}

impl From<std::io::Error> for InitError {
    fn from(e: std::io::Error) -> Self {
        InitError::Io(e)
    }
}
