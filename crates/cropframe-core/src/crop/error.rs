//! Error types for crop intents the engine refuses.
//!
//! None of these are fatal: the engine state is left exactly as it was.

use thiserror::Error;

/// A ratio selection that does not name a known preset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatioError {
    /// Numeric selection code outside the preset table.
    #[error("Unknown crop ratio code: {0}")]
    Unknown(u32),

    /// Preset name that could not be parsed.
    #[error("Unknown crop ratio name: {0}")]
    UnknownName(String),
}

/// A rotation value the engine cannot represent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AngleError {
    /// Coarse rotation must be a whole number of quarter turns.
    #[error("Rotation angle {0} is not a multiple of 90 degrees")]
    NotQuarterTurn(f64),
}
