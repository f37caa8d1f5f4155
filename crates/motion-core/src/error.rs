//! Crate-level error type.
//!
//! Nothing here is ever user-visible: every caller degrades to a default
//! (the `Other` category, the configured ease) and logs at most a warning.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    #[error("unknown menu category tag {0:?}")]
    UnknownCategory(String),
    #[error("unknown ease {0:?}")]
    UnknownEase(String),
    #[error("magnetic force {0} is outside 0..={max}", max = crate::constants::MAGNETIC_FORCE_MAX)]
    InvalidForce(f32),
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, MotionError>;
