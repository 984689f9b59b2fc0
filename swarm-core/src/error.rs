//! Error types for swarm configuration.
//!
//! Per-frame operations never fail; only building or resizing a swarm
//! validates its inputs.

use core::fmt;

/// Rejected configuration or viewport values.
#[derive(Debug, Clone, PartialEq)]
pub enum SwarmError {
    /// Viewport dimensions must be finite and strictly positive.
    InvalidViewport { width: f32, height: f32 },
    /// Speeds must be finite, non-negative and `min <= max`.
    InvalidSpeedRange { min: f32, max: f32 },
    /// Agent radius must be finite and strictly positive.
    InvalidRadius(f32),
    /// A tuning parameter is outside its accepted range.
    InvalidParameter { name: &'static str, value: f32 },
}

impl fmt::Display for SwarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwarmError::InvalidViewport { width, height } => {
                write!(f, "Invalid viewport {}x{}: dimensions must be positive", width, height)
            }
            SwarmError::InvalidSpeedRange { min, max } => {
                write!(f, "Invalid speed range [{}, {}]", min, max)
            }
            SwarmError::InvalidRadius(radius) => {
                write!(f, "Invalid agent radius {}", radius)
            }
            SwarmError::InvalidParameter { name, value } => {
                write!(f, "Invalid value {} for {}", value, name)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SwarmError {}
