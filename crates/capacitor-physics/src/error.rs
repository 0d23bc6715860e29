//! Errors raised when the parameters leave the formula undefined

use std::error::Error;
use std::fmt;

/// Reason a trajectory could not be computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// An input is NaN or infinite.
    NonFinite { quantity: &'static str },
    ZeroMass,
    ZeroPlateDistance,
    ZeroVelocity,
    /// Field and gravity cancel out, the particle never reaches a plate.
    ZeroAcceleration,
    /// The acceleration or exit distance overflowed or underflowed, so the
    /// path cannot be sampled.
    UnrepresentableExit,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DomainError::NonFinite { quantity } => {
                write!(f, "{} must be a finite number", quantity)
            }
            DomainError::ZeroMass => write!(f, "mass must not be zero"),
            DomainError::ZeroPlateDistance => write!(f, "plate distance must not be zero"),
            DomainError::ZeroVelocity => write!(f, "initial velocity must not be zero"),
            DomainError::ZeroAcceleration => {
                write!(f, "net acceleration is zero, the particle never reaches a plate")
            }
            DomainError::UnrepresentableExit => {
                write!(f, "exit distance is out of floating-point range")
            }
        }
    }
}

impl Error for DomainError {}
