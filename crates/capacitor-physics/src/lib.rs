//! # Capacitor Physics
//!
//! Closed-form kinematics of a charged particle crossing the uniform field
//! between two parallel plates, with gravity acting along the same axis.

pub mod constants;
pub mod error;
pub mod params;
pub mod trajectory;

pub use constants::*;
pub use error::*;
pub use params::*;
pub use trajectory::*;
