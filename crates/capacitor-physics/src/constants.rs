//! Physical and sampling constants for the trajectory calculator

/// Local gravitational acceleration (m/s²)
///
/// Added to the field term, so a positive field acceleration pushes the
/// particle the same way gravity does.
pub const G_ACCEL: f64 = 9.8;

/// Number of equal sub-intervals the exit distance is split into.
/// A path holds `POINTS_COUNT + 1` samples.
pub const POINTS_COUNT: usize = 1000;
