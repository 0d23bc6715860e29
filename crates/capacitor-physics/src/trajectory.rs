//! Trajectory sampling between the plates
//!
//! The particle enters on the mid-plane with velocity `v` parallel to the
//! plates and no transverse velocity. Under the constant transverse
//! acceleration `a` it drifts `y = a·t²/2` while covering `x = v·t`.

use glam::DVec2;

use crate::constants::POINTS_COUNT;
use crate::error::DomainError;
use crate::params::PhysicalParameters;

/// A single `(x, y)` point of the path, in metres.
pub type TrajectorySample = DVec2;

/// Sampled path of one run together with the values derived along the way.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
    acceleration: f64,
    initial_velocity: f64,
}

impl Trajectory {
    /// All `POINTS_COUNT + 1` samples, starting at `x = 0`.
    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// Net transverse acceleration used for this path (m/s²).
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// Horizontal distance covered before the particle reaches a plate.
    pub fn final_x(&self) -> f64 {
        self.last_sample().x
    }

    /// Transverse displacement at exit.
    pub fn final_y(&self) -> f64 {
        self.last_sample().y
    }

    /// Time spent between the plates, `final_x / v`.
    pub fn elapsed_time(&self) -> f64 {
        self.final_x() / self.initial_velocity
    }

    fn last_sample(&self) -> TrajectorySample {
        // Never empty: construction always pushes POINTS_COUNT + 1 samples.
        self.samples[self.samples.len() - 1]
    }
}

/// Compute the path of a charged particle through the capacitor.
///
/// The exit distance is `last_x = v·sqrt(|d / a|)`. The absolute value is
/// taken unconditionally, so the sign of `d / a` never rejects a run.
pub fn calc_charge_path(params: &PhysicalParameters) -> Result<Trajectory, DomainError> {
    params.validate()?;

    let a = params.acceleration();
    if a == 0.0 {
        return Err(DomainError::ZeroAcceleration);
    }
    if !a.is_finite() {
        return Err(DomainError::UnrepresentableExit);
    }

    let v = params.initial_velocity;
    let last_x = v * (params.plate_distance / a).abs().sqrt();
    // A subnormal step would round neighbouring samples onto the same x.
    if !last_x.is_finite() || !(last_x / POINTS_COUNT as f64).is_normal() {
        return Err(DomainError::UnrepresentableExit);
    }

    log::debug!("a = {a}, last_x = {last_x}");

    let samples: Vec<TrajectorySample> = (0..=POINTS_COUNT)
        .map(|i| {
            let x = last_x * i as f64 / POINTS_COUNT as f64;
            let t = x / v;
            DVec2::new(x, a * t * t / 2.0)
        })
        .collect();

    if !samples[POINTS_COUNT].y.is_normal() {
        return Err(DomainError::UnrepresentableExit);
    }

    Ok(Trajectory {
        samples,
        acceleration: a,
        initial_velocity: v,
    })
}
