//! Physical-to-pixel mapping

use capacitor_physics::{DomainError, Trajectory, TrajectorySample};
use glam::Vec2;

/// Pixel distance from the canvas mid-line to each plate.
pub const CAPACITORS_SHIFT: f32 = 150.0;

/// Display scale of one drawn path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderScale {
    /// Horizontal pixels per metre, chosen by the user
    pub s: f64,
    /// Vertical pixels per metre, chosen so the exit point lands on a plate
    pub ky: f64,
}

impl RenderScale {
    /// Fails when the exit displacement is too small for `ky` to stay finite.
    pub fn for_trajectory(s: f64, trajectory: &Trajectory) -> Result<Self, DomainError> {
        let ky = CAPACITORS_SHIFT as f64 / trajectory.final_y().abs();
        if !ky.is_finite() || ky <= 0.0 {
            return Err(DomainError::UnrepresentableExit);
        }

        Ok(Self { s, ky })
    }

    /// Map a sample to canvas pixels; the particle enters at the left edge on
    /// the vertical centre of a canvas `height` pixels tall.
    pub fn to_pixels(&self, sample: TrajectorySample, height: f32) -> Vec2 {
        Vec2::new(
            (sample.x * self.s) as f32,
            (sample.y * self.ky) as f32 + height / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capacitor_physics::{calc_charge_path, PhysicalParameters};
    use glam::DVec2;

    #[test]
    fn test_ky_puts_exit_on_plate() {
        let params = PhysicalParameters::new(1.0e-11, -1.8e-14, 5000.0, 2.32e-2, 30.0);
        let trajectory = calc_charge_path(&params).unwrap();
        let scale = RenderScale::for_trajectory(1000.0, &trajectory).unwrap();

        assert!((scale.ky * trajectory.final_y().abs() - 150.0).abs() < 1e-9);

        let exit = scale.to_pixels(*trajectory.samples().last().unwrap(), 600.0);
        assert!((exit.y - (300.0 - CAPACITORS_SHIFT)).abs() < 1e-3);
        assert!((exit.x - 234.987).abs() < 1e-2);
    }

    #[test]
    fn test_overflowing_ky_rejected() {
        // Exit displacement d/2 = 5e-307 is normal, but 150 / 5e-307 overflows.
        let params = PhysicalParameters::new(1.0, 0.0, 0.0, 1.0e-306, 1.0);
        let trajectory = calc_charge_path(&params).unwrap();

        assert_eq!(
            RenderScale::for_trajectory(1000.0, &trajectory),
            Err(DomainError::UnrepresentableExit)
        );
    }

    #[test]
    fn test_accepted_scale_maps_every_sample_finitely() {
        let params = PhysicalParameters::new(1.0, 0.0, 0.0, 1.0e-300, 1.0);
        let trajectory = calc_charge_path(&params).unwrap();
        let scale = RenderScale::for_trajectory(1000.0, &trajectory).unwrap();

        assert!(trajectory
            .samples()
            .iter()
            .all(|&sample| scale.to_pixels(sample, 600.0).is_finite()));
    }

    #[test]
    fn test_origin_maps_to_left_middle() {
        let scale = RenderScale { s: 10.0, ky: 5.0 };
        assert_eq!(scale.to_pixels(DVec2::ZERO, 400.0), Vec2::new(0.0, 200.0));
        assert_eq!(
            scale.to_pixels(DVec2::new(2.0, -4.0), 400.0),
            Vec2::new(20.0, 180.0)
        );
    }
}
