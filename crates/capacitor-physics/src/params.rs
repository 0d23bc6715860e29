//! Input parameters of a single run

use crate::constants::G_ACCEL;
use crate::error::DomainError;

/// Physical description of the particle and the capacitor, in SI units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalParameters {
    /// Particle mass (kg)
    pub mass: f64,
    /// Particle charge (C)
    pub charge: f64,
    /// Voltage across the plates (V)
    pub voltage: f64,
    /// Distance between the plates (m)
    pub plate_distance: f64,
    /// Velocity parallel to the plates at entry (m/s)
    pub initial_velocity: f64,
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            mass: 1.0e-11,
            charge: -1.8e-14,
            voltage: 5000.0,
            plate_distance: 2.32e-2,
            initial_velocity: 3.0,
        }
    }
}

impl PhysicalParameters {
    pub fn new(
        mass: f64,
        charge: f64,
        voltage: f64,
        plate_distance: f64,
        initial_velocity: f64,
    ) -> Self {
        Self {
            mass,
            charge,
            voltage,
            plate_distance,
            initial_velocity,
        }
    }

    /// Net transverse acceleration: `a = g + q·U / (m·d)`.
    ///
    /// The field between the plates is `E = U / d`, so the electric term is
    /// `q·E / m`. Not checked for division by zero, see [`Self::validate`].
    pub fn acceleration(&self) -> f64 {
        G_ACCEL + self.charge * self.voltage / (self.mass * self.plate_distance)
    }

    /// Reject parameters for which the trajectory formula is undefined.
    pub fn validate(&self) -> Result<(), DomainError> {
        let quantities = [
            ("mass", self.mass),
            ("charge", self.charge),
            ("voltage", self.voltage),
            ("plate distance", self.plate_distance),
            ("initial velocity", self.initial_velocity),
        ];
        for (quantity, value) in quantities {
            if !value.is_finite() {
                return Err(DomainError::NonFinite { quantity });
            }
        }

        if self.mass == 0.0 {
            return Err(DomainError::ZeroMass);
        }
        if self.plate_distance == 0.0 {
            return Err(DomainError::ZeroPlateDistance);
        }
        if self.initial_velocity == 0.0 {
            return Err(DomainError::ZeroVelocity);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_form_defaults() {
        let params = PhysicalParameters::default();
        assert_eq!(params.mass, 1.0e-11);
        assert_eq!(params.charge, -1.8e-14);
        assert_eq!(params.voltage, 5000.0);
        assert_eq!(params.plate_distance, 2.32e-2);
        assert_eq!(params.initial_velocity, 3.0);
    }

    #[test]
    fn test_acceleration_combines_field_and_gravity() {
        let params = PhysicalParameters::new(1.0e-11, -1.8e-14, 5000.0, 2.32e-2, 30.0);
        let expected = 9.8 + (-1.8e-14 * 5000.0) / (1.0e-11 * 2.32e-2);
        assert!((params.acceleration() - expected).abs() < 1e-9);
        assert!((params.acceleration() + 378.131).abs() < 1e-3);
    }

    #[test]
    fn test_acceleration_without_charge_is_gravity() {
        let params = PhysicalParameters::new(1.0, 0.0, 100.0, 0.1, 1.0);
        assert_eq!(params.acceleration(), G_ACCEL);
    }

    #[test]
    fn test_validate_rejects_zero_divisors() {
        let base = PhysicalParameters::default();

        let zero_mass = PhysicalParameters { mass: 0.0, ..base };
        assert_eq!(zero_mass.validate(), Err(DomainError::ZeroMass));

        let zero_distance = PhysicalParameters {
            plate_distance: 0.0,
            ..base
        };
        assert_eq!(zero_distance.validate(), Err(DomainError::ZeroPlateDistance));

        let zero_velocity = PhysicalParameters {
            initial_velocity: 0.0,
            ..base
        };
        assert_eq!(zero_velocity.validate(), Err(DomainError::ZeroVelocity));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let params = PhysicalParameters {
            voltage: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(DomainError::NonFinite {
                quantity: "voltage"
            })
        );
    }

    #[test]
    fn test_validate_accepts_negative_values() {
        let params = PhysicalParameters::new(-1.0, -1.0, -1.0, -1.0, -1.0);
        assert!(params.validate().is_ok());
    }
}
