//! Parameter form: mantissa/exponent inputs and result formatting

use capacitor_physics::PhysicalParameters;
use std::error::Error;
use std::fmt;

/// Longest mantissa the text fields accept.
pub const MAXIMUM_INPUT_SIZE: usize = 15;

/// Inclusive range of the power-of-ten spin controls.
pub const EXPONENT_MIN: i32 = -40;
pub const EXPONENT_MAX: i32 = 40;

/// Characters kept when showing a computed result.
pub const RESULT_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    Empty { field: &'static str },
    InvalidNumber { field: &'static str, text: String },
    ExponentOutOfRange { field: &'static str, exponent: i32 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputError::Empty { field } => write!(f, "{} is empty", field),
            InputError::InvalidNumber { field, text } => {
                write!(f, "{} is not a number: {:?}", field, text)
            }
            InputError::ExponentOutOfRange { field, exponent } => write!(
                f,
                "{} exponent {} is outside {}..={}",
                field, exponent, EXPONENT_MIN, EXPONENT_MAX
            ),
        }
    }
}

impl Error for InputError {}

/// One form row: `mantissa · 10^exponent`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityInput {
    pub label: &'static str,
    pub mantissa: String,
    pub exponent: i32,
}

impl QuantityInput {
    pub fn new(label: &'static str, mantissa: &str, exponent: i32) -> Self {
        Self {
            label,
            mantissa: mantissa.to_string(),
            exponent,
        }
    }

    /// Parse the mantissa (`,` or `.` as decimal separator) and apply the
    /// decimal exponent.
    pub fn value(&self) -> Result<f64, InputError> {
        let text = self.mantissa.trim();
        if text.is_empty() {
            return Err(InputError::Empty { field: self.label });
        }
        if !(EXPONENT_MIN..=EXPONENT_MAX).contains(&self.exponent) {
            return Err(InputError::ExponentOutOfRange {
                field: self.label,
                exponent: self.exponent,
            });
        }

        let mantissa: f64 =
            text.replace(',', ".")
                .parse()
                .map_err(|_| InputError::InvalidNumber {
                    field: self.label,
                    text: self.mantissa.clone(),
                })?;
        if !mantissa.is_finite() {
            return Err(InputError::InvalidNumber {
                field: self.label,
                text: self.mantissa.clone(),
            });
        }

        Ok(apply_exponent(mantissa, self.exponent))
    }
}

/// `mantissa · 10^exponent`.
pub fn apply_exponent(mantissa: f64, exponent: i32) -> f64 {
    mantissa * 10f64.powi(exponent)
}

/// Float text cut to [`RESULT_WIDTH`] characters.
///
/// Magnitudes below 1e-4 or from 1e16 up use scientific notation; there the
/// mantissa is shortened so the exponent always survives.
pub fn format_result(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || (1e-4..1e16).contains(&magnitude) || !value.is_finite() {
        return format!("{}", value).chars().take(RESULT_WIDTH).collect();
    }

    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let keep = RESULT_WIDTH.saturating_sub(exponent.len() + 1);
            let mantissa: String = mantissa.chars().take(keep).collect();
            format!("{}e{}", mantissa.trim_end_matches('.'), exponent)
        }
        None => text.chars().take(RESULT_WIDTH).collect(),
    }
}

/// All inputs of the right-hand menu plus the result labels.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mass: QuantityInput,
    pub charge: QuantityInput,
    pub voltage: QuantityInput,
    pub distance: QuantityInput,
    pub velocity: QuantityInput,
    pub scale: QuantityInput,
    pub distance_result: String,
    pub time_result: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            mass: QuantityInput::new("m", "1", -11),
            charge: QuantityInput::new("q", "-1,8", -14),
            voltage: QuantityInput::new("U", "5000", 0),
            distance: QuantityInput::new("d", "2,32", -2),
            velocity: QuantityInput::new("v", "3", 0),
            scale: QuantityInput::new("scale", "1000", 0),
            distance_result: String::new(),
            time_result: String::new(),
        }
    }
}

impl FormState {
    /// Compose the physical parameters and the horizontal display scale.
    pub fn read(&self) -> Result<(PhysicalParameters, f64), InputError> {
        let params = PhysicalParameters::new(
            self.mass.value()?,
            self.charge.value()?,
            self.voltage.value()?,
            self.distance.value()?,
            self.velocity.value()?,
        );
        Ok((params, self.scale.value()?))
    }

    pub fn set_results(&mut self, final_x: f64, elapsed_time: f64) {
        self.distance_result = format_result(final_x);
        self.time_result = format_result(elapsed_time);
    }

    /// Clear the physical mantissas and the results; exponents and the scale
    /// stay as they are.
    pub fn reset(&mut self) {
        for input in [
            &mut self.mass,
            &mut self.charge,
            &mut self.voltage,
            &mut self.distance,
            &mut self.velocity,
        ] {
            input.mantissa.clear();
        }
        self.distance_result.clear();
        self.time_result.clear();
    }

    pub fn rows_mut(&mut self) -> [&mut QuantityInput; 6] {
        [
            &mut self.mass,
            &mut self.charge,
            &mut self.voltage,
            &mut self.distance,
            &mut self.velocity,
            &mut self.scale,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_decimal_with_exponent() {
        let input = QuantityInput::new("d", "2,32", -2);
        assert!((input.value().unwrap() - 0.0232).abs() < 1e-15);
    }

    #[test]
    fn test_empty_mantissa_rejected() {
        let input = QuantityInput::new("m", "  ", 3);
        assert_eq!(input.value(), Err(InputError::Empty { field: "m" }));
    }

    #[test]
    fn test_garbage_mantissa_rejected() {
        let input = QuantityInput::new("q", "1.2.3", 0);
        assert!(matches!(
            input.value(),
            Err(InputError::InvalidNumber { field: "q", .. })
        ));

        let input = QuantityInput::new("q", "inf", 0);
        assert!(matches!(
            input.value(),
            Err(InputError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_exponent_range() {
        assert!(QuantityInput::new("U", "1", 40).value().is_ok());
        assert!(QuantityInput::new("U", "1", -40).value().is_ok());
        assert_eq!(
            QuantityInput::new("U", "1", 41).value(),
            Err(InputError::ExponentOutOfRange {
                field: "U",
                exponent: 41
            })
        );
    }

    #[test]
    fn test_default_form_reads_default_parameters() {
        let (params, scale) = FormState::default().read().unwrap();
        let expected = PhysicalParameters::default();

        assert!((params.mass - expected.mass).abs() < 1e-25);
        assert!((params.charge - expected.charge).abs() < 1e-28);
        assert_eq!(params.voltage, expected.voltage);
        assert!((params.plate_distance - expected.plate_distance).abs() < 1e-15);
        assert_eq!(params.initial_velocity, expected.initial_velocity);
        assert_eq!(scale, 1000.0);
    }

    #[test]
    fn test_reset_clears_physical_inputs_and_results() {
        let mut form = FormState::default();
        form.set_results(0.2349871346, 0.0078329044);
        form.reset();

        assert!(form.mass.mantissa.is_empty());
        assert!(form.velocity.mantissa.is_empty());
        assert_eq!(form.mass.exponent, -11);
        assert_eq!(form.scale.mantissa, "1000");
        assert!(form.distance_result.is_empty());
        assert!(form.time_result.is_empty());
        assert_eq!(form.read(), Err(InputError::Empty { field: "m" }));
    }

    #[test]
    fn test_format_result_truncates() {
        assert_eq!(format_result(0.23498713469789528), "0.23498713");
        assert_eq!(format_result(0.007832904489929843), "0.00783290");
        assert_eq!(format_result(7.832904489929843e-5), "7.83290e-5");
        assert_eq!(format_result(-2.5e-12), "-2.5e-12");
        assert_eq!(format_result(1.23456789e20), "1.23456e20");
        assert_eq!(format_result(-3.5), "-3.5");
        assert_eq!(format_result(0.0), "0");
    }
}
