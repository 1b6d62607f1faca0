//! Results type for DC shunt machine evaluation.

use std::fmt;

use uom::si::{
    f64::{ElectricCurrent, Power, Ratio},
    power::watt,
    ratio::percent,
};

/// Currents, losses, and efficiency at a single operating point.
///
/// The [`Display`](fmt::Display) impl renders the two-line summary shown to
/// users, with both values rounded to two decimals:
///
/// ```text
/// Efficiency: 74.95%
/// Core Losses (CUL): 602.00 W
/// ```
///
/// No other rounding is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Results {
    /// Shunt field current, `V / Rsh`.
    pub shunt_field_current: ElectricCurrent,

    /// Armature current, `K·IL − Ish`.
    ///
    /// Negative when the shunt field draws more than the line current.
    pub armature_current: ElectricCurrent,

    /// Shunt field copper loss, `Ish²·Rsh`.
    pub field_copper_loss: Power,

    /// Armature copper loss, `Ia²·Ra`.
    pub armature_copper_loss: Power,

    /// Total copper losses (CUL).
    pub copper_losses: Power,

    /// Input power `K·V·IL`, the efficiency denominator.
    pub input_power: Power,

    /// Efficiency, `(K·V·IL − CL − CUL) / (K·V·IL)`.
    ///
    /// Not clamped; may be negative or exceed 100% for non-physical inputs.
    pub efficiency: Ratio,
}

impl Results {
    /// Returns the efficiency in percent.
    #[must_use]
    pub fn efficiency_percent(&self) -> f64 {
        self.efficiency.get::<percent>()
    }

    /// Returns the total copper losses in watts.
    #[must_use]
    pub fn copper_losses_watts(&self) -> f64 {
        self.copper_losses.get::<watt>()
    }
}

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Efficiency: {:.2}%", self.efficiency_percent())?;
        write!(f, "Core Losses (CUL): {:.2} W", self.copper_losses_watts())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::electrical::shunt_machine::core::{Parameters, compute};

    #[test]
    fn renders_two_decimals() {
        let results = compute(&Parameters::from_si(220.0, 500.0, 20.0, 1.0, 110.0, 0.5)).unwrap();

        assert_eq!(
            results.to_string(),
            "Efficiency: 74.95%\nCore Losses (CUL): 602.00 W"
        );
    }

    #[test]
    fn renders_negative_efficiency() {
        let results = compute(&Parameters::from_si(500.0, 0.0, 10.0, 1.0, 10.0, 1.0)).unwrap();

        assert_eq!(
            results.to_string(),
            "Efficiency: -432.00%\nCore Losses (CUL): 26600.00 W"
        );
    }
}
