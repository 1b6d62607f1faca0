//! Steady-state efficiency of a DC shunt machine.
//!
//! The shunt field winding sits directly across the terminals, so its current
//! is fixed by the terminal voltage. The armature carries the remainder of the
//! line current, taken here as the full-load current scaled by the loading
//! factor. Copper losses are the I²R dissipation in both windings.

mod error;
mod parameters;
mod results;

pub use error::ShuntMachineError;
pub use parameters::Parameters;
pub use results::Results;

use crate::support::constraint::StrictlyPositive;
use uom::{
    ConstZero,
    si::f64::{ElectricCurrent, Power, Ratio},
};

/// Computes the efficiency and copper losses of a DC shunt machine.
///
/// Checks run in a fixed order and the first failure is reported:
///
/// 1. Both winding resistances must be strictly positive.
/// 2. The full-load current must be strictly positive.
/// 3. The input power `K·V·IL` must not be exactly zero.
///
/// The armature current is `K·IL − V/Rsh` and may come out negative.
/// Neither efficiency nor copper losses are clamped to physical ranges.
///
/// # Errors
///
/// Returns a [`ShuntMachineError`] if any of the checks above fail.
pub fn compute(parameters: &Parameters) -> Result<Results, ShuntMachineError> {
    let Parameters {
        voltage,
        core_losses,
        full_load_current,
        loading,
        shunt_resistance,
        armature_resistance,
    } = *parameters;

    let shunt_resistance = StrictlyPositive::new(shunt_resistance)
        .map_err(|_| ShuntMachineError::NonPositiveResistance)?
        .into_inner();
    let armature_resistance = StrictlyPositive::new(armature_resistance)
        .map_err(|_| ShuntMachineError::NonPositiveResistance)?
        .into_inner();
    let full_load_current = StrictlyPositive::new(full_load_current)
        .map_err(|_| ShuntMachineError::NonPositiveLoadCurrent)?
        .into_inner();

    let input_power: Power = loading * voltage * full_load_current;
    if input_power == Power::ZERO {
        return Err(ShuntMachineError::ZeroDenominator);
    }

    let shunt_field_current: ElectricCurrent = voltage / shunt_resistance;
    let line_current: ElectricCurrent = loading * full_load_current;
    let armature_current = line_current - shunt_field_current;

    let field_copper_loss: Power = shunt_field_current * shunt_field_current * shunt_resistance;
    let armature_copper_loss: Power = armature_current * armature_current * armature_resistance;
    let copper_losses = field_copper_loss + armature_copper_loss;

    let efficiency: Ratio = (input_power - core_losses - copper_losses) / input_power;

    Ok(Results {
        shunt_field_current,
        armature_current,
        field_copper_loss,
        armature_copper_loss,
        copper_losses,
        input_power,
        efficiency,
    })
}

/// Computes efficiency and copper losses from raw SI values.
///
/// Takes terminal voltage (V), core losses (W), full-load current (A),
/// loading factor (-), shunt-field resistance (Ω) and armature resistance (Ω),
/// in that order, and returns `(efficiency_percent, copper_losses_watts)`.
///
/// # Errors
///
/// Returns a [`ShuntMachineError`] under the same conditions as [`compute`].
///
/// # Example
///
/// ```
/// use twine_shunt_machine::models::electrical::shunt_machine::{
///     ShuntMachineError, efficiency,
/// };
///
/// assert_eq!(
///     efficiency(0.0, 100.0, 5.0, 1.0, 10.0, 1.0),
///     Err(ShuntMachineError::ZeroDenominator),
/// );
/// ```
pub fn efficiency(
    voltage: f64,
    core_losses: f64,
    full_load_current: f64,
    loading: f64,
    shunt_resistance: f64,
    armature_resistance: f64,
) -> Result<(f64, f64), ShuntMachineError> {
    let parameters = Parameters::from_si(
        voltage,
        core_losses,
        full_load_current,
        loading,
        shunt_resistance,
        armature_resistance,
    );

    let results = compute(&parameters)?;
    Ok((results.efficiency_percent(), results.copper_losses_watts()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electric_current::ampere, power::watt, ratio::percent};

    #[test]
    fn rated_load() {
        let results = compute(&Parameters::from_si(220.0, 500.0, 20.0, 1.0, 110.0, 0.5)).unwrap();

        assert_relative_eq!(results.shunt_field_current.get::<ampere>(), 2.0);
        assert_relative_eq!(results.armature_current.get::<ampere>(), 18.0);
        assert_relative_eq!(results.field_copper_loss.get::<watt>(), 440.0);
        assert_relative_eq!(results.armature_copper_loss.get::<watt>(), 162.0);
        assert_relative_eq!(results.copper_losses.get::<watt>(), 602.0);
        assert_relative_eq!(results.input_power.get::<watt>(), 4400.0);
        assert_relative_eq!(
            results.efficiency.get::<percent>(),
            3298.0 / 4400.0 * 100.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn scalar_contract_matches_typed_api() {
        let (eff, cul) = efficiency(220.0, 500.0, 20.0, 1.0, 110.0, 0.5).unwrap();
        assert_relative_eq!(eff, 74.954_545_454_545, epsilon = 1e-9);
        assert_relative_eq!(cul, 602.0, epsilon = 1e-12);
    }

    #[test]
    fn half_load() {
        // Ish = 2 A, Ia = 0.5 * 20 - 2 = 8 A.
        // CUL = 4 * 110 + 64 * 0.5 = 472 W, input = 2200 W.
        let (eff, cul) = efficiency(220.0, 500.0, 20.0, 0.5, 110.0, 0.5).unwrap();
        assert_relative_eq!(cul, 472.0, epsilon = 1e-12);
        assert_relative_eq!(eff, (2200.0 - 500.0 - 472.0) / 2200.0 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn non_positive_resistance_takes_priority() {
        for (rsh, ra) in [(0.0, 0.5), (110.0, 0.0), (-1.0, 0.5), (110.0, -3.0), (0.0, 0.0)] {
            assert_eq!(
                efficiency(220.0, 500.0, 20.0, 1.0, rsh, ra),
                Err(ShuntMachineError::NonPositiveResistance),
                "rsh={rsh}, ra={ra}"
            );
        }

        // Resistance is checked before load current and the denominator.
        assert_eq!(
            efficiency(0.0, 0.0, 0.0, 0.0, 0.0, 1.0),
            Err(ShuntMachineError::NonPositiveResistance)
        );
    }

    #[test]
    fn non_positive_load_current() {
        assert_eq!(
            efficiency(220.0, 500.0, 0.0, 1.0, 10.0, 1.0),
            Err(ShuntMachineError::NonPositiveLoadCurrent)
        );
        assert_eq!(
            efficiency(220.0, 500.0, -4.0, 1.0, 10.0, 1.0),
            Err(ShuntMachineError::NonPositiveLoadCurrent)
        );

        // Load current is checked before the denominator.
        assert_eq!(
            efficiency(0.0, 500.0, 0.0, 0.0, 10.0, 1.0),
            Err(ShuntMachineError::NonPositiveLoadCurrent)
        );
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(
            efficiency(0.0, 100.0, 5.0, 1.0, 10.0, 1.0),
            Err(ShuntMachineError::ZeroDenominator)
        );
        assert_eq!(
            efficiency(220.0, 100.0, 5.0, 0.0, 10.0, 1.0),
            Err(ShuntMachineError::ZeroDenominator)
        );
    }

    #[test]
    fn nan_resistance_and_current_are_rejected() {
        assert_eq!(
            efficiency(220.0, 500.0, 20.0, 1.0, f64::NAN, 0.5),
            Err(ShuntMachineError::NonPositiveResistance)
        );
        assert_eq!(
            efficiency(220.0, 500.0, f64::NAN, 1.0, 110.0, 0.5),
            Err(ShuntMachineError::NonPositiveLoadCurrent)
        );
    }

    #[test]
    fn armature_current_is_not_clamped() {
        // Ish = 50 A exceeds the 10 A line current.
        let results = compute(&Parameters::from_si(500.0, 0.0, 10.0, 1.0, 10.0, 1.0)).unwrap();

        assert_relative_eq!(results.armature_current.get::<ampere>(), -40.0);
        // 2500 * 10 + 1600 * 1
        assert_relative_eq!(results.copper_losses.get::<watt>(), 26_600.0);
    }

    #[test]
    fn efficiency_is_not_clamped() {
        // Losses exceed input power.
        let (eff, _) = efficiency(500.0, 0.0, 10.0, 1.0, 10.0, 1.0).unwrap();
        assert_relative_eq!(eff, (5000.0 - 26_600.0) / 5000.0 * 100.0, epsilon = 1e-9);
        assert!(eff < 0.0);

        // Negative core losses push efficiency above 100%.
        let (eff, _) = efficiency(220.0, -5000.0, 20.0, 1.0, 110.0, 0.5).unwrap();
        assert!(eff > 100.0);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let parameters = Parameters::from_si(231.7, 412.3, 17.9, 1.13, 98.6, 0.37);

        let first = compute(&parameters).unwrap();
        for _ in 0..10 {
            let again = compute(&parameters).unwrap();
            assert_eq!(
                first.efficiency_percent().to_bits(),
                again.efficiency_percent().to_bits()
            );
            assert_eq!(
                first.copper_losses_watts().to_bits(),
                again.copper_losses_watts().to_bits()
            );
        }

        assert_eq!(parameters, Parameters::from_si(231.7, 412.3, 17.9, 1.13, 98.6, 0.37));
    }
}
