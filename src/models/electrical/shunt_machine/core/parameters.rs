use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricCurrent, ElectricPotential, ElectricalResistance, Power, Ratio},
    power::watt,
    ratio::ratio,
};

/// Operating point and winding data for a DC shunt machine.
///
/// Values are not validated on construction; [`compute`](super::compute)
/// is the single authority on which combinations are accepted.
/// Use [`Parameters::new_constrained`] to build a set whose resistances
/// and load current are known to be strictly positive up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Terminal voltage.
    pub voltage: ElectricPotential,

    /// Core losses (hysteresis and eddy current), supplied externally.
    pub core_losses: Power,

    /// Full-load line current.
    pub full_load_current: ElectricCurrent,

    /// Loading factor scaling the full-load current to the operating point.
    pub loading: Ratio,

    /// Shunt field winding resistance.
    pub shunt_resistance: ElectricalResistance,

    /// Armature winding resistance.
    pub armature_resistance: ElectricalResistance,
}

impl Parameters {
    /// Constructs parameters from raw SI values.
    ///
    /// Arguments are volts, watts, amperes, a plain ratio, ohms and ohms.
    #[must_use]
    pub fn from_si(
        voltage: f64,
        core_losses: f64,
        full_load_current: f64,
        loading: f64,
        shunt_resistance: f64,
        armature_resistance: f64,
    ) -> Self {
        Self {
            voltage: ElectricPotential::new::<volt>(voltage),
            core_losses: Power::new::<watt>(core_losses),
            full_load_current: ElectricCurrent::new::<ampere>(full_load_current),
            loading: Ratio::new::<ratio>(loading),
            shunt_resistance: ElectricalResistance::new::<ohm>(shunt_resistance),
            armature_resistance: ElectricalResistance::new::<ohm>(armature_resistance),
        }
    }

    /// Constructs parameters from pre-validated values.
    ///
    /// Parameters built this way always pass the resistance and load current
    /// checks. They can still fail the zero input power check when the
    /// voltage or loading is exactly zero.
    #[must_use]
    pub fn new_constrained(
        voltage: Constrained<ElectricPotential, NonNegative>,
        core_losses: Constrained<Power, NonNegative>,
        full_load_current: Constrained<ElectricCurrent, StrictlyPositive>,
        loading: Constrained<Ratio, NonNegative>,
        shunt_resistance: Constrained<ElectricalResistance, StrictlyPositive>,
        armature_resistance: Constrained<ElectricalResistance, StrictlyPositive>,
    ) -> Self {
        Self {
            voltage: voltage.into_inner(),
            core_losses: core_losses.into_inner(),
            full_load_current: full_load_current.into_inner(),
            loading: loading.into_inner(),
            shunt_resistance: shunt_resistance.into_inner(),
            armature_resistance: armature_resistance.into_inner(),
        }
    }
}
