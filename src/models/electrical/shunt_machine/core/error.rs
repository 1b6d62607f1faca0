use thiserror::Error;

/// Errors that can occur while evaluating a DC shunt machine.
///
/// Variants are mutually exclusive and checked in declaration order;
/// the first failing check is the one reported.
/// The display text is suitable for showing directly to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuntMachineError {
    /// The shunt field or armature resistance is zero, negative, or `NaN`.
    #[error("Resistance values must be greater than zero.")]
    NonPositiveResistance,

    /// The full-load current is zero, negative, or `NaN`.
    #[error("Full load current (IL) must be greater than zero.")]
    NonPositiveLoadCurrent,

    /// The input power `K·V·IL` is exactly zero.
    ///
    /// With a positive load current this means the voltage or the
    /// loading factor is zero.
    #[error("Invalid motor parameters, calculation results in zero denominator.")]
    ZeroDenominator,
}
