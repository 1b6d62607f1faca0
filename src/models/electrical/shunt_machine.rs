//! DC shunt machine efficiency model.
//!
//! This module provides a [`twine_core::Model`] implementation for the
//! steady-state efficiency of a DC shunt motor or generator at a given load.
//! The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_shunt_machine::models::electrical::shunt_machine::{
//!     Parameters, ShuntMachine, ShuntMachineError,
//! };
//!
//! let model = ShuntMachine;
//!
//! let results = model
//!     .call(&Parameters::from_si(220.0, 500.0, 20.0, 1.0, 110.0, 0.5))
//!     .unwrap();
//! assert_eq!(
//!     results.to_string(),
//!     "Efficiency: 74.95%\nCore Losses (CUL): 602.00 W"
//! );
//!
//! let err = model
//!     .call(&Parameters::from_si(220.0, 500.0, 20.0, 1.0, 0.0, 0.5))
//!     .unwrap_err();
//! assert_eq!(err, ShuntMachineError::NonPositiveResistance);
//! ```

mod core;

pub use self::core::{Parameters, Results, ShuntMachineError, compute, efficiency};

use twine_core::Model;

/// Twine model of a DC shunt machine at a single operating point.
///
/// The model is stateless; every call is evaluated independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShuntMachine;

impl Model for ShuntMachine {
    type Input = Parameters;
    type Output = Results;
    type Error = ShuntMachineError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        compute(input)
    }
}
