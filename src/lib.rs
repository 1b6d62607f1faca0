//! # Twine Shunt Machine
//!
//! Efficiency and copper loss model for DC shunt motors and generators,
//! built for [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use twine_shunt_machine::models::electrical::shunt_machine::efficiency;
//!
//! // V, CL, IL, K, Rsh, Ra in volts, watts, amps, -, ohms, ohms.
//! let (eff, cul) = efficiency(220.0, 500.0, 20.0, 1.0, 110.0, 0.5).unwrap();
//! assert!((cul - 602.0).abs() < 1e-9);
//! assert!((eff - 74.954_545).abs() < 1e-6);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//! Model-specific utility code stays in the model's internal `core` module
//! until another model needs it.

pub mod models;
pub mod support;
