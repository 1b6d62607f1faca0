//! Electrical machine models.
//!
//! This module contains steady-state models of rotating electrical machines.

pub mod shunt_machine;
