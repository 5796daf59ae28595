/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Powder X-ray diffraction pattern calculation
//!
//! The calculation is a single linear pipeline: enumerate the
//! reciprocal lattice points whose Bragg angle falls in the requested
//! two-theta window, compute the complex structure factor for each,
//! apply the Lorentz-polarization correction and merge points sharing
//! an observable angle into peaks.

mod calculator;
mod errors;
mod pattern;
mod peaks;
mod radiation;
mod reciprocal;
mod structure_factor;

pub use calculator::{PatternConfig, XrdCalculator};
pub use errors::{DiffractionError, Result};
pub use pattern::{DiffractionPattern, DiffractionPeak, HklFamily};
pub use peaks::{D_SPACING_TOL, TWO_THETA_TOL};
pub use radiation::Radiation;
pub use reciprocal::ReciprocalPoint;
pub use structure_factor::Reflection;
