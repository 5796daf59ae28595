/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic X-ray scattering factors
//!
//! Analytic form factors f(s) for neutral atoms as a function of the
//! momentum transfer s = sin(theta)/lambda, using the four-Gaussian
//! Cromer-Mann parameterization.

mod errors;
mod form_factor;

pub use errors::{Result, ScatteringError};
pub use form_factor::{scattering_factor, scattering_params, ScatteringFactorParams};
