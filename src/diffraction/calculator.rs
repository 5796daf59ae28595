/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Powder XRD pattern calculator
//!
//! Ties the pipeline together: enumerate reciprocal points, evaluate
//! structure factors in parallel, apply the Lorentz-polarization
//! correction, merge reflections into peaks and assemble the final
//! pattern.

use std::collections::HashMap;

use log::debug;
use rayon::prelude::*;

use crate::structure::Structure;

use super::errors::{DiffractionError, Result};
use super::pattern::{DiffractionPattern, DiffractionPeak};
use super::peaks::group_reflections;
use super::radiation::Radiation;
use super::reciprocal::enumerate_points;
use super::structure_factor::compute_reflection;

/// Peaks whose intensity falls below this fraction-of-maximum threshold
/// (on the 0-100 scale) are extinct reflections surviving only as
/// floating-point noise and are discarded.
const SCALED_INTENSITY_TOL: f64 = 1e-3;

/// Configuration for one pattern calculation
///
/// Recognized options are enumerated here; out-of-range values are
/// rejected by `get_pattern` before any lattice work.
#[derive(Debug, Clone)]
pub struct PatternConfig {
    /// Two-theta window in degrees, inclusive on both ends
    pub two_theta_range: (f64, f64),
    /// Rescale intensities so the maximum is 100
    pub scaled: bool,
    /// Isotropic Debye-Waller B coefficient per element symbol;
    /// elements missing from the map are undamped
    pub debye_waller_factors: HashMap<String, f64>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            two_theta_range: (0.0, 90.0),
            scaled: true,
            debye_waller_factors: HashMap::new(),
        }
    }
}

/// Powder X-ray diffraction pattern calculator
///
/// The wavelength is fixed at construction; each `get_pattern` call is
/// an independent, pure computation.
#[derive(Debug, Clone)]
pub struct XrdCalculator {
    radiation: Radiation,
}

impl XrdCalculator {
    /// Create a calculator for the given radiation source
    pub fn new(radiation: Radiation) -> Result<Self> {
        // Custom(_) can be constructed with any value
        let wavelength = radiation.wavelength();
        if !wavelength.is_finite() || wavelength <= 0.0 {
            return Err(DiffractionError::InvalidWavelength(format!(
                "wavelength must be a positive finite number of Angstroms, got {wavelength}"
            )));
        }
        Ok(Self { radiation })
    }

    /// Create a calculator for an explicit wavelength in Angstroms
    pub fn with_wavelength(wavelength: f64) -> Result<Self> {
        Ok(Self {
            radiation: Radiation::custom(wavelength)?,
        })
    }

    /// Wavelength in Angstroms
    pub fn wavelength(&self) -> f64 {
        self.radiation.wavelength()
    }

    /// Compute the powder diffraction pattern of a structure.
    ///
    /// Returns the peaks inside the configured two-theta window in
    /// ascending-angle order; an empty window yields an empty pattern,
    /// not an error.
    pub fn get_pattern(
        &self,
        structure: &Structure,
        config: &PatternConfig,
    ) -> Result<DiffractionPattern> {
        let (two_theta_min, two_theta_max) = config.two_theta_range;
        if !two_theta_min.is_finite()
            || !two_theta_max.is_finite()
            || two_theta_min < 0.0
            || two_theta_max > 180.0
            || two_theta_min >= two_theta_max
        {
            return Err(DiffractionError::InvalidRange(format!(
                "two-theta bounds must satisfy 0 <= min < max <= 180, got [{two_theta_min}, {two_theta_max}]"
            )));
        }

        let wavelength = self.wavelength();
        let points =
            enumerate_points(structure.lattice(), wavelength, two_theta_min, two_theta_max)?;
        debug!(
            "enumerated {} candidate reflections in [{}, {}] degrees",
            points.len(),
            two_theta_min,
            two_theta_max
        );

        let reflections = points
            .par_iter()
            .map(|point| {
                compute_reflection(structure, point, &config.debye_waller_factors).map(
                    |mut reflection| {
                        reflection.intensity *= lorentz_polarization(point.theta);
                        reflection
                    },
                )
            })
            .collect::<Result<Vec<_>>>()?;

        let groups = group_reflections(reflections);
        debug!("merged into {} peak groups", groups.len());

        let max_intensity = groups.iter().map(|g| g.intensity).fold(0.0, f64::max);
        if max_intensity <= 0.0 {
            return Ok(DiffractionPattern::new(Vec::new(), wavelength));
        }

        let scale = if config.scaled {
            100.0 / max_intensity
        } else {
            1.0
        };
        let peaks = groups
            .iter()
            .filter(|group| group.intensity / max_intensity * 100.0 > SCALED_INTENSITY_TOL)
            .map(|group| DiffractionPeak {
                two_theta: group.two_theta,
                intensity: group.intensity * scale,
                hkls: group.hkl_families(),
                d_spacing: group.d_spacing,
            })
            .collect();

        Ok(DiffractionPattern::new(peaks, wavelength))
    }
}

impl Default for XrdCalculator {
    fn default() -> Self {
        Self {
            radiation: Radiation::default(),
        }
    }
}

/// Lorentz-polarization correction for powder geometry:
/// LP(theta) = (1 + cos^2(2 theta)) / (sin^2(theta) cos(theta))
fn lorentz_polarization(theta: f64) -> f64 {
    let sin_theta = theta.sin();
    let cos_theta = theta.cos();
    if sin_theta.abs() < 1e-10 || cos_theta.abs() < 1e-10 {
        return 0.0;
    }
    let cos_two_theta = (2.0 * theta).cos();
    (1.0 + cos_two_theta * cos_two_theta) / (sin_theta * sin_theta * cos_theta)
}
