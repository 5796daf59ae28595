/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Structure factor evaluation
//!
//! For each reciprocal point the complex amplitude
//! F(hkl) = sum over sites and species of
//! occupancy * f(s) * exp(-B s^2) * exp(2 pi i (h x + k y + l z))
//! is summed exactly; no approximation is applied. This is the
//! numerically dominant step of a pattern calculation.

use std::collections::HashMap;
use std::f64::consts::PI;

use num_complex::Complex64;

use crate::scattering::scattering_factor;
use crate::structure::Structure;

use super::errors::Result;
use super::reciprocal::{ReciprocalPoint, FRIEDEL_DEGENERACY};

/// A reciprocal point together with its structure factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reflection {
    /// The diffracting reciprocal point
    pub point: ReciprocalPoint,
    /// Complex structure factor F(hkl)
    pub amplitude: Complex64,
    /// |F|^2 summed over the Friedel pair the point represents
    pub intensity: f64,
}

/// Compute the structure factor of one reciprocal point.
///
/// `debye_waller_factors` maps element symbols to the isotropic B
/// coefficient of the thermal damping term exp(-B s^2); elements
/// missing from the map are undamped. Fails with `UnknownElement` when
/// a species has no tabulated scattering coefficients.
pub fn compute_reflection(
    structure: &Structure,
    point: &ReciprocalPoint,
    debye_waller_factors: &HashMap<String, f64>,
) -> Result<Reflection> {
    let [h, k, l] = point.hkl;
    let s2 = point.s * point.s;

    let mut amplitude = Complex64::new(0.0, 0.0);
    for site in structure.sites() {
        let frac = site.frac_coords();
        let phase =
            2.0 * PI * (h as f64 * frac.x + k as f64 * frac.y + l as f64 * frac.z);

        let mut site_factor = 0.0;
        for species in site.species() {
            let f = scattering_factor(&species.element, point.s)?;
            let damping = debye_waller_factors
                .get(&species.element)
                .map_or(1.0, |b| (-b * s2).exp());
            site_factor += species.occupancy * f * damping;
        }

        amplitude += Complex64::from_polar(site_factor, phase);
    }

    // Friedel's law: |F(hkl)| = |F(-h,-k,-l)| for real form factors, so
    // the canonical point carries the intensity of the whole pair.
    let intensity = FRIEDEL_DEGENERACY as f64 * amplitude.norm_sqr();

    Ok(Reflection {
        point: *point,
        amplitude,
        intensity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diffraction::reciprocal::enumerate_points;
    use crate::structure::{Lattice, Site, Vector3D};
    use approx::assert_relative_eq;

    fn bcc_tungsten() -> Structure {
        Structure::new(
            Lattice::cubic(3.1653),
            vec![
                Site::new("W", Vector3D::origin()),
                Site::new("W", Vector3D::new(0.5, 0.5, 0.5)),
            ],
        )
    }

    #[test]
    fn test_bcc_extinction() {
        // For a bcc lattice F(hkl) vanishes when h + k + l is odd
        let structure = bcc_tungsten();
        let points = enumerate_points(structure.lattice(), 1.54184, 0.0, 90.0).unwrap();
        let no_damping = HashMap::new();

        for point in &points {
            let [h, k, l] = point.hkl;
            let reflection = compute_reflection(&structure, point, &no_damping).unwrap();
            if (h + k + l) % 2 != 0 {
                assert!(
                    reflection.intensity < 1e-18,
                    "({h},{k},{l}) should be extinct, got {}",
                    reflection.intensity
                );
            } else {
                assert!(reflection.intensity > 1.0);
            }
        }
    }

    #[test]
    fn test_debye_waller_damps_amplitude() {
        let structure = bcc_tungsten();
        let points = enumerate_points(structure.lattice(), 1.54184, 0.0, 90.0).unwrap();
        let point = points.iter().find(|p| p.hkl == [1, 1, 0]).unwrap();

        let undamped = compute_reflection(&structure, point, &HashMap::new()).unwrap();
        let damped = compute_reflection(
            &structure,
            point,
            &HashMap::from([("W".to_string(), 0.1526)]),
        )
        .unwrap();

        assert!(damped.intensity < undamped.intensity);
        let expected = undamped.amplitude.norm() * (-0.1526 * point.s * point.s).exp() * 1.0;
        assert_relative_eq!(damped.amplitude.norm(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_occupancy_weighting() {
        // A half-occupied site scatters with half the amplitude
        let full = Structure::new(
            Lattice::cubic(4.0),
            vec![Site::new("Na", Vector3D::origin())],
        );
        let half = Structure::new(
            Lattice::cubic(4.0),
            vec![Site::with_species(vec![("Na", 0.5)], Vector3D::origin())],
        );
        let points = enumerate_points(full.lattice(), 1.54184, 0.0, 90.0).unwrap();
        let point = &points[0];

        let f_full = compute_reflection(&full, point, &HashMap::new()).unwrap();
        let f_half = compute_reflection(&half, point, &HashMap::new()).unwrap();
        assert_relative_eq!(
            f_half.amplitude.norm(),
            0.5 * f_full.amplitude.norm(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_unknown_element_fails() {
        let structure = Structure::new(
            Lattice::cubic(4.0),
            vec![Site::new("Xx", Vector3D::origin())],
        );
        let points = enumerate_points(structure.lattice(), 1.54184, 0.0, 90.0).unwrap();
        assert!(compute_reflection(&structure, &points[0], &HashMap::new()).is_err());
    }
}
