/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reciprocal lattice point enumeration
//!
//! Generates the candidate (h, k, l) triples whose Bragg angle lies in
//! the requested two-theta window. Only one representative of each
//! Friedel pair {(h,k,l), (-h,-k,-l)} is produced; the pair degeneracy
//! is carried explicitly so that downstream intensities and
//! multiplicities match a full-sphere enumeration.

use crate::structure::Lattice;

use super::errors::{DiffractionError, Result};

/// Each canonical point stands for itself and its Friedel partner
pub const FRIEDEL_DEGENERACY: u32 = 2;

/// A reciprocal lattice point with its derived Bragg geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReciprocalPoint {
    /// Miller indices
    pub hkl: [i32; 3],
    /// Interplanar spacing d = 1/|G| in Angstroms
    pub d_spacing: f64,
    /// Bragg angle theta in radians
    pub theta: f64,
    /// Diffraction angle 2-theta in degrees
    pub two_theta: f64,
    /// Momentum transfer s = sin(theta)/lambda = 1/(2d) in 1/Angstrom
    pub s: f64,
}

/// True for the canonical representative of a Friedel pair: the first
/// nonzero index is positive.
pub fn is_friedel_canonical(h: i32, k: i32, l: i32) -> bool {
    if h != 0 {
        return h > 0;
    }
    if k != 0 {
        return k > 0;
    }
    l > 0
}

/// Enumerate the canonical reciprocal lattice points diffracting inside
/// `[two_theta_min, two_theta_max]` (degrees) for the given wavelength.
///
/// The index envelope follows from the largest resolvable momentum
/// transfer g_max = 2 sin(theta_max)/lambda: since h = G . a, the index
/// along each axis is bounded by g_max |a|.
pub fn enumerate_points(
    lattice: &Lattice,
    wavelength: f64,
    two_theta_min: f64,
    two_theta_max: f64,
) -> Result<Vec<ReciprocalPoint>> {
    let reciprocal = lattice.reciprocal_crystallographic().ok_or_else(|| {
        DiffractionError::InvalidLattice(format!(
            "degenerate lattice with volume {:.3e}",
            lattice.volume()
        ))
    })?;

    let g_max = 2.0 * (two_theta_max.to_radians() / 2.0).sin() / wavelength;
    let (len_a, len_b, len_c) = lattice.lengths();
    let h_max = (g_max * len_a).ceil() as i32;
    let k_max = (g_max * len_b).ceil() as i32;
    let l_max = (g_max * len_c).ceil() as i32;

    let a_star = reciprocal.a();
    let b_star = reciprocal.b();
    let c_star = reciprocal.c();

    let mut points = Vec::new();
    for h in -h_max..=h_max {
        for k in -k_max..=k_max {
            for l in -l_max..=l_max {
                if h == 0 && k == 0 && l == 0 {
                    continue;
                }
                if !is_friedel_canonical(h, k, l) {
                    continue;
                }

                let g = a_star * h as f64 + b_star * k as f64 + c_star * l as f64;
                let g_mag = g.length();
                if g_mag < 1e-12 {
                    continue;
                }

                // Bragg's law: sin(theta) = lambda / (2 d) = lambda |G| / 2
                let sin_theta = wavelength * g_mag / 2.0;
                if sin_theta > 1.0 {
                    continue;
                }

                let theta = sin_theta.asin();
                let two_theta = 2.0 * theta.to_degrees();
                if two_theta < two_theta_min || two_theta > two_theta_max {
                    continue;
                }

                points.push(ReciprocalPoint {
                    hkl: [h, k, l],
                    d_spacing: 1.0 / g_mag,
                    theta,
                    two_theta,
                    s: g_mag / 2.0,
                });
            }
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1, 0, 0, true)]
    #[case(-1, 0, 0, false)]
    #[case(0, 2, -1, true)]
    #[case(0, -2, 1, false)]
    #[case(0, 0, 3, true)]
    #[case(0, 0, -3, false)]
    #[case(1, -5, 2, true)]
    #[case(-1, 5, -2, false)]
    fn test_friedel_canonical(
        #[case] h: i32,
        #[case] k: i32,
        #[case] l: i32,
        #[case] expected: bool,
    ) {
        assert_eq!(is_friedel_canonical(h, k, l), expected);
        // Exactly one member of each pair is canonical
        assert_ne!(is_friedel_canonical(h, k, l), is_friedel_canonical(-h, -k, -l));
    }

    #[test]
    fn test_cubic_enumeration() {
        let lattice = Lattice::cubic(4.209);
        let points = enumerate_points(&lattice, 1.54184, 0.0, 90.0).unwrap();
        assert!(!points.is_empty());

        for p in &points {
            assert!(p.two_theta >= 0.0 && p.two_theta <= 90.0);
            assert!(p.d_spacing > 0.0);
            let [h, k, l] = p.hkl;
            assert!(is_friedel_canonical(h, k, l));
            assert_relative_eq!(p.s, 1.0 / (2.0 * p.d_spacing), epsilon = 1e-12);
        }

        // (1,0,0) for a = 4.209 diffracts CuKa at 21.1077 degrees
        let p100 = points.iter().find(|p| p.hkl == [1, 0, 0]).unwrap();
        assert_relative_eq!(p100.d_spacing, 4.209, epsilon = 1e-10);
        assert_relative_eq!(p100.two_theta, 21.107738329639844, epsilon = 1e-9);

        // No Friedel partner is enumerated alongside its canonical mate
        assert!(!points.iter().any(|p| p.hkl == [-1, 0, 0]));
    }

    #[test]
    fn test_range_is_respected() {
        let lattice = Lattice::cubic(4.209);
        let points = enumerate_points(&lattice, 1.54184, 25.0, 35.0).unwrap();
        assert!(points.iter().all(|p| p.two_theta >= 25.0 && p.two_theta <= 35.0));
    }

    #[test]
    fn test_degenerate_lattice_fails() {
        let flat = Lattice::from_vectors([[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(matches!(
            enumerate_points(&flat, 1.54184, 0.0, 90.0),
            Err(DiffractionError::InvalidLattice(_))
        ));
    }
}
