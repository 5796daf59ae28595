/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Diffraction pattern result types

use std::ops::Index;
use std::slice;

use serde::{Deserialize, Serialize};

/// A family of symmetry-equivalent lattice planes contributing to a peak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HklFamily {
    /// Representative Miller indices of the family
    pub hkl: [i32; 3],
    /// Number of equivalent reciprocal points mapping to this spacing
    pub multiplicity: u32,
}

/// One observable powder diffraction peak
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffractionPeak {
    /// Diffraction angle 2-theta in degrees
    pub two_theta: f64,
    /// Intensity, percent of maximum when scaled, absolute otherwise
    pub intensity: f64,
    /// The hkl families merged into this peak
    pub hkls: Vec<HklFamily>,
    /// Representative interplanar spacing in Angstroms
    pub d_spacing: f64,
}

/// An ordered powder diffraction pattern
///
/// Peaks are sorted by ascending angle. The pattern is immutable after
/// assembly and serializes field-for-field for interchange.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiffractionPattern {
    peaks: Vec<DiffractionPeak>,
    /// Wavelength the pattern was computed for, in Angstroms
    wavelength: f64,
}

impl DiffractionPattern {
    /// Create a pattern from assembled peaks
    pub(crate) fn new(peaks: Vec<DiffractionPeak>, wavelength: f64) -> Self {
        Self { peaks, wavelength }
    }

    /// Number of peaks
    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    /// True when the requested window contains no peaks
    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    /// Wavelength used for the calculation, in Angstroms
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// Iterate over the peaks in ascending-angle order
    pub fn iter(&self) -> slice::Iter<'_, DiffractionPeak> {
        self.peaks.iter()
    }

    /// All two-theta values in order
    pub fn two_thetas(&self) -> Vec<f64> {
        self.peaks.iter().map(|p| p.two_theta).collect()
    }

    /// All intensities in order
    pub fn intensities(&self) -> Vec<f64> {
        self.peaks.iter().map(|p| p.intensity).collect()
    }

    /// All d-spacings in order
    pub fn d_spacings(&self) -> Vec<f64> {
        self.peaks.iter().map(|p| p.d_spacing).collect()
    }

    /// Lossless JSON export of the full pattern
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Index<usize> for DiffractionPattern {
    type Output = DiffractionPeak;

    fn index(&self, index: usize) -> &Self::Output {
        &self.peaks[index]
    }
}

impl<'a> IntoIterator for &'a DiffractionPattern {
    type Item = &'a DiffractionPeak;
    type IntoIter = slice::Iter<'a, DiffractionPeak>;

    fn into_iter(self) -> Self::IntoIter {
        self.peaks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pattern() -> DiffractionPattern {
        DiffractionPattern::new(
            vec![
                DiffractionPeak {
                    two_theta: 21.11,
                    intensity: 36.33,
                    hkls: vec![HklFamily {
                        hkl: [1, 0, 0],
                        multiplicity: 6,
                    }],
                    d_spacing: 4.209,
                },
                DiffractionPeak {
                    two_theta: 30.02,
                    intensity: 100.0,
                    hkls: vec![HklFamily {
                        hkl: [1, 1, 0],
                        multiplicity: 12,
                    }],
                    d_spacing: 2.976,
                },
            ],
            1.54184,
        )
    }

    #[test]
    fn test_indexing_and_length() {
        let pattern = sample_pattern();
        assert_eq!(pattern.len(), 2);
        assert!(!pattern.is_empty());
        assert_eq!(pattern[1].hkls[0].multiplicity, 12);
        assert_eq!(pattern.two_thetas().len(), 2);
        assert_eq!(pattern.iter().count(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let pattern = sample_pattern();
        let json = pattern.to_json().unwrap();
        let restored: DiffractionPattern = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, pattern);
    }
}
