/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! X-ray radiation sources and wavelengths

use serde::{Deserialize, Serialize};

use super::errors::{DiffractionError, Result};

/// Characteristic X-ray lines of common anode materials, plus a custom
/// wavelength. All wavelengths in Angstroms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Radiation {
    CuKa,
    CuKa1,
    CuKa2,
    CuKb1,
    MoKa,
    MoKa1,
    MoKa2,
    MoKb1,
    CrKa,
    CrKa1,
    CrKa2,
    CrKb1,
    FeKa,
    FeKa1,
    FeKa2,
    FeKb1,
    CoKa,
    CoKa1,
    CoKa2,
    CoKb1,
    AgKa,
    AgKa1,
    AgKa2,
    AgKb1,
    Custom(f64),
}

impl Radiation {
    /// Wavelength of the line in Angstroms
    pub fn wavelength(&self) -> f64 {
        match self {
            Radiation::CuKa => 1.54184,
            Radiation::CuKa1 => 1.54056,
            Radiation::CuKa2 => 1.54439,
            Radiation::CuKb1 => 1.39222,
            Radiation::MoKa => 0.71073,
            Radiation::MoKa1 => 0.70930,
            Radiation::MoKa2 => 0.71359,
            Radiation::MoKb1 => 0.63229,
            Radiation::CrKa => 2.29100,
            Radiation::CrKa1 => 2.28970,
            Radiation::CrKa2 => 2.29361,
            Radiation::CrKb1 => 2.08487,
            Radiation::FeKa => 1.93735,
            Radiation::FeKa1 => 1.93604,
            Radiation::FeKa2 => 1.93998,
            Radiation::FeKb1 => 1.75661,
            Radiation::CoKa => 1.79026,
            Radiation::CoKa1 => 1.78896,
            Radiation::CoKa2 => 1.79285,
            Radiation::CoKb1 => 1.63079,
            Radiation::AgKa => 0.560885,
            Radiation::AgKa1 => 0.559421,
            Radiation::AgKa2 => 0.563813,
            Radiation::AgKb1 => 0.497082,
            Radiation::Custom(wavelength) => *wavelength,
        }
    }

    /// Create a custom radiation source, validating the wavelength
    pub fn custom(wavelength: f64) -> Result<Self> {
        if !wavelength.is_finite() || wavelength <= 0.0 {
            return Err(DiffractionError::InvalidWavelength(format!(
                "wavelength must be a positive finite number of Angstroms, got {wavelength}"
            )));
        }
        Ok(Radiation::Custom(wavelength))
    }

    /// Parse a named characteristic line, e.g. "CuKa" or "MoKa1"
    pub fn from_label(label: &str) -> Result<Self> {
        match label {
            "CuKa" => Ok(Radiation::CuKa),
            "CuKa1" => Ok(Radiation::CuKa1),
            "CuKa2" => Ok(Radiation::CuKa2),
            "CuKb1" => Ok(Radiation::CuKb1),
            "MoKa" => Ok(Radiation::MoKa),
            "MoKa1" => Ok(Radiation::MoKa1),
            "MoKa2" => Ok(Radiation::MoKa2),
            "MoKb1" => Ok(Radiation::MoKb1),
            "CrKa" => Ok(Radiation::CrKa),
            "CrKa1" => Ok(Radiation::CrKa1),
            "CrKa2" => Ok(Radiation::CrKa2),
            "CrKb1" => Ok(Radiation::CrKb1),
            "FeKa" => Ok(Radiation::FeKa),
            "FeKa1" => Ok(Radiation::FeKa1),
            "FeKa2" => Ok(Radiation::FeKa2),
            "FeKb1" => Ok(Radiation::FeKb1),
            "CoKa" => Ok(Radiation::CoKa),
            "CoKa1" => Ok(Radiation::CoKa1),
            "CoKa2" => Ok(Radiation::CoKa2),
            "CoKb1" => Ok(Radiation::CoKb1),
            "AgKa" => Ok(Radiation::AgKa),
            "AgKa1" => Ok(Radiation::AgKa1),
            "AgKa2" => Ok(Radiation::AgKa2),
            "AgKb1" => Ok(Radiation::AgKb1),
            _ => Err(DiffractionError::InvalidWavelength(format!(
                "unknown radiation label: {label}"
            ))),
        }
    }
}

impl Default for Radiation {
    fn default() -> Self {
        Radiation::CuKa
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CuKa", 1.54184)]
    #[case("CuKa1", 1.54056)]
    #[case("MoKa", 0.71073)]
    #[case("CrKb1", 2.08487)]
    #[case("AgKb1", 0.497082)]
    fn test_from_label(#[case] label: &str, #[case] expected: f64) {
        let radiation = Radiation::from_label(label).unwrap();
        assert_eq!(radiation.wavelength(), expected);
    }

    #[test]
    fn test_unknown_label() {
        assert!(matches!(
            Radiation::from_label("XxKa"),
            Err(DiffractionError::InvalidWavelength(_))
        ));
    }

    #[test]
    fn test_custom_validation() {
        assert!(Radiation::custom(1.0).is_ok());
        assert!(Radiation::custom(0.0).is_err());
        assert!(Radiation::custom(-1.5).is_err());
        assert!(Radiation::custom(f64::NAN).is_err());
        assert!(Radiation::custom(f64::INFINITY).is_err());
    }
}
