/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # xrd-rs
//!
//! A Rust implementation of powder X-ray diffraction pattern calculation
//! for periodic crystal structures.
//!
//! Given a crystal structure and an X-ray wavelength, the calculator
//! enumerates the lattice planes that satisfy Bragg's law inside a
//! two-theta window, sums the complex structure factor over every site,
//! applies the Lorentz-polarization correction and merges equivalent
//! reflections into the observable powder pattern.
//!
//! ```
//! use xrd_rs::diffraction::{PatternConfig, XrdCalculator};
//! use xrd_rs::structure::{Lattice, Site, Structure, Vector3D};
//!
//! let structure = Structure::new(
//!     Lattice::cubic(4.209),
//!     vec![
//!         Site::new("Cs", Vector3D::new(0.0, 0.0, 0.0)),
//!         Site::new("Cl", Vector3D::new(0.5, 0.5, 0.5)),
//!     ],
//! );
//!
//! let calculator = XrdCalculator::default();
//! let pattern = calculator
//!     .get_pattern(&structure, &PatternConfig::default())
//!     .unwrap();
//! assert!(!pattern.is_empty());
//! ```

pub mod diffraction;
pub mod scattering;
pub mod structure;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use diffraction::{
    DiffractionPattern, DiffractionPeak, PatternConfig, Radiation, XrdCalculator,
};
pub use structure::{Lattice, Site, Structure, Vector3D};
