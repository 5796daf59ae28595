/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the diffraction module

use crate::scattering::ScatteringError;

/// Error types for the diffraction module
///
/// Every failure is raised at the point of detection and is fatal for
/// the calculation; there is no partial-result mode.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiffractionError {
    #[error("Invalid wavelength: {0}")]
    InvalidWavelength(String),

    #[error("{0}")]
    UnknownElement(#[from] ScatteringError),

    #[error("Invalid lattice: {0}")]
    InvalidLattice(String),

    #[error("Invalid two-theta range: {0}")]
    InvalidRange(String),
}

/// Result type for diffraction operations
pub type Result<T> = std::result::Result<T, DiffractionError>;
