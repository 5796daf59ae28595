/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the scattering module

/// Error types for the scattering module
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScatteringError {
    #[error("No scattering coefficients tabulated for element: {0}")]
    UnknownElement(String),
}

/// Result type for scattering operations
pub type Result<T> = std::result::Result<T, ScatteringError>;
