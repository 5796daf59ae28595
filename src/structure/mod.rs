/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Crystal structure data model
//!
//! This module provides the immutable inputs of a diffraction
//! calculation: a real-space lattice, sites with occupancy-weighted
//! species, and the structure that ties them together.

mod element;
mod lattice;
mod site;
#[allow(clippy::module_inception)]
mod structure;
mod vector;

pub use element::atomic_number;
pub use lattice::Lattice;
pub use site::{Site, SiteSpecies};
pub use structure::Structure;
pub use vector::Vector3D;
