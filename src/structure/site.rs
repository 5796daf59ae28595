/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Crystallographic sites with occupancy-weighted species

use serde::{Deserialize, Serialize};

use super::vector::Vector3D;

/// One species occupying a site with a fractional occupancy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSpecies {
    /// Element symbol, e.g. "Fe"
    pub element: String,
    /// Occupancy fraction in (0, 1]
    pub occupancy: f64,
}

/// A crystallographic site: a fractional position and the species
/// distribution occupying it.
///
/// Occupancies sum to 1 for an ordered site; a disordered or partially
/// vacant site carries several species whose occupancies sum to at
/// most 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Fractional coordinates in the lattice basis
    frac: Vector3D,
    /// Occupancy-weighted species on this site
    species: Vec<SiteSpecies>,
}

impl Site {
    /// Create a fully occupied single-species site
    pub fn new(element: &str, frac: Vector3D) -> Self {
        Self {
            frac,
            species: vec![SiteSpecies {
                element: element.to_string(),
                occupancy: 1.0,
            }],
        }
    }

    /// Create a site with an explicit species distribution
    pub fn with_species(species: Vec<(&str, f64)>, frac: Vector3D) -> Self {
        Self {
            frac,
            species: species
                .into_iter()
                .map(|(element, occupancy)| SiteSpecies {
                    element: element.to_string(),
                    occupancy,
                })
                .collect(),
        }
    }

    /// Fractional coordinates of the site
    pub fn frac_coords(&self) -> &Vector3D {
        &self.frac
    }

    /// Species occupying the site
    pub fn species(&self) -> &[SiteSpecies] {
        &self.species
    }

    /// Sum of occupancies over all species on the site
    pub fn total_occupancy(&self) -> f64 {
        self.species.iter().map(|sp| sp.occupancy).sum()
    }
}
