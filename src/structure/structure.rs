/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodic crystal structure: a lattice plus an ordered list of sites

use serde::{Deserialize, Serialize};

use super::lattice::Lattice;
use super::site::Site;
use super::vector::Vector3D;

/// A periodic crystal structure
///
/// The structure is treated as immutable for the duration of a
/// diffraction calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    /// Real-space lattice
    lattice: Lattice,
    /// Ordered list of sites
    sites: Vec<Site>,
    /// Title or description of the structure
    title: String,
}

impl Structure {
    /// Create a new structure from a lattice and sites
    pub fn new(lattice: Lattice, sites: Vec<Site>) -> Self {
        Self {
            lattice,
            sites,
            title: String::new(),
        }
    }

    /// Create a new structure with a title
    pub fn with_title(lattice: Lattice, sites: Vec<Site>, title: &str) -> Self {
        Self {
            lattice,
            sites,
            title: title.to_string(),
        }
    }

    /// Get the title of the structure
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the lattice
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Get a slice of all sites
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Get the number of sites
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Cartesian coordinates of a site
    pub fn cartesian_coords(&self, site: &Site) -> Vector3D {
        self.lattice.fractional_to_cartesian(site.frac_coords())
    }
}
