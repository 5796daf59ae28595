/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Real-space lattice and reciprocal-lattice geometry

use serde::{Deserialize, Serialize};

use super::vector::Vector3D;

/// A real-space lattice defined by three row basis vectors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    /// Basis vectors as rows: a, b, c
    matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// Create a lattice from three row basis vectors
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Self { matrix }
    }

    /// Create a cubic lattice with cell parameter `a`
    pub fn cubic(a: f64) -> Self {
        Self::from_vectors([[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]])
    }

    /// Create a tetragonal lattice with cell parameters `a` and `c`
    pub fn tetragonal(a: f64, c: f64) -> Self {
        Self::from_vectors([[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, c]])
    }

    /// Create an orthorhombic lattice with cell parameters `a`, `b`, `c`
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
        Self::from_vectors([[a, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, c]])
    }

    /// Create a hexagonal lattice with cell parameters `a` and `c`
    pub fn hexagonal(a: f64, c: f64) -> Self {
        let half = 0.5 * a;
        let height = a * 3.0_f64.sqrt() / 2.0;
        Self::from_vectors([[a, 0.0, 0.0], [-half, height, 0.0], [0.0, 0.0, c]])
    }

    /// Get the raw row matrix
    pub fn matrix(&self) -> &[[f64; 3]; 3] {
        &self.matrix
    }

    /// Get the `a` basis vector
    pub fn a(&self) -> Vector3D {
        Vector3D::new(self.matrix[0][0], self.matrix[0][1], self.matrix[0][2])
    }

    /// Get the `b` basis vector
    pub fn b(&self) -> Vector3D {
        Vector3D::new(self.matrix[1][0], self.matrix[1][1], self.matrix[1][2])
    }

    /// Get the `c` basis vector
    pub fn c(&self) -> Vector3D {
        Vector3D::new(self.matrix[2][0], self.matrix[2][1], self.matrix[2][2])
    }

    /// Cell parameters (|a|, |b|, |c|) in Angstroms
    pub fn lengths(&self) -> (f64, f64, f64) {
        (self.a().length(), self.b().length(), self.c().length())
    }

    /// Signed cell volume V = a . (b x c) in cubic Angstroms
    pub fn volume(&self) -> f64 {
        self.a().dot(&self.b().cross(&self.c()))
    }

    /// Crystallographic reciprocal lattice (without the 2 pi factor):
    /// a* = (b x c) / V, b* = (c x a) / V, c* = (a x b) / V.
    ///
    /// With this convention |h a* + k b* + l c*| is directly 1/d(hkl).
    /// Returns `None` for a degenerate (zero-volume) lattice.
    pub fn reciprocal_crystallographic(&self) -> Option<Lattice> {
        let volume = self.volume();
        if volume.abs() < 1e-10 {
            return None;
        }

        let a_star = self.b().cross(&self.c()).scale(1.0 / volume);
        let b_star = self.c().cross(&self.a()).scale(1.0 / volume);
        let c_star = self.a().cross(&self.b()).scale(1.0 / volume);

        Some(Lattice::from_vectors([
            [a_star.x, a_star.y, a_star.z],
            [b_star.x, b_star.y, b_star.z],
            [c_star.x, c_star.y, c_star.z],
        ]))
    }

    /// Convert fractional coordinates to Cartesian coordinates
    pub fn fractional_to_cartesian(&self, frac: &Vector3D) -> Vector3D {
        self.a() * frac.x + self.b() * frac.y + self.c() * frac.z
    }
}
