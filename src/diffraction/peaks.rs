/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Peak aggregation
//!
//! Reflections are sorted by angle and merged into observable peaks:
//! two consecutive reflections closer than TWO_THETA_TOL belong to the
//! same peak. Within a peak, reflections sharing a d-spacing (within
//! D_SPACING_TOL) form one hkl family whose multiplicity counts the
//! reciprocal points mapping to that spacing, Friedel partners
//! included.

use std::cmp::Ordering;

use super::pattern::HklFamily;
use super::reciprocal::{ReciprocalPoint, FRIEDEL_DEGENERACY};
use super::structure_factor::Reflection;

/// Two-theta merge tolerance in degrees. The literal expected values in
/// the tests depend on this constant; do not change it without
/// re-deriving them.
pub const TWO_THETA_TOL: f64 = 1e-5;

/// d-spacing coincidence tolerance in Angstroms for hkl family grouping
pub const D_SPACING_TOL: f64 = 1e-8;

/// A merged peak: reflections observed at one two-theta value
#[derive(Debug, Clone)]
pub struct PeakGroup {
    /// Two-theta of the first reflection merged into the group (degrees)
    pub two_theta: f64,
    /// Cumulative corrected intensity of all member reflections
    pub intensity: f64,
    /// d-spacing of the first reflection merged into the group (Angstroms)
    pub d_spacing: f64,
    /// Member reciprocal points in merge order
    pub members: Vec<ReciprocalPoint>,
}

impl PeakGroup {
    /// Group the members into hkl families by d-spacing coincidence.
    ///
    /// The reported family hkl is the lexicographically largest member;
    /// the multiplicity counts members and their Friedel partners.
    pub fn hkl_families(&self) -> Vec<HklFamily> {
        let mut families: Vec<(ReciprocalPoint, u32)> = Vec::new();
        for member in &self.members {
            match families
                .iter_mut()
                .find(|(rep, _)| (rep.d_spacing - member.d_spacing).abs() < D_SPACING_TOL)
            {
                Some((rep, count)) => {
                    *count += FRIEDEL_DEGENERACY;
                    if member.hkl > rep.hkl {
                        *rep = *member;
                    }
                }
                None => families.push((*member, FRIEDEL_DEGENERACY)),
            }
        }

        families
            .into_iter()
            .map(|(rep, multiplicity)| HklFamily {
                hkl: rep.hkl,
                multiplicity,
            })
            .collect()
    }
}

/// Sort key: ascending angle, ties broken by ascending |h|+|k|+|l| then
/// lexicographic hkl.
fn reflection_order(a: &Reflection, b: &Reflection) -> Ordering {
    let index_sum = |p: &ReciprocalPoint| p.hkl.iter().map(|i| i.abs()).sum::<i32>();
    a.point
        .two_theta
        .partial_cmp(&b.point.two_theta)
        .unwrap_or(Ordering::Equal)
        .then_with(|| index_sum(&a.point).cmp(&index_sum(&b.point)))
        .then_with(|| a.point.hkl.cmp(&b.point.hkl))
}

/// Merge corrected reflections into peak groups.
///
/// A reflection joins the open group when its two-theta differs from
/// the group's first reflection by less than TWO_THETA_TOL; intensities
/// add, the first reflection's angle and d-spacing represent the group.
pub fn group_reflections(mut reflections: Vec<Reflection>) -> Vec<PeakGroup> {
    reflections.sort_by(reflection_order);

    let mut groups: Vec<PeakGroup> = Vec::new();
    for reflection in reflections {
        match groups.last_mut() {
            Some(group)
                if (reflection.point.two_theta - group.two_theta).abs() < TWO_THETA_TOL =>
            {
                group.intensity += reflection.intensity;
                group.members.push(reflection.point);
            }
            _ => groups.push(PeakGroup {
                two_theta: reflection.point.two_theta,
                intensity: reflection.intensity,
                d_spacing: reflection.point.d_spacing,
                members: vec![reflection.point],
            }),
        }
    }

    groups
}
