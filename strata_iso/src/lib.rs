// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Iso: isometric projection geometry and the occlusion oracle.
//!
//! This crate answers the two geometric questions a depth-ordering pass
//! needs about a pair of placed boxes:
//!
//! - Do their projected footprints overlap on screen ([`Footprint`],
//!   [`Oracle::footprints_overlap`])?
//! - If so, which one is visually in front ([`Oracle::is_in_front_of`])?
//!
//! The predicates live behind the [`Oracle`] trait so higher layers can swap
//! the projection (or stub it in tests) without touching the ordering
//! algorithm. [`IsoOracle`] is the default 2:1 isometric implementation.
//!
//! Screen-space helpers ([`project`], [`silhouette`], [`projected_bounds`])
//! expose the projected hexagon for damage accounting and debug drawing.
//!
//! # Example
//!
//! ```rust
//! use strata_index::{Aabb3D, Vec3};
//! use strata_iso::{Footprint, IsoOracle, Oracle};
//!
//! let oracle = IsoOracle;
//! let floor = Aabb3D::from_origin_size(Vec3::ZERO, Vec3::new(2, 2, 1));
//! let crate_on_top = Aabb3D::from_origin_size(Vec3::new(0, 0, 1), Vec3::new(1, 1, 1));
//!
//! let f1 = Footprint::from_aabb(&floor);
//! let f2 = Footprint::from_aabb(&crate_on_top);
//! assert!(oracle.footprints_overlap(&f1, &f2));
//!
//! // The crate sits above the floor, so it draws after it.
//! assert!(oracle.is_in_front_of(&crate_on_top, &floor));
//! assert!(!oracle.is_in_front_of(&floor, &crate_on_top));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod footprint;

pub use footprint::{Footprint, project, projected_bounds, silhouette};

use strata_index::Aabb3D;

/// Geometric predicate service consumed by the depth-ordering pass.
///
/// Implementations must be pure: answers may be cached or recomputed freely.
/// Both predicates assume non-degenerate boxes; placement validation rejects
/// empty extents before they reach the oracle.
pub trait Oracle {
    /// Whether the projected footprints of two boxes overlap on screen.
    fn footprints_overlap(&self, a: &Footprint, b: &Footprint) -> bool;

    /// Whether box `a` is strictly in front of box `b` along the view axis,
    /// i.e. `b` must be drawn before `a`.
    fn is_in_front_of(&self, a: &Aabb3D, b: &Aabb3D) -> bool;
}

/// The default 2:1 isometric oracle.
///
/// The camera looks along the `(1, 1, 1)` grid diagonal, so a box whose
/// minimum corner clears another box's maximum corner on any single axis is
/// the closer of the two. For disjoint boxes with overlapping footprints the
/// test is exact; for interpenetrating boxes no order is reported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IsoOracle;

impl Oracle for IsoOracle {
    #[inline]
    fn footprints_overlap(&self, a: &Footprint, b: &Footprint) -> bool {
        a.overlaps(b)
    }

    #[inline]
    fn is_in_front_of(&self, a: &Aabb3D, b: &Aabb3D) -> bool {
        a.min.x >= b.max.x || a.min.y >= b.max.y || a.min.z >= b.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_index::Vec3;

    fn unit_box(x: i64, y: i64, z: i64) -> Aabb3D {
        Aabb3D::from_origin_size(Vec3::new(x, y, z), Vec3::new(1, 1, 1))
    }

    #[test]
    fn in_front_on_each_axis() {
        let origin = unit_box(0, 0, 0);
        assert!(IsoOracle.is_in_front_of(&unit_box(1, 0, 0), &origin));
        assert!(IsoOracle.is_in_front_of(&unit_box(0, 1, 0), &origin));
        assert!(IsoOracle.is_in_front_of(&unit_box(0, 0, 1), &origin));
    }

    #[test]
    fn in_front_is_antisymmetric_for_disjoint_boxes() {
        let a = unit_box(0, 0, 0);
        let b = unit_box(2, 0, 0);
        assert!(IsoOracle.is_in_front_of(&b, &a));
        assert!(!IsoOracle.is_in_front_of(&a, &b));
    }

    #[test]
    fn taller_box_in_front_of_floor() {
        let floor = Aabb3D::from_origin_size(Vec3::ZERO, Vec3::new(4, 4, 1));
        let tower = Aabb3D::from_origin_size(Vec3::new(1, 1, 1), Vec3::new(1, 1, 3));
        assert!(IsoOracle.is_in_front_of(&tower, &floor));
        assert!(
            IsoOracle.footprints_overlap(
                &Footprint::from_aabb(&tower),
                &Footprint::from_aabb(&floor)
            ),
            "tower should shade part of the floor"
        );
    }
}
