// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexagonal projected footprints of 3D boxes.

use kurbo::{Point, Rect};
use strata_index::{Aabb3D, Vec3};

/// Map a grid-space position to screen space.
///
/// The projection is the classic 2:1 isometric mapping: `u = x - y`,
/// `v = (x + y) / 2 - z`. `u` grows to the right, `v` grows down-screen.
#[inline]
pub fn project(pos: Vec3) -> Point {
    let (x, y, z) = (pos.x as f64, pos.y as f64, pos.z as f64);
    Point::new(x - y, 0.5 * (x + y) - z)
}

/// The hexagonal projection of a 3D box.
///
/// Under the isometric mapping, a box projects to a hexagon whose edges run
/// in only three directions. The hexagon is fully described by three
/// half-open intervals along the corresponding separating axes: `x - y`,
/// `x - z`, and `y - z`. Because every footprint shares the same three edge
/// directions, two footprints overlap if and only if all three interval
/// pairs overlap (separating axis theorem with exactly three axes).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Footprint {
    /// Interval along `x - y` (screen horizontal).
    pub xy: (i64, i64),
    /// Interval along `x - z` (down-left screen edge normal).
    pub xz: (i64, i64),
    /// Interval along `y - z` (down-right screen edge normal).
    pub yz: (i64, i64),
}

impl Footprint {
    /// Compute the footprint of a box.
    pub fn from_aabb(aabb: &Aabb3D) -> Self {
        Self {
            xy: (aabb.min.x - aabb.max.y, aabb.max.x - aabb.min.y),
            xz: (aabb.min.x - aabb.max.z, aabb.max.x - aabb.min.z),
            yz: (aabb.min.y - aabb.max.z, aabb.max.y - aabb.min.z),
        }
    }

    /// Whether two footprints overlap with positive area.
    ///
    /// Footprints that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.xy.0 < other.xy.1
            && self.xy.1 > other.xy.0
            && self.xz.0 < other.xz.1
            && self.xz.1 > other.xz.0
            && self.yz.0 < other.yz.1
            && self.yz.1 > other.yz.0
    }
}

/// The six silhouette vertices of a box's projected hexagon, clockwise from
/// the topmost point.
pub fn silhouette(aabb: &Aabb3D) -> [Point; 6] {
    let (lo, hi) = (aabb.min, aabb.max);
    [
        project(Vec3::new(lo.x, lo.y, hi.z)),
        project(Vec3::new(hi.x, lo.y, hi.z)),
        project(Vec3::new(hi.x, lo.y, lo.z)),
        project(Vec3::new(hi.x, hi.y, lo.z)),
        project(Vec3::new(lo.x, hi.y, lo.z)),
        project(Vec3::new(lo.x, hi.y, hi.z)),
    ]
}

/// The screen-space bounding rectangle of a box's projected hexagon.
///
/// Useful as a conservative dirty region when the box appears or vanishes.
pub fn projected_bounds(aabb: &Aabb3D) -> Rect {
    let pts = silhouette(aabb);
    let mut r = Rect::from_points(pts[0], pts[0]);
    for p in &pts[1..] {
        r = r.union_pt(*p);
    }
    r
}
