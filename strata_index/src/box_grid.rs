// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owner-tagged box occupancy over a bounded integer volume.
//!
//! Each stored box marks every integer cell it covers with its owner, so
//! overlap queries touch only the cells covered by the query box. This is a
//! good fit for edition-time placement validation where boxes are small
//! compared to the map extent and queries are frequent.

use core::fmt::Debug;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::types::{Aabb3D, Vec3};

/// Occupancy index over axis-aligned 3D boxes tagged with an owner.
///
/// Boxes use half-open extents: two boxes sharing only a face do not overlap
/// and may coexist. The index is bounded by a declared size; the parts of a
/// box falling outside `[0, size)` are not recorded.
#[derive(Clone)]
pub struct BoxGrid<P> {
    size: Vec3,
    cells: HashMap<(i64, i64, i64), P>,
}

impl<P: Copy + PartialEq + Debug> BoxGrid<P> {
    /// Create an empty index covering `[0, size)` on every axis.
    pub fn new(size: Vec3) -> Self {
        Self {
            size,
            cells: HashMap::new(),
        }
    }

    /// The declared extent of the index.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// The integer cells covered by `aabb`, clamped to the index bounds.
    fn covered_cells(&self, aabb: &Aabb3D) -> SmallVec<[(i64, i64, i64); 8]> {
        let x0 = aabb.min.x.max(0);
        let y0 = aabb.min.y.max(0);
        let z0 = aabb.min.z.max(0);
        let x1 = aabb.max.x.min(self.size.x);
        let y1 = aabb.max.y.min(self.size.y);
        let z1 = aabb.max.z.min(self.size.z);
        let mut out = SmallVec::new();
        for z in z0..z1 {
            for y in y0..y1 {
                for x in x0..x1 {
                    out.push((x, y, z));
                }
            }
        }
        out
    }

    /// Add a box tagged with `owner`.
    ///
    /// When `allow_overlap` is false, the insertion is rejected without any
    /// mutation if the box overlaps a stored box belonging to a different
    /// owner. Boxes with zero or inverted extent are always rejected.
    ///
    /// Returns whether the box was stored.
    pub fn insert(&mut self, aabb: Aabb3D, owner: P, allow_overlap: bool) -> bool {
        if aabb.is_empty() {
            return false;
        }
        let cells = self.covered_cells(&aabb);
        if !allow_overlap
            && cells
                .iter()
                .any(|c| self.cells.get(c).is_some_and(|held| *held != owner))
        {
            return false;
        }
        for c in cells {
            self.cells.insert(c, owner);
        }
        true
    }

    /// Clear every cell covered by `aabb`, so occupancy reflects vacated space.
    pub fn vacate(&mut self, aabb: Aabb3D) {
        for c in self.covered_cells(&aabb) {
            self.cells.remove(&c);
        }
    }

    /// Whether any stored box intersects `aabb`.
    pub fn is_overlapping(&self, aabb: Aabb3D) -> bool {
        self.covered_cells(&aabb)
            .iter()
            .any(|c| self.cells.contains_key(c))
    }

    /// The owner of the box covering the cell at `pos`, if any.
    pub fn get(&self, pos: Vec3) -> Option<P> {
        self.cells.get(&(pos.x, pos.y, pos.z)).copied()
    }

    /// Whether `owner` holds any cell in the index.
    pub fn contains_owner(&self, owner: &P) -> bool {
        self.cells.values().any(|held| held == owner)
    }

    /// Clear the index and reshape it to a new extent.
    pub fn resize(&mut self, new_size: Vec3) {
        self.size = new_size;
        self.cells.clear();
    }
}

impl<P: Copy + PartialEq + Debug> Debug for BoxGrid<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoxGrid")
            .field("size", &self.size)
            .field("occupied_cells", &self.cells.len())
            .finish_non_exhaustive()
    }
}
