// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the map: child identifiers, flags, and the positionable record.

use strata_index::{Aabb3D, Vec3};
use strata_iso::{Footprint, Oracle};

use crate::map::Map;

/// Identifier for a child of a map (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Auxiliary flags carried by every positionable.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PositionableFlags: u8 {
        /// The object is a provisional placement (for example an editor
        /// preview). Cleared on successful insertion into a map.
        const TEMPORARY = 0b0000_0001;
        /// Membership marker: the object currently belongs to a map. Set on
        /// insertion, cleared on removal; used for group-based queries by the
        /// surrounding system.
        const GROUPED = 0b0000_0010;
    }
}

impl Default for PositionableFlags {
    fn default() -> Self {
        Self::TEMPORARY
    }
}

/// Geometric and render-state attributes shared by every placeable object,
/// including maps themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Positionable {
    /// Origin within the owning map's local space.
    pub position: Vec3,
    /// Axis-aligned footprint extent, non-negative per component.
    pub size: Vec3,
    /// Draw-order spacing this object contributes when others stack visually
    /// behind it. At least 1 so every object reserves its own draw slot.
    pub stack_height: i64,
    /// Auxiliary flags; see [`PositionableFlags`].
    pub flags: PositionableFlags,
    /// Auxiliary debug offset, zeroed on successful insertion.
    pub debug_offset: i64,
}

impl Default for Positionable {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            size: Vec3::new(1, 1, 1),
            stack_height: 1,
            flags: PositionableFlags::default(),
            debug_offset: 0,
        }
    }
}

impl Positionable {
    /// The bounding box derived from the current position and size.
    #[inline]
    pub fn aabb(&self) -> Aabb3D {
        Aabb3D::from_origin_size(self.position, self.size)
    }

    /// The projected hexagonal footprint derived from the bounding box.
    #[inline]
    pub fn footprint(&self) -> Footprint {
        Footprint::from_aabb(&self.aabb())
    }

    /// A value copy of this positionable, repositioned by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            position: self.position + offset,
            ..*self
        }
    }
}

/// A placeable element: either a plain object or a whole nested map.
///
/// Containment forms a tree by construction, so structural recursion over
/// this variant is bounded by actual nesting depth.
pub enum Element<O: Oracle = strata_iso::IsoOracle> {
    /// A plain object occupying its own box.
    Leaf(Positionable),
    /// A nested map; its leaf descendants are flattened into the parent's
    /// overlap index on insertion.
    Map(Map<O>),
}

impl<O: Oracle> Element<O> {
    /// The element's own positionable record.
    pub fn local(&self) -> &Positionable {
        match self {
            Self::Leaf(p) => p,
            Self::Map(m) => m.local(),
        }
    }

    pub(crate) fn local_mut(&mut self) -> &mut Positionable {
        match self {
            Self::Leaf(p) => p,
            Self::Map(m) => m.local_mut(),
        }
    }

    /// Whether this element is a nested map.
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }
}

impl<O: Oracle + core::fmt::Debug> core::fmt::Debug for Element<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Leaf(p) => f.debug_tuple("Leaf").field(p).finish(),
            Self::Map(m) => f.debug_tuple("Map").field(m).finish(),
        }
    }
}
