// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types shared by the placement indexes.

use core::ops::{Add, Sub};

/// Integer 3-vector used for cell positions and extents.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec3 {
    /// X component.
    pub x: i64,
    /// Y component.
    pub y: i64,
    /// Z component.
    pub z: i64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a new vector from components.
    #[inline(always)]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Axis-aligned bounding box in 3D, with half-open `[min, max)` extents.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb3D {
    /// Minimum corner (inclusive).
    pub min: Vec3,
    /// Maximum corner (exclusive).
    pub max: Vec3,
}

impl Aabb3D {
    /// Create a new AABB from min/max corners.
    #[inline(always)]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from an origin and a size.
    #[inline]
    pub fn from_origin_size(origin: Vec3, size: Vec3) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// The extent of the box along each axis.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// This box translated by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Whether this box contains the integer cell at `pos`.
    #[inline]
    pub fn contains_cell(&self, pos: Vec3) -> bool {
        self.min.x <= pos.x
            && pos.x < self.max.x
            && self.min.y <= pos.y
            && pos.y < self.max.y
            && self.min.z <= pos.z
            && pos.z < self.max.z
    }

    /// Determines whether this box overlaps another.
    ///
    /// Extents are half-open: two boxes that merely share a face, edge, or
    /// corner do **not** overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_index::{Aabb3D, Vec3};
    ///
    /// let a = Aabb3D::from_origin_size(Vec3::ZERO, Vec3::new(2, 2, 2));
    /// let b = Aabb3D::from_origin_size(Vec3::new(1, 1, 1), Vec3::new(2, 2, 2));
    /// assert!(a.overlaps(&b));
    ///
    /// // Touching along a face is not an overlap.
    /// let c = Aabb3D::from_origin_size(Vec3::new(2, 0, 0), Vec3::new(2, 2, 2));
    /// assert!(!a.overlaps(&c));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Return true if the box has zero or inverted extent along any axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y || self.max.z <= self.min.z
    }
}
