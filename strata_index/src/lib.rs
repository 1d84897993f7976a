// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Index: placement indexes over a bounded integer 3D volume.
//!
//! Strata Index is the spatial foundation of the Strata crates. It offers two
//! complementary occupancy structures sized to a map's declared extent:
//!
//! - [`CellGrid`]: dense exact-position lookup of the single occupant of an
//!   integer cell (one occupant per cell, last writer wins).
//! - [`BoxGrid`]: owner-tagged box occupancy with atomic overlap-rejecting
//!   insertion, vacate-on-delete, and box/cell queries.
//!
//! Both are parameterized over a small copyable payload `P` (typically a node
//! handle). Boxes use half-open `[min, max)` extents on every axis, so boxes
//! that merely touch do not overlap.
//!
//! # Example
//!
//! ```rust
//! use strata_index::{Aabb3D, BoxGrid, CellGrid, Vec3};
//!
//! let size = Vec3::new(10, 10, 10);
//! let mut cells: CellGrid<u32> = CellGrid::new(size);
//! let mut boxes: BoxGrid<u32> = BoxGrid::new(size);
//!
//! let origin = Vec3::new(2, 3, 0);
//! let aabb = Aabb3D::from_origin_size(origin, Vec3::new(2, 2, 1));
//!
//! assert!(boxes.insert(aabb, 1, false));
//! cells.set(origin, Some(1));
//!
//! // A second object on the same footprint is rejected before any mutation.
//! assert!(!boxes.insert(aabb, 2, false));
//!
//! assert_eq!(cells.get(origin), Some(1));
//! assert!(boxes.is_overlapping(aabb));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod box_grid;
mod cell_grid;
mod types;

pub use box_grid::BoxGrid;
pub use cell_grid::CellGrid;
pub use types::{Aabb3D, Vec3};
