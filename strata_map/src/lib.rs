// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Map: an overlap-validated isometric map with per-tick depth ordering.
//!
//! A [`Map`] is a container of spatially placed objects ("positionables") on
//! an isometric 3D grid. It keeps two placement indexes in sync — exact
//! origin cells and owner-tagged occupied boxes — and recomputes a total draw
//! order for its children every tick from the geometry oracle's pairwise
//! occlusion answers.
//!
//! - Insertions are validated atomically: out-of-bounds or overlapping
//!   placements are rejected with no state change.
//! - Maps nest: inserting a map flattens its leaf descendants into the
//!   parent's overlap index at offset-composed positions, so queries see
//!   through nesting.
//! - [`Map::build_render_order`] assigns every child a [`Map::sort_index`]
//!   such that anything the oracle reports as visually behind a child draws
//!   first, with gaps reserved for stacked sub-elements.
//!
//! ## Example
//!
//! ```rust
//! use strata_index::Vec3;
//! use strata_map::{Element, Map, Positionable};
//!
//! let mut map = Map::new(Vec3::new(10, 10, 10));
//!
//! let floor = map
//!     .add_positionable(Element::Leaf(Positionable {
//!         position: Vec3::new(0, 0, 0),
//!         size: Vec3::new(2, 2, 1),
//!         ..Positionable::default()
//!     }))
//!     .unwrap();
//! let crate_on_top = map
//!     .add_positionable(Element::Leaf(Positionable {
//!         position: Vec3::new(0, 0, 1),
//!         ..Positionable::default()
//!     }))
//!     .unwrap();
//!
//! // One tick: recompute the draw order.
//! map.build_render_order();
//! assert!(map.sort_index(floor).unwrap() < map.sort_index(crate_on_top).unwrap());
//! ```
//!
//! ## Error handling
//!
//! No panics and no error types: every fallible operation is a silent no-op
//! observable only through its return value, so per-frame callers can probe
//! with [`Map::is_overlapping`] and bounds queries first.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod map;
mod render;
mod types;

pub use damage::Damage;
pub use map::Map;
pub use types::{Element, NodeId, Positionable, PositionableFlags};
