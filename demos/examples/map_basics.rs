// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map basics.
//!
//! Place a few objects, probe the indexes, nest a sub-map, and drain damage.
//!
//! Run:
//! - `cargo run -p strata_demos --example map_basics`

use strata_index::{Aabb3D, Vec3};
use strata_map::{Element, Map, Positionable};

fn main() {
    let mut map = Map::new(Vec3::new(10, 10, 10));

    // A 2x2 floor slab and a crate on one of its corners.
    let floor = map
        .add_positionable(Element::Leaf(Positionable {
            position: Vec3::new(0, 0, 0),
            size: Vec3::new(2, 2, 1),
            ..Positionable::default()
        }))
        .expect("floor fits an empty map");
    let krate = map
        .add_positionable(Element::Leaf(Positionable {
            position: Vec3::new(0, 0, 1),
            ..Positionable::default()
        }))
        .expect("crate sits on the floor");

    println!("floor at origin: {:?}", map.get_positionable_at(Vec3::ZERO, true) == Some(floor));
    println!(
        "crate covers (0,0,1): {:?}",
        map.get_positionable_at(Vec3::new(0, 0, 1), false) == Some(krate)
    );

    // Placement is pre-validated the way a host would do it.
    let probe = Aabb3D::from_origin_size(Vec3::new(1, 1, 0), Vec3::new(1, 1, 1));
    println!("probe overlaps the floor: {}", map.is_overlapping(probe));
    let rejected = map.add_positionable(Element::Leaf(Positionable {
        position: Vec3::new(1, 1, 0),
        ..Positionable::default()
    }));
    println!("overlapping insert rejected: {}", rejected.is_none());

    // A nested map: its leaf is flattened into the parent's overlap index.
    let mut shed = Map::new(Vec3::new(3, 3, 3));
    shed.set_position(Vec3::new(5, 5, 0));
    shed.add_positionable(Element::Leaf(Positionable {
        position: Vec3::new(1, 1, 0),
        ..Positionable::default()
    }))
    .expect("shed content fits");
    let shed_id = map.add_positionable(Element::Map(shed)).expect("shed fits");
    println!(
        "shed leaf seen at (6,6,0): {:?}",
        map.get_positionable_at(Vec3::new(6, 6, 0), false) == Some(shed_id)
    );

    // Mutations accumulate repaint regions.
    map.remove_positionable(krate);
    let damage = map.take_damage();
    println!("dirty rects: {}", damage.dirty_rects.len());
    if let Some(union) = damage.union_rect() {
        println!("repaint union: {union:?}");
    }
}
