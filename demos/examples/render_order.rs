// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render order.
//!
//! Build a small scene and dump the draw order a tick produces, together
//! with each object's projected screen hexagon.
//!
//! Run:
//! - `cargo run -p strata_demos --example render_order`

use strata_index::Vec3;
use strata_iso::{projected_bounds, silhouette};
use strata_map::{Element, Map, NodeId, Positionable};

fn main() {
    let mut map = Map::new(Vec3::new(8, 8, 8));

    let scene: Vec<(&str, NodeId)> = [
        ("floor", (0, 0, 0), (4, 4, 1), 1),
        ("pillar", (1, 1, 1), (1, 1, 3), 3),
        ("ledge", (3, 0, 1), (1, 2, 1), 1),
        ("far tile", (6, 6, 0), (1, 1, 1), 1),
    ]
    .iter()
    .map(|&(name, pos, size, stack)| {
        let id = map
            .add_positionable(Element::Leaf(Positionable {
                position: Vec3::new(pos.0, pos.1, pos.2),
                size: Vec3::new(size.0, size.1, size.2),
                stack_height: stack,
                ..Positionable::default()
            }))
            .expect("scene objects do not overlap");
        (name, id)
    })
    .collect();

    // One tick.
    map.build_render_order();

    let mut by_depth: Vec<_> = scene
        .iter()
        .map(|&(name, id)| (map.sort_index(id).unwrap(), name, id))
        .collect();
    by_depth.sort_unstable_by_key(|&(depth, _, _)| depth);

    println!("draw order (back to front):");
    for (depth, name, id) in by_depth {
        let aabb = map.get(id).unwrap().local().aabb();
        println!(
            "  {depth:>3}  {name:<9} screen {:?}",
            projected_bounds(&aabb)
        );
        let hex = silhouette(&aabb);
        println!("       hexagon {:?} .. {:?}", hex[0], hex[3]);
    }
}
