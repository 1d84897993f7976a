// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tick draw-order pass: depth-first linearization of the visibility
//! dependency relation.

use alloc::vec::Vec;

use strata_iso::Oracle;

use crate::map::Map;
use crate::types::{Element, NodeId};

impl<O: Oracle> Map<O> {
    /// Recompute the draw order of every child from scratch.
    ///
    /// The host calls this once per tick. Nothing is cached across ticks:
    /// the pass resets every child's scratch state, then walks children in
    /// enumeration order, visiting each child's "drawn before me" dependency
    /// set depth-first. Every node that must be drawn before a child
    /// receives a strictly smaller [`Map::sort_index`], with a one-unit gap
    /// reserved per node plus a gap equal to the tallest dependency's stack
    /// height, leaving room for stacked sub-elements at fractional depths.
    ///
    /// Cyclic occlusion dependencies cannot loop: a node is marked visited
    /// before its dependencies are walked, so cycles resolve arbitrarily by
    /// first-encounter order.
    ///
    /// Nested child maps then rebuild their own interior order; each map
    /// orders only its own children.
    pub fn build_render_order(&mut self) {
        self.current_sorting_order = 0;
        let snapshot: Vec<NodeId> = self.children().collect();
        for &id in &snapshot {
            self.node_mut(id).rendered = false;
        }
        for &id in &snapshot {
            if !self.node(id).rendered {
                self.visit(id, &snapshot);
            }
        }
        for &id in &snapshot {
            if let Element::Map(inner) = &mut self.node_mut(id).element {
                inner.build_render_order();
            }
        }
    }

    fn visit(&mut self, id: NodeId, snapshot: &[NodeId]) {
        self.node_mut(id).rendered = true;
        let behind = self.positionables_behind(id, snapshot);
        let mut max_stack = 0;
        for b in behind {
            if !self.node(b).rendered {
                self.visit(b, snapshot);
            }
            // The gap is sized by every dependency, not only newly-visited
            // ones.
            max_stack = max_stack.max(self.node(b).element.local().stack_height);
        }
        self.current_sorting_order += max_stack;
        let sort_index = self.current_sorting_order;
        self.node_mut(id).sort_index = sort_index;
        self.current_sorting_order += 1;
    }

    /// The siblings that must be drawn before `id`: their footprint overlaps
    /// its footprint on screen and `id` is geometrically in front of them.
    fn positionables_behind(&self, id: NodeId, snapshot: &[NodeId]) -> Vec<NodeId> {
        let local = self.node(id).element.local();
        let aabb = local.aabb();
        let footprint = local.footprint();
        snapshot
            .iter()
            .copied()
            .filter(|&other| {
                if other == id {
                    return false;
                }
                let o = self.node(other).element.local();
                self.oracle().footprints_overlap(&footprint, &o.footprint())
                    && self.oracle().is_in_front_of(&aabb, &o.aabb())
            })
            .collect()
    }

    /// The draw index assigned to a child by the last
    /// [`Map::build_render_order`] pass. `None` for stale ids.
    pub fn sort_index(&self, id: NodeId) -> Option<i64> {
        if !self.is_alive(id) {
            return None;
        }
        Some(self.node(id).sort_index)
    }
}
