// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map container: placement validation, indexes, and composition operations.

use alloc::vec::Vec;

use strata_index::{Aabb3D, BoxGrid, CellGrid, Vec3};
use strata_iso::{IsoOracle, Oracle, projected_bounds};

use crate::damage::Damage;
use crate::types::{Element, NodeId, Positionable, PositionableFlags};

pub(crate) struct Node<O: Oracle> {
    pub(crate) generation: u32,
    /// Scratch for the render-order pass; valid only within one pass.
    pub(crate) rendered: bool,
    pub(crate) sort_index: i64,
    pub(crate) element: Element<O>,
}

/// A container of spatially placed objects on an isometric 3D grid.
///
/// A map validates where each child sits (no two children may overlap) and
/// recomputes a total draw order for them every tick. Maps are themselves
/// positionable and nest recursively; a nested map's leaf descendants are
/// flattened into the parent's overlap index on insertion, so overlap
/// queries see through nesting.
///
/// The type parameter `O` selects the geometry oracle answering footprint
/// overlap and front/behind queries. It defaults to the 2:1 isometric
/// projection ([`IsoOracle`]); tests and alternative projections can
/// substitute their own [`Oracle`].
///
/// All fallible operations are silent no-ops: out-of-bounds or overlapping
/// insertions and stale removals leave the map unchanged and report the
/// absence of the expected side effect through their return value. Callers
/// are expected to pre-validate via [`Map::is_overlapping`] and bounds
/// queries.
///
/// ## Example
///
/// ```rust
/// use strata_index::Vec3;
/// use strata_map::{Element, Map, Positionable};
///
/// let mut map = Map::new(Vec3::new(10, 10, 10));
/// let tile = Positionable {
///     position: Vec3::new(2, 3, 0),
///     ..Positionable::default()
/// };
/// let id = map.add_positionable(Element::Leaf(tile)).unwrap();
///
/// assert!(map.has(id));
/// assert_eq!(map.get_positionable_at(Vec3::new(2, 3, 0), true), Some(id));
///
/// // A second object on the same cell is rejected.
/// assert!(map.add_positionable(Element::Leaf(tile)).is_none());
/// ```
pub struct Map<O: Oracle = IsoOracle> {
    local: Positionable,
    nodes: Vec<Option<Node<O>>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    /// children in insertion order; the enumeration order of every pass
    order: Vec<NodeId>,
    cells: CellGrid<NodeId>,
    boxes: BoxGrid<NodeId>,
    oracle: O,
    damage: Damage,
    pub(crate) current_sorting_order: i64,
}

impl<O: Oracle + core::fmt::Debug> core::fmt::Debug for Map<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Map")
            .field("size", &self.local.size)
            .field("children_total", &total)
            .field("children_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("oracle", &self.oracle)
            .finish_non_exhaustive()
    }
}

impl Map {
    /// Create an empty map of the given extent using the default isometric
    /// oracle.
    pub fn new(size: Vec3) -> Self {
        Self::with_oracle(size, IsoOracle)
    }
}

impl<O: Oracle> Map<O> {
    /// Create an empty map of the given extent with a specific oracle.
    pub fn with_oracle(size: Vec3, oracle: O) -> Self {
        Self {
            local: Positionable {
                size,
                ..Positionable::default()
            },
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            order: Vec::new(),
            cells: CellGrid::new(size),
            boxes: BoxGrid::new(size),
            oracle,
            damage: Damage::default(),
            current_sorting_order: 0,
        }
    }

    /// The map's own positionable record (maps are placeable themselves).
    pub fn local(&self) -> &Positionable {
        &self.local
    }

    pub(crate) fn local_mut(&mut self) -> &mut Positionable {
        &mut self.local
    }

    /// Set the map's origin within its future parent's space.
    ///
    /// Only meaningful before the map is inserted into a parent; children
    /// keep their positions, which are relative to this map.
    pub fn set_position(&mut self, position: Vec3) {
        self.local.position = position;
    }

    /// The declared extent of the map.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.local.size
    }

    /// Whether `id` refers to a current child.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .is_some_and(|n| n.generation == id.1)
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<O> {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<O> {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    /// The element stored under `id`, if it is a current child.
    pub fn get(&self, id: NodeId) -> Option<&Element<O>> {
        if !self.is_alive(id) {
            return None;
        }
        Some(&self.node(id).element)
    }

    /// Children in their enumeration (insertion) order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Number of current children.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the map has no children.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn alloc(&mut self, element: Element<O>) -> NodeId {
        let node = |generation| Node {
            generation,
            rendered: false,
            sort_index: 0,
            element,
        };
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(node(generation));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            NodeId::new(idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(node(generation)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            NodeId::new((self.nodes.len() - 1) as u32, generation)
        }
    }

    fn in_bounds(&self, pos: Vec3) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.z >= 0
            && pos.x < self.local.size.x
            && pos.y < self.local.size.y
            && pos.z < self.local.size.z
    }

    /// The boxes an element occupies in its parent's overlap index: its own
    /// box for a leaf, the flattened leaf-descendant boxes for a map.
    fn flattened_boxes(element: &Element<O>) -> Vec<Aabb3D> {
        match element {
            Element::Leaf(p) => alloc::vec![p.aabb()],
            Element::Map(m) => m
                .flatten_positionables(m.local.position)
                .iter()
                .map(Positionable::aabb)
                .collect(),
        }
    }

    /// Insert an element as a child of this map.
    ///
    /// The insertion is rejected, leaving the map unchanged, when the
    /// element's origin falls outside `[0, size)` on any axis, when a leaf's
    /// extent is degenerate, or when the element would overlap a current
    /// child (for nested maps, every leaf descendant is tested at its offset
    /// position rather than the map's outer box).
    ///
    /// On success the element's `TEMPORARY` flag is cleared, its
    /// `debug_offset` is zeroed, and its `GROUPED` membership marker is set.
    /// Returns the new child's id, or `None` if the insertion was rejected.
    pub fn add_positionable(&mut self, element: Element<O>) -> Option<NodeId> {
        let pos = element.local().position;
        if !self.in_bounds(pos) {
            return None;
        }
        let overlapping = match &element {
            Element::Map(m) => self.are_descendants_overlapping(pos, m),
            Element::Leaf(p) => {
                if p.aabb().is_empty() {
                    return None;
                }
                self.boxes.is_overlapping(p.aabb())
            }
        };
        if overlapping {
            return None;
        }

        let outer = element.local().aabb();
        let occupied = Self::flattened_boxes(&element);
        let id = self.alloc(element);
        {
            let local = self.node_mut(id).element.local_mut();
            local.flags.remove(PositionableFlags::TEMPORARY);
            local.flags.insert(PositionableFlags::GROUPED);
            local.debug_offset = 0;
        }
        self.cells.set(pos, Some(id));
        for aabb in occupied {
            // Validated above; the parts of a box outside the map extent are
            // not recorded.
            let _ = self.boxes.insert(aabb, id, true);
        }
        self.order.push(id);
        self.damage.dirty_rects.push(projected_bounds(&outer));
        Some(id)
    }

    /// Remove a child, returning its element.
    ///
    /// Stale ids and children whose origin lies outside the current extent
    /// are a no-op (`None`). The returned element has its `GROUPED` marker
    /// cleared; a repaint of its projected bounds is recorded as damage.
    pub fn remove_positionable(&mut self, id: NodeId) -> Option<Element<O>> {
        if !self.is_alive(id) {
            return None;
        }
        let pos = self.node(id).element.local().position;
        if pos.x >= self.local.size.x
            || pos.y >= self.local.size.y
            || pos.z >= self.local.size.z
        {
            return None;
        }

        let node = self.nodes[id.idx()].take().expect("dangling NodeId");
        self.free_list.push(id.idx());
        self.order.retain(|&c| c != id);
        self.cells.set(pos, None);

        let mut element = node.element;
        for aabb in Self::flattened_boxes(&element) {
            self.boxes.vacate(aabb);
        }
        self.damage
            .dirty_rects
            .push(projected_bounds(&element.local().aabb()));
        element
            .local_mut()
            .flags
            .remove(PositionableFlags::GROUPED);
        Some(element)
    }

    /// The child at an exact cell.
    ///
    /// With `only_origin` set, only a child's origin cell matches (position
    /// index); otherwise any cell covered by its occupied boxes matches
    /// (overlap index).
    pub fn get_positionable_at(&self, pos: Vec3, only_origin: bool) -> Option<NodeId> {
        if only_origin {
            self.cells.get(pos)
        } else {
            self.boxes.get(pos)
        }
    }

    /// Whether any current child's occupied boxes intersect `aabb`.
    pub fn is_overlapping(&self, aabb: Aabb3D) -> bool {
        self.boxes.is_overlapping(aabb)
    }

    /// Whether `id` is a current child registered in the position index.
    ///
    /// Linear in the map's volume; intended for validation, not per-frame
    /// queries.
    pub fn has(&self, id: NodeId) -> bool {
        self.is_alive(id) && self.cells.contains(&id)
    }

    /// Children as enumerated from the position index, independent of host
    /// iteration order.
    ///
    /// This allocates a fresh list and should not be used often.
    pub fn positionable_children(&self) -> Vec<NodeId> {
        self.cells.iter().map(|(_, id)| id).collect()
    }

    /// Recursively test every descendant of `map`, offset by `position` plus
    /// the cumulative positions of intervening nested maps, against this
    /// map's overlap index.
    pub fn are_descendants_overlapping(&self, position: Vec3, map: &Map<O>) -> bool {
        for id in map.children() {
            match &map.node(id).element {
                Element::Map(inner) => {
                    if self.are_descendants_overlapping(position + inner.local.position, inner) {
                        return true;
                    }
                }
                Element::Leaf(p) => {
                    if self.boxes.is_overlapping(p.aabb().translated(position)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Copies of every leaf descendant, repositioned by `offset` plus the
    /// cumulative positions of intervening nested maps.
    ///
    /// The result is geometrically equivalent to the nested structure but
    /// contains no maps.
    pub fn flatten_positionables(&self, offset: Vec3) -> Vec<Positionable> {
        let mut out = Vec::new();
        for id in self.children() {
            match &self.node(id).element {
                Element::Map(inner) => {
                    out.extend(inner.flatten_positionables(offset + inner.local.position));
                }
                Element::Leaf(p) => out.push(p.translated(offset)),
            }
        }
        out
    }

    /// Build a new map with the same outer box, populated with this map's
    /// flattened leaves.
    ///
    /// Every leaf goes through [`Map::add_positionable`] and is validated as
    /// any external insertion would be. Leaves whose flattened position falls
    /// outside the outer box (possible when a nested map's content exceeded
    /// its parent's extent) are silently dropped; this is documented
    /// behavior, not an error.
    pub fn flatten_to_new_map(&self) -> Self
    where
        O: Clone,
    {
        let mut map = Self::with_oracle(self.local.size, self.oracle.clone());
        map.local = self.local;
        for p in self.flatten_positionables(Vec3::ZERO) {
            let _ = map.add_positionable(Element::Leaf(p));
        }
        map
    }

    /// Change the map's extent, propagating to both indexes.
    ///
    /// Both indexes are rebuilt: children whose origin still lies within the
    /// new extent are re-registered; children left outside remain attached
    /// but unindexed until re-added.
    pub fn resize(&mut self, new_size: Vec3) {
        self.local.size = new_size;
        self.cells.resize(new_size);
        self.boxes.resize(new_size);

        let order = self.order.clone();
        let mut registrations = Vec::new();
        for id in order {
            let node = self.node(id);
            let pos = node.element.local().position;
            if !self.in_bounds(pos) {
                continue;
            }
            registrations.push((id, pos, Self::flattened_boxes(&node.element)));
        }
        for (id, pos, occupied) in registrations {
            self.cells.set(pos, Some(id));
            for aabb in occupied {
                let _ = self.boxes.insert(aabb, id, true);
            }
        }
    }

    /// Drain the accumulated repaint regions.
    pub fn take_damage(&mut self) -> Damage {
        core::mem::take(&mut self.damage)
    }

    pub(crate) fn oracle(&self) -> &O {
        &self.oracle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_iso::Footprint;

    fn leaf(x: i64, y: i64, z: i64) -> Element {
        Element::Leaf(Positionable {
            position: Vec3::new(x, y, z),
            ..Positionable::default()
        })
    }

    fn sized_leaf(pos: (i64, i64, i64), size: (i64, i64, i64)) -> Element {
        Element::Leaf(Positionable {
            position: Vec3::new(pos.0, pos.1, pos.2),
            size: Vec3::new(size.0, size.1, size.2),
            ..Positionable::default()
        })
    }

    #[test]
    fn add_then_query_then_remove() {
        let mut map = Map::new(Vec3::new(10, 10, 10));
        let id = map.add_positionable(leaf(0, 0, 0)).unwrap();

        assert!(map.has(id));
        assert_eq!(map.get_positionable_at(Vec3::ZERO, true), Some(id));
        assert_eq!(map.get_positionable_at(Vec3::ZERO, false), Some(id));
        assert_eq!(map.positionable_children(), alloc::vec![id]);

        let removed = map.remove_positionable(id).unwrap();
        assert!(!map.has(id));
        assert_eq!(map.get_positionable_at(Vec3::ZERO, true), None);
        assert_eq!(map.get_positionable_at(Vec3::ZERO, false), None);
        assert!(
            !removed
                .local()
                .flags
                .contains(PositionableFlags::GROUPED),
            "membership marker should be cleared on removal"
        );

        // Stale id: silent no-op.
        assert!(map.remove_positionable(id).is_none());
        assert!(map.get(id).is_none());
    }

    #[test]
    fn coincident_insertion_is_rejected() {
        let mut map = Map::new(Vec3::new(10, 10, 10));
        let l1 = map.add_positionable(leaf(0, 0, 0));
        assert!(l1.is_some());

        let l2 = map.add_positionable(leaf(0, 0, 0));
        assert!(l2.is_none());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn rejected_insertion_leaves_no_trace() {
        let mut map = Map::new(Vec3::new(10, 10, 10));
        let id = map.add_positionable(sized_leaf((1, 1, 0), (3, 3, 1))).unwrap();
        let before_children = map.positionable_children();

        // Overlapping.
        assert!(map.add_positionable(sized_leaf((2, 2, 0), (3, 3, 1))).is_none());
        // Out of bounds.
        assert!(map.add_positionable(leaf(10, 0, 0)).is_none());
        assert!(map.add_positionable(leaf(-1, 0, 0)).is_none());
        // Degenerate extent.
        assert!(map.add_positionable(sized_leaf((5, 5, 5), (0, 1, 1))).is_none());

        assert_eq!(map.positionable_children(), before_children);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_positionable_at(Vec3::new(2, 2, 0), false), Some(id));
    }

    #[test]
    fn insertion_tags_the_element() {
        let mut map = Map::new(Vec3::new(5, 5, 5));
        let p = Positionable {
            debug_offset: 9,
            ..Positionable::default()
        };
        assert!(p.flags.contains(PositionableFlags::TEMPORARY));

        let id = map.add_positionable(Element::Leaf(p)).unwrap();
        let stored = map.get(id).unwrap().local();
        assert!(!stored.flags.contains(PositionableFlags::TEMPORARY));
        assert!(stored.flags.contains(PositionableFlags::GROUPED));
        assert_eq!(stored.debug_offset, 0);
    }

    #[test]
    fn nested_map_is_indexed_by_flattened_leaves() {
        let mut inner = Map::new(Vec3::new(4, 4, 4));
        inner.set_position(Vec3::new(2, 0, 0));
        inner.add_positionable(leaf(1, 0, 0)).unwrap();

        let mut parent = Map::new(Vec3::new(10, 10, 10));
        let m = parent.add_positionable(Element::Map(inner)).unwrap();

        // The leaf's box lands at the offset-composed position (3, 0, 0),
        // tagged with the nested map as owner.
        assert_eq!(parent.get_positionable_at(Vec3::new(3, 0, 0), false), Some(m));
        assert!(parent.is_overlapping(Aabb3D::from_origin_size(
            Vec3::new(3, 0, 0),
            Vec3::new(1, 1, 1)
        )));

        // The map's outer extent is not indexed as a single box: the origin
        // cell away from any leaf stays free for overlap purposes.
        assert!(!parent.is_overlapping(Aabb3D::from_origin_size(
            Vec3::new(4, 0, 0),
            Vec3::new(2, 2, 2)
        )));

        // The origin cell still records the map in the position index.
        assert_eq!(parent.get_positionable_at(Vec3::new(2, 0, 0), true), Some(m));
    }

    #[test]
    fn nested_map_overlap_checks_descendants_not_outer_box() {
        let mut parent = Map::new(Vec3::new(10, 10, 10));
        parent.add_positionable(leaf(3, 0, 0)).unwrap();

        // The nested map's outer box would cover (2..6, 0..4, 0..4), but only
        // its single leaf at local (1, 0, 0) matters: offset to (3, 0, 0) it
        // collides with the existing leaf.
        let mut colliding = Map::new(Vec3::new(4, 4, 4));
        colliding.set_position(Vec3::new(2, 0, 0));
        colliding.add_positionable(leaf(1, 0, 0)).unwrap();
        assert!(parent.are_descendants_overlapping(Vec3::new(2, 0, 0), &colliding));
        assert!(parent.add_positionable(Element::Map(colliding)).is_none());
        assert_eq!(parent.len(), 1);

        // The same nested map with its leaf elsewhere fits, even though the
        // outer boxes of map and leaf intersect.
        let mut fitting = Map::new(Vec3::new(4, 4, 4));
        fitting.set_position(Vec3::new(2, 0, 0));
        fitting.add_positionable(leaf(0, 1, 0)).unwrap();
        assert!(parent.add_positionable(Element::Map(fitting)).is_some());
    }

    #[test]
    fn removing_a_nested_map_vacates_flattened_boxes() {
        let mut inner = Map::new(Vec3::new(4, 4, 4));
        inner.set_position(Vec3::new(2, 0, 0));
        inner.add_positionable(leaf(1, 0, 0)).unwrap();

        let mut parent = Map::new(Vec3::new(10, 10, 10));
        let m = parent.add_positionable(Element::Map(inner)).unwrap();
        let removed = parent.remove_positionable(m).unwrap();
        assert!(removed.is_map());

        assert!(!parent.is_overlapping(Aabb3D::from_origin_size(
            Vec3::new(3, 0, 0),
            Vec3::new(1, 1, 1)
        )));
        assert_eq!(parent.get_positionable_at(Vec3::new(2, 0, 0), true), None);

        // The freed space is insertable again.
        assert!(parent.add_positionable(leaf(3, 0, 0)).is_some());
    }

    #[test]
    fn flatten_without_nesting_preserves_geometry() {
        let mut map = Map::new(Vec3::new(10, 10, 10));
        map.add_positionable(sized_leaf((0, 0, 0), (2, 1, 1))).unwrap();
        map.add_positionable(sized_leaf((5, 5, 0), (1, 2, 3))).unwrap();

        let offset = Vec3::new(1, 1, 1);
        let flat = map.flatten_positionables(offset);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].position, Vec3::new(1, 1, 1));
        assert_eq!(flat[0].size, Vec3::new(2, 1, 1));
        assert_eq!(flat[1].position, Vec3::new(6, 6, 1));
        assert_eq!(flat[1].size, Vec3::new(1, 2, 3));
    }

    #[test]
    fn flatten_composes_nested_offsets() {
        let mut innermost = Map::new(Vec3::new(2, 2, 2));
        innermost.set_position(Vec3::new(1, 1, 0));
        innermost.add_positionable(leaf(0, 0, 1)).unwrap();

        let mut inner = Map::new(Vec3::new(4, 4, 4));
        inner.set_position(Vec3::new(2, 0, 0));
        inner.add_positionable(Element::Map(innermost)).unwrap();
        inner.add_positionable(leaf(0, 2, 0)).unwrap();

        let mut parent = Map::new(Vec3::new(10, 10, 10));
        parent.add_positionable(Element::Map(inner)).unwrap();

        let flat = parent.flatten_positionables(Vec3::ZERO);
        assert_eq!(flat.len(), 2);
        // Leaf inside the innermost map: 2 + 1 + 0, 0 + 1 + 0, 0 + 0 + 1.
        assert_eq!(flat[0].position, Vec3::new(3, 1, 1));
        // Leaf directly inside the middle map: 2 + 0, 0 + 2, 0.
        assert_eq!(flat[1].position, Vec3::new(2, 2, 0));
    }

    #[test]
    fn flatten_to_new_map_contains_only_leaves() {
        let mut inner = Map::new(Vec3::new(4, 4, 4));
        inner.set_position(Vec3::new(2, 0, 0));
        inner.add_positionable(leaf(1, 0, 0)).unwrap();

        let mut parent = Map::new(Vec3::new(10, 10, 10));
        parent.add_positionable(Element::Map(inner)).unwrap();
        parent.add_positionable(leaf(0, 5, 0)).unwrap();

        let flat = parent.flatten_to_new_map();
        assert_eq!(flat.size(), parent.size());
        assert_eq!(flat.len(), 2);
        for id in flat.children().collect::<Vec<_>>() {
            assert!(!flat.get(id).unwrap().is_map());
        }
        assert!(flat.get_positionable_at(Vec3::new(3, 0, 0), true).is_some());
        assert!(flat.get_positionable_at(Vec3::new(0, 5, 0), true).is_some());
    }

    #[test]
    fn flatten_to_new_map_drops_out_of_bounds_leaves() {
        // A nested map is only origin-checked on insertion, so its content
        // may exceed the parent's extent. Flattening re-validates every leaf
        // as a fresh insertion and drops the ones that no longer fit.
        let mut inner = Map::new(Vec3::new(4, 4, 4));
        inner.set_position(Vec3::new(8, 0, 0));
        inner.add_positionable(leaf(0, 0, 0)).unwrap();
        inner.add_positionable(leaf(3, 0, 0)).unwrap();

        let mut parent = Map::new(Vec3::new(10, 10, 10));
        parent.add_positionable(Element::Map(inner)).unwrap();

        let flat = parent.flatten_to_new_map();
        assert_eq!(flat.len(), 1);
        assert!(flat.get_positionable_at(Vec3::new(8, 0, 0), true).is_some());
        assert!(flat.get_positionable_at(Vec3::new(11, 0, 0), true).is_none());
    }

    #[test]
    fn resize_propagates_to_both_indexes() {
        let mut map = Map::new(Vec3::new(4, 4, 4));
        let id = map.add_positionable(leaf(3, 3, 0)).unwrap();

        map.resize(Vec3::new(8, 8, 8));
        assert!(map.has(id));
        assert_eq!(map.get_positionable_at(Vec3::new(3, 3, 0), false), Some(id));
        // Room freed by the grow is insertable.
        assert!(map.add_positionable(leaf(6, 6, 6)).is_some());

        // Shrinking below a child's origin leaves it attached but unindexed.
        map.resize(Vec3::new(2, 2, 2));
        assert!(!map.has(id));
        assert!(map.get(id).is_some());
        assert_eq!(map.get_positionable_at(Vec3::new(3, 3, 0), true), None);
    }

    #[test]
    fn damage_accumulates_and_drains() {
        let mut map = Map::new(Vec3::new(10, 10, 10));
        let id = map.add_positionable(leaf(1, 2, 0)).unwrap();
        map.remove_positionable(id).unwrap();

        let damage = map.take_damage();
        assert_eq!(damage.dirty_rects.len(), 2);
        assert!(damage.union_rect().is_some());

        assert!(map.take_damage().is_empty());
    }

    #[test]
    fn extent_lookup_vs_origin_lookup() {
        let mut map = Map::new(Vec3::new(10, 10, 10));
        let id = map.add_positionable(sized_leaf((1, 1, 0), (2, 2, 1))).unwrap();

        assert_eq!(map.get_positionable_at(Vec3::new(1, 1, 0), true), Some(id));
        assert_eq!(map.get_positionable_at(Vec3::new(2, 2, 0), true), None);
        assert_eq!(map.get_positionable_at(Vec3::new(2, 2, 0), false), Some(id));
    }

    #[test]
    fn touching_children_coexist() {
        let mut map = Map::new(Vec3::new(10, 10, 10));
        map.add_positionable(sized_leaf((0, 0, 0), (2, 2, 2))).unwrap();
        assert!(!map.is_overlapping(Aabb3D::from_origin_size(
            Vec3::new(2, 0, 0),
            Vec3::new(2, 2, 2)
        )));
        assert!(map.add_positionable(sized_leaf((2, 0, 0), (2, 2, 2))).is_some());
        // Their footprints still overlap in projection, which is a render
        // ordering concern, not a placement one.
        let a = Footprint::from_aabb(&Aabb3D::from_origin_size(
            Vec3::ZERO,
            Vec3::new(2, 2, 2),
        ));
        let b = Footprint::from_aabb(&Aabb3D::from_origin_size(
            Vec3::new(2, 0, 0),
            Vec3::new(2, 2, 2),
        ));
        assert!(a.overlaps(&b));
    }
}
