// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual-refresh summary accumulated by map mutations.

use kurbo::Rect;

/// Screen-space regions that should be repainted, drained via
/// [`crate::Map::take_damage`].
///
/// Each insertion or removal contributes the projected bounds of the affected
/// element. The rectangles may overlap and are not a minimal cover.
#[derive(Clone, Debug, Default)]
pub struct Damage {
    /// Projected rectangles that should be repainted.
    pub dirty_rects: alloc::vec::Vec<Rect>,
}

impl Damage {
    /// Returns the union of all damage rects.
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// Whether any damage was recorded.
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }
}
