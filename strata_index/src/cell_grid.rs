// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense exact-cell occupancy over a bounded integer volume.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::Vec3;

/// Exact-position lookup of the single occupant of an integer 3D cell.
///
/// The grid is dense: storage is proportional to the declared volume, not to
/// the number of occupants. At most one occupant lives in a cell at a time;
/// writing to an occupied cell replaces the previous occupant (last writer
/// wins), and writing `None` clears it.
///
/// Out-of-range coordinates are silently ignored on writes and read as empty.
#[derive(Clone)]
pub struct CellGrid<P> {
    size: Vec3,
    cells: Vec<Option<P>>,
}

fn volume(size: Vec3) -> usize {
    let x = usize::try_from(size.x).unwrap_or(0);
    let y = usize::try_from(size.y).unwrap_or(0);
    let z = usize::try_from(size.z).unwrap_or(0);
    x.saturating_mul(y).saturating_mul(z)
}

impl<P: Copy + PartialEq + Debug> CellGrid<P> {
    /// Create an empty grid covering `[0, size)` on every axis.
    pub fn new(size: Vec3) -> Self {
        let mut cells = Vec::new();
        cells.resize_with(volume(size), || None);
        Self { size, cells }
    }

    /// The declared extent of the grid.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.size
    }

    fn slot(&self, pos: Vec3) -> Option<usize> {
        if pos.x < 0
            || pos.y < 0
            || pos.z < 0
            || pos.x >= self.size.x
            || pos.y >= self.size.y
            || pos.z >= self.size.z
        {
            return None;
        }
        let idx = (pos.z * self.size.y + pos.y) * self.size.x + pos.x;
        usize::try_from(idx).ok()
    }

    /// Store or clear the occupant at `pos`. Out-of-range positions are a no-op.
    pub fn set(&mut self, pos: Vec3, occupant: Option<P>) {
        if let Some(i) = self.slot(pos) {
            self.cells[i] = occupant;
        }
    }

    /// The occupant at `pos`, if any.
    pub fn get(&self, pos: Vec3) -> Option<P> {
        self.slot(pos).and_then(|i| self.cells[i])
    }

    /// Whether `occupant` is stored anywhere in the grid.
    ///
    /// Linear in the grid's capacity, which is bounded by the declared volume.
    pub fn contains(&self, occupant: &P) -> bool {
        self.cells.iter().any(|c| c.as_ref() == Some(occupant))
    }

    /// Iterate over occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, P)> + '_ {
        let (sx, sy) = (self.size.x, self.size.y);
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            let occupant = (*c)?;
            let i = i64::try_from(i).ok()?;
            let x = i % sx;
            let y = (i / sx) % sy;
            let z = i / (sx * sy);
            Some((Vec3::new(x, y, z), occupant))
        })
    }

    /// Clear the grid and reshape it to a new extent.
    pub fn resize(&mut self, new_size: Vec3) {
        self.size = new_size;
        self.cells.clear();
        self.cells.resize_with(volume(new_size), || None);
    }
}

impl<P: Copy + PartialEq + Debug> Debug for CellGrid<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let occupied = self.cells.iter().filter(|c| c.is_some()).count();
        f.debug_struct("CellGrid")
            .field("size", &self.size)
            .field("capacity", &self.cells.len())
            .field("occupied", &occupied)
            .finish_non_exhaustive()
    }
}
