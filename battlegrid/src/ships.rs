// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Linear ships and the damage they accumulate.
use std::collections::BTreeSet;

use thiserror::Error;

use crate::board::{Coordinate, Dimensions};

/// Error returned when a ship's corners do not share a row or a column.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("ship from {start} to {end} is neither horizontal nor vertical")]
pub struct GeometryError {
    start: Coordinate,
    end: Coordinate,
}

impl GeometryError {
    /// First corner passed to [`Ship::new`].
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Second corner passed to [`Ship::new`].
    pub fn end(&self) -> Coordinate {
        self.end
    }
}

/// A straight ship occupying a horizontal or vertical run of cells.
///
/// The footprint is fixed at construction. Damage only ever grows, and only on cells
/// the ship occupies, so recording the same hit twice is harmless.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    /// Corner with the smaller coordinates.
    start: Coordinate,
    /// Corner with the larger coordinates.
    end: Coordinate,
    /// Cells of the footprint that have been hit.
    damage: BTreeSet<Coordinate>,
}

impl Ship {
    /// Build a ship spanning `start` to `end`, inclusive. The corners may be given in
    /// either order. Fails if the corners share neither a row nor a column.
    pub fn new<C: Into<Coordinate>>(start: C, end: C) -> Result<Self, GeometryError> {
        let (a, b) = (start.into(), end.into());
        if a.x != b.x && a.y != b.y {
            return Err(GeometryError { start: a, end: b });
        }
        Ok(Self {
            start: Coordinate::new(a.x.min(b.x), a.y.min(b.y)),
            end: Coordinate::new(a.x.max(b.x), a.y.max(b.y)),
            damage: BTreeSet::new(),
        })
    }

    /// Corner with the smaller coordinates.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Corner with the larger coordinates.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// True if all cells share a column. Single-cell ships are both vertical and
    /// horizontal.
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// True if all cells share a row.
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// Number of cells the ship occupies.
    pub fn len(&self) -> usize {
        (self.end.x - self.start.x).max(self.end.y - self.start.y) + 1
    }

    /// Iterate the occupied cells from `start` to `end`.
    pub fn cells(&self) -> impl '_ + Iterator<Item = Coordinate> {
        let (start, vertical) = (self.start, self.is_vertical());
        (0..self.len()).map(move |i| {
            if vertical {
                Coordinate::new(start.x, start.y + i)
            } else {
                Coordinate::new(start.x + i, start.y)
            }
        })
    }

    /// The set of occupied cells.
    pub fn occupied_cells(&self) -> BTreeSet<Coordinate> {
        self.cells().collect()
    }

    /// Iterate the cells that have been hit.
    pub fn damaged_cells(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.damage.iter().copied()
    }

    /// True if the ship occupies `coord`.
    pub fn is_on_cell(&self, coord: Coordinate) -> bool {
        (self.start.x..=self.end.x).contains(&coord.x)
            && (self.start.y..=self.end.y).contains(&coord.y)
    }

    /// Record a hit at `coord`. Does nothing if the ship doesn't occupy `coord`.
    pub fn apply_damage(&mut self, coord: Coordinate) {
        if self.is_on_cell(coord) {
            self.damage.insert(coord);
        }
    }

    /// True if `coord` has been hit on this ship.
    pub fn is_damaged_at(&self, coord: Coordinate) -> bool {
        self.damage.contains(&coord)
    }

    /// Number of distinct cells hit.
    pub fn damage_count(&self) -> usize {
        self.damage.len()
    }

    /// True once every occupied cell has been hit.
    pub fn has_sunk(&self) -> bool {
        self.damage.len() == self.len()
    }

    /// True if `coord` is inside the ship's bounding box grown by one cell on every
    /// side. For a straight ship this is exactly the set of cells within Chebyshev
    /// distance 1 of some occupied cell, occupied cells included.
    pub fn is_near_cell(&self, coord: Coordinate) -> bool {
        coord.x + 1 >= self.start.x
            && coord.x <= self.end.x + 1
            && coord.y + 1 >= self.start.y
            && coord.y <= self.end.y + 1
    }

    /// True if any cell of `other` is near this ship.
    pub fn is_near_ship(&self, other: &Ship) -> bool {
        other.cells().any(|c| self.is_near_cell(c))
    }

    /// True if every occupied cell lies on the grid.
    pub fn fits(&self, dim: &Dimensions) -> bool {
        dim.contains(self.start) && dim.contains(self.end)
    }
}
