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
//! Bounds of a player's grid and neighbor iteration.
use std::borrow::Borrow;

use rand::distributions::Uniform;

use crate::board::Coordinate;

/// Rectangular grid bounds. Valid coordinates run from `1` to `width` along `x` and
/// from `1` to `height` along `y`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    /// Width of the grid. This cooresponds to the `x` [`Coordinate`].
    width: usize,
    /// Height of the grid. This cooresponds to the `y` [`Coordinate`].
    height: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified width and height.
    /// Panics if `width * height` exceeds `usize::max_value()` or if `width` or `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Some(dim) => dim,
            None => {
                if width == 0 || height == 0 {
                    panic!("Dimensions must be nonzero, got {}x{}", width, height);
                } else {
                    panic!(
                        "Dimensions too large: {} * {} > {}",
                        width,
                        height,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new square [`Dimensions`] with the given edge length.
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Create new [`Dimensions`] with the specified width and height.
    /// Returns `None` if `width * height` exceeds `usize::max_value()` or if `width` or
    /// `height` is 0.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            width.checked_mul(height).map(|_| Self { width, height })
        }
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the grid.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if the coordinate lies on the grid.
    #[inline]
    pub fn contains<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        let c = coord.borrow();
        (1..=self.width).contains(&c.x) && (1..=self.height).contains(&c.y)
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (1..=self.height).map(move |y| (1..=width).map(move |x| Coordinate { x, y }))
    }

    /// Get an iterator over every cell of the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        self.iter_coordinates().flatten()
    }

    /// Iterate the cells touching `coord`, diagonals included, that lie on the grid. An
    /// out-of-bounds `coord` has no neighbors.
    pub fn neighbors(&self, coord: Coordinate) -> Neighbors {
        Neighbors {
            dim: *self,
            coord,
            // Out of bounds coordinates skip straight to the end so the per-step checks
            // only need to worry about the grid edges.
            step: if self.contains(coord) { 0 } else { OFFSETS.len() },
        }
    }

    /// Uniform distribution over every cell of the grid.
    pub fn uniform(&self) -> Uniform<Coordinate> {
        Uniform::new_inclusive(
            Coordinate::new(1, 1),
            Coordinate::new(self.width, self.height),
        )
    }
}

impl Default for Dimensions {
    /// Construct the default dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

/// Offsets of the 8-neighborhood, walked clockwise starting above the cell.
const OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Iterator over the in-bounds neighbors of a coordinate.
#[derive(Debug, Clone)]
pub struct Neighbors {
    dim: Dimensions,
    coord: Coordinate,
    step: usize,
}

impl Iterator for Neighbors {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while let Some(&(dx, dy)) = OFFSETS.get(self.step) {
            self.step += 1;
            let x = offset(self.coord.x, dx);
            let y = offset(self.coord.y, dy);
            if let (Some(x), Some(y)) = (x, y) {
                let neighbor = Coordinate::new(x, y);
                if self.dim.contains(neighbor) {
                    return Some(neighbor);
                }
            }
        }
        None
    }
}

/// Apply a signed unit offset to a grid index.
fn offset(v: usize, d: isize) -> Option<usize> {
    if d < 0 {
        v.checked_sub(d.unsigned_abs())
    } else {
        v.checked_add(d as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let dim = Dimensions::default();
        let n: Vec<_> = dim.neighbors(Coordinate::new(5, 5)).collect();
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|c| c.chebyshev(&Coordinate::new(5, 5)) == 1));
    }

    #[test]
    fn corner_cell_is_clipped() {
        let dim = Dimensions::default();
        let mut n: Vec<_> = dim.neighbors(Coordinate::new(1, 1)).collect();
        n.sort();
        assert_eq!(
            n,
            vec![
                Coordinate::new(1, 2),
                Coordinate::new(2, 1),
                Coordinate::new(2, 2)
            ]
        );
        assert_eq!(dim.neighbors(Coordinate::new(10, 10)).count(), 3);
        assert_eq!(dim.neighbors(Coordinate::new(10, 4)).count(), 5);
    }

    #[test]
    fn out_of_bounds_has_no_neighbors() {
        let dim = Dimensions::default();
        assert_eq!(dim.neighbors(Coordinate::new(0, 5)).count(), 0);
        assert_eq!(dim.neighbors(Coordinate::new(11, 11)).count(), 0);
    }

    #[test]
    fn bounds_are_one_indexed() {
        let dim = Dimensions::new(4, 3);
        assert!(dim.contains(Coordinate::new(1, 1)));
        assert!(dim.contains(Coordinate::new(4, 3)));
        assert!(!dim.contains(Coordinate::new(0, 1)));
        assert!(!dim.contains(Coordinate::new(5, 1)));
        assert!(!dim.contains(Coordinate::new(4, 4)));
        assert_eq!(dim.cells().count(), 12);
        assert_eq!(dim.total_size(), 12);
    }

    #[test]
    fn uniform_stays_on_grid() {
        use rand::{distributions::Distribution, rngs::StdRng, SeedableRng};
        let dim = Dimensions::new(3, 7);
        let dist = dim.uniform();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(dim.contains(dist.sample(&mut rng)));
        }
    }

    #[test]
    #[should_panic]
    fn zero_size_panics() {
        Dimensions::new(0, 10);
    }
}
