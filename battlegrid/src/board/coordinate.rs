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
//! Grid coordinates and their text form.
use std::{fmt, str::FromStr};

use rand::{
    distributions::{
        uniform::{SampleBorrow, SampleUniform, UniformSampler},
        Distribution, Uniform,
    },
    Rng,
};
use thiserror::Error;

/// The coordinates of a cell on a player's grid. Both axes are 1-indexed.
///
/// Ordering compares `x` first, then `y`, so sets of coordinates iterate column by
/// column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell, rendered as a column letter.
    pub x: usize,
    /// Vertical position of the cell, rendered as a row number.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance between two coordinates. Cells that touch, including
    /// diagonally, are at distance 1.
    pub fn chebyshev(&self, other: &Coordinate) -> usize {
        let dx = if self.x > other.x { self.x - other.x } else { other.x - self.x };
        let dy = if self.y > other.y { self.y - other.y } else { other.y - self.y };
        dx.max(dy)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

/// Highest column that has a letter name.
const LETTER_COLUMNS: usize = 26;

impl fmt::Display for Coordinate {
    /// Formats as column letter followed by row number, e.g. `B7` for `(2, 7)`. Columns
    /// past `Z` fall back to the numeric `x,y` form.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if (1..=LETTER_COLUMNS).contains(&self.x) {
            let col = (b'A' + (self.x - 1) as u8) as char;
            write!(f, "{}{}", col, self.y)
        } else {
            write!(f, "{},{}", self.x, self.y)
        }
    }
}

/// Error returned when text cannot be read as a [`Coordinate`]. This only covers the
/// shape of the text; whether the coordinate fits on a grid is checked separately.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseCoordinateError {
    /// Nothing was entered.
    #[error("no coordinate entered")]
    Empty,
    /// The text did not look like a letter-number or `x,y` coordinate.
    #[error("\"{0}\" is not a coordinate, expected something like B7 or 2,7")]
    Malformed(String),
    /// Row or column zero was given; coordinates start at 1.
    #[error("\"{0}\" is not a coordinate, rows and columns start at 1")]
    Zero(String),
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCoordinateError::Empty);
        }
        let malformed = || ParseCoordinateError::Malformed(s.to_owned());

        let (x, y) = if let Some((x, y)) = split_numeric(s) {
            (
                x.trim().parse().map_err(|_| malformed())?,
                y.trim().parse().map_err(|_| malformed())?,
            )
        } else {
            let mut chars = s.chars();
            let col = chars.next().ok_or_else(malformed)?.to_ascii_uppercase();
            if !col.is_ascii_uppercase() {
                return Err(malformed());
            }
            let row = chars.as_str().trim();
            let y = row.parse::<usize>().map_err(|_| malformed())?;
            ((col as u8 - b'A') as usize + 1, y)
        };
        if x == 0 || y == 0 {
            return Err(ParseCoordinateError::Zero(s.to_owned()));
        }
        Ok(Coordinate::new(x, y))
    }
}

/// Split `x,y` into its two halves, if the text has that shape.
fn split_numeric(s: &str) -> Option<(&str, &str)> {
    let idx = s.find(',')?;
    Some((&s[..idx], &s[idx + 1..]))
}

/// Sampler for uniformly choosing a [`Coordinate`] inside a rectangle. Lets
/// `Uniform<Coordinate>` be used directly with `rand`.
#[derive(Debug, Copy, Clone)]
pub struct UniformCoordinate {
    x: Uniform<usize>,
    y: Uniform<usize>,
}

impl UniformSampler for UniformCoordinate {
    type X = Coordinate;

    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow(), high.borrow());
        Self {
            x: Uniform::new(low.x, high.x),
            y: Uniform::new(low.y, high.y),
        }
    }

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow(), high.borrow());
        Self {
            x: Uniform::new_inclusive(low.x, high.x),
            y: Uniform::new_inclusive(low.y, high.y),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        Coordinate::new(self.x.sample(rng), self.y.sample(rng))
    }
}

impl SampleUniform for Coordinate {
    type Sampler = UniformCoordinate;
}
