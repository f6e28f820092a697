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
//! Errors used by the [`Board`][crate::board::Board].

use thiserror::Error;

use crate::{board::Coordinate, rules::FleetComposition, ships::Ship};

/// Reason a fleet could not be turned into a [`Board`][crate::board::Board].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// The fleet does not have the required number of ships of each length.
    #[error("invalid fleet: there should be {required}, got {actual}")]
    InvalidFleetComposition {
        /// Histogram the rules require.
        required: FleetComposition,
        /// Histogram of the fleet that was given.
        actual: FleetComposition,
    },

    /// Two ships overlap or touch, diagonals included.
    #[error("ships {first} and {second} are too close to each other")]
    ShipsTooClose {
        /// Fleet index of the earlier ship.
        first: usize,
        /// Fleet index of the later ship.
        second: usize,
    },

    /// A ship has cells outside the grid.
    #[error("ship {index} at {} to {} does not fit on the grid", .ship.start(), .ship.end())]
    ShipOutOfBounds {
        /// Fleet index of the ship.
        index: usize,
        /// The ship that does not fit.
        ship: Ship,
    },
}

/// Error returned when trying to attack a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum AttackError {
    /// The cell selected was out of bounds on the board.
    #[error("cannot attack {0}: the coordinate is out of bounds")]
    OutOfBounds(Coordinate),
}

impl AttackError {
    /// Get the coordinate of the attacked cell.
    pub fn coord(&self) -> Coordinate {
        match *self {
            AttackError::OutOfBounds(coord) => coord,
        }
    }
}
