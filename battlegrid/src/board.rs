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
//! Types that make up the game board.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{
    rules::{FleetComposition, Rules},
    ships::Ship,
};

pub use self::{
    coordinate::{Coordinate, ParseCoordinateError, UniformCoordinate},
    dimensions::{Dimensions, Neighbors},
    errors::{AttackError, FleetError},
};

mod coordinate;
mod dimensions;
mod errors;
pub mod setup;

/// Result of an attack on a single player's board. Ships are identified by their
/// index in the fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttackOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the ship with the given index, which is still afloat.
    Hit(usize),
    /// The shot hit the ship with the given index, which has now sunk.
    Sunk(usize),
}

impl AttackOutcome {
    /// True if a ship occupies the attacked cell.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }

    /// True if the ship at the attacked cell has sunk.
    pub fn is_sunk(&self) -> bool {
        matches!(self, AttackOutcome::Sunk(_))
    }

    /// Get the index of the ship that was hit.
    pub fn ship(&self) -> Option<usize> {
        match *self {
            AttackOutcome::Miss => None,
            AttackOutcome::Hit(idx) | AttackOutcome::Sunk(idx) => Some(idx),
        }
    }
}

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// Whether this cell was shot at.
    shot: bool,

    /// The ship occupying this cell if any.
    ship: Option<&'a Ship>,
}

impl<'a> CellRef<'a> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether this cell has been shot previously.
    pub fn shot(&self) -> bool {
        self.shot
    }

    /// The ship that occupies this cell, if any.
    pub fn ship(&self) -> Option<&'a Ship> {
        self.ship
    }

    /// True if a ship occupies this cell and has been hit there.
    pub fn damaged(&self) -> bool {
        self.ship.map_or(false, |ship| ship.is_damaged_at(self.coord))
    }
}

/// A single player's board: their fleet and the shots fired at them.
///
/// Placement rules are enforced once, in the constructor. After that the board only
/// changes through [`Board::attack`].
#[derive(Debug, Clone)]
pub struct Board {
    /// Bounds of the grid.
    dim: Dimensions,

    /// Ships in the order they were given. Indices are stable for the whole game.
    fleet: Vec<Ship>,

    /// Every coordinate fired at.
    shots: BTreeSet<Coordinate>,
}

impl Board {
    /// Build a board on the default 10x10 grid with one ship of each length 1 to 5.
    pub fn new(fleet: Vec<Ship>) -> Result<Self, FleetError> {
        Self::with_rules(&Rules::default(), fleet)
    }

    /// Build a board for the given rules. Fails if the fleet has the wrong ship
    /// lengths, if any ship leaves the grid, or if two ships touch or overlap.
    pub fn with_rules(rules: &Rules, fleet: Vec<Ship>) -> Result<Self, FleetError> {
        let actual = FleetComposition::of_fleet(&fleet);
        if actual != rules.composition {
            debug!(required = %rules.composition, %actual, "rejected fleet composition");
            return Err(FleetError::InvalidFleetComposition {
                required: rules.composition.clone(),
                actual,
            });
        }
        if let Some(index) = fleet.iter().position(|ship| !ship.fits(&rules.dimensions)) {
            debug!(index, "rejected fleet with ship off the grid");
            return Err(FleetError::ShipOutOfBounds {
                index,
                ship: fleet[index].clone(),
            });
        }
        if let Some((first, second)) = find_close_pair(&fleet) {
            debug!(first, second, "rejected fleet with ships too close");
            return Err(FleetError::ShipsTooClose { first, second });
        }
        Ok(Self {
            dim: rules.dimensions,
            fleet,
            shots: BTreeSet::new(),
        })
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    /// Returns true if the coordinate can be attacked on this board.
    pub fn valid_coordinate(&self, coord: Coordinate) -> bool {
        self.dim.contains(coord)
    }

    /// Ships in fleet order.
    pub fn ships(&self) -> &[Ship] {
        &self.fleet
    }

    /// Every coordinate that has been fired at.
    pub fn shots(&self) -> &BTreeSet<Coordinate> {
        &self.shots
    }

    /// Whether `coord` has been fired at.
    pub fn was_shot(&self, coord: Coordinate) -> bool {
        self.shots.contains(&coord)
    }

    /// Number of ships still afloat.
    pub fn ships_left(&self) -> usize {
        self.fleet.iter().filter(|ship| !ship.has_sunk()).count()
    }

    /// Returns true if all of this player's ships have been sunk.
    pub fn has_no_ships_left(&self) -> bool {
        self.fleet.iter().all(Ship::has_sunk)
    }

    /// Get a reference to the cell at the given coordinate. Returns None if the
    /// coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellRef> {
        if !self.dim.contains(coord) {
            return None;
        }
        Some(CellRef {
            coord,
            shot: self.was_shot(coord),
            ship: self.ship_at(coord).map(|(_, ship)| ship),
        })
    }

    /// The ship occupying `coord` along with its fleet index.
    fn ship_at(&self, coord: Coordinate) -> Option<(usize, &Ship)> {
        self.fleet
            .iter()
            .enumerate()
            .find(|(_, ship)| ship.is_on_cell(coord))
    }

    /// What an opponent is allowed to know about this board.
    pub fn opponent_view(&self) -> OpponentView {
        OpponentView { board: self }
    }

    /// Fire at `coord`. The shot is recorded and the first ship in fleet order that
    /// occupies the cell takes damage. Attacking the same cell again is allowed and
    /// reports the same ship without adding damage.
    pub fn attack(&mut self, coord: Coordinate) -> Result<AttackOutcome, AttackError> {
        if !self.dim.contains(coord) {
            return Err(AttackError::OutOfBounds(coord));
        }
        self.shots.insert(coord);
        let outcome = match self
            .fleet
            .iter_mut()
            .enumerate()
            .find(|(_, ship)| ship.is_on_cell(coord))
        {
            None => AttackOutcome::Miss,
            Some((idx, ship)) => {
                ship.apply_damage(coord);
                if ship.has_sunk() {
                    AttackOutcome::Sunk(idx)
                } else {
                    AttackOutcome::Hit(idx)
                }
            }
        };
        trace!(%coord, ?outcome, "resolved attack");
        Ok(outcome)
    }
}

/// Find the first pair of distinct ships where one is near the other.
fn find_close_pair(fleet: &[Ship]) -> Option<(usize, usize)> {
    fleet.iter().enumerate().find_map(|(i, a)| {
        fleet[i + 1..]
            .iter()
            .position(|b| a.is_near_ship(b))
            .map(|offset| (i, i + 1 + offset))
    })
}

/// Read-only window on an enemy board, exposing only what the rules let an attacker
/// know: the grid size and which ships have been destroyed.
#[derive(Debug, Copy, Clone)]
pub struct OpponentView<'a> {
    board: &'a Board,
}

impl<'a> OpponentView<'a> {
    /// Bounds of the enemy grid.
    pub fn dimensions(&self) -> &'a Dimensions {
        &self.board.dim
    }

    /// Sunk enemy ships along with their fleet index.
    pub fn sunk_ships(&self) -> impl 'a + Iterator<Item = (usize, &'a Ship)> {
        self.board
            .fleet
            .iter()
            .enumerate()
            .filter(|(_, ship)| ship.has_sunk())
    }
}
