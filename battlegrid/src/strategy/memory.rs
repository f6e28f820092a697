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
//! What an attacker remembers about its own shots.
use std::collections::{btree_map::Entry, BTreeMap, BTreeSet};

use enumflags2::BitFlags;

use crate::{
    board::{AttackOutcome, Coordinate, Dimensions, OpponentView},
    ships::Ship,
};

/// Reasons a cell is not worth attacking.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Exclusion {
    /// The cell was already attacked.
    Attacked = 0b01,
    /// The cell touches a ship known to be sunk, so no other ship can be there.
    NearSunk = 0b10,
}

/// Private record of one attacker's game against one opponent. All sets only grow.
#[derive(Debug, Clone, Default)]
pub struct AttackerMemory {
    /// Every coordinate this attacker has fired at.
    attacked: BTreeSet<Coordinate>,

    /// Coordinates that hit a ship.
    hits: BTreeSet<Coordinate>,

    /// Enemy ships seen sunk, keyed by their index in the enemy fleet.
    sunk: BTreeMap<usize, Ship>,
}

impl AttackerMemory {
    /// Empty memory for the start of a game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinates already fired at.
    pub fn attacked(&self) -> &BTreeSet<Coordinate> {
        &self.attacked
    }

    /// Coordinates that hit something.
    pub fn hits(&self) -> &BTreeSet<Coordinate> {
        &self.hits
    }

    /// Enemy ships known to be sunk.
    pub fn sunk_ships(&self) -> impl '_ + Iterator<Item = &Ship> {
        self.sunk.values()
    }

    /// Remember that `coord` was fired at.
    pub fn record_attack(&mut self, coord: Coordinate) {
        self.attacked.insert(coord);
    }

    /// Remember the outcome of firing at `coord`.
    pub fn record_outcome(&mut self, coord: Coordinate, outcome: AttackOutcome) {
        self.attacked.insert(coord);
        if outcome.is_hit() {
            self.hits.insert(coord);
        }
    }

    /// Add any newly sunk enemy ships to memory. Returns how many were new.
    pub fn absorb_sunk(&mut self, opponent: OpponentView<'_>) -> usize {
        let mut learned = 0;
        for (idx, ship) in opponent.sunk_ships() {
            if let Entry::Vacant(entry) = self.sunk.entry(idx) {
                entry.insert(ship.clone());
                learned += 1;
            }
        }
        learned
    }

    /// Why `coord` should not be attacked. Empty if it is still worth a shot.
    pub fn exclusions(&self, coord: Coordinate) -> BitFlags<Exclusion> {
        let mut flags = BitFlags::empty();
        if self.attacked.contains(&coord) {
            flags.insert(Exclusion::Attacked);
        }
        if self.sunk.values().any(|ship| ship.is_near_cell(coord)) {
            flags.insert(Exclusion::NearSunk);
        }
        flags
    }

    /// True if `coord` was already attacked or is provably empty.
    pub fn is_excluded(&self, coord: Coordinate) -> bool {
        !self.exclusions(coord).is_empty()
    }

    /// Cells touching a previous hit that are still worth attacking.
    pub fn candidate_targets(&self, dim: &Dimensions) -> BTreeSet<Coordinate> {
        self.hits
            .iter()
            .flat_map(|&hit| dim.neighbors(hit))
            .filter(|&coord| !self.is_excluded(coord))
            .collect()
    }

    /// Every cell on the grid still worth attacking.
    pub fn legal_cells<'a>(&'a self, dim: &Dimensions) -> impl 'a + Iterator<Item = Coordinate> {
        dim.cells().filter(move |&coord| !self.is_excluded(coord))
    }
}
