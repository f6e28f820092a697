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
//! Random fleet placement used to set up boards.
use rand::{distributions::Distribution, Rng};
use thiserror::Error;
use tracing::debug;

use crate::{
    board::{Board, Coordinate, FleetError},
    rules::Rules,
    ships::Ship,
};

/// Attempts at placing a single ship before the whole fleet is thrown away.
const SHIP_ATTEMPTS: usize = 100;

/// Fleets started over before giving up.
const FLEET_ATTEMPTS: usize = 100;

/// Error returned when a random fleet cannot be produced.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum PlacementError {
    /// No fleet could be fit onto the grid within the attempt budget. The grid is
    /// probably too small for the composition.
    #[error("could not place a fleet after {0} attempts")]
    Exhausted(usize),

    /// A generated fleet was rejected by the board.
    #[error(transparent)]
    Fleet(#[from] FleetError),
}

/// Generate a fleet matching `rules` with no two ships touching. Longer ships are
/// placed first since they have the fewest legal positions.
pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R, rules: &Rules) -> Result<Vec<Ship>, PlacementError> {
    let lengths = rules.composition.lengths_longest_first();
    'fleet: for attempt in 1..=FLEET_ATTEMPTS {
        let mut fleet: Vec<Ship> = Vec::with_capacity(lengths.len());
        for &len in &lengths {
            match place_one(rng, rules, &fleet, len) {
                Some(ship) => fleet.push(ship),
                None => {
                    debug!(attempt, len, "restarting fleet placement");
                    continue 'fleet;
                }
            }
        }
        return Ok(fleet);
    }
    Err(PlacementError::Exhausted(FLEET_ATTEMPTS))
}

/// Try to find a spot for a ship of length `len` that stays on the grid and keeps
/// clear of every ship already placed.
fn place_one<R: Rng + ?Sized>(
    rng: &mut R,
    rules: &Rules,
    placed: &[Ship],
    len: usize,
) -> Option<Ship> {
    let dim = &rules.dimensions;
    let span = len.checked_sub(1)?;
    let starts = dim.uniform();
    for _ in 0..SHIP_ATTEMPTS {
        let start = starts.sample(rng);
        let end = if rng.gen() {
            Coordinate::new(start.x + span, start.y)
        } else {
            Coordinate::new(start.x, start.y + span)
        };
        if !dim.contains(end) {
            continue;
        }
        let ship = match Ship::new(start, end) {
            Ok(ship) => ship,
            Err(_) => continue,
        };
        if placed.iter().all(|other| !other.is_near_ship(&ship)) {
            return Some(ship);
        }
    }
    None
}

/// Generate a random fleet and build a board from it.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, rules: &Rules) -> Result<Board, PlacementError> {
    let fleet = random_fleet(rng, rules)?;
    Ok(Board::with_rules(rules, fleet)?)
}
