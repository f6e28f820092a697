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
//! Uniform random fire.
use rand::{distributions::Distribution, Rng};
use tracing::debug;

use crate::{
    board::{AttackOutcome, Coordinate, Dimensions, OpponentView},
    strategy::{AttackerMemory, TargetingError, TargetingStrategy},
};

/// Fires at a uniformly random cell that hasn't been attacked and doesn't touch a
/// known sunk ship.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R> {
    memory: AttackerMemory,
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    /// Create a random strategy drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            memory: AttackerMemory::new(),
            rng,
        }
    }

    /// What this strategy has learned so far.
    pub fn memory(&self) -> &AttackerMemory {
        &self.memory
    }
}

impl<R: Rng> TargetingStrategy for RandomStrategy<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_target(&mut self, opponent: OpponentView<'_>) -> Result<Coordinate, TargetingError> {
        self.memory.absorb_sunk(opponent);
        let target = random_legal_cell(&self.memory, opponent.dimensions(), &mut self.rng)?;
        debug!(%target, "random shot");
        self.memory.record_attack(target);
        Ok(target)
    }

    fn record_outcome(&mut self, target: Coordinate, outcome: AttackOutcome) {
        self.memory.record_outcome(target, outcome);
    }
}

/// Draw cells uniformly until one is not excluded by `memory`. Fails up front when no
/// such cell exists so the draw always terminates.
pub(super) fn random_legal_cell<R: Rng + ?Sized>(
    memory: &AttackerMemory,
    dim: &Dimensions,
    rng: &mut R,
) -> Result<Coordinate, TargetingError> {
    if memory.legal_cells(dim).next().is_none() {
        return Err(TargetingError::NoTargetsLeft);
    }
    let cells = dim.uniform();
    loop {
        let coord = cells.sample(rng);
        if !memory.is_excluded(coord) {
            return Ok(coord);
        }
    }
}
