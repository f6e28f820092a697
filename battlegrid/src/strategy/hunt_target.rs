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
//! Hunt-then-target search.
use rand::{seq::IteratorRandom, Rng};
use tracing::debug;

use crate::{
    board::{AttackOutcome, Coordinate, OpponentView},
    strategy::{random::random_legal_cell, AttackerMemory, TargetingError, TargetingStrategy},
};

/// Which mode the last target was picked in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// No live hit to work from; the target was drawn at random.
    Hunt,
    /// The target touches an earlier hit.
    Target,
}

/// Fires next to earlier hits while there are unexplored cells around them, and at
/// random otherwise. Cells touching ships known to be sunk are never chosen since the
/// placement rules keep other ships away from them.
///
/// Ties between candidate cells are broken uniformly at random with the strategy's own
/// generator, so a seeded generator gives reproducible play.
#[derive(Debug, Clone)]
pub struct HuntTargetStrategy<R> {
    memory: AttackerMemory,
    rng: R,
    last_phase: Option<Phase>,
}

impl<R: Rng> HuntTargetStrategy<R> {
    /// Create a hunt-target strategy drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self::with_memory(rng, AttackerMemory::new())
    }

    /// Resume from an existing memory.
    pub fn with_memory(rng: R, memory: AttackerMemory) -> Self {
        Self {
            memory,
            rng,
            last_phase: None,
        }
    }

    /// What this strategy has learned so far.
    pub fn memory(&self) -> &AttackerMemory {
        &self.memory
    }

    /// The phase the most recent target was chosen in, if any target was chosen yet.
    pub fn last_phase(&self) -> Option<Phase> {
        self.last_phase
    }
}

impl<R: Rng> TargetingStrategy for HuntTargetStrategy<R> {
    fn name(&self) -> &'static str {
        "hunt-target"
    }

    fn select_target(&mut self, opponent: OpponentView<'_>) -> Result<Coordinate, TargetingError> {
        let learned = self.memory.absorb_sunk(opponent);
        if learned > 0 {
            debug!(learned, "learned of sunk ships");
        }
        let dim = opponent.dimensions();
        let candidates = self.memory.candidate_targets(dim);
        let (target, phase) = match candidates.iter().copied().choose(&mut self.rng) {
            Some(target) => (target, Phase::Target),
            None => (
                random_legal_cell(&self.memory, dim, &mut self.rng)?,
                Phase::Hunt,
            ),
        };
        debug!(%target, ?phase, candidates = candidates.len(), "hunt-target shot");
        self.memory.record_attack(target);
        self.last_phase = Some(phase);
        Ok(target)
    }

    fn record_outcome(&mut self, target: Coordinate, outcome: AttackOutcome) {
        self.memory.record_outcome(target, outcome);
    }
}
