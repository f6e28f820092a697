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
//! How attackers pick where to fire.
//!
//! Every attacker implements [`TargetingStrategy`]. The orchestrator asks for a target,
//! resolves it against the enemy [`Board`][crate::board::Board], and reports the
//! outcome back through [`TargetingStrategy::record_outcome`]. Strategies only ever see
//! the enemy through an [`OpponentView`], which reveals sunk ships and nothing else.
//!
//! - [`ManualStrategy`] asks a human through an [`InputSource`].
//! - [`RandomStrategy`] fires uniformly at cells it cannot rule out.
//! - [`HuntTargetStrategy`] fires around previous hits when it can and falls back to
//!   random fire otherwise.
use std::{fmt, io, str::FromStr};

use rand::Rng;
use thiserror::Error;

use crate::board::{AttackOutcome, Coordinate, OpponentView};

pub use self::{
    hunt_target::{HuntTargetStrategy, Phase},
    manual::{parse_target, InputSource, ManualInputError, ManualStrategy},
    memory::{AttackerMemory, Exclusion},
    random::RandomStrategy,
};

mod hunt_target;
mod manual;
mod memory;
mod random;

/// Reason a strategy could not produce a target.
#[derive(Debug, Error)]
pub enum TargetingError {
    /// Every cell has been attacked or is provably empty.
    #[error("no cells left to target")]
    NoTargetsLeft,

    /// The input source reached its end before a valid coordinate was entered.
    #[error("input closed before a target was chosen")]
    InputClosed,

    /// Reading from the input source failed.
    #[error("failed to read target")]
    Input(#[from] io::Error),
}

/// Policy for choosing the next cell to attack.
pub trait TargetingStrategy {
    /// Short name for logs and narration.
    fn name(&self) -> &'static str;

    /// Choose the next coordinate to fire at. The returned coordinate is always within
    /// `opponent.dimensions()`.
    fn select_target(&mut self, opponent: OpponentView<'_>) -> Result<Coordinate, TargetingError>;

    /// Learn the result of firing at `target`.
    fn record_outcome(&mut self, _target: Coordinate, _outcome: AttackOutcome) {}

    /// True if targets come from a person, who should be shown their own board.
    fn is_interactive(&self) -> bool {
        false
    }
}

impl<T: TargetingStrategy + ?Sized> TargetingStrategy for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn select_target(&mut self, opponent: OpponentView<'_>) -> Result<Coordinate, TargetingError> {
        (**self).select_target(opponent)
    }

    fn record_outcome(&mut self, target: Coordinate, outcome: AttackOutcome) {
        (**self).record_outcome(target, outcome)
    }

    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }
}

/// Tag for choosing a strategy when a player is created.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StrategyKind {
    /// A human entering coordinates.
    Manual,
    /// Uniform random fire.
    Random,
    /// Hunt-then-target search.
    HuntTarget,
}

impl StrategyKind {
    /// All strategy kinds.
    pub const ALL: &'static [StrategyKind] = &[
        StrategyKind::Manual,
        StrategyKind::Random,
        StrategyKind::HuntTarget,
    ];

    /// The canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Manual => "human",
            StrategyKind::Random => "random",
            StrategyKind::HuntTarget => "hunt",
        }
    }

    /// Build a strategy of this kind. `input` is only called for [`StrategyKind::Manual`].
    pub fn build<R, I, F>(self, rng: R, input: F) -> Box<dyn TargetingStrategy>
    where
        R: Rng + 'static,
        I: InputSource + 'static,
        F: FnOnce() -> I,
    {
        match self {
            StrategyKind::Manual => Box::new(ManualStrategy::new(input())),
            StrategyKind::Random => Box::new(RandomStrategy::new(rng)),
            StrategyKind::HuntTarget => Box::new(HuntTargetStrategy::new(rng)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown strategy \"{0}\", choose \"human\", \"random\", or \"hunt\"")]
pub struct UnknownStrategy(String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "manual" | "me" => Ok(StrategyKind::Manual),
            "random" | "rand" => Ok(StrategyKind::Random),
            "hunt" | "hunt-target" | "computer" | "bot" | "ai" => Ok(StrategyKind::HuntTarget),
            _ => Err(UnknownStrategy(s.to_owned())),
        }
    }
}
