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
//! Two-player turn loop.
//!
//! Each turn the current player's strategy picks a target, the shot is resolved on the
//! opponent's board and the outcome is reported back to the strategy. A hit earns the
//! attacker another shot; a miss hands the turn over.
use thiserror::Error;
use tracing::info;

use crate::{
    board::{AttackError, AttackOutcome, Board, Coordinate},
    strategy::{TargetingError, TargetingStrategy},
};

/// Player ID. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    /// The first player.
    P1,
    /// The second player.
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

/// A player's board together with the strategy that fires on their behalf.
pub struct Contender {
    name: String,
    board: Board,
    strategy: Box<dyn TargetingStrategy>,
}

impl Contender {
    /// Create a contender.
    pub fn new<S: Into<String>>(name: S, board: Board, strategy: Box<dyn TargetingStrategy>) -> Self {
        Self {
            name: name.into(),
            board,
            strategy,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contender's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Name of the strategy driving this contender.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// True if a person picks this contender's targets.
    pub fn is_interactive(&self) -> bool {
        self.strategy.is_interactive()
    }
}

/// Reason a turn could not be played.
#[derive(Debug, Error)]
pub enum GameError {
    /// The game already has a winner.
    #[error("the game is already over")]
    AlreadyOver,

    /// The strategy failed to produce a target.
    #[error("{player:?} could not choose a target")]
    Targeting {
        /// Player whose strategy failed.
        player: Player,
        #[source]
        source: TargetingError,
    },

    /// The strategy produced a target the board rejected.
    #[error("{player:?} fired at an invalid target")]
    Attack {
        /// Player who fired.
        player: Player,
        #[source]
        source: AttackError,
    },
}

/// What happened during one shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnReport {
    /// Who fired.
    pub attacker: Player,
    /// Where they fired.
    pub target: Coordinate,
    /// Result on the defender's board.
    pub outcome: AttackOutcome,
    /// Whether the attacker fires again.
    pub plays_again: bool,
    /// The winner if this shot ended the game.
    pub winner: Option<Player>,
}

/// A game in progress between two contenders.
pub struct Game {
    contenders: [Contender; 2],
    current: Player,
    winner: Option<Player>,
    shots: usize,
}

impl Game {
    /// Start a game with `first` to move.
    pub fn new(p1: Contender, p2: Contender, first: Player) -> Self {
        Self {
            contenders: [p1, p2],
            current: first,
            winner: None,
            shots: 0,
        }
    }

    /// Get the player whose turn it currently is.
    pub fn current(&self) -> Player {
        self.current
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Total shots fired by both players.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Get the contender for `player`.
    pub fn contender(&self, player: Player) -> &Contender {
        &self.contenders[player.index()]
    }

    /// Get the board owned by `player`.
    pub fn board(&self, player: Player) -> &Board {
        &self.contender(player).board
    }

    /// Play one shot for the current player.
    pub fn play_turn(&mut self) -> Result<TurnReport, GameError> {
        if self.winner.is_some() {
            return Err(GameError::AlreadyOver);
        }
        let attacker = self.current;
        let (first, second) = self.contenders.split_at_mut(1);
        let (offense, defense) = match attacker {
            Player::P1 => (&mut first[0], &mut second[0]),
            Player::P2 => (&mut second[0], &mut first[0]),
        };

        let target = offense
            .strategy
            .select_target(defense.board.opponent_view())
            .map_err(|source| GameError::Targeting {
                player: attacker,
                source,
            })?;
        let outcome = defense
            .board
            .attack(target)
            .map_err(|source| GameError::Attack {
                player: attacker,
                source,
            })?;
        offense.strategy.record_outcome(target, outcome);
        self.shots += 1;

        info!(attacker = %offense.name, %target, ?outcome, "shot resolved");
        if defense.board.has_no_ships_left() {
            info!(winner = %offense.name, shots = self.shots, "game over");
            self.winner = Some(attacker);
        } else if !outcome.is_hit() {
            self.current = attacker.opponent();
        }
        Ok(TurnReport {
            attacker,
            target,
            outcome,
            plays_again: self.winner.is_none() && outcome.is_hit(),
            winner: self.winner,
        })
    }

    /// Play until someone wins, returning the winner.
    pub fn play_to_end(&mut self) -> Result<Player, GameError> {
        loop {
            if let Some(winner) = self.play_turn()?.winner {
                return Ok(winner);
            }
        }
    }
}
