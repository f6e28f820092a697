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
//! Implementation of the classic game of Battleship with computer opponents.
//!
//! [`board`] holds the grid utilities, the [`Board`] that validates a fleet and resolves
//! attacks, and a random fleet generator in [`board::setup`]. [`ships`] defines the
//! straight [`Ship`]. [`rules`] configures the grid size and fleet composition.
//! [`strategy`] contains the ways an attacker can choose targets, and [`game`] runs
//! alternating turns between two players.

pub mod board;
pub mod game;
pub mod rules;
pub mod ships;
pub mod strategy;

pub use crate::{
    board::{AttackOutcome, Board, Coordinate, Dimensions},
    rules::{FleetComposition, Rules},
    ships::Ship,
    strategy::{StrategyKind, TargetingStrategy},
};
