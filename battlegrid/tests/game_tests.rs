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
use std::collections::BTreeSet;

use battlegrid::{
    board::{setup, OpponentView},
    game::{Contender, Game, GameError, Player},
    strategy::{HuntTargetStrategy, RandomStrategy, TargetingError},
    AttackOutcome, Board, Coordinate, FleetComposition, Rules, Ship,
    TargetingStrategy,
};
use rand::{rngs::StdRng, SeedableRng};

fn c(x: usize, y: usize) -> Coordinate {
    Coordinate::new(x, y)
}

fn ship(start: (usize, usize), end: (usize, usize)) -> Ship {
    Ship::new(Coordinate::from(start), Coordinate::from(end)).unwrap()
}

/// Fires at a fixed list of coordinates, then gives up.
struct Scripted(Vec<Coordinate>);

impl TargetingStrategy for Scripted {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn select_target(&mut self, _: OpponentView<'_>) -> Result<Coordinate, TargetingError> {
        if self.0.is_empty() {
            Err(TargetingError::NoTargetsLeft)
        } else {
            Ok(self.0.remove(0))
        }
    }
}

fn two_ship_board() -> Board {
    let rules = Rules {
        composition: FleetComposition::from_lengths(vec![1, 2]),
        ..Rules::default()
    };
    Board::with_rules(&rules, vec![ship((1, 1), (1, 1)), ship((5, 5), (5, 6))]).unwrap()
}

fn scripted_game(p1: &[(usize, usize)], p2: &[(usize, usize)]) -> Game {
    let script = |shots: &[(usize, usize)]| {
        Box::new(Scripted(shots.iter().map(|&s| Coordinate::from(s)).collect()))
    };
    Game::new(
        Contender::new("alice", two_ship_board(), script(p1)),
        Contender::new("bob", two_ship_board(), script(p2)),
        Player::P1,
    )
}

#[test]
fn a_hit_keeps_the_turn() {
    let mut game = scripted_game(&[(5, 5), (9, 9)], &[(2, 2)]);

    let report = game.play_turn().unwrap();
    assert_eq!(report.attacker, Player::P1);
    assert_eq!(report.target, c(5, 5));
    assert_eq!(report.outcome, AttackOutcome::Hit(1));
    assert!(report.plays_again);
    assert_eq!(game.current(), Player::P1);

    let report = game.play_turn().unwrap();
    assert_eq!(report.outcome, AttackOutcome::Miss);
    assert!(!report.plays_again);
    assert_eq!(game.current(), Player::P2);

    let report = game.play_turn().unwrap();
    assert_eq!(report.attacker, Player::P2);
    assert_eq!(game.current(), Player::P1);
    assert_eq!(game.shots(), 3);
    assert!(game.board(Player::P1).was_shot(c(2, 2)));
}

#[test]
fn sinking_the_last_ship_wins() {
    let mut game = scripted_game(&[(1, 1), (5, 5), (5, 6)], &[]);
    assert_eq!(game.play_turn().unwrap().outcome, AttackOutcome::Sunk(0));
    assert_eq!(game.play_turn().unwrap().outcome, AttackOutcome::Hit(1));

    let report = game.play_turn().unwrap();
    assert_eq!(report.outcome, AttackOutcome::Sunk(1));
    assert_eq!(report.winner, Some(Player::P1));
    assert!(!report.plays_again);
    assert_eq!(game.winner(), Some(Player::P1));
    assert!(game.board(Player::P2).has_no_ships_left());

    assert!(matches!(game.play_turn(), Err(GameError::AlreadyOver)));
    assert_eq!(game.shots(), 3);
}

#[test]
fn strategy_errors_name_the_player() {
    let mut game = scripted_game(&[(9, 9)], &[]);
    game.play_turn().unwrap();
    match game.play_turn() {
        Err(GameError::Targeting {
            player: Player::P2,
            source: TargetingError::NoTargetsLeft,
        }) => {}
        other => panic!("unexpected result: {:?}", other.map(|r| r.target)),
    }
}

#[test]
fn out_of_bounds_targets_are_reported() {
    let mut game = scripted_game(&[(11, 3)], &[]);
    assert!(matches!(
        game.play_turn(),
        Err(GameError::Attack {
            player: Player::P1,
            ..
        })
    ));
    assert!(game.board(Player::P2).shots().is_empty());
}

#[test]
fn computer_players_finish_the_game() {
    let rules = Rules::default();
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let hunter = Contender::new(
            "hunter",
            setup::random_board(&mut rng, &rules).unwrap(),
            Box::new(HuntTargetStrategy::new(StdRng::seed_from_u64(seed + 100))),
        );
        let random = Contender::new(
            "random",
            setup::random_board(&mut rng, &rules).unwrap(),
            Box::new(RandomStrategy::new(StdRng::seed_from_u64(seed + 200))),
        );
        let first = if seed % 2 == 0 { Player::P1 } else { Player::P2 };
        let mut game = Game::new(hunter, random, first);

        let winner = game.play_to_end().unwrap();
        assert_eq!(game.winner(), Some(winner));
        assert!(game.board(winner.opponent()).has_no_ships_left());
        assert!(!game.board(winner).has_no_ships_left());
        assert_eq!(game.contender(Player::P1).strategy_name(), "hunt-target");
        assert!(!game.contender(Player::P1).is_interactive());
        assert!(!game.contender(Player::P2).is_interactive());

        let fired: usize = [Player::P1, Player::P2]
            .iter()
            .map(|&p| game.board(p).shots().len())
            .sum();
        assert_eq!(fired, game.shots());
    }
}

#[test]
fn seeded_games_replay_identically() {
    let play = |seed: u64| {
        let rules = Rules::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut contenders = (0..2).map(|i| {
            Contender::new(
                format!("bot {}", i),
                setup::random_board(&mut rng, &rules).unwrap(),
                Box::new(HuntTargetStrategy::new(StdRng::seed_from_u64(seed + i))),
            )
        });
        let p1 = contenders.next().unwrap();
        let p2 = contenders.next().unwrap();
        let mut game = Game::new(p1, p2, Player::P1);
        let winner = game.play_to_end().unwrap();
        let shots: BTreeSet<_> = game.board(winner.opponent()).shots().clone();
        (winner, game.shots(), shots)
    };
    assert_eq!(play(9), play(9));
}
