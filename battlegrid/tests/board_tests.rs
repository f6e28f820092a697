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
use battlegrid::{
    board::{AttackError, FleetError},
    AttackOutcome, Board, Coordinate, Dimensions, FleetComposition, Rules, Ship,
};

fn c(x: usize, y: usize) -> Coordinate {
    Coordinate::new(x, y)
}

fn ship(start: (usize, usize), end: (usize, usize)) -> Ship {
    Ship::new(Coordinate::from(start), Coordinate::from(end)).unwrap()
}

fn rules_for(lengths: &[usize]) -> Rules {
    Rules::new(
        Dimensions::default(),
        FleetComposition::from_lengths(lengths.iter().copied()),
    )
}

/// One ship of each length 1 to 5, all well apart.
fn standard_fleet() -> Vec<Ship> {
    vec![
        ship((1, 1), (1, 1)),
        ship((3, 1), (4, 1)),
        ship((6, 1), (8, 1)),
        ship((1, 3), (1, 6)),
        ship((3, 3), (7, 3)),
    ]
}

#[test]
fn vertical_ship_sinks_after_every_cell_is_hit() {
    let mut board = Board::with_rules(&rules_for(&[3]), vec![ship((3, 3), (3, 5))]).unwrap();
    assert!(board.ships()[0].is_vertical());

    assert_eq!(board.attack(c(3, 6)), Ok(AttackOutcome::Miss));
    assert_eq!(board.attack(c(3, 3)), Ok(AttackOutcome::Hit(0)));
    assert_eq!(board.attack(c(3, 4)), Ok(AttackOutcome::Hit(0)));
    assert!(!board.has_no_ships_left());
    assert_eq!(board.attack(c(3, 5)), Ok(AttackOutcome::Sunk(0)));
    assert_eq!(board.attack(c(3, 6)), Ok(AttackOutcome::Miss));

    assert_eq!(board.ships()[0].damage_count(), 3);
    assert!(board.has_no_ships_left());
    assert_eq!(board.ships_left(), 0);
}

#[test]
fn diagonal_neighbors_are_too_close() {
    let err = Board::with_rules(
        &rules_for(&[1, 1]),
        vec![ship((1, 1), (1, 1)), ship((2, 2), (2, 2))],
    )
    .unwrap_err();
    assert_eq!(err, FleetError::ShipsTooClose { first: 0, second: 1 });
}

#[test]
fn overlapping_ships_are_too_close() {
    let err = Board::with_rules(
        &rules_for(&[2, 3]),
        vec![ship((4, 4), (6, 4)), ship((5, 3), (5, 4))],
    )
    .unwrap_err();
    assert_eq!(err, FleetError::ShipsTooClose { first: 0, second: 1 });
}

#[test]
fn one_empty_cell_between_ships_is_enough() {
    let board = Board::with_rules(
        &rules_for(&[1, 1]),
        vec![ship((1, 1), (1, 1)), ship((3, 3), (3, 3))],
    );
    assert!(board.is_ok());
}

#[test]
fn wrong_composition_is_rejected() {
    let err = Board::new(vec![ship((1, 1), (3, 1))]).unwrap_err();
    match err {
        FleetError::InvalidFleetComposition { required, actual } => {
            assert_eq!(required, FleetComposition::standard());
            assert_eq!(actual, FleetComposition::from_lengths(vec![3]));
        }
        other => panic!("unexpected error: {}", other),
    }

    let mut fleet = standard_fleet();
    fleet[0] = ship((10, 10), (10, 9));
    assert!(matches!(
        Board::new(fleet),
        Err(FleetError::InvalidFleetComposition { .. })
    ));
}

#[test]
fn composition_error_explains_counts() {
    let err = Board::with_rules(&rules_for(&[2, 2]), vec![ship((1, 1), (2, 1))]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("2 of length 2"), "{}", message);
    assert!(message.contains("1 of length 2"), "{}", message);
}

#[test]
fn ships_off_the_grid_are_rejected() {
    let rules = Rules::new(Dimensions::new(8, 8), FleetComposition::from_lengths(vec![1, 3]));
    let err = Board::with_rules(&rules, vec![ship((1, 1), (1, 1)), ship((7, 5), (9, 5))])
        .unwrap_err();
    assert!(matches!(err, FleetError::ShipOutOfBounds { index: 1, .. }));
}

#[test]
fn standard_fleet_builds() {
    let board = Board::new(standard_fleet()).unwrap();
    assert_eq!(board.dimensions(), &Dimensions::default());
    assert_eq!(board.ships().len(), 5);
    assert_eq!(board.ships_left(), 5);
    assert!(board.shots().is_empty());
}

#[test]
fn repeat_attacks_are_idempotent() {
    let mut board = Board::new(standard_fleet()).unwrap();
    assert_eq!(board.attack(c(4, 3)), Ok(AttackOutcome::Hit(4)));
    assert_eq!(board.attack(c(4, 3)), Ok(AttackOutcome::Hit(4)));
    assert_eq!(board.ships()[4].damage_count(), 1);
    assert_eq!(board.shots().len(), 1);

    assert_eq!(board.attack(c(1, 1)), Ok(AttackOutcome::Sunk(0)));
    assert_eq!(board.attack(c(1, 1)), Ok(AttackOutcome::Sunk(0)));
    assert_eq!(board.ships_left(), 4);
}

#[test]
fn attacks_off_the_grid_are_rejected() {
    let mut board = Board::new(standard_fleet()).unwrap();
    for &coord in &[c(0, 5), c(5, 0), c(11, 1), c(1, 11)] {
        assert_eq!(board.attack(coord), Err(AttackError::OutOfBounds(coord)));
        assert!(!board.valid_coordinate(coord));
    }
    assert!(board.shots().is_empty());
}

#[test]
fn sinking_every_ship_ends_the_fleet() {
    let mut board = Board::new(standard_fleet()).unwrap();
    let cells: Vec<_> = board.ships().iter().flat_map(Ship::cells).collect();
    for (i, &cell) in cells.iter().enumerate() {
        assert!(!board.has_no_ships_left());
        assert!(board.attack(cell).unwrap().is_hit());
        assert!(board.was_shot(cell));
        assert_eq!(board.shots().len(), i + 1);
    }
    assert!(board.has_no_ships_left());
}

#[test]
fn cells_report_shots_and_ships() {
    let mut board = Board::new(standard_fleet()).unwrap();
    board.attack(c(6, 1)).unwrap();
    board.attack(c(10, 10)).unwrap();

    let hit = board.cell(c(6, 1)).unwrap();
    assert!(hit.shot());
    assert!(hit.damaged());
    assert_eq!(hit.ship().map(Ship::len), Some(3));

    let miss = board.cell(c(10, 10)).unwrap();
    assert!(miss.shot());
    assert!(miss.ship().is_none());
    assert!(!miss.damaged());

    let untouched = board.cell(c(7, 1)).unwrap();
    assert!(!untouched.shot());
    assert!(!untouched.damaged());

    assert!(board.cell(c(11, 1)).is_none());
}

#[test]
fn opponent_view_only_shows_sunk_ships() {
    let mut board = Board::new(standard_fleet()).unwrap();
    board.attack(c(3, 1)).unwrap();
    assert_eq!(board.opponent_view().sunk_ships().count(), 0);

    board.attack(c(4, 1)).unwrap();
    board.attack(c(1, 1)).unwrap();
    let sunk: Vec<_> = board
        .opponent_view()
        .sunk_ships()
        .map(|(idx, ship)| (idx, ship.len()))
        .collect();
    assert_eq!(sunk, vec![(0, 1), (1, 2)]);
    assert_eq!(board.opponent_view().dimensions(), &Dimensions::default());
}
