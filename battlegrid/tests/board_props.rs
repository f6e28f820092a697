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
    board::setup::{self, PlacementError},
    Board, Coordinate, Dimensions, FleetComposition, Rules, Ship,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn straight_ship() -> impl Strategy<Value = Ship> {
    (1usize..=10, 1usize..=10, 1usize..=5, any::<bool>()).prop_map(|(x, y, len, horizontal)| {
        let end = if horizontal {
            Coordinate::new(x + len - 1, y)
        } else {
            Coordinate::new(x, y + len - 1)
        };
        Ship::new(Coordinate::new(x, y), end).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleets_follow_the_rules(seed in any::<u64>()) {
        let rules = Rules::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let fleet = setup::random_fleet(&mut rng, &rules).unwrap();

        prop_assert_eq!(FleetComposition::of_fleet(&fleet), rules.composition.clone());
        for (i, a) in fleet.iter().enumerate() {
            prop_assert!(a.fits(&rules.dimensions));
            for b in &fleet[i + 1..] {
                prop_assert!(!a.is_near_ship(b));
                prop_assert!(!b.is_near_ship(a));
            }
        }
        prop_assert!(Board::with_rules(&rules, fleet).is_ok());
    }

    #[test]
    fn random_fleets_fit_custom_rules(seed in any::<u64>(), size in 8usize..=15) {
        let rules = Rules::new(
            Dimensions::square(size),
            FleetComposition::new(vec![(2, 3), (3, 2), (4, 1)]),
        );
        let board = setup::random_board(&mut StdRng::seed_from_u64(seed), &rules).unwrap();
        prop_assert_eq!(board.ships().len(), 6);
        prop_assert_eq!(board.dimensions(), &rules.dimensions);
    }

    #[test]
    fn board_is_lost_only_after_every_ship_cell_is_hit(seed in any::<u64>()) {
        let rules = Rules::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = setup::random_board(&mut rng, &rules).unwrap();
        let mut cells: Vec<_> = rules.dimensions.cells().collect();
        cells.shuffle(&mut rng);

        let mut hits = 0;
        for cell in cells {
            if board.attack(cell).unwrap().is_hit() {
                hits += 1;
            }
            prop_assert_eq!(board.has_no_ships_left(), hits == rules.composition.total_cells());
        }
        prop_assert_eq!(hits, rules.composition.total_cells());
        prop_assert_eq!(board.shots().len(), rules.dimensions.total_size());
    }

    #[test]
    fn ships_are_near_their_own_cells(ship in straight_ship()) {
        prop_assert_eq!(ship.occupied_cells().len(), ship.len());
        for cell in ship.cells() {
            prop_assert!(ship.is_on_cell(cell));
            prop_assert!(ship.is_near_cell(cell));
        }
    }

    #[test]
    fn nearness_is_symmetric(a in straight_ship(), b in straight_ship()) {
        prop_assert_eq!(a.is_near_ship(&b), b.is_near_ship(&a));
    }

    #[test]
    fn neighbors_stay_on_the_grid(x in 1usize..=12, y in 1usize..=7) {
        let dim = Dimensions::new(12, 7);
        let coord = Coordinate::new(x, y);
        let neighbors: Vec<_> = dim.neighbors(coord).collect();
        prop_assert!(neighbors.len() >= 3 && neighbors.len() <= 8);
        for n in neighbors {
            prop_assert!(dim.contains(n));
            prop_assert_eq!(n.chebyshev(&coord), 1);
        }
    }
}

#[test]
fn crowded_rules_exhaust_placement() {
    for lengths in vec![vec![4], vec![3, 3, 3]] {
        let rules = Rules::new(Dimensions::new(3, 3), FleetComposition::from_lengths(lengths));
        let err = setup::random_fleet(&mut StdRng::seed_from_u64(0), &rules).unwrap_err();
        assert!(matches!(err, PlacementError::Exhausted(_)));
    }
}

#[test]
fn tight_but_legal_rules_still_place() {
    let rules = Rules::new(Dimensions::new(3, 3), FleetComposition::from_lengths(vec![3, 3]));
    let fleet = setup::random_fleet(&mut StdRng::seed_from_u64(0), &rules).unwrap();
    assert_eq!(fleet.len(), 2);
    assert!(!fleet[0].is_near_ship(&fleet[1]));
}
