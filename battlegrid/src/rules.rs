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
//! Game configuration shared by boards and strategies.
use std::{collections::BTreeMap, fmt};

use crate::{board::Dimensions, ships::Ship};

/// Required number of ships for each ship length.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FleetComposition(BTreeMap<usize, usize>);

impl FleetComposition {
    /// One ship of every length from 1 to 5.
    pub fn standard() -> Self {
        Self::from_lengths(1..=5)
    }

    /// Build a composition from explicit `(length, count)` pairs. Zero counts are
    /// dropped so that they compare equal to absent lengths.
    pub fn new<I: IntoIterator<Item = (usize, usize)>>(counts: I) -> Self {
        let mut map = BTreeMap::new();
        for (len, count) in counts {
            *map.entry(len).or_insert(0) += count;
        }
        map.retain(|_, count| *count > 0);
        FleetComposition(map)
    }

    /// Count how many times each length appears.
    pub fn from_lengths<I: IntoIterator<Item = usize>>(lengths: I) -> Self {
        Self::new(lengths.into_iter().map(|len| (len, 1)))
    }

    /// The histogram of an actual fleet.
    pub fn of_fleet(fleet: &[Ship]) -> Self {
        Self::from_lengths(fleet.iter().map(Ship::len))
    }

    /// Number of ships required with the given length.
    pub fn count(&self, len: usize) -> usize {
        self.0.get(&len).copied().unwrap_or(0)
    }

    /// Total number of ships.
    pub fn total_ships(&self) -> usize {
        self.0.values().sum()
    }

    /// Total number of cells covered by the fleet.
    pub fn total_cells(&self) -> usize {
        self.0.iter().map(|(len, count)| len * count).sum()
    }

    /// Iterate `(length, count)` pairs, shortest first.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (usize, usize)> {
        self.0.iter().map(|(&len, &count)| (len, count))
    }

    /// Every required ship length, longest first, repeated by count.
    pub fn lengths_longest_first(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .iter()
            .flat_map(|(len, count)| std::iter::repeat(len).take(count))
            .collect();
        lengths.reverse();
        lengths
    }
}

impl Default for FleetComposition {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for FleetComposition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ships in total", self.total_ships())?;
        let mut sep = ": ";
        for (len, count) in self.iter() {
            write!(f, "{}{} of length {}", sep, count, len)?;
            sep = ", ";
        }
        Ok(())
    }
}

/// Grid size and fleet composition for a game.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Rules {
    /// Bounds of every player's grid.
    pub dimensions: Dimensions,
    /// Ships every player must field.
    pub composition: FleetComposition,
}

impl Rules {
    /// Rules for the given grid and fleet.
    pub fn new(dimensions: Dimensions, composition: FleetComposition) -> Self {
        Self {
            dimensions,
            composition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_one_of_each() {
        let std = FleetComposition::standard();
        assert_eq!(std.total_ships(), 5);
        assert_eq!(std.total_cells(), 15);
        for len in 1..=5 {
            assert_eq!(std.count(len), 1);
        }
        assert_eq!(std.count(6), 0);
        assert_eq!(std.lengths_longest_first(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn zero_counts_are_ignored() {
        assert_eq!(
            FleetComposition::new(vec![(2, 1), (3, 0)]),
            FleetComposition::from_lengths(vec![2])
        );
    }

    #[test]
    fn display_lists_counts() {
        let comp = FleetComposition::new(vec![(3, 2), (1, 1)]);
        assert_eq!(
            comp.to_string(),
            "3 ships in total: 1 of length 1, 2 of length 3"
        );
        assert_eq!(FleetComposition::new(vec![]).to_string(), "0 ships in total");
    }
}
