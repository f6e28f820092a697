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
//! Drawing boards in the terminal.
use std::fmt;

use battlegrid::{board::CellRef, Board, Dimensions};

/// Print out the fully-revealed board, as its owner sees it.
pub fn show_revealed_board(board: &Board) {
    enum RevealedCell {
        Empty,
        Miss,
        NotShot,
        Hit,
        Sunk,
    }
    impl fmt::Display for RevealedCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.pad(match self {
                RevealedCell::Empty => "~",
                RevealedCell::Miss => "o",
                RevealedCell::NotShot => "S",
                RevealedCell::Hit => "X",
                RevealedCell::Sunk => "$",
            })
        }
    }
    show_board(
        board.dimensions(),
        rows(board, |cell| match cell.ship() {
            None if cell.shot() => RevealedCell::Miss,
            None => RevealedCell::Empty,
            Some(ship) if ship.has_sunk() => RevealedCell::Sunk,
            Some(_) if cell.damaged() => RevealedCell::Hit,
            Some(_) => RevealedCell::NotShot,
        }),
    )
}

/// Print out the obfuscated board, as an opponent sees it.
pub fn show_hidden_board(board: &Board) {
    enum HiddenCell {
        NotShot,
        Miss,
        Hit,
        Sunk,
    }
    impl fmt::Display for HiddenCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.pad(match self {
                HiddenCell::NotShot => "~",
                HiddenCell::Miss => "o",
                HiddenCell::Hit => "X",
                HiddenCell::Sunk => "$",
            })
        }
    }
    show_board(
        board.dimensions(),
        rows(board, |cell| match cell.ship() {
            _ if !cell.shot() => HiddenCell::NotShot,
            None => HiddenCell::Miss,
            Some(ship) if ship.has_sunk() => HiddenCell::Sunk,
            Some(_) => HiddenCell::Hit,
        }),
    )
}

/// Map every cell of the board through `f`, row by row.
fn rows<'a, T: 'a>(
    board: &'a Board,
    f: impl 'a + Copy + Fn(CellRef<'a>) -> T,
) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Option<T>>> {
    board
        .dimensions()
        .iter_coordinates()
        .map(move |row| row.map(move |coord| board.cell(coord).map(f)))
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the items. Cells that could not be looked up print blank.
fn show_board<T: fmt::Display>(
    dim: &Dimensions,
    rows: impl Iterator<Item = impl Iterator<Item = Option<T>>>,
) {
    print!("   ");
    for x in 1..=dim.width() {
        print!("{:^4}", ColumnLabel(x));
    }
    println!();
    for (i, row) in rows.enumerate() {
        print!("{:>2} ", i + 1);
        for cell in row {
            match cell {
                Some(cell) => print!("{:^4}", cell),
                None => print!("{:^4}", ""),
            }
        }
        println!();
    }
}

/// Display helper that prints a column's letter.
struct ColumnLabel(usize);

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if (1..=26).contains(&self.0) {
            let mut buf = [0u8; 4];
            f.pad(((b'A' + (self.0 - 1) as u8) as char).encode_utf8(&mut buf))
        } else {
            f.pad(&self.0.to_string())
        }
    }
}
