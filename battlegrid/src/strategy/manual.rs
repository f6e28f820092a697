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
//! Targets typed in by a person.
use std::io;

use thiserror::Error;

use crate::{
    board::{Coordinate, Dimensions, OpponentView, ParseCoordinateError},
    strategy::{TargetingError, TargetingStrategy},
};

/// Source of typed coordinates, such as a terminal.
pub trait InputSource {
    /// Show `prompt` and read one line. Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Tell the person why their last line was rejected.
    fn report(&mut self, error: &ManualInputError);
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn report(&mut self, error: &ManualInputError) {
        (**self).report(error)
    }
}

/// Why a typed line was not accepted as a target.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ManualInputError {
    /// The text is not a coordinate.
    #[error(transparent)]
    Parse(#[from] ParseCoordinateError),

    /// The coordinate is not on the enemy grid.
    #[error("{coord} is off the grid, pick a column up to {max_x} and a row up to {max_y}")]
    OutOfRange {
        /// The coordinate entered.
        coord: Coordinate,
        /// Largest valid `x`.
        max_x: usize,
        /// Largest valid `y`.
        max_y: usize,
    },
}

/// Read a target from text and check it against the grid.
pub fn parse_target(text: &str, dim: &Dimensions) -> Result<Coordinate, ManualInputError> {
    let coord: Coordinate = text.parse()?;
    if dim.contains(coord) {
        Ok(coord)
    } else {
        Err(ManualInputError::OutOfRange {
            coord,
            max_x: dim.width(),
            max_y: dim.height(),
        })
    }
}

/// Asks an [`InputSource`] for targets, re-prompting until a valid one is entered.
#[derive(Debug)]
pub struct ManualStrategy<I> {
    input: I,
    prompt: String,
}

impl<I: InputSource> ManualStrategy<I> {
    /// Create a manual strategy reading from `input`.
    pub fn new(input: I) -> Self {
        Self::with_prompt(input, "coordinates target =")
    }

    /// Create a manual strategy with a custom prompt.
    pub fn with_prompt<S: Into<String>>(input: I, prompt: S) -> Self {
        Self {
            input,
            prompt: prompt.into(),
        }
    }

    /// Give back the input source.
    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: InputSource> TargetingStrategy for ManualStrategy<I> {
    fn name(&self) -> &'static str {
        "human"
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn select_target(&mut self, opponent: OpponentView<'_>) -> Result<Coordinate, TargetingError> {
        loop {
            let line = self
                .input
                .read_line(&self.prompt)?
                .ok_or(TargetingError::InputClosed)?;
            match parse_target(&line, opponent.dimensions()) {
                Ok(coord) => return Ok(coord),
                Err(err) => self.input.report(&err),
            }
        }
    }
}
