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
//! Reading lines typed by the player.
use std::{
    cell::RefCell,
    io::{self, BufRead, Write},
    rc::Rc,
};

use battlegrid::strategy::{InputSource, ManualInputError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker. Returns `None` at end of input.
    pub fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        while self.read_input_inner(prompt)? {
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
        Ok(None)
    }

    /// Print the prompt, then read one trimmed line. Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Ok(if self.read_input_inner(prompt)? {
            Some(self.buf.trim().to_owned())
        } else {
            None
        })
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns
    /// false at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}

/// What a line typed at the target prompt asks for.
enum Command {
    Target(String),
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Self {
        /// Accepts an optional verb in front of the coordinate, e.g. "fire at b7".
        static FIRE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"(?xi)^
        (?:(?:fire|attack|shoot)\s+(?:at\s+)?)?
        (?P<coord>\S.*)$",
            )
            .unwrap()
        });
        match line.to_ascii_lowercase().as_str() {
            "?" | "help" | "h" => return Command::Help,
            "quit" | "exit" | "q" => return Command::Quit,
            _ => {}
        }
        match FIRE.captures(line).and_then(|c| c.name("coord")) {
            Some(coord) => Command::Target(coord.as_str().to_owned()),
            None => Command::Target(line.to_owned()),
        }
    }
}

/// [`InputSource`] backed by a shared [`InputReader`], so several human players can
/// take turns at the same terminal.
pub struct Terminal<B>(Rc<RefCell<InputReader<B>>>);

impl<B> Terminal<B> {
    pub fn new(reader: Rc<RefCell<InputReader<B>>>) -> Self {
        Terminal(reader)
    }
}

impl<B: BufRead> InputSource for Terminal<B> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut reader = self.0.borrow_mut();
        while let Some(line) = reader.read_line(prompt)? {
            match Command::parse(&line) {
                Command::Target(text) => return Ok(Some(text)),
                Command::Quit => return Ok(None),
                Command::Help => println!(
                    "Available Commands:
    <column><row>         fire at a cell, e.g. B7. \"x,y\" also works, e.g. 2,7.
    fire at <coordinate>  same as above.
    quit                  abandon the game."
                ),
            }
        }
        Ok(None)
    }

    fn report(&mut self, error: &ManualInputError) {
        println!("{}", error);
    }
}
