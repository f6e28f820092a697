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
use std::{
    cell::RefCell,
    io::{self, BufRead},
    rc::Rc,
};

use anyhow::Context;
use battlegrid::{
    board::setup,
    game::{Contender, Game, GameError, Player, TurnReport},
    strategy::TargetingError,
    AttackOutcome, Dimensions, FleetComposition, Rules, StrategyKind,
};
use clap::{App, Arg, ArgMatches};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    input::{InputReader, Terminal},
    render::{show_hidden_board, show_revealed_board},
};

mod input;
mod render;

/// Smallest board the standard fleet reliably fits on.
const MIN_SIZE: usize = 7;
/// Largest board that still has a letter for every column.
const MAX_SIZE: usize = 26;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line battleship between humans and computer players.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["p1", "1", "p2", "2", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(strategy_arg("p1", "human", "strategy of player 1"))
        .arg(strategy_arg("p2", "hunt", "strategy of player 2"))
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for fleet placement and computer players, for reproducible games")
                .takes_value(true)
                .validator(|s| s.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("size")
                .long("size")
                .value_name("SIZE")
                .help("width and height of the boards")
                .takes_value(true)
                .default_value("10")
                .validator(|s| match s.parse::<usize>() {
                    Ok(size) if (MIN_SIZE..=MAX_SIZE).contains(&size) => Ok(()),
                    Ok(_) => Err(format!("size must be between {} and {}", MIN_SIZE, MAX_SIZE)),
                    Err(e) => Err(e.to_string()),
                }),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("only print the result of the game"),
        )
        .get_matches();

    let mut rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse().context("invalid seed")?),
        None => StdRng::from_entropy(),
    };
    let size = matches
        .value_of("size")
        .unwrap_or("10")
        .parse()
        .context("invalid size")?;
    let rules = Rules::new(Dimensions::square(size), FleetComposition::standard());
    let quiet = matches.is_present("quiet");

    let kinds = [
        strategy_of(&matches, "p1")?,
        strategy_of(&matches, "p2")?,
    ];
    let reader = Rc::new(RefCell::new(InputReader::new(io::stdin().lock())));

    let first = choose_first(&matches, kinds, &mut rng, &reader)?;

    let mut contenders = Vec::with_capacity(2);
    for (i, kind) in kinds.iter().enumerate() {
        let board = setup::random_board(&mut rng, &rules)
            .with_context(|| format!("could not place the fleet of player {}", i + 1))?;
        let strategy = kind.build(StdRng::from_rng(&mut rng)?, || Terminal::new(reader.clone()));
        contenders.push(Contender::new(format!("player {}", i + 1), board, strategy));
    }
    let p2 = contenders.pop().context("missing player 2")?;
    let p1 = contenders.pop().context("missing player 1")?;
    info!(p1 = kinds[0].name(), p2 = kinds[1].name(), ?first, "starting game");

    if !quiet {
        println!("{}", rules.composition);
    }

    let mut game = Game::new(p1, p2, first);
    let winner = loop {
        if !quiet {
            show_turn(&game);
        }
        let report = match game.play_turn() {
            Ok(report) => report,
            Err(GameError::Targeting {
                source: TargetingError::InputClosed,
                player,
            }) => {
                println!("{} left the game.", game.contender(player).name());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        if !quiet {
            narrate(&game, &report);
        }
        if let Some(winner) = report.winner {
            break winner;
        }
    };

    for &player in &[Player::P1, Player::P2] {
        let contender = game.contender(player);
        println!("{}'s board ({}):", contender.name(), contender.strategy_name());
        show_revealed_board(contender.board());
    }
    println!(
        "{} wins after {} shots!",
        game.contender(winner).name(),
        game.shots()
    );
    Ok(())
}

/// Send logs to stderr so they don't mix with the boards. Filtered by `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Build the argument selecting one player's strategy.
fn strategy_arg(name: &'static str, default: &'static str, help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(name)
        .long(name)
        .value_name("STRATEGY")
        .help(help)
        .takes_value(true)
        .default_value(default)
        .validator(|s| s.parse::<StrategyKind>().map(|_| ()).map_err(|e| e.to_string()))
}

fn strategy_of(matches: &ArgMatches, name: &str) -> anyhow::Result<StrategyKind> {
    Ok(matches
        .value_of(name)
        .context("missing strategy")?
        .parse::<StrategyKind>()?)
}

/// Choose which [`Player`] goes first based on either args, cli input, or a coin flip
/// when nobody is at the keyboard.
fn choose_first<B: BufRead>(
    matches: &ArgMatches,
    kinds: [StrategyKind; 2],
    rng: &mut impl Rng,
    input: &RefCell<InputReader<B>>,
) -> io::Result<Player> {
    if let Some(clichoice) = matches.value_of("first_player") {
        return Ok(match clichoice.to_ascii_lowercase().as_str() {
            "p1" | "1" => Player::P1,
            "p2" | "2" => Player::P2,
            _ => coin_flip(rng),
        });
    }
    let human = match kinds {
        [StrategyKind::Manual, _] => Player::P1,
        [_, StrategyKind::Manual] => Player::P2,
        _ => return Ok(coin_flip(rng)),
    };
    let answer = input
        .borrow_mut()
        .read_input_lower("Do you want to go first? (Y/n)", |input| match input {
            "yes" | "y" | "first" | "1" | "1st" | "" => Some(human),
            "no" | "n" | "second" | "2" | "2nd" => Some(human.opponent()),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?;
    Ok(answer.unwrap_or(human))
}

fn coin_flip(rng: &mut impl Rng) -> Player {
    if rng.gen() {
        Player::P1
    } else {
        Player::P2
    }
}

/// Show the boards the player about to attack is allowed to see.
fn show_turn(game: &Game) {
    let attacker = game.contender(game.current());
    let defender = game.contender(game.current().opponent());
    if attacker.is_interactive() {
        println!("It is {}'s turn. Your board:", attacker.name());
        show_revealed_board(attacker.board());
    }
    println!(
        "Here is {}'s board before {}'s attack:",
        defender.name(),
        attacker.name()
    );
    show_hidden_board(defender.board());
}

fn narrate(game: &Game, report: &TurnReport) {
    let attacker = game.contender(report.attacker).name();
    let defender = game.contender(report.attacker.opponent()).name();
    println!("{} attacks {} at {}.", attacker, defender, report.target);
    match report.outcome {
        AttackOutcome::Miss => println!("Missed."),
        AttackOutcome::Hit(_) => println!("A ship of {} has been hit!", defender),
        AttackOutcome::Sunk(i) => {
            let len = game.board(report.attacker.opponent()).ships()[i].len();
            println!("The ship of length {} of {} has sunk!", len, defender);
        }
    }
    if report.plays_again && report.winner.is_none() {
        println!("{} plays again.", attacker);
    }
}
