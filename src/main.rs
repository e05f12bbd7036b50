//! goboard: a small Go rules engine with a console front end.
//!
//! ## Usage
//!
//! - `goboard` / `goboard play` - Play Black against the greedy agent
//! - `goboard hotseat` - Two players take turns on one terminal
//! - `goboard selfplay` - Watch the agent play itself
//! - `goboard demo` - Replay a short capture sequence
//!
//! Set `RUST_LOG=debug` to see rejected moves and turn changes on stderr.

use std::io;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use goboard::agent::GreedyAgent;
use goboard::constants::{PLAY_BOARD_SIZE, SELF_PLAY_MAX_MOVES};
use goboard::game::{Event, create_game, dispatch};
use goboard::session::{Session, describe_result, render, self_play};
use goboard::score::score;

/// goboard: a Go rules engine with a greedy opponent
#[derive(Parser)]
#[command(name = "goboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length
    #[arg(long, global = true, default_value_t = PLAY_BOARD_SIZE)]
    size: usize,

    /// Seed for breaking ties between equally good agent moves
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Black against the agent on the console
    Play,
    /// Two players share the console, Black then White
    Hotseat,
    /// Let the agent play both sides
    Selfplay {
        /// Stop the game after this many moves
        #[arg(long, default_value_t = SELF_PLAY_MAX_MOVES)]
        max_moves: usize,
    },
    /// Replay a short capture sequence on a 6x6 board
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.size == 0 {
        bail!("board size must be positive");
    }
    let mut agent = match cli.seed {
        Some(seed) => GreedyAgent::with_seed(seed),
        None => GreedyAgent::new(),
    };

    match cli.command {
        Some(Commands::Play) | None => {
            let mut session = Session::new(cli.size, agent);
            session.run(io::stdin().lock(), io::stdout())?;
        }
        Some(Commands::Hotseat) => {
            let mut session = Session::hotseat(cli.size);
            session.run(io::stdin().lock(), io::stdout())?;
        }
        Some(Commands::Selfplay { max_moves }) => {
            self_play(cli.size, &mut agent, io::stdout(), max_moves)?;
        }
        Some(Commands::Demo) => run_demo(),
    }
    Ok(())
}

fn run_demo() {
    println!("goboard: capture demo\n");

    // Black surrounds the White stone at (2, 1) and takes it with (2, 2).
    let moves = [(1, 1), (2, 1), (2, 0), (3, 3), (3, 1), (3, 4), (2, 2)];
    let mut game = create_game(6);
    for (x, y) in moves {
        let mover = game.turn;
        game = dispatch(&game, Event::PlaceStone { x, y });
        print!("{}", render(&game, Some(&format!("{mover} plays at ({x}, {y})"))));
        println!();
    }

    println!("{}", describe_result(&score(&game)));
}
