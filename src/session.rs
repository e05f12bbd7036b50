//! Console play: text rendering and the interactive game loop.
//!
//! Against the [`GreedyAgent`] the human plays Black and the agent plays
//! White. In hotseat mode two people share the terminal and both colors are
//! read from input. Input is one command per line:
//!
//! - `x y` - place a stone at column `x`, row `y` (zero-based)
//! - `pass` - pass the turn
//! - `endgame` - end the game now and score it
//! - `quit` / `exit` - leave without scoring
//!
//! ## Example
//!
//! ```no_run
//! use goboard::agent::GreedyAgent;
//! use goboard::session::Session;
//!
//! let mut session = Session::new(6, GreedyAgent::new());
//! session.run(std::io::stdin().lock(), std::io::stdout())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::agent::GreedyAgent;
use crate::board::Color;
use crate::game::{Event, GameState, Rejection, create_game, try_dispatch};
use crate::score::{GameResult, Winner, score};

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { x: isize, y: isize },
    Pass,
    EndGame,
    Quit,
}

impl Command {
    /// Parse a line; `None` if it is not a recognised command.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "pass" => return Some(Command::Pass),
            "endgame" => return Some(Command::EndGame),
            "quit" | "exit" => return Some(Command::Quit),
            _ => {}
        }

        let mut parts = line.split_whitespace();
        let x = parts.next()?.parse().ok()?;
        let y = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Command::Place { x, y })
    }
}

/// Render the board followed by a status line.
///
/// The status defaults to whose move it is.
pub fn render(state: &GameState, status: Option<&str>) -> String {
    let status = match status {
        Some(s) => s.to_string(),
        None => format!("{}'s move", state.turn),
    };
    format!("{}{status}\n", state.board)
}

/// One-line summary of a scored game.
pub fn describe_result(result: &GameResult) -> String {
    let winner = match result.winner {
        Winner::Black => "B",
        Winner::White => "W",
        Winner::Tie => "Tie",
    };
    format!(
        "Game over! Winner: {winner}. Score: B {}, W {}",
        result.score.black, result.score.white
    )
}

/// An interactive console game, against the agent or between two people.
pub struct Session {
    state: GameState,
    /// Plays White when present; `None` means both colors read from input.
    agent: Option<GreedyAgent>,
}

impl Session {
    /// Human Black against the agent.
    pub fn new(size: usize, agent: GreedyAgent) -> Self {
        Self {
            state: create_game(size),
            agent: Some(agent),
        }
    }

    /// Two humans alternating on one terminal.
    pub fn hotseat(size: usize) -> Self {
        Self {
            state: create_game(size),
            agent: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run until the game ends, the user quits, or input runs out.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        if self.agent.is_some() {
            writeln!(output, "Welcome to Go! You are Black (B).")?;
        } else {
            writeln!(output, "Welcome to Go!")?;
        }
        writeln!(output, "Enter moves as: x y (e.g., '2 3').")?;
        writeln!(
            output,
            "Type 'pass' to pass, 'endgame' to finish and score, 'quit' to leave."
        )?;
        write!(output, "{}", render(&self.state, None))?;
        output.flush()?;

        let mut lines = input.lines();
        while !self.state.is_over() {
            if self.state.turn == Color::White
                && let Some(agent) = &mut self.agent
            {
                let status = match agent.choose(&self.state) {
                    Some(((x, y), next)) => {
                        self.state = next;
                        format!("Agent plays at ({x}, {y})")
                    }
                    None => {
                        self.state = try_dispatch(&self.state, Event::Pass)?;
                        "Agent passes.".to_string()
                    }
                };
                write!(output, "{}", render(&self.state, Some(&status)))?;
                output.flush()?;
                continue;
            }

            if self.agent.is_some() {
                write!(output, "Your move: ")?;
            } else {
                write!(output, "{}'s move: ", self.state.turn)?;
            }
            output.flush()?;
            let Some(line) = lines.next() else {
                debug!("input closed, leaving game");
                return Ok(());
            };
            let line = line.context("failed to read move")?;
            if line.trim().is_empty() {
                continue;
            }

            let Some(command) = Command::parse(&line) else {
                writeln!(
                    output,
                    "Invalid input. Enter coordinates as two numbers, e.g., '2 3'"
                )?;
                continue;
            };
            let event = match command {
                Command::Quit => {
                    writeln!(output, "Exiting game.")?;
                    return Ok(());
                }
                Command::Place { x, y } => Event::PlaceStone { x, y },
                Command::Pass => Event::Pass,
                Command::EndGame => Event::ForceEnd,
            };

            match try_dispatch(&self.state, event) {
                Ok(next) => {
                    self.state = next;
                    if !self.state.is_over() {
                        write!(output, "{}", render(&self.state, None))?;
                    }
                }
                Err(reason) => {
                    writeln!(output, "{}", illegal_status(reason))?;
                }
            }
        }

        let status = describe_result(&score(&self.state));
        write!(output, "{}", render(&self.state, Some(&status)))?;
        output.flush()?;
        Ok(())
    }
}

fn illegal_status(reason: Rejection) -> String {
    format!("{reason}. Try again.")
}

/// Agent-versus-agent game. Ends by two passes or, after `max_moves`
/// placements and passes, by forced end. Returns the final state.
pub fn self_play<W: Write>(
    size: usize,
    agent: &mut GreedyAgent,
    mut output: W,
    max_moves: usize,
) -> Result<GameState> {
    let mut state = create_game(size);
    let mut moves = 0;

    while !state.is_over() {
        if moves >= max_moves {
            writeln!(output, "Move limit reached.")?;
            state = try_dispatch(&state, Event::ForceEnd)?;
            break;
        }
        let mover = state.turn;
        let status = match agent.choose(&state) {
            Some(((x, y), next)) => {
                state = next;
                format!("{mover} plays at ({x}, {y})")
            }
            None => {
                state = try_dispatch(&state, Event::Pass)?;
                format!("{mover} passes.")
            }
        };
        moves += 1;
        write!(output, "{}", render(&state, Some(&status)))?;
    }

    let result = score(&state);
    writeln!(output, "{}", describe_result(&result))?;
    output.flush()?;
    Ok(state)
}
